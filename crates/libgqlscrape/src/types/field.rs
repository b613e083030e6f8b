use crate::types::InputValue;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) arguments: IndexMap<String, InputValue>,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// The arguments of this field, in the order the schema declares them.
    pub fn arguments(&self) -> &IndexMap<String, InputValue> {
        &self.arguments
    }

    /// Indicates if this is an introspection meta-field (e.g. `__typename`).
    pub fn is_introspection_field(&self) -> bool {
        self.name.starts_with("__")
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the object or interface type this field is defined on.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
