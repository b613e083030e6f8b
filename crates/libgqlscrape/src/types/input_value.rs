use crate::types::TypeAnnotation;

/// Represents an
/// [input value](https://spec.graphql.org/October2021/#sec-The-__InputValue-Type):
/// either an argument defined on a [`Field`](crate::types::Field) or an input
/// field defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub(crate) default_value: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputValue {
    /// The default value as the raw GraphQL literal reported by introspection
    /// (e.g. `"10"` or `"\"asc\""`).
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// A value must be supplied for this input when its type is non-null and
    /// the schema declares no default for it.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputValue`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
