use crate::types::InputValue;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) fields: IndexMap<String, InputValue>,
    pub(crate) name: String,
}
impl InputObjectType {
    /// The input fields of this type, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, InputValue> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
