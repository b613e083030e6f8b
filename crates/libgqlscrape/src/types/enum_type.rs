/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The value names of this enum, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
