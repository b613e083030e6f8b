/// A custom [scalar type](https://spec.graphql.org/October2021/#sec-Scalars)
/// (anything other than the five built-in scalars).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) name: String,
}
impl ScalarType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
