use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) name: String,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
}
impl UnionType {
    /// An ordered list of the names of each
    /// [`GraphQLType`](crate::types::GraphQLType) defined as a member of this
    /// union.
    ///
    /// The order of this `Vec` retains the order of `possibleTypes` in the
    /// introspection result.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
