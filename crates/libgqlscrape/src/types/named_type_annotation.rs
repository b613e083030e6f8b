use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}

impl NamedTypeAnnotation {
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<&'schema GraphQLType, DerefByNameError> {
        self.type_ref.deref(schema)
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
