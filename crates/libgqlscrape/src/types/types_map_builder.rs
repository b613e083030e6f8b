use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub struct TypesMapBuilder {
    pub(super) types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    /// Seeded with the built-in scalars: some servers filter them out of the
    /// introspection result even though fields still reference them.
    pub fn new() -> Self {
        Self {
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_: GraphQLType,
    ) -> Result<()> {
        if let Some(conflicting_type) = self.types.get(type_name) {
            // Re-declaring a built-in scalar as a scalar is what every
            // introspection result does.
            let is_builtin_redeclaration =
                GraphQLType::builtin_scalar(type_name).as_ref() == Some(conflicting_type)
                    && type_ == *conflicting_type;
            if is_builtin_redeclaration {
                return Ok(());
            }

            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    pub fn into_types_map(self) -> IndexMap<String, GraphQLType> {
        self.types
    }
}
impl Default for TypesMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
