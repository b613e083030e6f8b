use crate::named_ref::DerefByNameError;
use crate::operation::OperationKind;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// The type registry built from an introspection result.
///
/// Every type is stored once, keyed by name, in the order the introspection
/// result listed it. All cross-type links are [`NamedRef`](crate::NamedRef)s
/// resolved through [`Schema::resolve()`], so cyclic type graphs need no
/// special representation. A [`Schema`] is immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Look up a type by name.
    pub fn resolve(&self, name: &str) -> Result<&GraphQLType, DerefByNameError> {
        self.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }

    /// All named types of the schema (built-in scalars included), in
    /// introspection order.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// The root type for
    /// [query operations](https://spec.graphql.org/October2021/#sec-Root-Operation-Types).
    pub fn query_type(&self) -> &ObjectType {
        self.root_object(&self.query_type)
    }

    /// The root type for mutation operations, if the schema defines one.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_ref().map(|type_ref| self.root_object(type_ref))
    }

    /// The root type for subscription operations, if the schema defines one.
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type.as_ref().map(|type_ref| self.root_object(type_ref))
    }

    /// Every root operation type defined on this schema, paired with the
    /// [`OperationKind`] it serves. The query root always comes first.
    pub fn root_types(&self) -> Vec<(OperationKind, &ObjectType)> {
        let mut roots = vec![(OperationKind::Query, self.query_type())];
        if let Some(mutation_type) = self.mutation_type() {
            roots.push((OperationKind::Mutation, mutation_type));
        }
        if let Some(subscription_type) = self.subscription_type() {
            roots.push((OperationKind::Subscription, subscription_type));
        }
        roots
    }

    fn root_object(&self, type_ref: &NamedGraphQLTypeRef) -> &ObjectType {
        // SchemaBuilder refuses to build a Schema whose root types are not
        // defined object types.
        type_ref.deref(self)
            .expect("root type is present in schema")
            .as_object()
            .expect("root type is an object type")
    }
}
