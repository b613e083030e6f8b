use crate::named_ref::DerefByNameError;
use crate::operation::GeneratedDocument;
use crate::operation::OperationKind;

/// Everything [`OperationGenerator::generate()`](crate::operation::OperationGenerator::generate)
/// produced for a schema: one document per root field, grouped by operation
/// kind and kept in root-field declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratedOperations {
    pub(super) failures: Vec<GenerationFailure>,
    pub(super) mutations: Vec<GeneratedDocument>,
    pub(super) queries: Vec<GeneratedDocument>,
    pub(super) subscriptions: Vec<GeneratedDocument>,
}
impl GeneratedOperations {
    /// Root fields for which no document could be generated.
    pub fn failures(&self) -> &[GenerationFailure] {
        &self.failures
    }

    pub fn mutations(&self) -> &[GeneratedDocument] {
        &self.mutations
    }

    pub fn queries(&self) -> &[GeneratedDocument] {
        &self.queries
    }

    pub fn subscriptions(&self) -> &[GeneratedDocument] {
        &self.subscriptions
    }

    pub fn documents(&self, operation_kind: OperationKind) -> &[GeneratedDocument] {
        match operation_kind {
            OperationKind::Mutation => &self.mutations,
            OperationKind::Query => &self.queries,
            OperationKind::Subscription => &self.subscriptions,
        }
    }

    /// Queries, then mutations, then subscriptions.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedDocument> {
        self.queries.iter()
            .chain(self.mutations.iter())
            .chain(self.subscriptions.iter())
    }

    pub fn len(&self) -> usize {
        self.queries.len() + self.mutations.len() + self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A root field whose document could not be generated because the schema
/// references a type it does not define.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Could not generate the `{root_field_name}` {operation_kind}: {error}")]
pub struct GenerationFailure {
    pub error: DerefByNameError,
    pub operation_kind: OperationKind,
    pub root_field_name: String,
}
