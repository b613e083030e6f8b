use crate::operation::OperationKind;

/// What a [`ScrapeSession`](crate::session::ScrapeSession) did, written to
/// `summary.json` at the end of a run.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct RunSummary {
    /// Whether the run was interrupted before every query was sent.
    pub cancelled: bool,

    pub documents_written: usize,
    pub generation_failures: Vec<FailureRecord>,
    pub mutations_generated: usize,
    pub persistence_failures: Vec<String>,
    pub queries_answered: usize,
    pub queries_answered_with_errors: usize,
    pub queries_generated: usize,
    pub query_failures: Vec<FailureRecord>,
    pub subscriptions_generated: usize,
}
impl RunSummary {
    /// Queries generated but never sent because the run was cancelled.
    pub fn queries_not_sent(&self) -> usize {
        self.queries_generated
            .saturating_sub(self.queries_answered)
            .saturating_sub(self.query_failures.len())
    }

    /// Percentage of generated queries and mutations that came back without
    /// GraphQL errors. Mutations are never sent, so they only ever count
    /// against it. `0.0` when nothing was generated.
    pub fn coverage(&self) -> f64 {
        let attempted = self.queries_generated + self.mutations_generated;
        if attempted == 0 {
            return 0.0;
        }
        let clean = self.queries_answered.saturating_sub(self.queries_answered_with_errors);
        clean as f64 * 100.0 / attempted as f64
    }

    pub fn has_persistence_failures(&self) -> bool {
        !self.persistence_failures.is_empty()
    }
}

/// One root field that could not be generated or whose query failed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FailureRecord {
    pub error: String,
    pub operation_kind: OperationKind,
    pub root_field_name: String,
}
