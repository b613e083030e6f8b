use crate::execution::TransportError;
use crate::operation::GeneratedDocument;
use std::time::Duration;

/// The outcome of sending one [`GeneratedDocument`].
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionResult<'doc> {
    pub(super) document: &'doc GeneratedDocument,
    pub(super) elapsed: Duration,
    pub(super) outcome: Result<serde_json::Value, TransportError>,
}
impl<'doc> ExecutionResult<'doc> {
    pub fn document(&self) -> &'doc GeneratedDocument {
        self.document
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The decoded response body, or why there is none.
    pub fn outcome(&self) -> Result<&serde_json::Value, &TransportError> {
        self.outcome.as_ref()
    }

    pub fn response(&self) -> Option<&serde_json::Value> {
        self.outcome.as_ref().ok()
    }

    /// Indicates if the endpoint answered, though the answer may still carry
    /// GraphQL `errors` (see [`ExecutionResult::has_graphql_errors()`]).
    pub fn is_answered(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Indicates if the endpoint answered with a non-empty `errors` list.
    pub fn has_graphql_errors(&self) -> bool {
        self.response()
            .and_then(|body| body.get("errors"))
            .and_then(|errors| errors.as_array())
            .is_some_and(|errors| !errors.is_empty())
    }
}
