use crate::execution::TransportError;
use std::future::Future;

/// Sends one GraphQL document to an endpoint and hands back the decoded JSON
/// response body.
pub trait Transport {
    fn post_query(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<serde_json::Value, TransportError>> + Send;
}
