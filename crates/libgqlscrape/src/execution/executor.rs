use crate::execution::ExecutionResult;
use crate::execution::Transport;
use crate::execution::TransportError;
use crate::operation::GeneratedDocument;
use crate::operation::OperationKind;
use futures::Stream;
use futures::StreamExt;
use std::time::Duration;
use std::time::Instant;

#[derive(Clone, Debug, PartialEq)]
pub struct ExecutorConfig {
    /// Maximum number of requests in flight at once.
    pub concurrency: usize,

    /// Minimum gap between the starts of consecutive requests sent by
    /// [`Executor::execute_all()`], regardless of `concurrency`.
    pub delay: Duration,

    pub timeout: Duration,
}
impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            concurrency: 4,
            delay: Duration::from_millis(100),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Sends query documents through a [`Transport`].
///
/// Only [`OperationKind::Query`] documents are ever sent: mutations and
/// subscriptions could change state on the endpoint.
#[derive(Debug)]
pub struct Executor<'transport, TTransport: Transport> {
    config: ExecutorConfig,
    transport: &'transport TTransport,
}
impl<'transport, TTransport: Transport> Executor<'transport, TTransport> {
    pub fn new(transport: &'transport TTransport, config: ExecutorConfig) -> Self {
        Self {
            config: ExecutorConfig {
                concurrency: config.concurrency.max(1),
                ..config
            },
            transport,
        }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Send a single document. Failures are reported in the returned
    /// [`ExecutionResult`], never raised.
    pub async fn execute<'doc>(
        &self,
        document: &'doc GeneratedDocument,
    ) -> ExecutionResult<'doc> {
        let started = Instant::now();
        let outcome =
            if document.operation_kind() != OperationKind::Query {
                Err(TransportError::Refused {
                    operation_kind: document.operation_kind(),
                })
            } else {
                let query = document.to_graphql_string();
                match tokio::time::timeout(
                    self.config.timeout,
                    self.transport.post_query(&query),
                ).await {
                    Ok(outcome) => outcome,
                    Err(_elapsed) => Err(TransportError::TimedOut {
                        timeout: Some(self.config.timeout),
                    }),
                }
            };

        match &outcome {
            Ok(_) => log::debug!(
                "`{}` answered in {:?}.",
                document.root_field_name(),
                started.elapsed(),
            ),
            Err(err) => log::warn!("`{}` failed: {err}", document.root_field_name()),
        }

        ExecutionResult {
            document,
            elapsed: started.elapsed(),
            outcome,
        }
    }

    /// Send every query document in `documents`, at most
    /// [`ExecutorConfig::concurrency`] at a time and each started at least
    /// [`ExecutorConfig::delay`] after the previous one. Non-query documents
    /// are filtered out before anything is sent. Results arrive in
    /// completion order.
    pub fn execute_all<'a, 'doc: 'a>(
        &'a self,
        documents: &'doc [GeneratedDocument],
    ) -> impl Stream<Item = ExecutionResult<'doc>> + 'a {
        let queries = documents.iter().filter(|document| {
            document.operation_kind() == OperationKind::Query
        });
        let delay = self.config.delay;
        // Pacing happens upstream of `buffer_unordered`, which only pulls the
        // next document once the previous pause is over.
        futures::stream::iter(queries.enumerate())
            .then(move |(idx, document)| async move {
                if idx > 0 && !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                document
            })
            .map(move |document| self.execute(document))
            .buffer_unordered(self.config.concurrency)
    }
}
