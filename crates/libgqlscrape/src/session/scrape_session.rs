use crate::execution::Executor;
use crate::execution::ExecutorConfig;
use crate::execution::Transport;
use crate::operation::GeneratedOperations;
use crate::operation::GeneratorConfig;
use crate::operation::OperationGenerator;
use crate::schema::Schema;
use crate::session::FailureRecord;
use crate::session::RunSummary;
use crate::sink::PersistenceError;
use crate::sink::ResultSink;
use futures::StreamExt;
use std::future::Future;

/// Drives one end-to-end run: generate every document for a [`Schema`],
/// persist them, send the queries and persist each response as it arrives.
///
/// Nothing a single document does (failing to generate, failing to send,
/// failing to write) stops the run. Such failures are logged and recorded in
/// the returned [`RunSummary`].
#[derive(Clone, Debug, Default)]
pub struct ScrapeSession {
    pub executor_config: ExecutorConfig,
    pub generator_config: GeneratorConfig,
}
impl ScrapeSession {
    pub fn new(generator_config: GeneratorConfig, executor_config: ExecutorConfig) -> Self {
        Self {
            executor_config,
            generator_config,
        }
    }

    /// Generate and persist every document without sending anything.
    pub fn generate(&self, schema: &Schema, sink: &ResultSink) -> RunSummary {
        let operations = OperationGenerator::new(schema, &self.generator_config).generate();
        let mut summary = RunSummary::default();
        persist_documents(&operations, sink, &mut summary);
        finish(sink, summary)
    }

    /// Generate and persist every document, then send the queries.
    ///
    /// Once `shutdown` resolves no further queries are started; responses
    /// already written stay on disk and the summary is marked `cancelled`.
    pub async fn run<TTransport: Transport>(
        &self,
        schema: &Schema,
        transport: &TTransport,
        sink: &ResultSink,
        shutdown: impl Future<Output = ()>,
    ) -> RunSummary {
        let operations = OperationGenerator::new(schema, &self.generator_config).generate();
        let mut summary = RunSummary::default();
        persist_documents(&operations, sink, &mut summary);

        let executor = Executor::new(transport, self.executor_config.clone());
        log::info!(
            "Sending {} queries ({} at a time).",
            operations.queries().len(),
            executor.config().concurrency,
        );
        let mut results = std::pin::pin!(executor.execute_all(operations.queries()));
        let mut shutdown = std::pin::pin!(shutdown);
        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    log::warn!("Shutdown requested; no further queries will be sent.");
                    summary.cancelled = true;
                    break;
                },

                result = results.next() => {
                    let Some(result) = result else {
                        break;
                    };
                    match result.outcome() {
                        Ok(_) => {
                            summary.queries_answered += 1;
                            if result.has_graphql_errors() {
                                summary.queries_answered_with_errors += 1;
                            }
                        },
                        Err(err) => summary.query_failures.push(FailureRecord {
                            error: err.to_string(),
                            operation_kind: result.document().operation_kind(),
                            root_field_name: result.document().root_field_name().to_string(),
                        }),
                    }
                    if let Err(err) = sink.write_response(&result) {
                        record_persistence_failure(&mut summary, err);
                    }
                },
            }
        }

        finish(sink, summary)
    }
}

fn persist_documents(
    operations: &GeneratedOperations,
    sink: &ResultSink,
    summary: &mut RunSummary,
) {
    summary.queries_generated = operations.queries().len();
    summary.mutations_generated = operations.mutations().len();
    summary.subscriptions_generated = operations.subscriptions().len();
    summary.generation_failures = operations.failures()
        .iter()
        .map(|failure| FailureRecord {
            error: failure.error.to_string(),
            operation_kind: failure.operation_kind,
            root_field_name: failure.root_field_name.to_owned(),
        })
        .collect();

    for document in operations.iter() {
        match sink.write_document(document) {
            Ok(_) => summary.documents_written += 1,
            Err(err) => record_persistence_failure(summary, err),
        }
    }
    log::info!(
        "Wrote {} documents ({} queries, {} mutations, {} subscriptions).",
        summary.documents_written,
        summary.queries_generated,
        summary.mutations_generated,
        summary.subscriptions_generated,
    );
}

fn record_persistence_failure(summary: &mut RunSummary, err: PersistenceError) {
    log::error!("{err}");
    summary.persistence_failures.push(err.to_string());
}

fn finish(sink: &ResultSink, mut summary: RunSummary) -> RunSummary {
    if let Err(err) = sink.write_summary(&summary) {
        record_persistence_failure(&mut summary, err);
    }
    summary
}
