use crate::execution::Executor;
use crate::execution::ExecutorConfig;
use crate::execution::Transport;
use crate::execution::TransportError;
use crate::operation::GeneratedOperations;
use crate::operation::GeneratorConfig;
use crate::operation::OperationGenerator;
use crate::test_utils::schema_from_sdl;
use futures::StreamExt;
use serde_json::json;
use std::sync::Mutex;
use std::time::Duration;

/// Answers every query with `{"data": {"ok": true}}` except those whose text
/// contains `fail_on`, and records every query it was sent.
#[derive(Debug, Default)]
struct StubTransport {
    fail_on: Option<&'static str>,
    latency: Duration,
    sent: Mutex<Vec<String>>,
}
impl Transport for StubTransport {
    async fn post_query(&self, query: &str) -> Result<serde_json::Value, TransportError> {
        self.sent.lock().unwrap().push(query.to_string());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match self.fail_on {
            Some(needle) if query.contains(needle) => Err(TransportError::HttpStatus {
                body: "boom".to_string(),
                status: 500,
            }),
            _ => Ok(json!({"data": {"ok": true}})),
        }
    }
}

fn no_delay() -> ExecutorConfig {
    ExecutorConfig {
        delay: Duration::ZERO,
        ..ExecutorConfig::default()
    }
}

fn operations(sdl: &str) -> GeneratedOperations {
    let schema = schema_from_sdl(sdl);
    OperationGenerator::new(&schema, &GeneratorConfig::default()).generate()
}

const TEN_QUERIES_SDL: &str = r#"
    type Query {
        q0: Int q1: Int q2: Int q3: Int q4: Int
        q5: Int q6: Int q7: Int q8: Int q9: Int
    }
    type Mutation { deleteEverything: Boolean }
    type Subscription { feed: Int }
"#;

#[tokio::test]
async fn mutations_and_subscriptions_are_never_sent() {
    let operations = operations(TEN_QUERIES_SDL);
    let transport = StubTransport::default();
    let executor = Executor::new(&transport, no_delay());

    let all_documents = operations.iter().cloned().collect::<Vec<_>>();
    let results = executor.execute_all(&all_documents).collect::<Vec<_>>().await;
    assert_eq!(results.len(), 10);

    let mutation = &operations.mutations()[0];
    let refused = executor.execute(mutation).await;
    assert!(matches!(refused.outcome(), Err(TransportError::Refused { .. })));

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 10);
    assert!(sent.iter().all(|query| query.starts_with("query {")));
}

#[tokio::test]
async fn one_failure_does_not_stop_the_rest() {
    let operations = operations(TEN_QUERIES_SDL);
    let transport = StubTransport {
        fail_on: Some("q3"),
        ..StubTransport::default()
    };
    let executor = Executor::new(&transport, ExecutorConfig {
        concurrency: 3,
        ..no_delay()
    });

    let results = executor.execute_all(operations.queries()).collect::<Vec<_>>().await;
    assert_eq!(results.len(), 10);

    let (answered, failed): (Vec<_>, Vec<_>) =
        results.iter().partition(|result| result.is_answered());
    assert_eq!(answered.len(), 9);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].document().root_field_name(), "q3");
    assert_eq!(failed[0].outcome(), Err(&TransportError::HttpStatus {
        body: "boom".to_string(),
        status: 500,
    }));
}

#[tokio::test]
async fn slow_responses_time_out() {
    let operations = operations("type Query { slow: Int }");
    let transport = StubTransport {
        latency: Duration::from_secs(5),
        ..StubTransport::default()
    };
    let executor = Executor::new(&transport, ExecutorConfig {
        timeout: Duration::from_millis(50),
        ..no_delay()
    });

    let result = executor.execute(&operations.queries()[0]).await;
    assert_eq!(result.outcome(), Err(&TransportError::TimedOut {
        timeout: Some(Duration::from_millis(50)),
    }));
    assert!(result.response().is_none());
}

#[tokio::test]
async fn graphql_errors_are_still_answers() {
    #[derive(Debug)]
    struct ErrorsTransport;
    impl Transport for ErrorsTransport {
        async fn post_query(&self, _query: &str) -> Result<serde_json::Value, TransportError> {
            Ok(json!({"data": null, "errors": [{"message": "denied"}]}))
        }
    }

    let operations = operations("type Query { secret: String }");
    let executor = Executor::new(&ErrorsTransport, no_delay());
    let result = executor.execute(&operations.queries()[0]).await;
    assert!(result.is_answered());
    assert!(result.has_graphql_errors());
}

#[test]
fn concurrency_is_at_least_one() {
    let transport = StubTransport::default();
    let executor = Executor::new(&transport, ExecutorConfig {
        concurrency: 0,
        ..ExecutorConfig::default()
    });
    assert_eq!(executor.config().concurrency, 1);
}

#[tokio::test]
async fn delay_paces_request_starts_across_slots() {
    #[derive(Debug, Default)]
    struct ClockTransport {
        started: Mutex<Vec<std::time::Instant>>,
    }
    impl Transport for ClockTransport {
        async fn post_query(&self, _query: &str) -> Result<serde_json::Value, TransportError> {
            self.started.lock().unwrap().push(std::time::Instant::now());
            Ok(json!({"data": {}}))
        }
    }

    let operations = operations(TEN_QUERIES_SDL);
    let transport = ClockTransport::default();
    let executor = Executor::new(&transport, ExecutorConfig {
        concurrency: 4,
        delay: Duration::from_millis(50),
        ..ExecutorConfig::default()
    });
    let results: Vec<_> = executor.execute_all(operations.queries()).collect().await;
    assert_eq!(results.len(), 10);

    let started = transport.started.lock().unwrap();
    assert_eq!(started.len(), 10);
    for pair in started.windows(2) {
        // Slack for the gap between a pause ending and the request being
        // polled.
        assert!(pair[1] - pair[0] >= Duration::from_millis(40), "{:?}", pair[1] - pair[0]);
    }
}
