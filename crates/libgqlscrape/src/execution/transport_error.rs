use crate::operation::OperationKind;
use std::time::Duration;

/// Why a single request to the endpoint produced no usable response body.
///
/// Each variant affects only the request it was produced for.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("Endpoint answered with HTTP {status}: {body}")]
    HttpStatus {
        body: String,
        status: u16,
    },

    #[error("Invalid `{name}` header: {reason}")]
    InvalidHeader {
        name: String,
        reason: String,
    },

    #[error("Endpoint answered with a body that is not JSON: {reason}")]
    MalformedBody {
        reason: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Refusing to send a {operation_kind} document")]
    Refused {
        operation_kind: OperationKind,
    },

    #[error("No response within {timeout:?}")]
    TimedOut {
        timeout: Option<Duration>,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::TimedOut { timeout: None }
        } else {
            TransportError::Network(err.to_string())
        }
    }
}
