mod execution_result;
mod executor;
mod http_transport;
mod transport;
mod transport_error;

pub use execution_result::ExecutionResult;
pub use executor::Executor;
pub use executor::ExecutorConfig;
pub use http_transport::HttpTransport;
pub use http_transport::HttpTransportConfig;
pub use transport::Transport;
pub use transport_error::TransportError;

#[cfg(test)]
mod tests;
