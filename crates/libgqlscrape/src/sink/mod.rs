mod persistence_error;
mod result_sink;

pub use persistence_error::PersistenceError;
pub use result_sink::MUTATIONS_DIR;
pub use result_sink::QUERIES_DIR;
pub use result_sink::QUERY_RESPONSES_DIR;
pub use result_sink::ResultSink;
pub use result_sink::SCHEMA_FILE;
pub use result_sink::SUBSCRIPTIONS_DIR;
pub use result_sink::SUMMARY_FILE;
pub use result_sink::sanitize_file_stem;
