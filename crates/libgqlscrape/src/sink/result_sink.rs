use crate::execution::ExecutionResult;
use crate::operation::GeneratedDocument;
use crate::operation::OperationKind;
use crate::session::RunSummary;
use crate::sink::PersistenceError;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, PersistenceError>;

pub const MUTATIONS_DIR: &str = "mutations";
pub const QUERIES_DIR: &str = "queries";
pub const QUERY_RESPONSES_DIR: &str = "query_responses";
pub const SCHEMA_FILE: &str = "schema.json";
pub const SUBSCRIPTIONS_DIR: &str = "subscriptions";
pub const SUMMARY_FILE: &str = "summary.json";

/// Writes generated documents and query responses into an output directory:
///
/// ```text
/// <output_dir>/
///   queries/<field>.graphql
///   mutations/<field>.graphql
///   subscriptions/<field>.graphql
///   query_responses/<field>.json
///   schema.json
///   summary.json
/// ```
///
/// Every write is independent: a failed write leaves everything written
/// before it in place.
#[derive(Clone, Debug)]
pub struct ResultSink {
    output_dir: PathBuf,
}
impl ResultSink {
    /// Create the output directory and its subdirectories (if they don't
    /// exist yet).
    pub fn create(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        for subdir in [QUERIES_DIR, MUTATIONS_DIR, SUBSCRIPTIONS_DIR, QUERY_RESPONSES_DIR] {
            let path = output_dir.join(subdir);
            std::fs::create_dir_all(&path).map_err(|source| PersistenceError {
                path,
                source,
            })?;
        }
        log::debug!("Writing results under {output_dir:#?}.");
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_path()
    }

    /// Path the document for `root_field_name` of the given kind is written
    /// to.
    pub fn document_path(&self, operation_kind: OperationKind, root_field_name: &str) -> PathBuf {
        let dir = match operation_kind {
            OperationKind::Mutation => MUTATIONS_DIR,
            OperationKind::Query => QUERIES_DIR,
            OperationKind::Subscription => SUBSCRIPTIONS_DIR,
        };
        self.output_dir
            .join(dir)
            .join(format!("{}.graphql", sanitize_file_stem(root_field_name)))
    }

    pub fn response_path(&self, root_field_name: &str) -> PathBuf {
        self.output_dir
            .join(QUERY_RESPONSES_DIR)
            .join(format!("{}.json", sanitize_file_stem(root_field_name)))
    }

    pub fn write_document(&self, document: &GeneratedDocument) -> Result<PathBuf> {
        let path = self.document_path(
            document.operation_kind(),
            document.root_field_name(),
        );
        write_file(path, document.to_graphql_string().as_bytes())
    }

    /// Write the pretty-printed response body of `result`. Returns `None`
    /// (and writes nothing) when the request produced no response.
    pub fn write_response(&self, result: &ExecutionResult<'_>) -> Result<Option<PathBuf>> {
        let Some(response) = result.response() else {
            return Ok(None);
        };
        let path = self.response_path(result.document().root_field_name());
        write_json(path, response).map(Some)
    }

    pub fn write_schema(&self, introspection: &serde_json::Value) -> Result<PathBuf> {
        write_json(self.output_dir.join(SCHEMA_FILE), introspection)
    }

    pub fn write_summary(&self, summary: &RunSummary) -> Result<PathBuf> {
        write_json(self.output_dir.join(SUMMARY_FILE), summary)
    }
}

/// Replace every character outside `[A-Za-z0-9_-]` with `_`.
pub fn sanitize_file_stem(name: &str) -> String {
    let stem: String = name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "_".to_string()
    } else {
        stem
    }
}

fn write_json(path: PathBuf, value: &impl serde::Serialize) -> Result<PathBuf> {
    match serde_json::to_vec_pretty(value) {
        Ok(bytes) => write_file(path, &bytes),
        Err(err) => Err(PersistenceError {
            path,
            source: err.into(),
        }),
    }
}

fn write_file(path: PathBuf, contents: &[u8]) -> Result<PathBuf> {
    match std::fs::write(&path, contents) {
        Ok(()) => {
            log::trace!("Wrote {path:#?}.");
            Ok(path)
        },
        Err(source) => Err(PersistenceError {
            path,
            source,
        }),
    }
}
