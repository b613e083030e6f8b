use std::path::PathBuf;

/// A file or directory of the output tree could not be written.
#[derive(Debug, thiserror::Error)]
#[error("Failed to write `{}`: {source}", path.display())]
pub struct PersistenceError {
    pub path: PathBuf,
    pub source: std::io::Error,
}
