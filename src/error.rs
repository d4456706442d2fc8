use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ProjdocError {
    #[error("Directory '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid ignore pattern: {0}")]
    Pattern(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl ProjdocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProjdocError::Io {
            path: path.into(),
            source,
        }
    }
}
