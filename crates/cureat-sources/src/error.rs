use cureat_core::FilterError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog rejected: {0}")]
    Invalid(#[from] FilterError),

    #[error("source unavailable: {0}")]
    Unavailable(String),
}
