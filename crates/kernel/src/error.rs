//! Kernel error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading route documents.
///
/// Menu derivation itself never fails; only reading the route tree can.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read routes file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON route document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML route document: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("unsupported routes file extension: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;
