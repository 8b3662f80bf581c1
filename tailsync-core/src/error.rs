//! Error types for tailsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors loading the pre-built project graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The graph JSON file did not exist at the expected path.
    #[error("project graph not found at {path}")]
    GraphNotFound { path: PathBuf },

    /// JSON parse error on load — includes file path and serde_json context.
    #[error("failed to parse project graph at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from the workspace file tree.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`StoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source,
    }
}
