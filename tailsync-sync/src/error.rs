//! Error types for tailsync-sync.

use thiserror::Error;

use tailsync_core::StoreError;

/// All errors that can arise from a sync run.
///
/// Graph loading failures are fatal before the pipeline starts and surface
/// at the caller as [`tailsync_core::GraphError`] directly.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the workspace file tree.
    #[error("workspace tree error: {0}")]
    Store(#[from] StoreError),
}
