//! Tailsync sync engine — dependency collection, directive rendering, managed
//! block merging, and the workspace pipeline.

pub mod collect;
pub mod diff;
pub mod error;
pub mod generate;
pub mod merge;
pub mod pipeline;

pub use collect::collect_dependencies;
pub use diff::{pending_diffs, FileDiff};
pub use error::SyncError;
pub use generate::render_directives;
pub use merge::{merge, Merge};
pub use pipeline::{sync_workspace, SyncOptions, SyncReport};
