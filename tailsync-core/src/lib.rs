//! Tailsync core library — domain types, project-graph input, workspace tree.
//!
//! Public API surface:
//! - [`types`] — newtypes and graph structs
//! - [`graph`] — load / parse the pre-built project graph
//! - [`store`] — [`FileStore`] and the batched [`WorkspaceTree`]
//! - [`error`] — [`GraphError`], [`StoreError`]

pub mod error;
pub mod graph;
pub mod store;
pub mod types;

pub use error::{GraphError, StoreError};
pub use store::{FileStore, WorkspaceTree};
pub use types::{CandidateProject, DependencyEdge, ProjectGraph, ProjectName, ProjectNode};
