//! Domain types for the tailsync project graph.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! Graph types deserialize from a pre-built `project-graph.json` via serde.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a project in the workspace graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectName(pub String);

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Graph structs
// ---------------------------------------------------------------------------

/// A named project node supplied by the pre-built graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectNode {
    pub name: ProjectName,
    /// Workspace-relative root directory of the project. May be empty for
    /// synthetic nodes; the directive generator drops rootless entries.
    #[serde(default)]
    pub root: PathBuf,
}

/// A directed dependency between two projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub source: ProjectName,
    pub target: ProjectName,
}

/// The externally supplied project graph, immutable for the duration of a run.
///
/// `nodes` maps project name to its node; `dependencies` maps project name to
/// its ordered outgoing edges. Names referenced by edges are not required to
/// exist in `nodes` — lookups tolerate the inconsistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectGraph {
    #[serde(default)]
    pub nodes: BTreeMap<String, ProjectNode>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, Vec<DependencyEdge>>,
}

impl ProjectGraph {
    /// Look up a node by project name.
    pub fn node(&self, name: &str) -> Option<&ProjectNode> {
        self.nodes.get(name)
    }

    /// Outgoing edges of `name`; empty slice when the project has none.
    pub fn edges_from(&self, name: &str) -> &[DependencyEdge] {
        self.dependencies.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Classification output
// ---------------------------------------------------------------------------

/// A project that participates in synchronization.
///
/// `target_file` is the workspace-relative CSS entry file that receives the
/// managed block; `None` means the project uses the engine but no search-path
/// file exists to write into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProject {
    pub project: ProjectNode,
    pub target_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
