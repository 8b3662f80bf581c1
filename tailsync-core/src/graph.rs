//! Pre-built project graph input.
//!
//! Tailsync never constructs the dependency graph itself; it consumes a
//! `project-graph.json` emitted by the monorepo tool:
//!
//! ```json
//! {
//!   "nodes": {
//!     "app": { "name": "app", "root": "apps/app" },
//!     "lib": { "name": "lib", "root": "libs/lib" }
//!   },
//!   "dependencies": {
//!     "app": [ { "source": "app", "target": "lib" } ]
//!   }
//! }
//! ```
//!
//! A load or parse failure here is fatal for the whole run — the sync core
//! performs no retry and no partial recovery.

use std::path::Path;

use crate::error::GraphError;
use crate::types::ProjectGraph;

/// Load the project graph from a JSON file.
///
/// Returns `GraphError::GraphNotFound` if absent,
/// `GraphError::Parse` (with path context) if malformed.
pub fn load_graph(path: &Path) -> Result<ProjectGraph, GraphError> {
    if !path.exists() {
        return Err(GraphError::GraphNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    parse_graph(&contents).map_err(|e| GraphError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse a project graph from a JSON string.
pub fn parse_graph(json: &str) -> Result<ProjectGraph, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_graph() {
        let graph = parse_graph(
            r#"{
                "nodes": {
                    "app": { "name": "app", "root": "apps/app" },
                    "lib": { "name": "lib", "root": "libs/lib" }
                },
                "dependencies": {
                    "app": [ { "source": "app", "target": "lib" } ]
                }
            }"#,
        )
        .expect("parse");

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges_from("app").len(), 1);
        assert_eq!(graph.edges_from("app")[0].target.0, "lib");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let graph = parse_graph("{}").expect("parse");
        assert!(graph.nodes.is_empty());
        assert!(graph.dependencies.is_empty());
    }

    #[test]
    fn node_without_root_parses_as_empty_path() {
        let graph = parse_graph(r#"{"nodes": {"npm:react": {"name": "npm:react"}}}"#)
            .expect("parse");
        let node = graph.node("npm:react").expect("node");
        assert!(node.root.as_os_str().is_empty());
    }
}
