//! Workspace-level sync pipeline.
//!
//! For every project in the graph: classify → collect dependencies → render
//! directives → merge. Writes are staged into the tree only when the merge
//! changed something; the caller decides when (or whether) to flush.

use std::path::Path;

use serde::Serialize;

use tailsync_core::{FileStore, ProjectGraph, WorkspaceTree};
use tailsync_detector::classify_project;

use crate::collect::collect_dependencies;
use crate::error::SyncError;
use crate::generate::render_directives;
use crate::merge::merge;

/// Options for a sync run. One recognized knob: additional project-relative
/// CSS search paths, appended after the defaults.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    pub extra_search_paths: Vec<String>,
}

/// Outcome of a sync run: the projects whose target files actually changed,
/// in processing (name) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub updated: Vec<String>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.updated.is_empty()
    }

    /// Human-readable summary, or `None` when nothing changed.
    pub fn summary(&self) -> Option<String> {
        if self.updated.is_empty() {
            None
        } else {
            Some(format!(
                "Updated @source directives for: {}",
                self.updated.join(", ")
            ))
        }
    }
}

/// Run the sync pipeline over every project in `graph`.
///
/// Each project's target file is touched at most once; a project is either
/// fully skipped or fully rewritten. Nothing reaches disk here — changed
/// files are staged in `tree` for the caller to flush.
pub fn sync_workspace(
    graph: &ProjectGraph,
    tree: &mut WorkspaceTree,
    options: &SyncOptions,
) -> Result<SyncReport, SyncError> {
    let mut report = SyncReport::default();

    for (name, node) in &graph.nodes {
        let Some(candidate) = classify_project(&*tree, node, &options.extra_search_paths)?
        else {
            log::debug!("skip {name}: does not use tailwind");
            continue;
        };
        let Some(target) = candidate.target_file else {
            log::debug!("skip {name}: no css entry file to write");
            continue;
        };

        let current = tree.read(&target)?.unwrap_or_default();
        let deps = collect_dependencies(graph, name);
        let target_dir = target.parent().unwrap_or(Path::new(""));
        let directives = render_directives(graph, &deps, target_dir);

        let merged = merge(&current, &directives);
        if merged.changed {
            log::info!("updating {}", target.display());
            tree.write(&target, &merged.text);
            report.updated.push(name.clone());
        } else {
            log::debug!("unchanged: {}", target.display());
        }
    }

    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_graph_is_clean() {
        let ws = TempDir::new().expect("tempdir");
        let mut tree = WorkspaceTree::new(ws.path());
        let report = sync_workspace(&ProjectGraph::default(), &mut tree, &SyncOptions::default())
            .expect("sync");
        assert!(report.is_clean());
        assert!(report.summary().is_none());
        assert!(tree.pending().is_empty());
    }

    #[test]
    fn summary_names_updated_projects() {
        let report = SyncReport {
            updated: vec!["admin".to_string(), "web".to_string()],
        };
        assert_eq!(
            report.summary().as_deref(),
            Some("Updated @source directives for: admin, web")
        );
    }
}
