//! `tailsync diff` — show what sync would write, without writing.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use tailsync_core::{graph::load_graph, WorkspaceTree};
use tailsync_sync::{pending_diffs, sync_workspace, SyncOptions};

/// Arguments for `tailsync diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Workspace root directory.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Pre-built project graph JSON, relative to the workspace root.
    #[arg(long, default_value = "project-graph.json")]
    pub graph: PathBuf,

    /// Additional project-relative CSS search path (repeatable).
    #[arg(long = "path", value_name = "CSS_PATH")]
    pub paths: Vec<String>,
}

impl DiffArgs {
    pub fn run(self) -> Result<ExitCode> {
        let graph_path = if self.graph.is_absolute() {
            self.graph.clone()
        } else {
            self.root.join(&self.graph)
        };
        let graph = load_graph(&graph_path).with_context(|| {
            format!("failed to load project graph from {}", graph_path.display())
        })?;

        let mut tree = WorkspaceTree::new(&self.root);
        let options = SyncOptions {
            extra_search_paths: self.paths.clone(),
        };
        sync_workspace(&graph, &mut tree, &options).context("sync failed")?;

        let diffs = pending_diffs(&tree).context("diff failed")?;
        if diffs.is_empty() {
            println!("{}", "✓ @source directives up to date".green());
            return Ok(ExitCode::SUCCESS);
        }

        for diff in &diffs {
            print!("{}", diff.unified_diff);
        }
        Ok(ExitCode::SUCCESS)
    }
}
