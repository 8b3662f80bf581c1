//! `tailsync sync` — update managed @source blocks across the workspace.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use tailsync_core::{graph::load_graph, WorkspaceTree};
use tailsync_sync::{sync_workspace, SyncOptions};

/// Arguments for `tailsync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Workspace root directory.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Pre-built project graph JSON, relative to the workspace root.
    #[arg(long, default_value = "project-graph.json")]
    pub graph: PathBuf,

    /// Additional project-relative CSS search path (repeatable).
    #[arg(long = "path", value_name = "CSS_PATH")]
    pub paths: Vec<String>,

    /// Compute and report without writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Fail (exit 1) when anything is out of sync; writes nothing.
    #[arg(long)]
    pub check: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl SyncArgs {
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
        let report = sync_workspace(&graph, &mut tree, &options).context("sync failed")?;

        let dry = self.dry_run || self.check;
        if !dry {
            tree.flush().context("failed to write synced files")?;
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else if let Some(summary) = report.summary() {
            let prefix = if dry { "[dry-run] " } else { "" };
            println!("{prefix}{}", summary.yellow());
            for name in &report.updated {
                println!("  ✎  {name}");
            }
        } else {
            println!("{}", "✓ @source directives up to date".green());
        }

        if self.check && !report.is_clean() {
            return Ok(ExitCode::FAILURE);
        }
        Ok(ExitCode::SUCCESS)
    }
}
