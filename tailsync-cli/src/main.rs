//! Tailsync — keep monorepo `@source` directives in sync with the project graph.
//!
//! # Usage
//!
//! ```text
//! tailsync sync [--root <dir>] [--graph <file>] [--path <css>]... [--dry-run] [--check] [--json]
//! tailsync diff [--root <dir>] [--graph <file>] [--path <css>]...
//! ```

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, sync::SyncArgs};

#[derive(Parser, Debug)]
#[command(
    name = "tailsync",
    version,
    about = "Sync generated tailwind @source directives across a monorepo",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Update managed @source blocks from the project graph.
    Sync(SyncArgs),

    /// Show unified diffs of what sync would write, without writing.
    Diff(DiffArgs),
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::Diff(args) => args.run(),
    }
}
