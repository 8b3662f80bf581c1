//! Project classification for tailsync.
//!
//! `classify_project` decides whether a project participates in `@source`
//! synchronization and which CSS file receives the managed block. Two rules,
//! checked in order:
//!
//! - **Rule A** — a search-path file imports the engine
//!   (`@import "tailwindcss"`, optionally with a modifier clause). The
//!   matching file is the target.
//! - **Rule B** — a conventional bundler config wires up `@tailwindcss/vite`
//!   with a `tailwindcss()` call. The target falls back to the first existing
//!   search-path file; a project may use the engine without an explicit
//!   import in source text.
//!
//! A project matching neither rule is skipped entirely — not an error.
//! Classification is read-only against the file store.

use std::path::PathBuf;

use tailsync_core::{CandidateProject, FileStore, ProjectNode, StoreError};

pub mod matcher;

/// Conventional CSS entry files, checked in order, relative to the project
/// root. Caller-supplied search paths are appended after these.
pub const DEFAULT_SEARCH_PATHS: &[&str] = &["src/styles.css", "src/index.css"];

/// Conventional bundler config filenames checked by rule B.
const BUNDLER_CONFIG_FILES: &[&str] = &[
    "vite.config.js",
    "vite.config.ts",
    "vite.config.mjs",
    "vite.config.mts",
    "vite.config.cjs",
    "vite.config.cts",
];

/// Decide participation and locate the target file for `project`.
///
/// Returns `Ok(None)` when the project does not participate. A participating
/// project with no existing search-path file yields a candidate whose
/// `target_file` is `None`.
pub fn classify_project(
    store: &dyn FileStore,
    project: &ProjectNode,
    extra_search_paths: &[String],
) -> Result<Option<CandidateProject>, StoreError> {
    let candidates = search_paths(project, extra_search_paths);

    // Rule A: an entry file that imports the engine is the target.
    for path in &candidates {
        if let Some(css) = store.read(path)? {
            if matcher::uses_engine(&css) {
                return Ok(Some(CandidateProject {
                    project: project.clone(),
                    target_file: Some(path.clone()),
                }));
            }
        }
    }

    // Rule B: bundler integration; first existing entry file wins, content
    // not required to match rule A.
    if has_bundler_integration(store, project)? {
        let target = candidates.iter().find(|p| store.exists(p)).cloned();
        return Ok(Some(CandidateProject {
            project: project.clone(),
            target_file: target,
        }));
    }

    Ok(None)
}

/// Search-path candidates for `project`, workspace-relative, defaults first.
fn search_paths(project: &ProjectNode, extra: &[String]) -> Vec<PathBuf> {
    DEFAULT_SEARCH_PATHS
        .iter()
        .map(|p| project.root.join(p))
        .chain(extra.iter().map(|p| project.root.join(p)))
        .collect()
}

fn has_bundler_integration(
    store: &dyn FileStore,
    project: &ProjectNode,
) -> Result<bool, StoreError> {
    for name in BUNDLER_CONFIG_FILES {
        if let Some(config) = store.read(&project.root.join(name))? {
            if matcher::is_bundler_integration(&config) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}
