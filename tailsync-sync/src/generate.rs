//! Directive rendering.
//!
//! Turns a dependency set into the canonical `@source` list: one directive
//! per dependency that has a node with a non-empty root, path rendered
//! relative to the target file's directory, sorted lexicographically over the
//! rendered string so the output is identical run to run.

use std::collections::HashSet;
use std::path::{Component, Path};

use tailsync_core::ProjectGraph;

/// Render the canonical directive list for `deps`.
///
/// `target_dir` is the workspace-relative directory containing the target
/// file. Dependencies missing from the node map, or whose node has an empty
/// root, are dropped without error. Duplicate rendered strings are kept —
/// uniqueness is by project name, not by path.
pub fn render_directives(
    graph: &ProjectGraph,
    deps: &HashSet<String>,
    target_dir: &Path,
) -> Vec<String> {
    let mut directives: Vec<String> = deps
        .iter()
        .filter_map(|name| graph.node(name))
        .filter(|node| !node.root.as_os_str().is_empty())
        .map(|node| format!("@source \"{}\";", relative_path(target_dir, &node.root)))
        .collect();
    // Sort order is over the rendered string as-is, `../` prefixes included.
    directives.sort();
    directives
}

/// Forward-slash relative path from `from` to `to`, both workspace-relative.
/// Yields `../` segments as needed, no leading `./`; `.` when they coincide.
fn relative_path(from: &Path, to: &Path) -> String {
    let from = normal_components(from);
    let to = normal_components(to);
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::with_capacity(from.len() - common + to.len() - common);
    parts.extend(std::iter::repeat("..".to_string()).take(from.len() - common));
    parts.extend(to[common..].iter().map(|c| c.to_string_lossy().into_owned()));

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

fn normal_components(path: &Path) -> Vec<&std::ffi::OsStr> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(p) => Some(p),
            _ => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
