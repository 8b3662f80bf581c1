//! Dry-run unified diff support for `tailsync diff`.

use std::path::PathBuf;

use similar::TextDiff;

use tailsync_core::{FileStore, StoreError, WorkspaceTree};

/// A single pending file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render every staged (unflushed) change in `tree` as a unified diff
/// against the current on-disk content. No files are written.
pub fn pending_diffs(tree: &WorkspaceTree) -> Result<Vec<FileDiff>, StoreError> {
    let mut diffs = Vec::new();
    for path in tree.pending() {
        let staged = tree.read(&path)?.unwrap_or_default();
        let on_disk = tree.read_disk(&path)?.unwrap_or_default();
        if on_disk == staged {
            continue;
        }

        let old_header = format!("a/{}", path.display());
        let new_header = format!("b/{}", path.display());
        let unified = TextDiff::from_lines(&on_disk, &staged)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();

        diffs.push(FileDiff {
            path,
            unified_diff: unified,
        });
    }
    Ok(diffs)
}
