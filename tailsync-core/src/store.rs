//! Workspace file tree — the virtual file abstraction a sync run mutates.
//!
//! Reads fall through to disk (line endings normalized to LF); writes
//! accumulate in an in-memory overlay and only reach disk on [`WorkspaceTree::flush`].
//! Flush commits each staged file with a write-to-`.tailsync.tmp` + rename
//! protocol, so a target file is never left partially written.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{io_err, StoreError};

/// Read/write/exists operations over workspace-relative paths.
///
/// Passed explicitly wherever file content is inspected or produced; no code
/// in the sync core touches a global filesystem handle.
pub trait FileStore {
    /// Read a file's text. `Ok(None)` when the file does not exist.
    fn read(&self, path: &Path) -> Result<Option<String>, StoreError>;

    /// Stage new text for a file. Nothing reaches disk until flushed.
    fn write(&mut self, path: &Path, content: &str);

    /// Whether the file exists, staged or on disk.
    fn exists(&self, path: &Path) -> bool;
}

/// Disk-backed [`FileStore`] rooted at a workspace directory, with a
/// transactional write overlay.
#[derive(Debug)]
pub struct WorkspaceTree {
    root: PathBuf,
    overlay: BTreeMap<PathBuf, String>,
}

impl WorkspaceTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overlay: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Workspace-relative paths with staged changes, in path order.
    pub fn pending(&self) -> Vec<PathBuf> {
        self.overlay.keys().cloned().collect()
    }

    /// Read a file's on-disk text, ignoring the overlay.
    pub fn read_disk(&self, path: &Path) -> Result<Option<String>, StoreError> {
        let abs = self.abs(path);
        match std::fs::read_to_string(&abs) {
            Ok(content) => Ok(Some(normalize_line_endings(&content))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_err(abs, err)),
        }
    }

    /// Commit all staged writes to disk and clear the overlay.
    ///
    /// Each file is written to a `.tailsync.tmp` sibling and renamed into
    /// place; a failed rename removes the temp file and leaves the original
    /// intact. Returns the workspace-relative paths written, in path order.
    pub fn flush(&mut self) -> Result<Vec<PathBuf>, StoreError> {
        let mut written = Vec::with_capacity(self.overlay.len());
        for (rel, content) in &self.overlay {
            let path = self.abs(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
            }

            let tmp = PathBuf::from(format!("{}.tailsync.tmp", path.display()));
            std::fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;
            if let Err(e) = std::fs::rename(&tmp, &path) {
                let _ = std::fs::remove_file(&tmp);
                return Err(io_err(path, e));
            }
            written.push(rel.clone());
        }
        self.overlay.clear();
        Ok(written)
    }

    fn abs(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl FileStore for WorkspaceTree {
    fn read(&self, path: &Path) -> Result<Option<String>, StoreError> {
        if let Some(staged) = self.overlay.get(path) {
            return Ok(Some(staged.clone()));
        }
        self.read_disk(path)
    }

    fn write(&mut self, path: &Path, content: &str) {
        self.overlay
            .insert(path.to_path_buf(), normalize_line_endings(content));
    }

    fn exists(&self, path: &Path) -> bool {
        self.overlay.contains_key(path) || self.abs(path).exists()
    }
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
