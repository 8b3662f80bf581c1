//! Managed-block merging.
//!
//! The managed block is the region between the literal
//! [`matcher::START_MARKER`] and [`matcher::END_MARKER`] lines. A document is
//! handled as three segments — prefix, block, suffix — so every byte outside
//! the block survives a merge unchanged. Re-running the merge on its own
//! output is a no-op.

use tailsync_detector::matcher::{self, END_MARKER, START_MARKER};

/// Result of merging a directive list into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merge {
    pub text: String,
    pub changed: bool,
}

/// Merge `directives` into `current`, returning the new text and whether it
/// differs from the input.
///
/// - Markers present: the first block is replaced with the rendered
///   candidate; any further blocks are collapsed away.
/// - Markers absent with a non-empty list: legacy bare `@source` lines are
///   stripped, then the block is inserted after the engine import, after any
///   import, or prepended when no import exists.
/// - Markers absent with an empty list: the document is left untouched — no
///   empty block is introduced. With markers present the block shrinks to an
///   empty one instead.
pub fn merge(current: &str, directives: &[String]) -> Merge {
    let doc = Document::parse(current);
    let text = if doc.block.is_some() {
        Document {
            block: Some(render_block(directives)),
            ..doc
        }
        .render()
    } else if directives.is_empty() {
        current.to_string()
    } else {
        let base = matcher::strip_legacy_sources(&doc.render());
        insert_block(&base, &render_block(directives))
    };

    Merge {
        changed: text != current,
        text,
    }
}

// ---------------------------------------------------------------------------
// Three-segment document
// ---------------------------------------------------------------------------

/// A document split around its managed block. `prefix` and `suffix` are
/// never touched by a replacement, which makes the preservation invariant
/// mechanically checkable.
#[derive(Debug, Clone)]
struct Document {
    prefix: String,
    block: Option<String>,
    suffix: String,
}

impl Document {
    /// Split `text` around the first complete managed block. Any further
    /// blocks in the suffix are dropped so a rerun collapses duplicates;
    /// orphaned marker lines from a malformed block are stripped from both
    /// remaining segments.
    fn parse(text: &str) -> Document {
        if let Some((start, end)) = matcher::block_span(text) {
            Document {
                prefix: matcher::strip_marker_lines(&text[..start]),
                block: Some(text[start..end].to_string()),
                suffix: matcher::strip_marker_lines(&matcher::remove_blocks(&text[end..])),
            }
        } else if matcher::has_marker(text) {
            Document {
                prefix: matcher::strip_marker_lines(text),
                block: None,
                suffix: String::new(),
            }
        } else {
            Document {
                prefix: text.to_string(),
                block: None,
                suffix: String::new(),
            }
        }
    }

    fn render(&self) -> String {
        match &self.block {
            Some(block) => format!("{}{}{}", self.prefix, block, self.suffix),
            None => format!("{}{}", self.prefix, self.suffix),
        }
    }
}

/// Render the candidate block, markers included, no trailing newline.
fn render_block(directives: &[String]) -> String {
    if directives.is_empty() {
        format!("{START_MARKER}\n{END_MARKER}")
    } else {
        format!("{START_MARKER}\n{}\n{END_MARKER}", directives.join("\n"))
    }
}

/// Insert `block` into `text`: after the engine-import line if present, else
/// after the first import-like line, else prepended with a blank separator.
fn insert_block(text: &str, block: &str) -> String {
    let anchor = matcher::engine_import_span(text).or_else(|| matcher::any_import_span(text));
    match anchor {
        Some((_, end)) => {
            let line_end = text[end..]
                .find('\n')
                .map(|i| end + i + 1)
                .unwrap_or(text.len());
            if line_end == text.len() && !text.ends_with('\n') {
                format!("{text}\n{block}")
            } else {
                format!("{}{}\n{}", &text[..line_end], block, &text[line_end..])
            }
        }
        None if text.is_empty() => format!("{block}\n"),
        None => format!("{block}\n\n{text}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
