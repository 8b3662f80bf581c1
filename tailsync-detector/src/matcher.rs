//! Content matchers — the compiled patterns behind classification and merging.
//!
//! Everything here is line-oriented text matching; no CSS is ever parsed
//! structurally. The patterns are grouped in one module so detection and
//! marker-block extraction stay swappable, independently testable units.

use once_cell::sync::Lazy;
use regex::Regex;

/// Start marker of the managed block. Literal, one per file, on its own line.
pub const START_MARKER: &str = "/* tailsync:start */";

/// End marker of the managed block.
pub const END_MARKER: &str = "/* tailsync:end */";

/// `@import "tailwindcss";` (single or double quotes), optionally followed by
/// one modifier clause such as `source(none)`.
static ENGINE_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*@import\s+["']tailwindcss["'](?:\s+[A-Za-z-]+\([^)\n]*\))?\s*;"#)
        .expect("engine import pattern")
});

/// Any `@import …;` statement — the fallback insertion anchor.
static ANY_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*@import\s+[^;\n]+;").expect("generic import pattern")
});

/// Zero-argument invocation of the bundler plugin factory.
static FACTORY_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"tailwindcss\s*\(\s*\)").expect("factory call pattern"));

/// The whole managed block, markers included, non-greedy between them.
static MANAGED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(START_MARKER),
        regex::escape(END_MARKER)
    ))
    .expect("managed block pattern")
});

/// Bare `@source` lines from the pre-managed convention: paths interpolating
/// the `{workspaceRoot}` token. Stripped once, before the first managed insert.
static LEGACY_SOURCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*@source\s+["'][^"'\n]*\{workspaceRoot\}[^"'\n]*["']\s*;[ \t]*\n?"#)
        .expect("legacy source pattern")
});

/// Whether `css` imports the engine (participation rule A).
pub fn uses_engine(css: &str) -> bool {
    ENGINE_IMPORT.is_match(css)
}

/// Byte range of the first engine-import statement.
pub fn engine_import_span(css: &str) -> Option<(usize, usize)> {
    ENGINE_IMPORT.find(css).map(|m| (m.start(), m.end()))
}

/// Byte range of the first import-like statement of any kind.
pub fn any_import_span(css: &str) -> Option<(usize, usize)> {
    ANY_IMPORT.find(css).map(|m| (m.start(), m.end()))
}

/// Whether a bundler config wires up the engine: it must both reference the
/// integration package and invoke its exported factory (participation rule B).
pub fn is_bundler_integration(config: &str) -> bool {
    config.contains("@tailwindcss/vite") && FACTORY_CALL.is_match(config)
}

/// Byte range of the first complete managed block, markers included.
pub fn block_span(text: &str) -> Option<(usize, usize)> {
    MANAGED_BLOCK.find(text).map(|m| (m.start(), m.end()))
}

/// Remove every complete managed block from `text`.
pub fn remove_blocks(text: &str) -> String {
    MANAGED_BLOCK.replace_all(text, "").into_owned()
}

/// Whether either marker occurs anywhere in `text`.
pub fn has_marker(text: &str) -> bool {
    text.contains(START_MARKER) || text.contains(END_MARKER)
}

/// Drop lines that consist of a lone marker — cleanup for malformed blocks
/// (a start without an end, or vice versa).
pub fn strip_marker_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed == START_MARKER || trimmed == END_MARKER {
            continue;
        }
        out.push_str(line);
    }
    out
}

/// Strip legacy bare `@source` lines (the `{workspaceRoot}` convention).
pub fn strip_legacy_sources(text: &str) -> String {
    LEGACY_SOURCE.replace_all(text, "").into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
