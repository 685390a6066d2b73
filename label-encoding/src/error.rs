//! Bundle loading failure taxonomy.
//!
//! Every variant here is fatal at startup: a partially loaded registry
//! would silently degrade label quality on already-shipped clients, so the
//! bootstrap reports the failing script/entry and halts instead. Absence of
//! a bundle at query time is not an error (accessors return `Option`), and
//! per-feature processing never produces one of these.

use std::path::PathBuf;

use script_types::Script;
use thiserror::Error;

use crate::table::GLYPH_INDEX_MAX;

/// A font bundle could not be loaded from the archive.
///
/// A failed load leaves the registry exactly as it was; no partial bundle
/// is ever recorded.
#[derive(Debug, Error)]
pub enum BundleLoadError {
    #[error("bundle archive directory '{}' is missing", .0.display())]
    MissingArchive(PathBuf),
    #[error("bundle entry '{0}' is missing from the archive")]
    MissingEntry(String),
    #[error("error reading bundle entry '{entry}': {source}")]
    Io {
        entry: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed table in bundle entry '{entry}': {source}")]
    Malformed {
        entry: String,
        #[source]
        source: MalformedTable,
    },
    /// Loading a second bundle for an already-provisioned script is
    /// rejected; the first bundle stays intact.
    #[error("a font bundle for script {0} is already loaded")]
    DuplicateScript(Script),
}

/// An encoding table payload violating the bundle table format.
///
/// Line numbers are 1-based and refer to the decompressed CSV payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedTable {
    #[error("line 1: expected header 'codepoint,glyph'")]
    BadHeader,
    #[error("line {line}: expected '<hex codepoints>,<glyph index>'")]
    BadRow { line: usize },
    #[error("line {line}: invalid codepoint '{value}'")]
    BadCodepoint { line: usize, value: String },
    #[error("line {line}: invalid glyph index '{value}'")]
    BadGlyphIndex { line: usize, value: String },
    #[error("line {line}: glyph index {glyph} exceeds the maximum {GLYPH_INDEX_MAX}")]
    GlyphIndexOutOfRange { line: usize, glyph: u32 },
    #[error("line {line}: codepoint keys must be unique and ascending")]
    UnsortedKey { line: usize },
}
