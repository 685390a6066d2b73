//! Script-aware transcoding of map label text against registered
//! rendering-font bundles.
//!
//! The tiling pipeline hands this crate harvested name text; it classifies
//! each string by writing system (via [`script_types`]), and for scripts
//! with a loaded [`FontBundle`] produces a compact auxiliary encoding keyed
//! to the bundle's glyph table. A rendering client draws multi-script
//! labels by indexing into a small pre-agreed glyph set per script instead
//! of shipping shaping logic and multi-script fonts.
//!
//! The working pieces, leaf first:
//!
//! - [`EncodingTable`] — input unit (codepoint or short cluster) to glyph
//!   index mapping, parsed from a bundle archive entry.
//! - [`FontRegistry`] — per-script bundle store. Loaded single-threaded at
//!   startup, then shared immutably; the `&mut`/`&` split is the freeze
//!   point.
//! - [`TextEncoder`] — transcodes a string against a loaded bundle, or
//!   reports "no encoding" for the (common) unprovisioned scripts.
//! - [`NameProcessor`] — per-feature driver: finds name-like tags, emits
//!   plain, `script`, and encoded attributes through an [`AttributeSink`].
//! - [`archive_metadata`] — per-script attribution pairs for the output
//!   archive's metadata block.
//! - [`RankDb`] — popularity-rank lookup consumed by the POI layer to pick
//!   label minimum zooms.
//!
//! Everything after the load phase is pure and deterministic: encoded
//! output depends only on the input text and the loaded tables, so repeated
//! builds produce byte-identical label data.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod encode;
mod error;
mod metadata;
mod names;
mod rank;
mod registry;
mod table;

pub use encode::TextEncoder;
pub use error::{BundleLoadError, MalformedTable};
pub use metadata::archive_metadata;
pub use names::{AttributeSink, NameProcessor, TagValue};
pub use rank::{RankDb, RankLoadError};
pub use registry::{FontBundle, FontRegistry};
pub use table::{EncodingTable, GLYPH_INDEX_MAX, TOKEN_BASE, UNMAPPED_PLACEHOLDER};

#[doc(inline)]
pub use script_types::Script;

/// Key prefix for encoded attributes and archive metadata entries.
///
/// This is the wire contract with rendering clients: encoded names ship as
/// `pgf:name` / `pgf:name:<lang>` and attribution as
/// `pgf:<script>:name` / `pgf:<script>:version`.
pub const ENCODED_PREFIX: &str = "pgf";
