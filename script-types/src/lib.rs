//! Writing-system identifiers and Unicode range classification for label text.
//!
//! Classification answers one question for a harvested name string: which
//! script's font bundle should a rendering client reach for? It is a
//! whole-string decision, not a segmentation; see [`Script::of`] for the
//! exact policy.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod ranges;
mod script;

pub use script::{Script, UnknownScript};
