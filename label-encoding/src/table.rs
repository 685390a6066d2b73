//! Bundle encoding tables: input units to glyph-set tokens.
//!
//! A table entry maps a key of one or more codepoints (clusters cover the
//! conjuncts of composed scripts) to an index into the bundle's glyph set.
//! On the wire an index is carried as the Private Use Area scalar
//! `U+E000 + index`, which keeps the encoded value an ordinary string while
//! staying disjoint from any text a tag value could contain.
//!
//! The serialized form is a gzip-compressed CSV payload:
//!
//! ```text
//! codepoint,glyph
//! 0915,21
//! 0938 094D 0924,312
//! ```
//!
//! Keys are space-separated hex codepoints; glyph indices are decimal and
//! at most [`GLYPH_INDEX_MAX`]. Rows must be strictly ascending by key,
//! which rejects duplicates in the same pass that enables binary-search
//! lookup. Once parsed a table never changes, so encoding is a pure
//! function of the text and the table contents.

use crate::error::MalformedTable;

/// Largest admissible glyph index.
///
/// `U+E000 + GLYPH_INDEX_MAX` is `U+F8FF`, the end of the Basic
/// Multilingual Plane Private Use Area.
pub const GLYPH_INDEX_MAX: u32 = 0x18FF;

/// First scalar of the output token range.
pub const TOKEN_BASE: u32 = 0xE000;

/// Token emitted for an input unit with no table entry.
///
/// Never a valid glyph token, so a client (or a test) can detect partial
/// coverage by scanning the encoded value for it.
pub const UNMAPPED_PLACEHOLDER: char = '\u{FFFD}';

const HEADER: &str = "codepoint,glyph";

#[derive(Clone, Debug)]
struct TableEntry {
    key: Box<[char]>,
    token: char,
}

/// An immutable mapping from input units to glyph-set tokens.
///
/// Constructed only by [`FontRegistry::load_bundle`][crate::FontRegistry::load_bundle];
/// lookups are resolved by binary search over the sorted entry list.
#[derive(Clone, Debug, Default)]
pub struct EncodingTable {
    entries: Vec<TableEntry>,
    max_key_len: usize,
}

impl EncodingTable {
    /// Parses the decompressed CSV payload of a bundle entry.
    pub(crate) fn parse(source: &str) -> Result<EncodingTable, MalformedTable> {
        let mut lines = source.lines().enumerate();
        match lines.next() {
            Some((_, header)) if header.trim_end() == HEADER => {}
            _ => return Err(MalformedTable::BadHeader),
        }
        let mut entries: Vec<TableEntry> = Vec::new();
        let mut max_key_len = 0;
        for (ix, line) in lines {
            let line_no = ix + 1;
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let (key_field, glyph_field) = line
                .split_once(',')
                .ok_or(MalformedTable::BadRow { line: line_no })?;
            let key = parse_key(key_field, line_no)?;
            let token = parse_glyph(glyph_field, line_no)?;
            if let Some(prev) = entries.last() {
                if *prev.key >= *key {
                    return Err(MalformedTable::UnsortedKey { line: line_no });
                }
            }
            max_key_len = max_key_len.max(key.len());
            entries.push(TableEntry { key, token });
        }
        Ok(EncodingTable {
            entries,
            max_key_len,
        })
    }

    /// Returns the token for an exact input unit, if the table covers it.
    pub fn get(&self, key: &[char]) -> Option<char> {
        let ix = self
            .entries
            .binary_search_by(|entry| entry.key.as_ref().cmp(key))
            .ok()?;
        Some(self.entries[ix].token)
    }

    /// Number of table entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest key, bounding the encoder's cluster probe.
    pub(crate) fn max_key_len(&self) -> usize {
        self.max_key_len
    }
}

fn parse_key(field: &str, line: usize) -> Result<Box<[char]>, MalformedTable> {
    let bad = |value: &str| MalformedTable::BadCodepoint {
        line,
        value: value.to_owned(),
    };
    let mut key = Vec::new();
    for word in field.split(' ') {
        let scalar = u32::from_str_radix(word, 16).map_err(|_| bad(word))?;
        key.push(char::from_u32(scalar).ok_or_else(|| bad(word))?);
    }
    if key.is_empty() {
        return Err(bad(field));
    }
    Ok(key.into_boxed_slice())
}

fn parse_glyph(field: &str, line: usize) -> Result<char, MalformedTable> {
    let glyph: u32 = field.parse().map_err(|_| MalformedTable::BadGlyphIndex {
        line,
        value: field.to_owned(),
    })?;
    if glyph > GLYPH_INDEX_MAX {
        return Err(MalformedTable::GlyphIndexOutOfRange { line, glyph });
    }
    // In range means in the BMP Private Use Area, so this cannot fail; the
    // error arm only guards the invariant.
    char::from_u32(TOKEN_BASE + glyph)
        .ok_or(MalformedTable::GlyphIndexOutOfRange { line, glyph })
}
