//! Transcoding label text against a loaded bundle table.

use script_types::Script;

use crate::{
    registry::FontRegistry,
    table::{EncodingTable, UNMAPPED_PLACEHOLDER},
};

/// Transcodes label text into a bundle's compact glyph-set encoding.
///
/// Borrows the frozen [`FontRegistry`]; construction is free, so callers
/// can make one per feature or share one across a worker.
#[derive(Clone, Copy, Debug)]
pub struct TextEncoder<'a> {
    registry: &'a FontRegistry,
}

impl<'a> TextEncoder<'a> {
    pub fn new(registry: &'a FontRegistry) -> Self {
        TextEncoder { registry }
    }

    /// Encodes `text` against the bundle loaded for `script`.
    ///
    /// Returns `None` when no bundle is loaded for `script` — the expected
    /// outcome for most scripts, and the signal to omit the encoded
    /// attribute entirely. With a bundle present the result is always
    /// defined: the text is walked unit by unit, longest cluster entry
    /// first, and every unit either maps to its token or to
    /// [`UNMAPPED_PLACEHOLDER`] (never silently dropped), so partial table
    /// coverage stays detectable downstream.
    ///
    /// Deterministic: the output depends only on `text` and the loaded
    /// table, never on locale, clock, or call history.
    pub fn encode(&self, text: &str, script: Script) -> Option<String> {
        let table = self.registry.table_for(script)?;
        Some(encode_with(table, text))
    }
}

fn encode_with(table: &EncodingTable, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(chars.len() * 3);
    let mut pos = 0;
    while pos < chars.len() {
        let longest = table.max_key_len().min(chars.len() - pos);
        // Greedy: a conjunct entry beats its single-codepoint prefix.
        let matched = (1..=longest)
            .rev()
            .find_map(|len| Some((len, table.get(&chars[pos..pos + len])?)));
        match matched {
            Some((len, token)) => {
                out.push(token);
                pos += len;
            }
            None => {
                out.push(UNMAPPED_PLACEHOLDER);
                pos += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TOKEN_BASE;

    fn table(csv: &str) -> EncodingTable {
        EncodingTable::parse(csv).unwrap()
    }

    fn tokens(encoded: &str) -> Vec<u32> {
        encoded.chars().map(|c| c as u32 - TOKEN_BASE).collect()
    }

    #[test]
    fn encodes_in_input_order() {
        let table = table("codepoint,glyph\n0915,21\n0917,23\n");
        assert_eq!(tokens(&encode_with(&table, "\u{917}\u{915}")), vec![23, 21]);
        assert_eq!(tokens(&encode_with(&table, "\u{915}\u{917}")), vec![21, 23]);
    }

    #[test]
    fn unmapped_units_become_placeholders() {
        let table = table("codepoint,glyph\n0915,21\n");
        let encoded = encode_with(&table, "\u{915}x\u{915}y");
        assert_eq!(encoded.chars().count(), 4);
        assert_eq!(
            encoded.chars().filter(|&c| c == UNMAPPED_PLACEHOLDER).count(),
            2
        );
        // Covered units never produce the placeholder.
        let covered = encode_with(&table, "\u{915}\u{915}");
        assert!(!covered.contains(UNMAPPED_PLACEHOLDER));
    }

    #[test]
    fn cluster_entry_beats_prefix() {
        let table = table("codepoint,glyph\n0924,30\n0938,50\n0938 094D 0924,312\n");
        // The conjunct consumes all three codepoints as one token.
        assert_eq!(
            tokens(&encode_with(&table, "\u{938}\u{94D}\u{924}")),
            vec![312]
        );
        // Without the full cluster, the prefix maps alone and the dangling
        // virama is unmapped.
        let partial = encode_with(&table, "\u{938}\u{94D}");
        assert_eq!(partial.chars().count(), 2);
        assert!(partial.contains(UNMAPPED_PLACEHOLDER));
    }

    #[test]
    fn empty_text_and_empty_table() {
        let populated = table("codepoint,glyph\n0915,21\n");
        assert_eq!(encode_with(&populated, ""), "");
        let empty = table("codepoint,glyph\n");
        assert_eq!(
            encode_with(&empty, "ab"),
            format!("{UNMAPPED_PLACEHOLDER}{UNMAPPED_PLACEHOLDER}")
        );
    }

    #[test]
    fn deterministic_repeat_encoding() {
        let table = table("codepoint,glyph\n0915,21\n0917,23\n");
        let once = encode_with(&table, "\u{915}\u{917}\u{915}");
        let twice = encode_with(&table, "\u{915}\u{917}\u{915}");
        assert_eq!(once, twice);
    }

    #[test]
    fn none_without_bundle() {
        let registry = FontRegistry::new("unused");
        let encoder = TextEncoder::new(&registry);
        assert_eq!(encoder.encode("\u{915}", Script::Devanagari), None);
    }
}
