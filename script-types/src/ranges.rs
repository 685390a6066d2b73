//! Codepoint to script mapping.

use crate::Script;

/// Associates a script with a range of codepoints.
#[derive(Copy, Clone, Debug)]
struct ScriptRange {
    first: u32,
    last: u32,
    script: Script,
}

impl ScriptRange {
    fn contains(&self, ch: u32) -> bool {
        (self.first..=self.last).contains(&ch)
    }
}

const fn range(first: u32, last: u32, script: Script) -> ScriptRange {
    ScriptRange {
        first,
        last,
        script,
    }
}

/// Unicode blocks owned by the supported scripts, sorted by first codepoint.
///
/// Codepoints outside every range (digits, punctuation, whitespace, symbols,
/// and scripts without bundle support) contribute nothing to classification.
/// The Latin ranges exclude the Latin-1 non-letters (e.g. U+00D7, U+00F7) so
/// that symbol-only strings stay generic.
const SCRIPT_RANGES: &[ScriptRange] = &[
    range(0x0041, 0x005A, Script::Latin),
    range(0x0061, 0x007A, Script::Latin),
    range(0x00C0, 0x00D6, Script::Latin),
    range(0x00D8, 0x00F6, Script::Latin),
    range(0x00F8, 0x00FF, Script::Latin),
    range(0x0100, 0x017F, Script::Latin), // Extended-A
    range(0x0180, 0x024F, Script::Latin), // Extended-B
    range(0x0370, 0x03FF, Script::Greek),
    range(0x0400, 0x04FF, Script::Cyrillic),
    range(0x0500, 0x052F, Script::Cyrillic), // Supplement
    range(0x0530, 0x058F, Script::Armenian),
    range(0x0590, 0x05FF, Script::Hebrew),
    range(0x0600, 0x06FF, Script::Arabic),
    range(0x0750, 0x077F, Script::Arabic), // Supplement
    range(0x08A0, 0x08FF, Script::Arabic), // Extended-A
    range(0x0900, 0x097F, Script::Devanagari),
    range(0x0980, 0x09FF, Script::Bengali),
    range(0x0A00, 0x0A7F, Script::Gurmukhi),
    range(0x0A80, 0x0AFF, Script::Gujarati),
    range(0x0B00, 0x0B7F, Script::Oriya),
    range(0x0B80, 0x0BFF, Script::Tamil),
    range(0x0C00, 0x0C7F, Script::Telugu),
    range(0x0C80, 0x0CFF, Script::Kannada),
    range(0x0D00, 0x0D7F, Script::Malayalam),
    range(0x0D80, 0x0DFF, Script::Sinhala),
    range(0x0E00, 0x0E7F, Script::Thai),
    range(0x0E80, 0x0EFF, Script::Lao),
    range(0x0F00, 0x0FFF, Script::Tibetan),
    range(0x1000, 0x109F, Script::Myanmar),
    range(0x10A0, 0x10FF, Script::Georgian),
    range(0x1100, 0x11FF, Script::Hangul), // Jamo
    range(0x1200, 0x137F, Script::Ethiopic),
    range(0x1780, 0x17FF, Script::Khmer),
    range(0x1E00, 0x1EFF, Script::Latin), // Extended Additional
    range(0x1F00, 0x1FFF, Script::Greek), // Extended
    range(0x2C60, 0x2C7F, Script::Latin), // Extended-C
    range(0x2D00, 0x2D2F, Script::Georgian), // Supplement
    range(0x3040, 0x309F, Script::Hiragana),
    range(0x30A0, 0x30FF, Script::Katakana),
    range(0x3130, 0x318F, Script::Hangul), // Compatibility Jamo
    range(0x3400, 0x4DBF, Script::Han), // Extension A
    range(0x4E00, 0x9FFF, Script::Han),
    range(0xA8E0, 0xA8FF, Script::Devanagari), // Extended
    range(0xAC00, 0xD7AF, Script::Hangul), // Syllables
    range(0xF900, 0xFAFF, Script::Han), // Compatibility Ideographs
    range(0xFB50, 0xFDFF, Script::Arabic), // Presentation Forms-A
    range(0xFE70, 0xFEFF, Script::Arabic), // Presentation Forms-B
];

/// Returns the range owning `ch`, if any.
///
/// Ranges are sorted so we binary search on the first codepoint and then
/// check membership in the single candidate range.
fn lookup(ch: u32) -> Option<&'static ScriptRange> {
    let ix = match SCRIPT_RANGES.binary_search_by(|x| x.first.cmp(&ch)) {
        Ok(i) => i,
        Err(i) => i.checked_sub(1)?,
    };
    let range = &SCRIPT_RANGES[ix];
    range.contains(ch).then_some(range)
}

/// Whole-string classification; see [`Script::of`] for the contract.
pub(crate) fn classify(text: &str) -> Script {
    let mut saw_latin = false;
    let mut last_range: Option<&ScriptRange> = None;
    for ch in text.chars() {
        let ch = ch as u32;
        // Consecutive characters usually come from the same block, so try
        // the most recent range before searching again.
        let range = match last_range {
            Some(last) if last.contains(ch) => last,
            _ => match lookup(ch) {
                Some(range) => range,
                None => continue,
            },
        };
        last_range = Some(range);
        match range.script {
            Script::Latin => saw_latin = true,
            script => return script,
        }
    }
    if saw_latin {
        Script::Latin
    } else {
        Script::Generic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_sorted_and_disjoint() {
        for pair in SCRIPT_RANGES.windows(2) {
            assert!(
                pair[0].last < pair[1].first,
                "ranges {:x}-{:x} and {:x}-{:x} out of order",
                pair[0].first,
                pair[0].last,
                pair[1].first,
                pair[1].last
            );
        }
        for range in SCRIPT_RANGES {
            assert!(range.first <= range.last);
            assert_ne!(range.script, Script::Generic);
        }
    }

    #[test]
    fn lookup_boundaries() {
        assert_eq!(lookup(0x0900).map(|r| r.script), Some(Script::Devanagari));
        assert_eq!(lookup(0x097F).map(|r| r.script), Some(Script::Devanagari));
        assert_eq!(lookup(0x0980).map(|r| r.script), Some(Script::Bengali));
        // Below the very first range.
        assert!(lookup(0x0020).is_none());
        // Gaps between ranges.
        assert!(lookup(0x00D7).is_none()); // multiplication sign
        assert!(lookup(0x0250).is_none()); // IPA extensions
        assert!(lookup(0x2000).is_none()); // general punctuation
        // Beyond the last range.
        assert!(lookup(0x1F600).is_none());
    }

    #[test]
    fn digits_and_punctuation_are_unowned() {
        for ch in "0123456789 -,.()/&'".chars() {
            assert!(lookup(ch as u32).is_none(), "{ch:?} should be unowned");
        }
    }
}
