use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::ranges;

/// A writing system used to classify label text for font selection.
///
/// The set is closed: it covers the scripts a rendering-font bundle can be
/// provisioned for, plus the two catch-alls [`Latin`](Script::Latin) and
/// [`Generic`](Script::Generic). Every string maps to exactly one `Script`
/// (see [`Script::of`]); strings with no script-distinguishing codepoints
/// (digits, punctuation, the empty string) map to `Generic`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Script {
    Generic,
    Latin,
    Arabic,
    Armenian,
    Bengali,
    Cyrillic,
    Devanagari,
    Ethiopic,
    Georgian,
    Greek,
    Gujarati,
    Gurmukhi,
    Han,
    Hangul,
    Hebrew,
    Hiragana,
    Kannada,
    Katakana,
    Khmer,
    Lao,
    Malayalam,
    Myanmar,
    Oriya,
    Sinhala,
    Tamil,
    Telugu,
    Thai,
    Tibetan,
}

/// All supported scripts, in the order used for registry iteration.
pub(crate) const ALL_SCRIPTS: &[Script] = &[
    Script::Generic,
    Script::Latin,
    Script::Arabic,
    Script::Armenian,
    Script::Bengali,
    Script::Cyrillic,
    Script::Devanagari,
    Script::Ethiopic,
    Script::Georgian,
    Script::Greek,
    Script::Gujarati,
    Script::Gurmukhi,
    Script::Han,
    Script::Hangul,
    Script::Hebrew,
    Script::Hiragana,
    Script::Kannada,
    Script::Katakana,
    Script::Khmer,
    Script::Lao,
    Script::Malayalam,
    Script::Myanmar,
    Script::Oriya,
    Script::Sinhala,
    Script::Tamil,
    Script::Telugu,
    Script::Thai,
    Script::Tibetan,
];

impl Script {
    /// Classifies a string by writing system.
    ///
    /// The scan walks codepoints in order and the first codepoint belonging
    /// to a non-Latin script block decides the result, regardless of what
    /// follows. Latin-block codepoints only mark the string as Latin
    /// candidate; a string that finishes the scan without hitting a
    /// non-Latin block classifies as `Latin` if it contained any Latin
    /// letter and `Generic` otherwise.
    ///
    /// Mixed-script strings deliberately receive a single label: downstream
    /// encoding selects one font bundle per string, so splitting would buy
    /// nothing.
    ///
    /// Total and pure; the empty string classifies as `Generic`.
    pub fn of(text: &str) -> Script {
        ranges::classify(text)
    }

    /// The canonical script name, e.g. `"Devanagari"`.
    ///
    /// This is the value emitted in the `script` feature attribute.
    pub const fn name(self) -> &'static str {
        match self {
            Script::Generic => "Generic",
            Script::Latin => "Latin",
            Script::Arabic => "Arabic",
            Script::Armenian => "Armenian",
            Script::Bengali => "Bengali",
            Script::Cyrillic => "Cyrillic",
            Script::Devanagari => "Devanagari",
            Script::Ethiopic => "Ethiopic",
            Script::Georgian => "Georgian",
            Script::Greek => "Greek",
            Script::Gujarati => "Gujarati",
            Script::Gurmukhi => "Gurmukhi",
            Script::Han => "Han",
            Script::Hangul => "Hangul",
            Script::Hebrew => "Hebrew",
            Script::Hiragana => "Hiragana",
            Script::Kannada => "Kannada",
            Script::Katakana => "Katakana",
            Script::Khmer => "Khmer",
            Script::Lao => "Lao",
            Script::Malayalam => "Malayalam",
            Script::Myanmar => "Myanmar",
            Script::Oriya => "Oriya",
            Script::Sinhala => "Sinhala",
            Script::Tamil => "Tamil",
            Script::Telugu => "Telugu",
            Script::Thai => "Thai",
            Script::Tibetan => "Tibetan",
        }
    }

    /// The lowercase script name used in archive metadata keys, e.g.
    /// `"devanagari"` in `pgf:devanagari:name`.
    pub const fn lowercase_name(self) -> &'static str {
        match self {
            Script::Generic => "generic",
            Script::Latin => "latin",
            Script::Arabic => "arabic",
            Script::Armenian => "armenian",
            Script::Bengali => "bengali",
            Script::Cyrillic => "cyrillic",
            Script::Devanagari => "devanagari",
            Script::Ethiopic => "ethiopic",
            Script::Georgian => "georgian",
            Script::Greek => "greek",
            Script::Gujarati => "gujarati",
            Script::Gurmukhi => "gurmukhi",
            Script::Han => "han",
            Script::Hangul => "hangul",
            Script::Hebrew => "hebrew",
            Script::Hiragana => "hiragana",
            Script::Kannada => "kannada",
            Script::Katakana => "katakana",
            Script::Khmer => "khmer",
            Script::Lao => "lao",
            Script::Malayalam => "malayalam",
            Script::Myanmar => "myanmar",
            Script::Oriya => "oriya",
            Script::Sinhala => "sinhala",
            Script::Tamil => "tamil",
            Script::Telugu => "telugu",
            Script::Thai => "thai",
            Script::Tibetan => "tibetan",
        }
    }

    /// Looks up a script by its canonical name.
    ///
    /// Matching is exact: `"Devanagari"` resolves, `"devanagari"` does not.
    pub fn from_name(name: &str) -> Option<Script> {
        ALL_SCRIPTS.iter().copied().find(|s| s.name() == name)
    }
}

impl Display for Script {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Script {
    type Err = UnknownScript;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Script::from_name(s).ok_or_else(|| UnknownScript(s.to_owned()))
    }
}

/// A string that does not name a supported script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownScript(pub String);

impl Display for UnknownScript {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown script '{}'", self.0)
    }
}

impl std::error::Error for UnknownScript {}
