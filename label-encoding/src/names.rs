//! Name-tag processing: plain, `script`, and encoded label attributes.

use std::borrow::Cow;

use script_types::Script;

use crate::{encode::TextEncoder, registry::FontRegistry, ENCODED_PREFIX};

/// A primitive tag value as the tiling pipeline hands it over.
#[derive(Clone, Debug, PartialEq)]
pub enum TagValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl TagValue {
    /// Renders the value as label text.
    ///
    /// `None` for null values and for strings that are empty after
    /// trimming; such tags are skipped entirely.
    pub fn as_label_text(&self) -> Option<Cow<'_, str>> {
        match self {
            TagValue::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| Cow::Borrowed(trimmed))
            }
            TagValue::Integer(n) => Some(Cow::Owned(n.to_string())),
            TagValue::Float(n) => Some(Cow::Owned(n.to_string())),
            TagValue::Boolean(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            TagValue::Null => None,
        }
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::String(value.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::String(value)
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        TagValue::Integer(value)
    }
}

/// The subsystem's view of an output feature.
///
/// The real sink is the pipeline's feature collector; tests use an
/// in-memory map.
pub trait AttributeSink {
    /// Sets `key` to `value`, visible from `min_zoom` up.
    fn set_attr_with_min_zoom(&mut self, key: &str, value: &str, min_zoom: u8);
}

/// A parsed name-like tag: normalized key, text value, classified script.
#[derive(Clone, Debug)]
struct NameTag {
    /// `name`, or the normalized `name:<lang>`.
    key: String,
    value: String,
    script: Script,
}

impl NameTag {
    fn is_plain(&self) -> bool {
        self.key == "name"
    }
}

/// Normalizes a tag key to its name-attribute form.
///
/// `name` passes through, `name:<lang>` passes through, and the legacy
/// underscore spelling `name_<lang>` becomes `name:<lang>`. Everything else
/// is not a name tag.
fn normalize_key(key: &str) -> Option<String> {
    if key == "name" {
        return Some(key.to_owned());
    }
    let lang = key
        .strip_prefix("name:")
        .or_else(|| key.strip_prefix("name_"))?;
    if lang.is_empty() {
        return None;
    }
    Some(format!("name:{lang}"))
}

/// Derives the per-feature label attributes from name-like tags.
///
/// One processor per build is plenty; it borrows the frozen registry and
/// carries no state of its own.
#[derive(Clone, Copy, Debug)]
pub struct NameProcessor<'a> {
    registry: &'a FontRegistry,
    encoder: TextEncoder<'a>,
}

impl<'a> NameProcessor<'a> {
    pub fn new(registry: &'a FontRegistry) -> Self {
        NameProcessor {
            registry,
            encoder: TextEncoder::new(registry),
        }
    }

    /// Processes a feature's tags and writes label attributes into `sink`,
    /// all gated at `min_zoom`.
    ///
    /// Per name-like tag with a usable text value:
    ///
    /// - `name` emits `name`, plus `script` when the value classifies as
    ///   neither Latin nor Generic, plus `pgf:name` when the script has a
    ///   loaded bundle (the last two are independent of each other);
    /// - `name:<lang>` (and the legacy `name_<lang>`) emits the localized
    ///   attribute verbatim, plus `pgf:name:<lang>` only when the script
    ///   has a loaded bundle — no bundle, no encoded counterpart, silently.
    ///
    /// The output set is independent of tag iteration order: tags are
    /// canonicalized (sorted by key and value, first record per key wins)
    /// before anything is emitted, so re-running over a differently ordered
    /// copy of the same tags yields the same attributes. Tags that cannot
    /// produce label text are skipped without disturbing the rest of the
    /// feature.
    pub fn apply<S: AttributeSink>(
        &self,
        tags: &[(String, TagValue)],
        min_zoom: u8,
        sink: &mut S,
    ) {
        let mut parsed: Vec<NameTag> = Vec::new();
        for (key, value) in tags {
            let Some(key) = normalize_key(key) else {
                continue;
            };
            let Some(text) = value.as_label_text() else {
                log::debug!("skipping name tag '{key}' with no usable text value");
                continue;
            };
            let value = text.into_owned();
            let script = Script::of(&value);
            parsed.push(NameTag { key, value, script });
        }
        // Canonical order, then first record per key: two spellings of the
        // same key (name:hi vs name_hi) collapse deterministically no
        // matter how the source ordered them.
        parsed.sort_by(|a, b| (&a.key, &a.value).cmp(&(&b.key, &b.value)));
        parsed.dedup_by(|b, a| b.key == a.key);
        for tag in &parsed {
            self.emit(tag, min_zoom, sink);
        }
    }

    fn emit<S: AttributeSink>(&self, tag: &NameTag, min_zoom: u8, sink: &mut S) {
        sink.set_attr_with_min_zoom(&tag.key, &tag.value, min_zoom);
        if tag.is_plain() {
            if !matches!(tag.script, Script::Latin | Script::Generic) {
                sink.set_attr_with_min_zoom("script", tag.script.name(), min_zoom);
            }
            if let Some(encoded) = self.encoder.encode(&tag.value, tag.script) {
                let key = format!("{ENCODED_PREFIX}:{}", tag.key);
                sink.set_attr_with_min_zoom(&key, &encoded, min_zoom);
            }
        } else if self.registry.has_script(tag.script) {
            if let Some(encoded) = self.encoder.encode(&tag.value, tag.script) {
                let key = format!("{ENCODED_PREFIX}:{}", tag.key);
                sink.set_attr_with_min_zoom(&key, &encoded, min_zoom);
            }
        }
    }
}
