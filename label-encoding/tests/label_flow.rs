//! End-to-end flow against a materialized bundle archive: bootstrap-style
//! loading, per-feature name processing, and attribution export.

use std::collections::BTreeMap;

use label_encoding::{
    archive_metadata, AttributeSink, BundleLoadError, FontRegistry, NameProcessor, Script,
    TagValue, UNMAPPED_PLACEHOLDER,
};

#[derive(Debug, Default, PartialEq)]
struct AttrMap(BTreeMap<String, (String, u8)>);

impl AttributeSink for AttrMap {
    fn set_attr_with_min_zoom(&mut self, key: &str, value: &str, min_zoom: u8) {
        self.0.insert(key.to_owned(), (value.to_owned(), min_zoom));
    }
}

fn bootstrap() -> (tempfile::TempDir, FontRegistry) {
    let dir = tempfile::tempdir().unwrap();
    label_test_data::materialize_archive(dir.path()).unwrap();
    let mut registry = FontRegistry::new(dir.path());
    registry
        .load_bundle(
            label_test_data::DEVANAGARI_BUNDLE_NAME,
            label_test_data::DEVANAGARI_BUNDLE_VERSION,
            Script::Devanagari,
        )
        .unwrap();
    (dir, registry)
}

fn tag(key: &str, value: &str) -> (String, TagValue) {
    (key.to_owned(), TagValue::from(value))
}

#[test]
fn latin_feature_gets_plain_name_only() {
    let (_dir, registry) = bootstrap();
    let mut attrs = AttrMap::default();
    NameProcessor::new(&registry).apply(&[tag("name", "Wellington")], 10, &mut attrs);
    assert_eq!(attrs.0.len(), 1);
    assert_eq!(attrs.0["name"], ("Wellington".to_owned(), 10));
}

#[test]
fn devanagari_feature_gets_script_and_encoding() {
    let (_dir, registry) = bootstrap();
    let mut attrs = AttrMap::default();
    NameProcessor::new(&registry).apply(
        &[
            tag("name", "देवनागरी"),
            tag("name_hi", "नमस्ते"),
            tag("name:en", "Devanagari"),
        ],
        11,
        &mut attrs,
    );
    assert_eq!(attrs.0["name"], ("देवनागरी".to_owned(), 11));
    assert_eq!(attrs.0["script"], ("Devanagari".to_owned(), 11));
    assert_eq!(attrs.0["name:en"], ("Devanagari".to_owned(), 11));
    // The legacy key arrives normalized, with its encoded counterpart.
    assert_eq!(attrs.0["name:hi"], ("नमस्ते".to_owned(), 11));
    let (encoded_hi, _) = &attrs.0["pgf:name:hi"];
    // स + ् + त collapses into the conjunct entry, so one token fewer
    // than codepoints, and every unit is covered.
    assert_eq!(encoded_hi.chars().count(), "नमस्ते".chars().count() - 2);
    assert!(!encoded_hi.contains(UNMAPPED_PLACEHOLDER));
    // The Latin localization has no bundle and so no encoded counterpart.
    assert!(!attrs.0.contains_key("pgf:name:en"));
}

#[test]
fn repeat_builds_encode_identically() {
    let (_dir, registry) = bootstrap();
    let run = |registry: &FontRegistry| {
        let mut attrs = AttrMap::default();
        NameProcessor::new(registry).apply(&[tag("name", "नमस्ते")], 9, &mut attrs);
        attrs
    };
    assert_eq!(run(&registry), run(&registry));
}

#[test]
fn misconfigured_bundle_fails_loud_and_early() {
    let dir = tempfile::tempdir().unwrap();
    label_test_data::materialize_archive(dir.path()).unwrap();
    let mut registry = FontRegistry::new(dir.path());
    let err = registry
        .load_bundle("NotoSansTamil-Regular", "3", Script::Tamil)
        .unwrap_err();
    assert!(matches!(err, BundleLoadError::MissingEntry(_)));
    assert!(archive_metadata(&registry).is_empty());
}

#[test]
fn attribution_round_trips_through_metadata() {
    let (_dir, registry) = bootstrap();
    let metadata = archive_metadata(&registry);
    assert_eq!(
        metadata["pgf:devanagari:name"],
        label_test_data::DEVANAGARI_BUNDLE_NAME
    );
    assert_eq!(
        metadata["pgf:devanagari:version"],
        label_test_data::DEVANAGARI_BUNDLE_VERSION
    );
}
