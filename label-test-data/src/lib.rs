//! Test data shared between the label encoding crates.

use std::{fs::File, io::Write, path::Path};

use flate2::{write::GzEncoder, Compression};

/// Encoding table covering the Devanagari codepoints used across the test
/// suites, including one conjunct cluster entry (`स्त`).
pub static DEVANAGARI_TABLE: &str = include_str!("../test_data/devanagari.csv");

/// Bundle identity matching [`DEVANAGARI_TABLE`] as materialized by
/// [`materialize_archive`].
pub static DEVANAGARI_BUNDLE_NAME: &str = "NotoSansDevanagari-Regular";
pub static DEVANAGARI_BUNDLE_VERSION: &str = "1";

/// Writes the standard fixture bundles into `dir`, making it a loadable
/// bundle archive.
pub fn materialize_archive(dir: &Path) -> std::io::Result<()> {
    write_entry(
        dir,
        DEVANAGARI_BUNDLE_NAME,
        DEVANAGARI_BUNDLE_VERSION,
        DEVANAGARI_TABLE,
    )
}

/// Writes one gzip-compressed bundle entry `<name>-<version>.csv.gz`.
pub fn write_entry(dir: &Path, name: &str, version: &str, table_csv: &str) -> std::io::Result<()> {
    let path = dir.join(format!("{name}-{version}.csv.gz"));
    let mut encoder = GzEncoder::new(File::create(path)?, Compression::default());
    encoder.write_all(table_csv.as_bytes())?;
    encoder.finish()?;
    Ok(())
}
