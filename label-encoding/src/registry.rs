//! The per-script font bundle store.

use std::{
    collections::BTreeMap,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use flate2::read::GzDecoder;
use script_types::Script;

use crate::{
    error::BundleLoadError,
    table::EncodingTable,
};

/// A loaded rendering-font bundle for one script.
///
/// Immutable once loaded: the display name and version feed archive
/// attribution, the table feeds the [`TextEncoder`][crate::TextEncoder].
/// Owned exclusively by the [`FontRegistry`].
#[derive(Clone, Debug)]
pub struct FontBundle {
    script: Script,
    name: String,
    version: String,
    table: EncodingTable,
}

impl FontBundle {
    pub fn script(&self) -> Script {
        self.script
    }

    /// The bundle's display name, e.g. `"NotoSansDevanagari-Regular"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub(crate) fn table(&self) -> &EncodingTable {
        &self.table
    }
}

/// Store of the font bundles provisioned for this build, keyed by script.
///
/// The registry is an explicitly constructed value, not process-global
/// state: the bootstrap creates one, loads bundles into it, and hands
/// shared references to every component that reads it.
///
/// ## Lifecycle
///
/// Loads require `&mut self` and happen on one thread before any feature
/// processing starts; afterwards the registry is only touched through `&`
/// (or an `Arc`), so concurrent readers need no synchronization — the
/// write-once-then-read-only contract is enforced by the borrow checker
/// rather than a lock.
#[derive(Clone, Debug)]
pub struct FontRegistry {
    archive_dir: PathBuf,
    bundles: BTreeMap<Script, FontBundle>,
}

impl FontRegistry {
    /// Creates an empty registry reading bundle entries from `archive_dir`.
    pub fn new(archive_dir: impl Into<PathBuf>) -> Self {
        FontRegistry {
            archive_dir: archive_dir.into(),
            bundles: BTreeMap::new(),
        }
    }

    /// The configured bundle archive location.
    pub fn archive_dir(&self) -> &Path {
        &self.archive_dir
    }

    /// Loads the bundle `(name, version)` for `script` from the archive
    /// entry `<name>-<version>.csv.gz`.
    ///
    /// A second load for an already-provisioned script is rejected with
    /// [`BundleLoadError::DuplicateScript`] and the first bundle stays
    /// intact. Any failure leaves the registry unchanged; callers treat
    /// these as fatal configuration errors rather than loading on.
    pub fn load_bundle(
        &mut self,
        name: &str,
        version: &str,
        script: Script,
    ) -> Result<(), BundleLoadError> {
        if self.bundles.contains_key(&script) {
            log::warn!("rejecting duplicate font bundle load for {script}");
            return Err(BundleLoadError::DuplicateScript(script));
        }
        if !self.archive_dir.is_dir() {
            return Err(BundleLoadError::MissingArchive(self.archive_dir.clone()));
        }
        let entry = format!("{name}-{version}.csv.gz");
        let path = self.archive_dir.join(&entry);
        if !path.is_file() {
            return Err(BundleLoadError::MissingEntry(entry));
        }
        let table = read_entry(&path)
            .map_err(|source| BundleLoadError::Io {
                entry: entry.clone(),
                source,
            })
            .and_then(|payload| {
                EncodingTable::parse(&payload).map_err(|source| BundleLoadError::Malformed {
                    entry: entry.clone(),
                    source,
                })
            })?;
        log::info!(
            "loaded font bundle '{name}' version {version} for {script} ({} table entries)",
            table.len()
        );
        self.bundles.insert(
            script,
            FontBundle {
                script,
                name: name.to_owned(),
                version: version.to_owned(),
                table,
            },
        );
        Ok(())
    }

    /// Returns true if a bundle is loaded for `script`.
    pub fn has_script(&self, script: Script) -> bool {
        self.bundles.contains_key(&script)
    }

    /// All loaded scripts, in ascending order.
    pub fn scripts(&self) -> impl Iterator<Item = Script> + '_ {
        self.bundles.keys().copied()
    }

    /// The loaded bundle for `script`, if any.
    pub fn bundle(&self, script: Script) -> Option<&FontBundle> {
        self.bundles.get(&script)
    }

    /// The attribution pair `(display name, version)` for `script`.
    ///
    /// `None` for an unloaded script; callers are expected to gate on
    /// [`has_script`][Self::has_script] or iterate [`scripts`][Self::scripts],
    /// so observing `None` indicates a caller bug rather than a recoverable
    /// condition.
    pub fn metadata(&self, script: Script) -> Option<(&str, &str)> {
        self.bundles
            .get(&script)
            .map(|bundle| (bundle.name(), bundle.version()))
    }

    /// Encoding-table accessor for the text encoder; same contract as
    /// [`metadata`][Self::metadata].
    pub(crate) fn table_for(&self, script: Script) -> Option<&EncodingTable> {
        self.bundles.get(&script).map(FontBundle::table)
    }
}

fn read_entry(path: &Path) -> std::io::Result<String> {
    let mut payload = String::new();
    GzDecoder::new(File::open(path)?).read_to_string(&mut payload)?;
    Ok(payload)
}
