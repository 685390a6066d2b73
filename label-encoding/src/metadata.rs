//! Per-script attribution for the output archive's metadata block.

use std::collections::BTreeMap;

use crate::{registry::FontRegistry, ENCODED_PREFIX};

/// Publishes bundle attribution for every loaded script as metadata pairs:
/// `pgf:<script>:name` and `pgf:<script>:version`, with the script name
/// lowercased.
///
/// Rendering clients use these to resolve which glyph-set font (and which
/// revision of it) an archive's encoded labels were produced against.
/// The map is ordered, so the exported block is reproducible.
pub fn archive_metadata(registry: &FontRegistry) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    for script in registry.scripts() {
        let Some((name, version)) = registry.metadata(script) else {
            continue;
        };
        let script = script.lowercase_name();
        result.insert(format!("{ENCODED_PREFIX}:{script}:name"), name.to_owned());
        result.insert(
            format!("{ENCODED_PREFIX}:{script}:version"),
            version.to_owned(),
        );
    }
    result
}
