//! In-memory popularity-rank database.
//!
//! The POI layer decides a label's minimum zoom from the feature's
//! popularity rank, looked up by wikidata entity id. The whole dataset is
//! parsed once at startup from its gzip-compressed CSV distribution into a
//! primitive-keyed hash map; per-feature queries are pure in-memory reads.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use flate2::read::GzDecoder;
use fnv::FnvHashMap;
use thiserror::Error;

const HEADER: &str = "Entity,QRank";

/// The rank dataset could not be parsed.
///
/// Like bundle errors this is fatal at startup; a half-read rank table
/// would quietly demote labels on every build after.
#[derive(Debug, Error)]
pub enum RankLoadError {
    #[error("error reading rank file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: expected header '{HEADER}'", .path.display())]
    BadHeader { path: PathBuf },
    #[error("{}:{line}: malformed rank row", .path.display())]
    MalformedRow { path: PathBuf, line: usize },
}

/// Entity id to popularity rank, `rank(id) -> integer` for the rest of the
/// build.
#[derive(Clone, Debug, Default)]
pub struct RankDb {
    ranks: FnvHashMap<u64, u64>,
}

impl RankDb {
    /// A database that ranks everything zero.
    pub fn empty() -> RankDb {
        RankDb::default()
    }

    /// Parses the gzip-compressed two-column CSV dataset
    /// (`Entity,QRank` header, then `Q<id>,<rank>` rows).
    pub fn from_csv(path: &Path) -> Result<RankDb, RankLoadError> {
        let io_err = |source| RankLoadError::Io {
            path: path.to_owned(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let reader = BufReader::new(GzDecoder::new(file));
        let mut ranks = FnvHashMap::default();
        let mut lines = reader.lines().enumerate();
        match lines.next() {
            Some((_, Ok(header))) if header.trim_end() == HEADER => {}
            Some((_, Err(source))) => return Err(io_err(source)),
            _ => {
                return Err(RankLoadError::BadHeader {
                    path: path.to_owned(),
                })
            }
        }
        for (ix, line) in lines {
            let line = line.map_err(io_err)?;
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let row = line.split_once(',').and_then(|(entity, rank)| {
                Some((parse_entity_id(entity)?, rank.parse::<u64>().ok()?))
            });
            let Some((id, rank)) = row else {
                return Err(RankLoadError::MalformedRow {
                    path: path.to_owned(),
                    line: ix + 1,
                });
            };
            ranks.insert(id, rank);
        }
        log::info!("loaded {} popularity ranks", ranks.len());
        Ok(RankDb { ranks })
    }

    /// The rank for an entity id; 0 for unknown entities.
    pub fn get(&self, id: u64) -> u64 {
        self.ranks.get(&id).copied().unwrap_or(0)
    }

    /// The rank for a raw `wikidata` tag value.
    ///
    /// Multi-valued tags (`Q64;Q1055`) resolve to their first entry. A
    /// value that does not parse as an entity id ranks 0 — explicitly, via
    /// the typed parse below, not by swallowing an error.
    pub fn get_tag(&self, raw: &str) -> u64 {
        let first = raw.split(';').next().unwrap_or(raw);
        match parse_entity_id(first.trim()) {
            Some(id) => self.get(id),
            None => 0,
        }
    }
}

/// Parses a wikidata entity id of the form `Q<digits>`.
fn parse_entity_id(value: &str) -> Option<u64> {
    value.strip_prefix('Q')?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    fn write_ranks(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("qrank.csv.gz");
        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap();
        path
    }

    #[test]
    fn loads_and_looks_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ranks(dir.path(), "Entity,QRank\nQ64,8212471\nQ1055,4001265\n");
        let db = RankDb::from_csv(&path).unwrap();
        assert_eq!(db.get(64), 8212471);
        assert_eq!(db.get(1055), 4001265);
        assert_eq!(db.get(42), 0);
    }

    #[test]
    fn tag_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ranks(dir.path(), "Entity,QRank\nQ64,8212471\nQ1055,4001265\n");
        let db = RankDb::from_csv(&path).unwrap();
        assert_eq!(db.get_tag("Q64"), 8212471);
        // First entry of a multi-value tag wins.
        assert_eq!(db.get_tag("Q1055;Q64"), 4001265);
        // Malformed values rank zero instead of erroring.
        assert_eq!(db.get_tag(""), 0);
        assert_eq!(db.get_tag("64"), 0);
        assert_eq!(db.get_tag("Qxyz"), 0);
        assert_eq!(db.get_tag("no-entity"), 0);
    }

    #[test]
    fn empty_db_ranks_zero() {
        assert_eq!(RankDb::empty().get(64), 0);
        assert_eq!(RankDb::empty().get_tag("Q64"), 0);
    }

    #[test]
    fn rejects_bad_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ranks(dir.path(), "id,rank\nQ64,1\n");
        assert!(matches!(
            RankDb::from_csv(&path),
            Err(RankLoadError::BadHeader { .. })
        ));
        let path = write_ranks(dir.path(), "Entity,QRank\nQ64\n");
        assert!(matches!(
            RankDb::from_csv(&path),
            Err(RankLoadError::MalformedRow { line: 2, .. })
        ));
        let path = write_ranks(dir.path(), "Entity,QRank\n64,12\n");
        assert!(matches!(
            RankDb::from_csv(&path),
            Err(RankLoadError::MalformedRow { line: 2, .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            RankDb::from_csv(Path::new("/no/such/qrank.csv.gz")),
            Err(RankLoadError::Io { .. })
        ));
    }
}
