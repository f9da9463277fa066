//! Reads the dataset into a per-year index of unique locations.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::parser::{extract_fact, is_candidate};

/// Year text mapped to the unique locations filmed that year.
///
/// Set semantics: duplicate location strings under one year collapse.
/// `BTreeSet` keeps iteration deterministic; order is otherwise
/// irrelevant. Built once per read and not modified afterward.
pub type FactIndex = HashMap<String, BTreeSet<String>>;

/// Read a dataset file and group its records by release year.
///
/// An unreadable path degrades to an empty index plus a diagnostic; bad
/// lines (undecodable bytes, non-candidate lines, malformed records) are
/// skipped without aborting the read.
pub fn read_dataset(path: &Path) -> FactIndex {
    let mut index = FactIndex::new();

    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "dataset unreadable");
            println!("Error: invalid dataset path");
            return index;
        }
    };

    let mut skipped = 0usize;
    for raw_line in raw.split(|byte| *byte == b'\n') {
        // Each line decodes independently; one bad stretch of bytes must
        // not lose the rest of the file.
        let Ok(line) = std::str::from_utf8(raw_line) else {
            skipped += 1;
            continue;
        };

        if !is_candidate(line) {
            continue;
        }

        match extract_fact(line) {
            Ok(fact) => {
                index.entry(fact.year).or_default().insert(fact.location);
            }
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(path = %path.display(), skipped, "skipped undecodable or malformed lines");
    }

    index
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_dataset(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn groups_unique_locations_by_year() {
        let file = write_dataset(
            b"\"A\" (2011)\tBoston, Massachusetts, USA\n\
              \"B\" (2011)\tKiev, Ukraine\n\
              \"C\" (2011)\tBoston, Massachusetts, USA\n\
              \"D\" (2010)\tParis, France\n",
        );

        let index = read_dataset(file.path());
        assert_eq!(index.len(), 2);
        assert_eq!(index["2011"].len(), 2);
        assert!(index["2011"].contains("Boston, Massachusetts, USA"));
        assert!(index["2011"].contains("Kiev, Ukraine"));
        assert_eq!(index["2010"].len(), 1);
    }

    #[test]
    fn non_candidate_lines_are_skipped() {
        let file = write_dataset(
            b"LOCATIONS LIST\n\
              ==============\n\
              \"A\" (2011)\tKiev, Ukraine\n\
              CRC: 0x70EE9D6C\n",
        );

        let index = read_dataset(file.path());
        assert_eq!(index.len(), 1);
        assert_eq!(index["2011"].len(), 1);
    }

    #[test]
    fn undecodable_lines_are_skipped() {
        let file = write_dataset(
            b"\"A\" (2011)\tKiev, Ukraine\n\
              \"B\" (2011)\t\xff\xfe broken\n\
              \"C\" (2011)\tParis, France\n",
        );

        let index = read_dataset(file.path());
        assert_eq!(index["2011"].len(), 2);
    }

    #[test]
    fn malformed_candidates_are_skipped() {
        let file = write_dataset(
            b"\"no year marker\"\n\
              \"A\" (2011)\tKiev, Ukraine\n",
        );

        let index = read_dataset(file.path());
        assert_eq!(index["2011"].len(), 1);
    }

    #[test]
    fn missing_path_yields_an_empty_index() {
        let index = read_dataset(Path::new("/nonexistent/locations.list"));
        assert!(index.is_empty());
    }
}
