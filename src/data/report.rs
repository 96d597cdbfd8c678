// report.rs - A fully loaded input report

use crate::data::header::{Header, Row};
use crate::data::loaders::{ReaderOptions, ReportReader};
use crate::error::Result;
use std::path::Path;
use tracing::{info, warn};

/// One parsed input file: its display name, header and data rows
#[derive(Debug, Clone)]
pub struct Report {
    /// Path as given on the command line, used for the `filename` column
    pub name: String,
    pub header: Header,
    pub rows: Vec<Row>,
}

impl Report {
    /// Read a report from disk. The file handle is closed before returning,
    /// on success and on error alike.
    pub fn load(path: &Path, options: &ReaderOptions) -> Result<Self> {
        let mut reader = ReportReader::open(path, options)?;
        let header = reader.header().clone();
        let rows = reader.by_ref().collect::<Result<Vec<Row>>>()?;

        if reader.skipped() > 0 {
            warn!(
                "{}: skipped {} malformed rows",
                reader.path().display(),
                reader.skipped()
            );
        }
        info!(
            "📄 Loaded {}: {} columns, {} rows",
            reader.path().display(),
            header.len(),
            rows.len()
        );

        Ok(Self {
            name: path.display().to_string(),
            header,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MergeError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.tsv");
        fs::write(&path, "id\tname\n1\tAlice\n").unwrap();

        let report = Report::load(&path, &ReaderOptions::default()).unwrap();
        assert_eq!(report.name, path.display().to_string());
        assert_eq!(report.header.columns(), ["id", "name"]);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].values, ["1", "Alice"]);
        assert_eq!(report.rows[0].line, 2);
    }

    #[test]
    fn test_load_gzipped() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempdir().unwrap();
        let path = dir.path().join("a.tsv.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"id\tname\n1\tAlice\n").unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();

        let report = Report::load(&path, &ReaderOptions::default()).unwrap();
        assert_eq!(report.header.columns(), ["id", "name"]);
        assert_eq!(report.rows[0].values, ["1", "Alice"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = Report::load(&dir.path().join("nope.tsv"), &ReaderOptions::default())
            .unwrap_err();
        assert!(matches!(err, MergeError::FileAccess { .. }));
    }
}
