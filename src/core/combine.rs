// combine.rs - End-to-end merge of report files

use crate::core::merge::{merge_reports, MergeSettings, MergedTable};
use crate::core::reconcile::{reconcile, ColumnOrdering};
use crate::data::{Header, ReaderOptions, Report};
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

/// Load every input in order, reconcile their headers and merge the rows.
///
/// Any failure aborts the whole run; no partial table is returned.
pub fn combine_reports(
    inputs: &[PathBuf],
    reader: &ReaderOptions,
    ordering: ColumnOrdering,
    settings: &MergeSettings,
) -> Result<MergedTable> {
    let reports = inputs
        .iter()
        .map(|path| Report::load(path, reader))
        .collect::<Result<Vec<Report>>>()?;

    let headers: Vec<Header> = reports.iter().map(|r| r.header.clone()).collect();
    let unified = reconcile(&headers, ordering);
    info!(
        "🔗 Unified header: {} columns across {} reports",
        unified.len(),
        reports.len()
    );

    let table = merge_reports(&unified, &reports, settings);
    info!("✅ Merged {} rows", table.rows.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MergeError;
    use std::fs;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn comma() -> ReaderOptions {
        ReaderOptions {
            delimiter: b',',
            ..ReaderOptions::default()
        }
    }

    #[test]
    fn test_combine_example_files() {
        let dir = tempdir().unwrap();
        let inputs = vec![
            write(&dir, "file1.csv", "id,name,amount\n1,Alice,10\n"),
            write(&dir, "file2.csv", "id,amount,note\n2,20,hi\n"),
        ];

        let table = combine_reports(
            &inputs,
            &comma(),
            ColumnOrdering::Insertion,
            &MergeSettings::default(),
        )
        .unwrap();
        assert_eq!(table.header, ["id", "name", "amount", "note"]);
        assert_eq!(table.rows, vec![
            vec!["1", "Alice", "10", "NULL"],
            vec!["2", "NULL", "20", "hi"],
        ]);
    }

    #[test]
    fn test_byte_order_mark_does_not_split_columns() {
        let dir = tempdir().unwrap();
        let inputs = vec![
            write(&dir, "excel.csv", "\u{feff}id,name,amount\n1,Alice,10\n"),
            write(&dir, "plain.csv", "id,amount,note\n2,20,hi\n"),
        ];

        let table = combine_reports(
            &inputs,
            &comma(),
            ColumnOrdering::Insertion,
            &MergeSettings::default(),
        )
        .unwrap();
        assert_eq!(table.header, ["id", "name", "amount", "note"]);
        assert_eq!(table.rows[1], ["2", "NULL", "20", "hi"]);
    }

    #[test]
    fn test_file_name_uses_path_as_given() {
        let dir = tempdir().unwrap();
        let inputs = vec![write(&dir, "only.tsv", "a\tb\n1\t2\n")];
        let settings = MergeSettings {
            include_file_name: true,
            ..MergeSettings::default()
        };

        let table = combine_reports(
            &inputs,
            &ReaderOptions::default(),
            ColumnOrdering::Insertion,
            &settings,
        )
        .unwrap();
        assert_eq!(table.header, ["filename", "a", "b"]);
        assert_eq!(table.rows[0][0], inputs[0].display().to_string());
    }

    #[test]
    fn test_malformed_row_aborts_run() {
        let dir = tempdir().unwrap();
        let inputs = vec![
            write(&dir, "good.csv", "id,name\n1,Alice\n"),
            write(&dir, "bad.csv", "id,name\n2,Bob\n3\n"),
        ];

        let err = combine_reports(
            &inputs,
            &comma(),
            ColumnOrdering::Insertion,
            &MergeSettings::default(),
        )
        .unwrap_err();
        match err {
            MergeError::Parse { path, line, .. } => {
                assert_eq!(path, inputs[1]);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_input_is_file_access_error() {
        let dir = tempdir().unwrap();
        let inputs = vec![dir.path().join("absent.tsv")];
        let err = combine_reports(
            &inputs,
            &ReaderOptions::default(),
            ColumnOrdering::Insertion,
            &MergeSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MergeError::FileAccess { ref path, .. } if path == Path::new(&inputs[0])));
    }

    #[test]
    fn test_empty_report_contributes_nothing() {
        let dir = tempdir().unwrap();
        let inputs = vec![
            write(&dir, "empty.tsv", ""),
            write(&dir, "data.tsv", "a\tb\n1\t2\n"),
        ];
        let table = combine_reports(
            &inputs,
            &ReaderOptions::default(),
            ColumnOrdering::Insertion,
            &MergeSettings::default(),
        )
        .unwrap();
        assert_eq!(table.header, ["a", "b"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_rerun_is_identical() {
        let dir = tempdir().unwrap();
        let inputs = vec![
            write(&dir, "x.tsv", "k\tv\tw\n1\t2\t3\n"),
            write(&dir, "y.tsv", "w\tz\tk\n4\t5\t6\n"),
        ];
        let run = || {
            combine_reports(
                &inputs,
                &ReaderOptions::default(),
                ColumnOrdering::Insertion,
                &MergeSettings::default(),
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }
}
