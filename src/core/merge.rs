// merge.rs - Projection of report rows onto the unified header

use crate::core::reconcile::UnifiedHeader;
use crate::data::{Header, Report, Row};
use tracing::{debug, warn};

/// Name of the synthetic column holding the source file
pub const FILE_NAME_COLUMN: &str = "filename";

/// Default marker for values a report does not have
pub const DEFAULT_NULL_MARKER: &str = "NULL";

/// A row re-projected onto the output header
pub type MergedRow = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSettings {
    pub null_marker: String,
    /// Prepend the `filename` column
    pub include_file_name: bool,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            null_marker: DEFAULT_NULL_MARKER.to_string(),
            include_file_name: false,
        }
    }
}

/// Final merged output: header row plus data rows, all of equal width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTable {
    pub header: Vec<String>,
    pub rows: Vec<MergedRow>,
}

impl MergedTable {
    pub fn width(&self) -> usize {
        self.header.len()
    }
}

/// Maps every unified column to its index in one report's header, if any
#[derive(Debug, Clone)]
pub struct Projection {
    sources: Vec<Option<usize>>,
}

impl Projection {
    pub fn new(unified: &UnifiedHeader, header: &Header) -> Self {
        Self {
            sources: unified.iter().map(|name| header.position(name)).collect(),
        }
    }

    /// Number of unified columns this report cannot fill
    pub fn missing(&self) -> usize {
        self.sources.iter().filter(|s| s.is_none()).count()
    }

    /// Re-project one row, optionally prefixed with its file name
    pub fn apply(&self, row: &Row, file_name: Option<&str>, null_marker: &str) -> MergedRow {
        let mut merged = Vec::with_capacity(self.sources.len() + 1);
        if let Some(name) = file_name {
            merged.push(name.to_string());
        }
        for source in &self.sources {
            let value = source
                .and_then(|i| row.values.get(i))
                .map_or(null_marker, String::as_str);
            merged.push(value.to_string());
        }
        merged
    }
}

/// Project every report onto the unified header, in report order and then
/// row order.
pub fn merge_reports(
    unified: &UnifiedHeader,
    reports: &[Report],
    settings: &MergeSettings,
) -> MergedTable {
    let mut header = Vec::with_capacity(unified.len() + 1);
    if settings.include_file_name {
        if reports.iter().any(|r| r.header.contains(FILE_NAME_COLUMN)) {
            warn!(
                "Input already has a '{}' column; the synthetic one is added in front of it",
                FILE_NAME_COLUMN
            );
        }
        header.push(FILE_NAME_COLUMN.to_string());
    }
    header.extend(unified.columns().iter().cloned());

    let mut rows = Vec::with_capacity(reports.iter().map(|r| r.rows.len()).sum());
    for report in reports {
        let projection = Projection::new(unified, &report.header);
        debug!(
            "{}: {} rows, {} columns filled with '{}'",
            report.name,
            report.rows.len(),
            projection.missing(),
            settings.null_marker
        );

        let file_name = settings.include_file_name.then_some(report.name.as_str());
        rows.extend(
            report
                .rows
                .iter()
                .map(|row| projection.apply(row, file_name, &settings.null_marker)),
        );
    }

    MergedTable { header, rows }
}
