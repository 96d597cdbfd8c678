// lib.rs - repcombine library root

//! # repcombine - Combine delimited reports with overlapping column headers
//!
//! Reports produced by different runs of a pipeline often share most, but not
//! all, of their columns, and not always in the same order. This library reads
//! such reports, computes one column order that respects each report's own
//! order as far as possible, and re-projects every row onto it, filling the
//! gaps with a NULL marker.
//!
//! ## Features
//!
//! - **Header reconciliation**: insertion-after-neighbour ordering, or a
//!   positional vote across reports
//! - **Flexible input**: any single-byte delimiter, comment and blank lines
//!   skipped, `.gz` reports read transparently
//! - **Provenance**: optional `filename` column naming each row's source
//! - **All-or-nothing output**: nothing is written unless every report parsed
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use repcombine::prelude::*;
//! use std::path::PathBuf;
//!
//! let inputs = vec![PathBuf::from("run1.tsv"), PathBuf::from("run2.tsv")];
//! let table = combine_reports(
//!     &inputs,
//!     &ReaderOptions::default(),
//!     ColumnOrdering::Insertion,
//!     &MergeSettings::default(),
//! )?;
//! write_table(&table, b'\t', false, None)?;
//! # Ok::<(), MergeError>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, MergeOptions};
    pub use crate::core::{combine_reports, merge_reports, reconcile};
    pub use crate::core::{ColumnOrdering, MergeSettings, MergedTable, UnifiedHeader};
    pub use crate::data::{Header, ReaderOptions, Report, ReportReader, Row};
    pub use crate::error::{MergeError, Result};
    pub use crate::output::write_table;
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, MergeOptions};
pub use crate::core::{ColumnOrdering, MergeSettings, MergedTable, UnifiedHeader};
pub use crate::data::{Header, Report, Row};
pub use crate::error::{MergeError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "repcombine v{} - Combine delimited reports with overlapping headers",
        VERSION
    )
}

/// Run a validated merge: read every report, then write the merged table.
///
/// Output is produced only once the whole table has been built and rendered.
pub fn run_merge(options: &MergeOptions) -> Result<()> {
    let table = crate::core::combine_reports(
        &options.inputs,
        &options.reader,
        options.ordering,
        &options.settings,
    )?;
    crate::output::write_table(
        &table,
        options.output_delimiter,
        options.transpose,
        options.output.as_deref(),
    )
}
