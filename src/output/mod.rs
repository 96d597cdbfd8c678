// mod.rs - Output formatters module

use crate::core::MergedTable;
use crate::error::{MergeError, Result};
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Where the merged table goes
const STDOUT: &str = "<stdout>";

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| MergeError::output(file_path, e))?;
    }
    Ok(())
}

/// Swap rows and columns; the header becomes the first column
pub fn transpose(table: &MergedTable) -> Vec<Vec<String>> {
    (0..table.width())
        .map(|col| {
            std::iter::once(&table.header)
                .chain(table.rows.iter())
                .map(|row| row[col].clone())
                .collect()
        })
        .collect()
}

/// Render the table into delimited text, header first
pub fn render_table(table: &MergedTable, delimiter: u8, transposed: bool) -> Result<Vec<u8>> {
    let records: Vec<Vec<String>> = if transposed {
        transpose(table)
    } else {
        std::iter::once(table.header.clone())
            .chain(table.rows.iter().cloned())
            .collect()
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records.iter().filter(|r| !r.is_empty()) {
        writer
            .write_record(record)
            .map_err(|e| MergeError::output(STDOUT, io::Error::other(e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| MergeError::output(STDOUT, e.into_error()))
}

/// Write rendered output to a file, or to stdout when no path is given
pub fn write_output(bytes: &[u8], file_path: Option<&str>) -> Result<()> {
    match file_path {
        Some(path) => {
            ensure_parent_dir(path)?;
            let file = File::create(path).map_err(|e| MergeError::output(path, e))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(bytes)
                .and_then(|_| writer.flush())
                .map_err(|e| MergeError::output(path, e))?;
            info!("✅ Merged table written to: {}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(bytes)
                .and_then(|_| handle.flush())
                .map_err(|e| MergeError::output(STDOUT, e))?;
        }
    }
    Ok(())
}

/// Render and write the merged table in one step
pub fn write_table(
    table: &MergedTable,
    delimiter: u8,
    transposed: bool,
    file_path: Option<&str>,
) -> Result<()> {
    let bytes = render_table(table, delimiter, transposed)?;
    write_output(&bytes, file_path)
}
