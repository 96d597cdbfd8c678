// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::{ColumnOrdering, MergeSettings, DEFAULT_NULL_MARKER};
use crate::data::ReaderOptions;
use crate::error::{MergeError, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Everything a merge run needs, checked and typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub inputs: Vec<PathBuf>,
    pub reader: ReaderOptions,
    pub ordering: ColumnOrdering,
    pub settings: MergeSettings,
    pub output_delimiter: u8,
    pub transpose: bool,
    pub output: Option<String>,
}

/// Validate all command line arguments. Runs before any report is read.
pub fn validate_args(args: &Args) -> Result<MergeOptions> {
    if args.files.is_empty() {
        return Err(MergeError::config(
            "Must provide files to operate on. Usage: repcombine [options] file1.txt [file2.txt ...]",
        ));
    }

    // Delimiters
    let delimiter = match &args.delimiter {
        Some(value) => parse_delimiter(value)
            .map_err(|e| MergeError::config(format!("Invalid --delimiter: {}", e)))?,
        None => b'\t',
    };
    let output_delimiter = match &args.output_delimiter {
        Some(value) => parse_delimiter(value)
            .map_err(|e| MergeError::config(format!("Invalid --output-delimiter: {}", e)))?,
        None => delimiter,
    };

    // Comment lines
    let comment = match &args.comment_char {
        Some(value) => parse_comment_char(value)
            .map_err(|e| MergeError::config(format!("Invalid --comment-char: {}", e)))?,
        None => Some(b'#'),
    };
    if comment == Some(delimiter) {
        return Err(MergeError::config(format!(
            "--comment-char and --delimiter are both '{}'",
            delimiter as char
        )));
    }

    // NULL marker must survive the output format unchanged
    let null_marker = args
        .na_value
        .clone()
        .unwrap_or_else(|| DEFAULT_NULL_MARKER.to_string());
    if null_marker.contains(['\n', '\r']) {
        return Err(MergeError::config("--na-value must not contain line breaks"));
    }
    if null_marker.as_bytes().contains(&output_delimiter) {
        return Err(MergeError::config(format!(
            "--na-value '{}' contains the output delimiter",
            null_marker
        )));
    }

    let ordering = match &args.ordering {
        Some(value) => ColumnOrdering::from_str(value).map_err(MergeError::config)?,
        None => ColumnOrdering::default(),
    };

    // Inputs must exist before anything is read
    let inputs: Vec<PathBuf> = args.files.iter().map(PathBuf::from).collect();
    for path in &inputs {
        let metadata = fs::metadata(path).map_err(|e| MergeError::file_access(path, e))?;
        if !metadata.is_file() {
            return Err(MergeError::file_access(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }
    }

    if let Some(output) = &args.output {
        if inputs.iter().any(|p| p.as_os_str() == output.as_str()) {
            return Err(MergeError::config(format!(
                "--output '{}' would overwrite one of the input files",
                output
            )));
        }
    }

    debug!(
        "Validated {} inputs, delimiter {:?}, output delimiter {:?}, ordering {:?}",
        inputs.len(),
        delimiter as char,
        output_delimiter as char,
        ordering
    );

    Ok(MergeOptions {
        inputs,
        reader: ReaderOptions {
            delimiter,
            comment,
            skip_malformed: args.skip_malformed,
        },
        ordering,
        settings: MergeSettings {
            null_marker,
            include_file_name: args.file_name,
        },
        output_delimiter,
        transpose: args.transpose,
        output: args.output.clone(),
    })
}

/// Parse a delimiter given as a single ASCII character or a well-known name
pub fn parse_delimiter(value: &str) -> std::result::Result<u8, String> {
    let byte = match value.to_lowercase().as_str() {
        "\\t" | "tab" => b'\t',
        "comma" => b',',
        "pipe" => b'|',
        "semicolon" => b';',
        "space" => b' ',
        _ => single_ascii(value)?,
    };

    if byte == b'\n' || byte == b'\r' {
        return Err("line breaks cannot be used as a delimiter".to_string());
    }
    Ok(byte)
}

/// Parse the comment character; "none" or an empty value disables comments
pub fn parse_comment_char(value: &str) -> std::result::Result<Option<u8>, String> {
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    single_ascii(value).map(Some)
}

fn single_ascii(value: &str) -> std::result::Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        (Some(c), None) => Err(format!("'{}' is not an ASCII character", c)),
        _ => Err(format!("expected a single character, got '{}'", value)),
    }
}
