// error.rs - Error taxonomy for the merge pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Everything that can abort a merge run. All variants are fatal.
#[derive(Error, Debug)]
pub enum MergeError {
    /// Input path missing or unreadable
    #[error("cannot read '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed content in an input report
    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Invalid option or conflicting options, detected before any input is read
    #[error("configuration error: {0}")]
    Config(String),

    /// Destination could not be written
    #[error("failed to write output '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl MergeError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn output(path: impl Into<String>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_file_and_line() {
        let err = MergeError::parse("reports/a.tsv", 7, "row has 2 fields, header has 3");
        assert_eq!(
            err.to_string(),
            "reports/a.tsv:7: row has 2 fields, header has 3"
        );
    }

    #[test]
    fn test_file_access_error_names_path() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = MergeError::file_access("missing.tsv", io_err);
        let msg = err.to_string();
        assert!(msg.contains("missing.tsv"));
        assert!(msg.contains("no such file"));
    }
}
