// config.rs - Configuration file support

use crate::error::{MergeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Input/Output
    pub files: Option<Vec<String>>,
    pub output: Option<String>,

    // Parsing
    pub delimiter: Option<String>,
    pub comment_char: Option<String>,
    pub skip_malformed: Option<bool>,

    // Merging
    pub ordering: Option<String>,
    pub na_value: Option<String>,
    pub file_name: Option<bool>,

    // Rendering
    pub output_delimiter: Option<String>,
    pub transpose: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MergeError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            MergeError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        info!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| MergeError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| MergeError::output(path.display().to_string(), e))?;

        info!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r##"# repcombine.toml - Configuration file for repcombine
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Reports to combine when none are given on the command line
files = ["run1/report.tsv", "run2/report.tsv.gz"]

# Write the merged table here instead of stdout
# output = "combined.tsv"

# =============================================================================
# PARSING
# =============================================================================

# Input field delimiter: a single character, \t, tab, comma, pipe, semicolon, space
delimiter = "tab"

# Lines starting with this character are ignored ("none" disables)
comment_char = "#"

# Skip rows whose field count differs from the header instead of failing
skip_malformed = false

# =============================================================================
# MERGING
# =============================================================================

# Column ordering: insertion, positional
ordering = "insertion"

# Marker for values missing from a report
na_value = "NULL"

# Add the source file name as the first column
file_name = false

# =============================================================================
# RENDERING
# =============================================================================

# Output field delimiter (defaults to the input delimiter)
# output_delimiter = "comma"

# Transpose the output
transpose = false
"##
        .to_string()
    }
}
