// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::error::Result;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.files.is_empty() {
            self.files = config.files.unwrap_or_default();
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Parsing
        if self.delimiter.is_none() {
            self.delimiter = config.delimiter;
        }
        if self.comment_char.is_none() {
            self.comment_char = config.comment_char;
        }

        // Merging
        if self.ordering.is_none() {
            self.ordering = config.ordering;
        }
        if self.na_value.is_none() {
            self.na_value = config.na_value;
        }

        // Rendering
        if self.output_delimiter.is_none() {
            self.output_delimiter = config.output_delimiter;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.skip_malformed && config.skip_malformed.unwrap_or(false) {
            self.skip_malformed = true;
        }
        if !self.file_name && config.file_name.unwrap_or(false) {
            self.file_name = true;
        }
        if !self.transpose && config.transpose.unwrap_or(false) {
            self.transpose = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

/// Settings a run would use, in configuration file form
impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            files: (!args.files.is_empty()).then(|| args.files.clone()),
            output: args.output.clone(),
            delimiter: args.delimiter.clone(),
            comment_char: args.comment_char.clone(),
            skip_malformed: Some(args.skip_malformed),
            ordering: args.ordering.clone(),
            na_value: args.na_value.clone(),
            file_name: Some(args.file_name),
            output_delimiter: args.output_delimiter.clone(),
            transpose: Some(args.transpose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_fills_unset_values() {
        let config = Config {
            files: Some(vec!["a.tsv".to_string(), "b.tsv".to_string()]),
            delimiter: Some("comma".to_string()),
            file_name: Some(true),
            ..Config::new()
        };

        let args = Args::default().merge_with_config(config);
        assert_eq!(args.files, ["a.tsv", "b.tsv"]);
        assert_eq!(args.delimiter.as_deref(), Some("comma"));
        assert!(args.file_name);
        assert!(!args.transpose);
    }

    #[test]
    fn test_cli_values_win() {
        let args = Args {
            files: vec!["cli.tsv".to_string()],
            delimiter: Some("pipe".to_string()),
            na_value: Some("-".to_string()),
            ..Args::default()
        };
        let config = Config {
            files: Some(vec!["config.tsv".to_string()]),
            delimiter: Some("comma".to_string()),
            na_value: Some("NA".to_string()),
            ordering: Some("positional".to_string()),
            ..Config::new()
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.files, ["cli.tsv"]);
        assert_eq!(merged.delimiter.as_deref(), Some("pipe"));
        assert_eq!(merged.na_value.as_deref(), Some("-"));
        assert_eq!(merged.ordering.as_deref(), Some("positional"));
    }

    #[test]
    fn test_config_cannot_clear_cli_switch() {
        let args = Args {
            transpose: true,
            ..Args::default()
        };
        let config = Config {
            transpose: Some(false),
            ..Config::new()
        };
        assert!(args.merge_with_config(config).transpose);
    }

    #[test]
    fn test_saved_config_reproduces_args() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.toml");
        let args = Args {
            files: vec!["a.tsv".to_string(), "b.tsv".to_string()],
            delimiter: Some("comma".to_string()),
            na_value: Some("NA".to_string()),
            transpose: true,
            ..Args::default()
        };

        Config::from(&args).to_file(&path).unwrap();
        let restored = Args::default().with_config_file(&path.display().to_string()).unwrap();
        assert_eq!(restored.files, args.files);
        assert_eq!(restored.delimiter, args.delimiter);
        assert_eq!(restored.na_value, args.na_value);
        assert!(restored.transpose);
        assert!(!restored.file_name);
        assert!(restored.output.is_none());
    }
}
