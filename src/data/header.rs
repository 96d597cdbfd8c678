// header.rs - Header and row data structures for a single report

use std::collections::HashSet;

/// Ordered column names of one input report. Names are unique within a header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    /// Build a header, rejecting duplicate column names
    pub fn new(columns: Vec<String>) -> Result<Self, String> {
        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(format!("duplicate column '{}' in header", name));
            }
        }
        Ok(Self { columns })
    }

    /// Header of a report that had no header line
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of a column in this header
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }
}

/// One data row of a report. Values line up with the report's [`Header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Physical 1-based line number in the source file
    pub line: u64,
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_rejects_duplicates() {
        let err = Header::new(names(&["id", "name", "id"])).unwrap_err();
        assert!(err.contains("'id'"));
    }

    #[test]
    fn test_header_lookup() {
        let header = Header::new(names(&["id", "name", "amount"])).unwrap();
        assert_eq!(header.len(), 3);
        assert_eq!(header.position("amount"), Some(2));
        assert!(header.contains("name"));
        assert!(!header.contains("note"));
        assert!(Header::empty().is_empty());
    }
}
