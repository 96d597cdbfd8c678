// reconcile.rs - Unified column ordering across report headers

use crate::data::Header;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::debug;

/// Strategy used to build the unified column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnOrdering {
    /// Insert each new column right after its predecessor in its own header
    #[default]
    Insertion,
    /// Vote on columns by their index in each header
    Positional,
}

impl FromStr for ColumnOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insertion" | "insert" => Ok(ColumnOrdering::Insertion),
            "positional" | "position" => Ok(ColumnOrdering::Positional),
            _ => Err(format!(
                "Invalid column ordering: {}. Use: insertion, positional",
                s
            )),
        }
    }
}

impl ColumnOrdering {
    pub fn description(&self) -> &str {
        match self {
            ColumnOrdering::Insertion => "insert after nearest known neighbour",
            ColumnOrdering::Positional => "most frequent column per position",
        }
    }
}

/// Deduplicated union of all report headers, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedHeader {
    columns: Vec<String>,
}

impl UnifiedHeader {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

/// Compute the unified column order for a set of headers.
///
/// Pure function of its inputs: the same headers in the same order always
/// produce the same result, and every column appears exactly once.
pub fn reconcile(headers: &[Header], ordering: ColumnOrdering) -> UnifiedHeader {
    let columns = match ordering {
        ColumnOrdering::Insertion => order_by_insertion(headers),
        ColumnOrdering::Positional => order_by_position(headers),
    };
    debug!(
        "Unified header ({}): {} columns from {} headers",
        ordering.description(),
        columns.len(),
        headers.len()
    );
    UnifiedHeader { columns }
}

/// Walk each header in turn. A column not seen before goes immediately after
/// the previous column of the same header, or first when it leads its header.
fn order_by_insertion(headers: &[Header]) -> Vec<String> {
    let mut unified: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for header in headers {
        let mut anchor: Option<usize> = None;
        for name in header.columns() {
            if seen.contains(name.as_str()) {
                anchor = unified.iter().position(|c| c == name);
                continue;
            }

            let at = anchor.map_or(0, |i| i + 1);
            unified.insert(at, name.clone());
            seen.insert(name.as_str());
            anchor = Some(at);
            debug!("Assigned column {} to position {}", name, at);
        }
    }

    unified
}

/// For each column index, take the names found there by descending frequency
/// (first seen wins ties) and append those not yet placed.
fn order_by_position(headers: &[Header]) -> Vec<String> {
    // votes[index] = (name, count) in first-seen order
    let mut votes: Vec<Vec<(&str, usize)>> = Vec::new();

    for header in headers {
        for (index, name) in header.columns().iter().enumerate() {
            let name = name.as_str();
            if votes.len() <= index {
                votes.resize_with(index + 1, Vec::new);
            }
            match votes[index].iter_mut().find(|(n, _)| *n == name) {
                Some((_, count)) => *count += 1,
                None => votes[index].push((name, 1)),
            }
        }
    }

    let mut unified: Vec<String> = Vec::new();
    let mut placed: HashSet<&str> = HashSet::new();

    for mut candidates in votes {
        // stable sort keeps first-seen order among equal counts
        candidates.sort_by(|a, b| b.1.cmp(&a.1));
        for (name, _) in candidates {
            if placed.insert(name) {
                unified.push(name.to_string());
            }
        }
    }

    unified
}
