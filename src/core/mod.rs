// mod.rs - Core logic module

pub mod combine;
pub mod merge;
pub mod reconcile;

// Re-export main types for convenience
pub use combine::combine_reports;
pub use merge::{merge_reports, MergeSettings, MergedRow, MergedTable, Projection};
pub use merge::{DEFAULT_NULL_MARKER, FILE_NAME_COLUMN};
pub use reconcile::{reconcile, ColumnOrdering, UnifiedHeader};
