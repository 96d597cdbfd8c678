// mod.rs - Data structures module

pub mod header;
pub mod loaders;
pub mod report;

// Re-export main types for convenience
pub use header::{Header, Row};
pub use loaders::{ReaderOptions, ReportReader};
pub use report::Report;
