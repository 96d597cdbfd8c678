// mod.rs - Report loaders module

pub mod delimited;

use crate::error::{MergeError, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use delimited::{ReaderOptions, ReportReader};

/// Open a report for reading, gunzipping `.gz` inputs on the fly
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| MergeError::file_access(path, e))?;

    let gzipped = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    if gzipped {
        Ok(Box::new(MultiGzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}
