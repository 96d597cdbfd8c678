// delimited.rs - Streaming reader for delimited reports

use crate::data::header::{Header, Row};
use crate::error::{MergeError, Result};
use std::io::{self, BufRead, BufReader, Lines, Read};
use std::iter::Enumerate;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How input reports are split into records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    pub delimiter: u8,
    /// Lines starting with this byte are ignored
    pub comment: Option<u8>,
    /// Skip rows whose field count differs from the header instead of failing
    pub skip_malformed: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            comment: Some(b'#'),
            skip_malformed: false,
        }
    }
}

/// Reads the header of a report eagerly and yields its data rows lazily.
///
/// The underlying handle is owned by the reader and released when it is
/// dropped, whether iteration finished, failed, or was abandoned.
pub struct ReportReader<R: Read> {
    path: PathBuf,
    header: Header,
    lines: Enumerate<Lines<BufReader<R>>>,
    delimiter: char,
    comment: Option<u8>,
    skip_malformed: bool,
    skipped: usize,
}

impl ReportReader<Box<dyn Read>> {
    /// Open a report on disk
    pub fn open(path: &Path, options: &ReaderOptions) -> Result<Self> {
        let input = super::open_input(path)?;
        Self::from_reader(path, input, options)
    }
}

impl<R: Read> ReportReader<R> {
    /// Wrap any byte source; `path` is only used in diagnostics
    pub fn from_reader(path: &Path, input: R, options: &ReaderOptions) -> Result<Self> {
        let mut reader = Self {
            path: path.to_path_buf(),
            header: Header::empty(),
            lines: BufReader::new(input).lines().enumerate(),
            delimiter: options.delimiter as char,
            comment: options.comment,
            skip_malformed: options.skip_malformed,
            skipped: 0,
        };
        reader.header = reader.read_header()?;
        Ok(reader)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of malformed rows dropped so far in lenient mode
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn read_header(&mut self) -> Result<Header> {
        if let Some((line, text)) = self.next_content_line()? {
            let columns = text
                .split(self.delimiter)
                .map(|s| s.trim().to_string())
                .collect();
            let header =
                Header::new(columns).map_err(|msg| MergeError::parse(&self.path, line, msg))?;
            debug!(
                "Header of {} at line {}: {} columns",
                self.path.display(),
                line,
                header.len()
            );
            return Ok(header);
        }

        warn!("No header found in {}, skipping it", self.path.display());
        Ok(Header::empty())
    }

    /// Next line that is neither blank nor a comment, with its 1-based number
    fn next_content_line(&mut self) -> Result<Option<(u64, String)>> {
        for (index, text) in self.lines.by_ref() {
            let line = index as u64 + 1;
            let mut text = text.map_err(|e| read_error(&self.path, line, e))?;
            if index == 0 && text.starts_with('\u{feff}') {
                text.remove(0);
            }
            if text.trim().is_empty() {
                if !text.is_empty() {
                    debug!("{}:{}: skipping blank line", self.path.display(), line);
                }
                continue;
            }
            if text.as_bytes().first() == self.comment.as_ref() {
                continue;
            }
            return Ok(Some((line, text)));
        }
        Ok(None)
    }
}

impl<R: Read> Iterator for ReportReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.header.is_empty() {
            return None;
        }

        loop {
            let (line, text) = match self.next_content_line() {
                Ok(Some(content)) => content,
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            };

            let values: Vec<String> = text
                .trim_end_matches('\r')
                .split(self.delimiter)
                .map(String::from)
                .collect();

            if values.len() != self.header.len() {
                let message = format!(
                    "row has {} fields, header has {}",
                    values.len(),
                    self.header.len()
                );
                if self.skip_malformed {
                    warn!("SKIPPING {}:{}: {}", self.path.display(), line, message);
                    self.skipped += 1;
                    continue;
                }
                return Some(Err(MergeError::parse(&self.path, line, message)));
            }

            return Some(Ok(Row { line, values }));
        }
    }
}

/// Undecodable text is a parse problem; anything else is an access problem
fn read_error(path: &Path, line: u64, err: io::Error) -> MergeError {
    if err.kind() == io::ErrorKind::InvalidData {
        MergeError::parse(path, line, format!("unreadable line: {}", err))
    } else {
        MergeError::file_access(path, err)
    }
}
