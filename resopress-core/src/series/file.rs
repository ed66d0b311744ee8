//! Column reader for delimited text files
//!
//! Recordings arrive as spreadsheet exports: one row per sample, the
//! oscillator frequency in one column. This reader pulls a single numeric
//! column out of such a file, line by line.
//!
//! ## Parse-error policy
//!
//! A malformed row is counted and skipped, never fatal - a stray footer
//! or a hand-edited cell must not discard an entire recording. Callers
//! that care can inspect [`SeriesStats::parse_errors`] after reading.
//! I/O failures, by contrast, abort the read.
//!
//! ## Example
//!
//! ```rust,no_run
//! use resopress_core::series::ColumnReader;
//!
//! let mut reader = ColumnReader::new()
//!     .with_column(1)      // frequency lives in the second column
//!     .with_skip_lines(1); // header row
//! let samples = reader.read_all("recording.csv")?;
//! println!("{} samples, {} bad rows", samples.len(), reader.stats().parse_errors);
//! # Ok::<(), resopress_core::series::SeriesError>(())
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Errors that can occur while reading a series file
#[derive(Debug)]
pub enum SeriesError {
    /// Underlying I/O failure
    Io(std::io::Error),
    /// File structure problem independent of any single row
    Format(&'static str),
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Format(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl std::error::Error for SeriesError {}

impl From<std::io::Error> for SeriesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Statistics for a series read
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStats {
    /// Total lines seen, including skipped and malformed ones
    pub lines_processed: usize,
    /// Values parsed successfully
    pub values_read: usize,
    /// Rows counted and skipped as malformed
    pub parse_errors: usize,
}

/// Single-column numeric reader for delimited text files
pub struct ColumnReader {
    /// Zero-based column index to extract
    column: usize,
    /// Field delimiter
    delimiter: char,
    /// Leading lines to skip (headers)
    skip_lines: usize,
    /// Statistics, accumulated across reads
    stats: SeriesStats,
}

impl ColumnReader {
    /// Create a reader for the second column of a comma-separated file
    ///
    /// The default matches the standard recording layout: timestamp in
    /// column 0, frequency in column 1.
    pub fn new() -> Self {
        Self {
            column: 1,
            delimiter: ',',
            skip_lines: 0,
            stats: SeriesStats::default(),
        }
    }

    /// Select the zero-based column to extract
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Skip the first N lines (useful for headers)
    pub fn with_skip_lines(mut self, lines: usize) -> Self {
        self.skip_lines = lines;
        self
    }

    /// Get statistics
    pub fn stats(&self) -> &SeriesStats {
        &self.stats
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = SeriesStats::default();
    }

    /// Read the whole column from `path`, in file order
    ///
    /// Blank lines and `#` comment lines are ignored; malformed rows are
    /// counted in the statistics and skipped.
    pub fn read_all<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<f32>, SeriesError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut values = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            self.stats.lines_processed += 1;

            if line_no < self.skip_lines {
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let field = trimmed.split(self.delimiter).nth(self.column);
            match field.and_then(|f| f.trim().parse::<f32>().ok()) {
                Some(value) => {
                    values.push(value);
                    self.stats.values_read += 1;
                }
                None => {
                    self.stats.parse_errors += 1;
                }
            }
        }

        Ok(values)
    }
}

impl Default for ColumnReader {
    fn default() -> Self {
        Self::new()
    }
}
