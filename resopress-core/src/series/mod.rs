//! Sample series input
//!
//! The pipeline core consumes plain `&[f32]` slices and does not care
//! where they come from. This module holds the input collaborators that
//! ship with the crate:
//!
//! - `file` - column reader for delimited text exports (requires the
//!   `series-file` feature, which implies `std`)
//!
//! Acquisition hardware, spreadsheets, and databases all reduce to "hand
//! the pipeline a numeric column"; anything not covered here can stay
//! entirely outside the crate.

#[cfg(feature = "series-file")]
pub mod file;

#[cfg(feature = "series-file")]
pub use file::{ColumnReader, SeriesError, SeriesStats};
