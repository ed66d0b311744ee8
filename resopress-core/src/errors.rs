//! Error Types for Frequency-to-Pressure Processing
//!
//! ## Design Philosophy
//!
//! ResoPress distinguishes two kinds of failure, and the distinction drives
//! the whole error design:
//!
//! 1. **Configuration errors are fatal.** A growth factor that cannot grow,
//!    a zero-length window, or a malformed calibration table would poison
//!    every element of the output, so they are rejected *before* any sample
//!    is processed. These surface as [`ProcessingError`] from constructors
//!    and builders.
//!
//! 2. **Per-element absence is not an error.** A start index too close to
//!    the end of the series, or a window that never accumulates enough low
//!    points, yields "no value" for that element and the element is simply
//!    omitted from the output sequence. One bad window must not abort a
//!    whole run. Absence is modeled as `Option`, never as `Err`.
//!
//! Errors are kept small (`Copy`, inline `&'static str` payloads, no heap)
//! so they can be returned from hot paths and stored cheaply - the same
//! constraints that shaped the rest of the crate's `no_std` surface.

use thiserror_no_std::Error;

/// Result type for processing operations
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Processing errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProcessingError {
    /// Configuration rejected before processing began
    #[error("Invalid configuration: {parameter}: {reason}")]
    InvalidConfig {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Calibration segment table is empty - no mapping is possible
    #[error("No calibration data")]
    NoCalibration,

    /// Not enough samples for the requested operation
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum number of samples needed
        required: usize,
        /// Actual number of samples available
        available: usize,
    },

    /// Value makes no numeric sense (NaN, infinity)
    #[error("Invalid value: not a finite number")]
    InvalidValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ProcessingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidConfig { parameter, reason } =>
                defmt::write!(fmt, "Invalid config: {}: {}", parameter, reason),
            Self::NoCalibration =>
                defmt::write!(fmt, "No calibration data"),
            Self::InsufficientData { required, available } =>
                defmt::write!(fmt, "Need {} samples, have {}", required, available),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}
