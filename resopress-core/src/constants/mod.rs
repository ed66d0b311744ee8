//! Constants for ResoPress Core
//!
//! Centralized, documented constants used throughout the processing
//! pipeline. All numeric values live here with their source and rationale;
//! the algorithms never hard-code magic numbers.
//!
//! ## Organization
//!
//! - **Transducer**: sensing-element characteristics (temperature
//!   reference, thermal coefficient, operating band)
//! - **Scan**: adaptive-window defaults (base length, growth policy)
//! - **Calibration**: the reference frequency-to-pressure segment table
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, document purpose, source, and units
//! 3. Calibration tables are *data* - a deployment supplies its own;
//!    the reference table here is a convenience, not a law of the system

/// Transducer characteristics: temperatures, thermal drift, frequency band.
pub mod transducer;

/// Adaptive-window scan defaults: window sizing and growth policy.
pub mod scan;

/// Reference calibration table from the transducer acceptance bench.
pub mod calibration;

// Re-export commonly used constants for convenience
pub use transducer::{
    DEFAULT_TEMP_COEFF_PER_C, OCULAR_REFERENCE_TEMP_C,
    TRANSDUCER_FREQ_MAX, TRANSDUCER_FREQ_MIN,
};

pub use scan::{
    DEFAULT_BASE_WINDOW, DEFAULT_BOTTOM_N, DEFAULT_GROWTH_FACTOR,
    DEFAULT_LOW_PERCENTILE, MAX_WINDOW_FACTOR,
};

pub use calibration::REFERENCE_SEGMENTS;
