//! Core processing engine for ResoPress
//!
//! Converts the oscillator frequency series of a resonant pressure
//! transducer into pressure values: temperature compensation, adaptive
//! sliding-window floor extraction, and piecewise-linear calibration
//! mapping.
//!
//! Key constraints:
//! - Pure computation over in-memory series, no I/O in the core path
//! - `no_std` compatible (with `alloc`) for edge acquisition hardware
//! - One bad window never aborts a run; bad configuration never starts one
//!
//! ```
//! use resopress_core::{AdaptiveWindow, CalibrationTable, PressurePipeline, TemperatureCompensator};
//!
//! let pipeline = PressurePipeline::builder()
//!     .compensator(TemperatureCompensator::ocular(39.2))
//!     .window(AdaptiveWindow::new(300, 3))
//!     .calibration(CalibrationTable::reference())
//!     .build()
//!     .expect("configuration is valid");
//!
//! let samples = vec![505.0_f32; 400];
//! let pressures = pipeline.process(&samples);
//! assert_eq!(pressures.len(), 101);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod calibration;
pub mod compensation;
pub mod constants;
pub mod errors;
pub mod pipeline;
pub mod series;
pub mod traits;
pub mod window;

// Public API
pub use calibration::{CalibrationTable, Segment};
pub use compensation::TemperatureCompensator;
pub use errors::{ProcessingError, ProcessingResult};
pub use pipeline::{PipelineBuilder, PressurePipeline, ProcessingStats};
pub use traits::{Compensation, Measurable};
pub use window::{AdaptiveWindow, ScanStats};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
