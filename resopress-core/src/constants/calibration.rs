//! Reference Calibration Table
//!
//! Frequency-to-pressure segments for the reference transducer batch,
//! taken on the acceptance bench at the reference temperature. The
//! resonator stiffens as pressure falls, so frequency runs *opposite* to
//! pressure: higher oscillator frequency means lower pressure.
//!
//! ```text
//! Frequency (units)   Pressure (mmHg)
//! -------------------------------------
//! 484.8 - 487.8       45.0 -> 37.5
//! 487.8 - 490.2       37.5 -> 30.0
//! 490.2 - 493.8       30.0 -> 22.5
//! 493.8 - 498.8       22.5 -> 15.0
//! 498.8 - 505.0       15.0 ->  7.5
//! 505.0 - 570.0        7.5 ->  0.0
//! ```
//!
//! The table is contiguous (each upper knot is the next segment's lower
//! knot) and monotone, so the mapping is continuous and order-reversing
//! across the whole calibrated span. This is bench *data*, not logic: a
//! deployment with a different transducer batch supplies its own table.

use crate::calibration::Segment;

/// Reference segment table, ascending by lower frequency knot.
pub const REFERENCE_SEGMENTS: [Segment; 6] = [
    Segment::new(484.8, 487.8, 45.0, 37.5),
    Segment::new(487.8, 490.2, 37.5, 30.0),
    Segment::new(490.2, 493.8, 30.0, 22.5),
    Segment::new(493.8, 498.8, 22.5, 15.0),
    Segment::new(498.8, 505.0, 15.0, 7.5),
    Segment::new(505.0, 570.0, 7.5, 0.0),
];
