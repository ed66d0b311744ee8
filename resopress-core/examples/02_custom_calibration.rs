//! Custom Calibration Table Example
//!
//! The reference table is bench data for one transducer batch; a
//! deployment supplies its own. This example builds a two-segment table,
//! validates it at load time, and shows what extrapolation does beyond
//! the calibrated span.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_custom_calibration
//! ```

use resopress_core::{CalibrationTable, Segment};

fn main() {
    println!("ResoPress Custom Calibration Example");
    println!("====================================\n");

    // A coarser two-segment curve for a hypothetical stiffer diaphragm.
    let table = CalibrationTable::new(vec![
        Segment::new(490.0, 510.0, 30.0, 10.0),
        Segment::new(510.0, 560.0, 10.0, 0.0),
    ])
    .expect("segments are sorted and non-overlapping");

    let (span_lo, span_hi) = table.span().expect("table is not empty");
    println!("Calibrated span: {:.1} - {:.1}", span_lo, span_hi);
    println!("Worst knot jump: {:.3}\n", table.max_knot_discontinuity());

    println!("Inside the span:");
    for freq in [490.0, 500.0, 510.0, 535.0, 560.0] {
        println!("  {:6.1} -> {:6.2} mmHg", freq, table.map(freq).unwrap());
    }

    // Beyond the span the nearest end segment's slope keeps going. Far
    // from the knots that can turn unphysical - a known property of the
    // bench table, reported but not clamped.
    println!("\nExtrapolated (beyond bench data, treat with care):");
    for freq in [485.0, 570.0, 600.0] {
        println!("  {:6.1} -> {:6.2} mmHg", freq, table.map(freq).unwrap());
    }

    // Validation rejects tables that would make mapping ambiguous.
    let overlapping = CalibrationTable::new(vec![
        Segment::new(490.0, 515.0, 30.0, 10.0),
        Segment::new(510.0, 560.0, 10.0, 0.0),
    ]);
    println!("\nOverlapping table rejected: {:?}", overlapping.err());
}
