// ============================================================================
// Numeric Module
// Unsigned big-integer arithmetic over base-10 digit strings
// ============================================================================
//
// This module provides:
// - add/subtract/compare over digit-string magnitudes
// - normalize_magnitude: canonical leading-zero stripping
// - DecimalError: error types shared by the whole crate
//
// Design principles:
// - No conversion to fixed-width numeric types, ever
// - All fallible operations return Result (no panics)
// - Digit buffers live on the stack for typical operand sizes

mod errors;
mod magnitude;

pub use errors::{DecimalError, DecimalResult};
pub use magnitude::{
    add_magnitudes, compare_magnitudes, normalize_magnitude, subtract_magnitudes,
};

pub(crate) use magnitude::{buf_into_string, DigitBuf};
