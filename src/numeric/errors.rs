// ============================================================================
// Decimal Errors
// Error types for decimal-string arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal-string arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Input string does not match the decimal grammar
    MalformedInput,
    /// Magnitude subtraction called with minuend smaller than subtrahend
    MagnitudeUnderflow,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::MalformedInput => {
                write!(f, "malformed input: not a valid signed decimal string")
            },
            DecimalError::MagnitudeUnderflow => {
                write!(f, "magnitude underflow: subtrahend exceeds minuend")
            },
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
