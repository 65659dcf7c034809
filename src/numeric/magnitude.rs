// ============================================================================
// Magnitude Arithmetic
// Schoolbook add/subtract/compare over base-10 digit strings
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Working buffer for digit-by-digit arithmetic.
///
/// Digits are accumulated least-significant first and reversed into place at
/// the end. Operands up to 32 digits never touch the heap.
pub(crate) type DigitBuf = SmallVec<[u8; 32]>;

/// True if every byte of `s` is an ASCII digit.
#[inline]
pub(crate) fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn buf_into_string(mut buf: DigitBuf) -> String {
    buf.reverse();
    String::from_utf8(buf.into_vec()).expect("digit buffer holds ASCII digits")
}

/// Strip leading zeros from a digit string.
///
/// Returns a subslice of the input; an all-zero or empty input collapses to
/// `"0"`.
///
/// # Example
/// ```
/// use decimal_engine::numeric::normalize_magnitude;
///
/// assert_eq!(normalize_magnitude("00735"), "735");
/// assert_eq!(normalize_magnitude("0000"), "0");
/// ```
#[inline]
pub fn normalize_magnitude(digits: &str) -> &str {
    debug_assert!(is_digits(digits));
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// Add two non-negative digit strings.
///
/// Schoolbook addition from the least-significant digit with leftward carry
/// propagation. The sum is returned raw: no leading-zero stripping is
/// performed here, and a final carry extends the result by one digit.
/// Callers that need the canonical form normalize afterwards.
///
/// An empty operand contributes nothing; two empty operands yield an empty
/// sum.
pub fn add_magnitudes(a: &str, b: &str) -> String {
    debug_assert!(is_digits(a) && is_digits(b));
    let a = a.as_bytes();
    let b = b.as_bytes();

    let mut out = DigitBuf::new();
    let mut i = a.len();
    let mut j = b.len();
    let mut carry = 0u8;
    while i > 0 || j > 0 || carry > 0 {
        let da = if i > 0 {
            i -= 1;
            a[i] - b'0'
        } else {
            0
        };
        let db = if j > 0 {
            j -= 1;
            b[j] - b'0'
        } else {
            0
        };
        let sum = da + db + carry;
        carry = sum / 10;
        out.push(sum % 10 + b'0');
    }
    buf_into_string(out)
}

/// Subtract digit string `b` from digit string `a`.
///
/// Schoolbook subtraction with borrow propagation; the difference is
/// normalized (leading zeros stripped, all-zero collapses to `"0"`).
///
/// # Errors
/// Returns `MagnitudeUnderflow` if `a` denotes a smaller magnitude than `b`.
pub fn subtract_magnitudes(a: &str, b: &str) -> DecimalResult<String> {
    debug_assert!(is_digits(a) && is_digits(b));
    if compare_magnitudes(a, b) == Ordering::Less {
        return Err(DecimalError::MagnitudeUnderflow);
    }
    let a = a.as_bytes();
    let b = b.as_bytes();

    // The minuend is at least as long in digits once the magnitudes compare,
    // so iterating over its length covers every position.
    let mut out = DigitBuf::new();
    let mut j = b.len();
    let mut borrow = 0u8;
    for i in (0..a.len()).rev() {
        let da = a[i] - b'0';
        let db = if j > 0 {
            j -= 1;
            b[j] - b'0'
        } else {
            0
        };
        let diff = if da < db + borrow {
            let d = da + 10 - db - borrow;
            borrow = 1;
            d
        } else {
            let d = da - db - borrow;
            borrow = 0;
            d
        };
        out.push(diff + b'0');
    }
    Ok(normalize_magnitude(&buf_into_string(out)).to_owned())
}

/// Compare two digit strings as magnitudes.
///
/// Both operands are normalized first; a shorter normalized string is the
/// smaller magnitude, and equal lengths compare lexicographically (valid
/// because normalized digit strings carry no leading zeros, so lexicographic
/// order equals numeric order).
pub fn compare_magnitudes(a: &str, b: &str) -> Ordering {
    let a = normalize_magnitude(a);
    let b = normalize_magnitude(b);
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}
