// ============================================================================
// Decimal Adder
// Exact signed addition over decimal strings
// ============================================================================

use super::decompose::decompose;
use super::validate::DecimalStr;
use crate::numeric::{
    add_magnitudes, buf_into_string, compare_magnitudes, subtract_magnitudes, DecimalResult,
    DigitBuf,
};
use std::cmp::Ordering;

/// Add two decimal strings, validating both first.
///
/// # Errors
/// Returns `MalformedInput` if either operand fails the decimal grammar.
///
/// # Example
/// ```
/// use decimal_engine::decimal::add_decimals;
///
/// assert_eq!(add_decimals("1.5", "-123.456").unwrap(), "-121.956");
/// ```
pub fn add_decimals(a: &str, b: &str) -> DecimalResult<String> {
    Ok(add(DecimalStr::new(a)?, DecimalStr::new(b)?))
}

/// Add two validated decimal strings.
///
/// Fractional parts are right-padded to a common length (exact, since digit
/// position after the point fixes magnitude), then the operation dispatches
/// on the operand signs: same-sign magnitudes add, differing-sign magnitudes
/// subtract smaller from larger. The result is trimmed of trailing
/// fractional zeros and never reads `-0`.
pub fn add(a: DecimalStr<'_>, b: DecimalStr<'_>) -> String {
    let da = decompose(a);
    let db = decompose(b);

    let frac_len = da.frac_part.len().max(db.frac_part.len());
    let frac_a = pad_fraction(da.frac_part, frac_len);
    let frac_b = pad_fraction(db.frac_part, frac_len);

    let (mut abs_result, negative) = if da.sign == db.sign {
        // Same sign: a carry out of the fractional sum shows up as an extra
        // leading digit, which folds into the integer sum as +1.
        let (frac_sum, carried) = if frac_len > 0 {
            let mut frac_sum = add_magnitudes(&frac_a, &frac_b);
            if frac_sum.len() > frac_len {
                frac_sum.remove(0);
                (frac_sum, true)
            } else {
                (frac_sum, false)
            }
        } else {
            (String::new(), false)
        };

        let mut int_sum = add_magnitudes(da.int_part, db.int_part);
        if carried {
            int_sum = add_magnitudes(&int_sum, "1");
        }
        (assemble(int_sum, &frac_sum, frac_len), da.sign.is_negative())
    } else {
        // Differing signs: integer parts decide which absolute value is
        // larger; the zero-padded fractions break ties (equal length, so
        // lexicographic order equals numeric order).
        let mut cmp = compare_magnitudes(da.int_part, db.int_part);
        if cmp == Ordering::Equal {
            cmp = frac_a.cmp(&frac_b);
        }
        let a_is_larger = cmp != Ordering::Less;

        let (larger, smaller) = if a_is_larger { (&da, &db) } else { (&db, &da) };
        let (larger_frac, smaller_frac) = if a_is_larger {
            (&frac_a, &frac_b)
        } else {
            (&frac_b, &frac_a)
        };

        // The fractional borrow chain runs on its own; a borrow out of the
        // top fractional digit becomes a unit decrement of the integer
        // difference.
        let (frac_diff, borrowed) = subtract_fractions(larger_frac, smaller_frac);
        let mut int_diff = subtract_magnitudes(larger.int_part, smaller.int_part)
            .expect("larger operand has the larger integer part");
        if borrowed {
            int_diff = subtract_magnitudes(&int_diff, "1")
                .expect("fractional borrow implies a non-zero integer difference");
        }
        (
            assemble(int_diff, &frac_diff, frac_len),
            larger.sign.is_negative(),
        )
    };

    trim_fraction(&mut abs_result);
    // Canonical zero carries no sign.
    if negative && abs_result != "0" {
        abs_result.insert(0, '-');
    }
    abs_result
}

/// Right-pad a fractional digit string with zeros to `width`.
fn pad_fraction(frac: &str, width: usize) -> String {
    let mut padded = String::with_capacity(width);
    padded.push_str(frac);
    while padded.len() < width {
        padded.push('0');
    }
    padded
}

/// Subtract equal-length fractional digit strings, returning the difference
/// and whether a borrow propagated out of the most significant digit.
///
/// Precondition: both operands have the same length (the caller pads them).
fn subtract_fractions(larger: &str, smaller: &str) -> (String, bool) {
    debug_assert_eq!(larger.len(), smaller.len());
    let lg = larger.as_bytes();
    let sm = smaller.as_bytes();

    let mut out = DigitBuf::new();
    let mut borrow = 0u8;
    for i in (0..lg.len()).rev() {
        let dl = lg[i] - b'0';
        let ds = sm[i] - b'0';
        if dl < ds + borrow {
            out.push(dl + 10 - ds - borrow + b'0');
            borrow = 1;
        } else {
            out.push(dl - ds - borrow + b'0');
            borrow = 0;
        }
    }
    (buf_into_string(out), borrow == 1)
}

/// Join integer and fraction digits; the fraction is omitted entirely when
/// the common fractional length is zero.
fn assemble(int_part: String, frac_part: &str, frac_len: usize) -> String {
    if frac_len > 0 {
        format!("{int_part}.{frac_part}")
    } else {
        int_part
    }
}

/// Strip trailing fractional zeros, then a now-bare trailing point.
pub(super) fn trim_fraction(text: &mut String) {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
}
