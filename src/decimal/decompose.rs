// ============================================================================
// Decimal Decomposer
// Splits a validated decimal string into sign, integer and fraction digits
// ============================================================================

use super::validate::DecimalStr;
use crate::numeric::normalize_magnitude;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign of a decimal value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    /// No sign character, a leading `+`, or a zero result
    #[default]
    Positive,
    /// A leading `-` on a non-zero value
    Negative,
}

impl Sign {
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    /// Sign of a product: negative iff exactly one factor is negative.
    #[inline]
    pub fn product(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// A validated decimal string split into its components.
///
/// `int_part` is normalized (no leading zeros, all-zero collapses to `"0"`).
/// `frac_part` is kept verbatim, trailing zeros included, because digit
/// position after the decimal point carries magnitude meaning; it is empty
/// when the source had no fractional part. Both borrow from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Decomposed<'a> {
    pub sign: Sign,
    pub int_part: &'a str,
    pub frac_part: &'a str,
}

/// Split a validated decimal string into sign, integer part and fraction.
///
/// # Example
/// ```
/// use decimal_engine::decimal::{decompose, DecimalStr, Sign};
///
/// let parts = decompose(DecimalStr::new("-00123.4500").unwrap());
/// assert_eq!(parts.sign, Sign::Negative);
/// assert_eq!(parts.int_part, "123");
/// assert_eq!(parts.frac_part, "4500");
/// ```
pub fn decompose(text: DecimalStr<'_>) -> Decomposed<'_> {
    let s = text.as_str();
    let (sign, rest) = match s.as_bytes()[0] {
        b'-' => (Sign::Negative, &s[1..]),
        b'+' => (Sign::Positive, &s[1..]),
        _ => (Sign::Positive, s),
    };

    let (int_raw, frac_part) = match rest.split_once('.') {
        Some((int_raw, frac)) => (int_raw, frac),
        None => (rest, ""),
    };

    Decomposed {
        sign,
        int_part: normalize_magnitude(int_raw),
        frac_part,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(s: &str) -> Decomposed<'_> {
        decompose(DecimalStr::new(s).unwrap())
    }

    #[test]
    fn test_plain_integer() {
        let d = parts("42");
        assert_eq!(d.sign, Sign::Positive);
        assert_eq!(d.int_part, "42");
        assert_eq!(d.frac_part, "");
    }

    #[test]
    fn test_signed_fraction() {
        let d = parts("-00123.4500");
        assert_eq!(d.sign, Sign::Negative);
        assert_eq!(d.int_part, "123");
        assert_eq!(d.frac_part, "4500");
    }

    #[test]
    fn test_explicit_plus() {
        let d = parts("+7.25");
        assert_eq!(d.sign, Sign::Positive);
        assert_eq!(d.int_part, "7");
        assert_eq!(d.frac_part, "25");
    }

    #[test]
    fn test_all_zero_integer_part() {
        let d = parts("000.12");
        assert_eq!(d.int_part, "0");
        assert_eq!(d.frac_part, "12");
    }

    #[test]
    fn test_fraction_kept_verbatim() {
        // "1.20" means twenty hundredths, not two tenths; trailing zeros
        // must survive decomposition.
        let d = parts("1.20");
        assert_eq!(d.frac_part, "20");

        let d = parts("1.020");
        assert_eq!(d.frac_part, "020");
    }

    #[test]
    fn test_sign_product() {
        assert_eq!(Sign::Positive.product(Sign::Positive), Sign::Positive);
        assert_eq!(Sign::Negative.product(Sign::Negative), Sign::Positive);
        assert_eq!(Sign::Positive.product(Sign::Negative), Sign::Negative);
        assert_eq!(Sign::Negative.product(Sign::Positive), Sign::Negative);
    }

    #[test]
    fn test_sign_default() {
        assert_eq!(Sign::default(), Sign::Positive);
    }
}
