// ============================================================================
// Decimal Engine Library
// Exact arbitrary-precision decimal arithmetic over textual numbers
// ============================================================================

//! # Decimal Engine
//!
//! Exact, arbitrary-precision decimal arithmetic performed directly on
//! strings: no conversion to fixed-width floating-point or integer types,
//! ever.
//!
//! ## Features
//!
//! - **Grammar validation** for signed decimal strings
//!   (`[+-]?[0-9]+(\.[0-9]+)?`)
//! - **Zero-copy decomposition** into sign, integer and fraction digits
//! - **Schoolbook magnitude arithmetic** with explicit carry/borrow chains
//! - **Exact signed addition and multiplication** with canonical output
//!   (trailing fractional zeros trimmed, never `-0`)
//! - **Pure functions throughout** — no shared state, safe to call from any
//!   number of threads
//!
//! ## Example
//!
//! ```rust
//! use decimal_engine::prelude::*;
//!
//! assert!(is_valid_decimal("-00123.4500"));
//! assert!(!is_valid_decimal("1."));
//!
//! assert_eq!(add_decimals("1.5", "-123.456").unwrap(), "-121.956");
//! assert_eq!(multiply_decimals("2.5", "-123.456").unwrap(), "-308.64");
//!
//! // The typed surface skips re-validation on every call.
//! let a = DecimalStr::new("100")?;
//! let b = DecimalStr::new("-100")?;
//! assert_eq!(add(a, b), "0");
//! # Ok::<(), decimal_engine::numeric::DecimalError>(())
//! ```

pub mod decimal;
pub mod harness;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::decimal::{
        add, add_decimals, decompose, is_valid_decimal, multiply, multiply_decimals, DecimalStr,
        Decomposed, Sign,
    };
    pub use crate::numeric::{
        add_magnitudes, compare_magnitudes, normalize_magnitude, subtract_magnitudes,
        DecimalError, DecimalResult,
    };
}


#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    /// Exact numeric oracle; operands are kept well inside its 28-digit
    /// precision so every comparison is exact.
    fn oracle(s: &str) -> Decimal {
        Decimal::from_str(s).expect("operand fits the oracle's precision")
    }

    fn decimal_text() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[+-]?[0-9]{1,12}(\\.[0-9]{1,6})?").unwrap()
    }

    /// Narrower operands for multiplication, so products stay exact in the
    /// oracle as well.
    fn narrow_decimal_text() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[+-]?[0-9]{1,6}(\\.[0-9]{1,4})?").unwrap()
    }

    proptest! {
        #[test]
        fn generated_strings_validate(s in decimal_text()) {
            prop_assert!(is_valid_decimal(&s));
        }

        #[test]
        fn decomposition_round_trips(s in decimal_text()) {
            let parts = decompose(DecimalStr::new(&s).unwrap());
            let mut rebuilt = String::new();
            if parts.sign.is_negative() {
                rebuilt.push('-');
            }
            rebuilt.push_str(parts.int_part);
            if !parts.frac_part.is_empty() {
                rebuilt.push('.');
                rebuilt.push_str(parts.frac_part);
            }
            prop_assert_eq!(oracle(&rebuilt), oracle(&s));
        }

        #[test]
        fn addition_commutes(a in decimal_text(), b in decimal_text()) {
            prop_assert_eq!(
                add_decimals(&a, &b).unwrap(),
                add_decimals(&b, &a).unwrap()
            );
        }

        #[test]
        fn addition_associates(
            a in decimal_text(),
            b in decimal_text(),
            c in decimal_text(),
        ) {
            // Canonical output means associativity holds as string equality.
            let left = add_decimals(&add_decimals(&a, &b).unwrap(), &c).unwrap();
            let right = add_decimals(&a, &add_decimals(&b, &c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn addition_matches_oracle(a in decimal_text(), b in decimal_text()) {
            let sum = add_decimals(&a, &b).unwrap();
            prop_assert_eq!(oracle(&sum), oracle(&a) + oracle(&b));
        }

        #[test]
        fn additive_identity(a in decimal_text()) {
            let sum = add_decimals(&a, "0").unwrap();
            prop_assert_eq!(oracle(&sum), oracle(&a));
        }

        #[test]
        fn multiplication_commutes(a in narrow_decimal_text(), b in narrow_decimal_text()) {
            prop_assert_eq!(
                multiply_decimals(&a, &b).unwrap(),
                multiply_decimals(&b, &a).unwrap()
            );
        }

        #[test]
        fn multiplication_matches_oracle(
            a in narrow_decimal_text(),
            b in narrow_decimal_text(),
        ) {
            let product = multiply_decimals(&a, &b).unwrap();
            prop_assert_eq!(oracle(&product), oracle(&a) * oracle(&b));
        }

        #[test]
        fn multiplicative_identity_and_zero(a in decimal_text()) {
            prop_assert_eq!(oracle(&multiply_decimals(&a, "1").unwrap()), oracle(&a));
            prop_assert_eq!(multiply_decimals(&a, "0").unwrap(), "0");
        }

        #[test]
        fn results_are_canonical_decimals(a in decimal_text(), b in decimal_text()) {
            let sum = add_decimals(&a, &b).unwrap();
            prop_assert!(is_valid_decimal(&sum));
            // Canonical form survives a second pass untouched.
            prop_assert_eq!(add_decimals(&sum, "0").unwrap(), sum);
        }
    }
}
