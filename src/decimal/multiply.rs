// ============================================================================
// Decimal Multiplier
// Exact signed multiplication via grade-school long multiplication
// ============================================================================

use super::add::trim_fraction;
use super::decompose::decompose;
use super::validate::DecimalStr;
use crate::numeric::{normalize_magnitude, DecimalResult, DigitBuf};

/// Multiply two decimal strings, validating both first.
///
/// # Errors
/// Returns `MalformedInput` if either operand fails the decimal grammar.
///
/// # Example
/// ```
/// use decimal_engine::decimal::multiply_decimals;
///
/// assert_eq!(multiply_decimals("2.5", "-123.456").unwrap(), "-308.64");
/// ```
pub fn multiply_decimals(a: &str, b: &str) -> DecimalResult<String> {
    Ok(multiply(DecimalStr::new(a)?, DecimalStr::new(b)?))
}

/// Multiply two validated decimal strings.
///
/// Each operand's decimal point is stripped to leave one integer digit
/// string; the point re-enters the product `frac(a) + frac(b)` digits from
/// the right. The digit strings are long-multiplied with place-value
/// accumulation, then the product is trimmed and signed by XOR of the
/// operand signs.
pub fn multiply(a: DecimalStr<'_>, b: DecimalStr<'_>) -> String {
    let da = decompose(a);
    let db = decompose(b);
    let total_frac = da.frac_part.len() + db.frac_part.len();

    let joined_a = [da.int_part, da.frac_part].concat();
    let joined_b = [db.int_part, db.frac_part].concat();
    let digits_a = normalize_magnitude(&joined_a).as_bytes();
    let digits_b = normalize_magnitude(&joined_b).as_bytes();

    let len_a = digits_a.len();
    let len_b = digits_b.len();

    // Place-value accumulator: digit i of a times digit j of b lands in
    // slot i+j+1, with the carry folded into slot i+j. Cells stay below 100,
    // so single bytes hold them.
    let mut acc = DigitBuf::from_elem(0u8, len_a + len_b);
    for i in (0..len_a).rev() {
        for j in (0..len_b).rev() {
            let prod = (digits_a[i] - b'0') * (digits_b[j] - b'0');
            let sum = acc[i + j + 1] + prod;
            acc[i + j + 1] = sum % 10;
            acc[i + j] += sum / 10;
        }
    }

    let raw: String = acc.iter().map(|&d| char::from(b'0' + d)).collect();
    let mut product = normalize_magnitude(&raw).to_owned();

    if total_frac > 0 {
        // Left-pad so the reinserted point always has an integer digit to
        // its left.
        if product.len() <= total_frac {
            let pad = total_frac - product.len() + 1;
            product.insert_str(0, &"0".repeat(pad));
        }
        product.insert(product.len() - total_frac, '.');
        trim_fraction(&mut product);
    }

    if da.sign.product(db.sign).is_negative() && product != "0" {
        product.insert(0, '-');
    }
    product
}
