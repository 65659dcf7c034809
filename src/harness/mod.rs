// ============================================================================
// Line Harness
// Line-oriented driver: feeds input lines through the decimal engine
// ============================================================================
//
// The harness owns all stream access and output formatting; the core
// exposes no I/O itself. Each non-empty input line is validated, then
// reported with its sum and product against a fixed addend.

use crate::decimal::{add, multiply, DecimalStr};
use std::io::{self, BufRead, Write};

/// Fixed right-hand operand applied to every valid input line.
pub const DEFAULT_ADDEND: &str = "-123.456";

/// Lossy floating-point parse of a validated decimal string.
///
/// Debug aid only: accumulates digits into an `f64`, so precision is lost
/// beyond what the mantissa holds. The exact results always come from the
/// string engine.
pub fn parse_lossy(value: DecimalStr<'_>) -> f64 {
    let bytes = value.as_str().as_bytes();
    let mut i = 0;
    let mut sign = 1.0f64;
    if bytes[i] == b'+' {
        i += 1;
    } else if bytes[i] == b'-' {
        sign = -1.0;
        i += 1;
    }

    let mut result = 0.0f64;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        result = result * 10.0 + f64::from(bytes[i] - b'0');
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let mut divisor = 10.0f64;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            result += f64::from(bytes[i] - b'0') / divisor;
            divisor *= 10.0;
            i += 1;
        }
    }
    sign * result
}

/// Write one numbered report block for a single input line.
pub fn report_line<W: Write>(
    output: &mut W,
    case: u32,
    line: &str,
    addend: DecimalStr<'_>,
) -> io::Result<()> {
    writeln!(output, "Test Case {case}:")?;
    writeln!(output, "Input: {line}")?;

    match DecimalStr::new(line) {
        Ok(value) => {
            tracing::debug!(case, input = line, "processing valid decimal");
            writeln!(output, "Parsed value (debug): {}", parse_lossy(value))?;
            writeln!(
                output,
                "Valid decimal. After addition with {addend}: {}",
                add(value, addend)
            )?;
            writeln!(
                output,
                "After multiplication with {addend}: {}",
                multiply(value, addend)
            )?;
        },
        Err(_) => {
            tracing::debug!(case, input = line, "rejected malformed line");
            writeln!(output, "Result: Invalid decimal number")?;
        },
    }
    writeln!(output, "------------------------------------")
}

/// Drive the engine over every non-empty line of `input`, writing one report
/// block per line to `output`. Test cases are numbered from 1; empty lines
/// are skipped without consuming a case number.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    addend: DecimalStr<'_>,
) -> io::Result<()> {
    let mut case = 1u32;
    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        report_line(output, case, &line, addend)?;
        case += 1;
    }
    Ok(())
}
