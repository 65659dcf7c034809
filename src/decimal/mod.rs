// ============================================================================
// Decimal Module
// Validation, decomposition and exact signed arithmetic on decimal strings
// ============================================================================
//
// Data flows one direction through this module:
//   raw string -> validator -> decomposer -> { adder, multiplier } -> string
//
// Every operation is a pure function of its string inputs; nothing holds
// state across calls.

mod add;
mod decompose;
mod multiply;
mod validate;

pub use add::{add, add_decimals};
pub use decompose::{decompose, Decomposed, Sign};
pub use multiply::{multiply, multiply_decimals};
pub use validate::{is_valid_decimal, DecimalStr};
