/// Arithmetic binary operator evaluation.
///
/// Implements evaluation for `+`, `-`, `*` and `/`, including the textual
/// behaviors when the left operand is text.
pub mod binary;

/// Comparison and logical operator evaluation.
///
/// Implements the numeric-boolean comparison operators and the
/// non-short-circuit `&&` and `||`.
pub mod comparison;

/// Core execution logic for statements and expressions.
///
/// Contains the evaluation context, the statement dispatcher, and control
/// flow propagation.
pub mod core;

/// Loop execution.
///
/// Implements `while` and `for` loops, including `break` handling.
pub mod loops;

/// Unary operator evaluation.
///
/// Handles negation.
pub mod unary;
