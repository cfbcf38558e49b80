/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between floating-point
/// values and the integer counts used by the evaluator.
pub mod num;
