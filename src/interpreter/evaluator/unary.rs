use crate::{ast::UnaryOperator, interpreter::value::Value};

/// Evaluates a unary operation.
///
/// Negation views its operand as a number, so `-"5"` is `-5` and negating
/// non-numeric text yields `-0`.
///
/// # Parameters
/// - `op`: The unary operator.
/// - `value`: The operand.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use rill::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::Value},
/// };
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, &Value::Number(3.0)),
///            Value::Number(-3.0));
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: &Value) -> Value {
    match op {
        UnaryOperator::Negate => Value::Number(-value.as_number()),
    }
}
