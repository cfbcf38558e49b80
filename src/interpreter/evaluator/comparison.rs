use std::cmp::Ordering;

use crate::{ast::ComparisonOperator, interpreter::value::Value};

/// Evaluates a comparison or logical operation between two values.
///
/// The operands are first reduced to a numeric basis pair. With text on the
/// left, the basis is the lexicographic ordering of both textual views
/// (negative, zero or positive) compared against an implicit zero; otherwise
/// both numeric views are used directly. The operator is then applied to the
/// pair, with `&&` and `||` treating nonzero as true.
///
/// Both operands are always evaluated before this function is called; the
/// logical operators do not short-circuit.
///
/// # Parameters
/// - `op`: The comparison or logical operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// `Value::Number(1.0)` for true, `Value::Number(0.0)` for false.
///
/// # Example
/// ```
/// use rill::{
///     ast::ComparisonOperator,
///     interpreter::{evaluator::comparison::eval_comparison, value::Value},
/// };
///
/// let a = Value::Text("abc".to_string());
/// let b = Value::Text("abd".to_string());
///
/// assert_eq!(eval_comparison(ComparisonOperator::Less, &a, &b),
///            Value::Number(1.0));
/// ```
#[must_use]
pub fn eval_comparison(op: ComparisonOperator, left: &Value, right: &Value) -> Value {
    use ComparisonOperator::{And, Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, Or};

    let (a, b) = match left {
        Value::Text(text) => (ordering_basis(text, &right.as_text()), 0.0),
        Value::Number(_) => (left.as_number(), right.as_number()),
    };

    let result = match op {
        Equal => a == b,
        NotEqual => a != b,
        Less => a < b,
        Greater => a > b,
        LessEqual => a <= b,
        GreaterEqual => a >= b,
        And => a != 0.0 && b != 0.0,
        Or => a != 0.0 || b != 0.0,
    };

    Value::Number(if result { 1.0 } else { 0.0 })
}

/// Reduces a textual comparison to its numeric basis.
fn ordering_basis(left: &str, right: &str) -> f64 {
    match left.cmp(right) {
        Ordering::Less => -1.0,
        Ordering::Equal => 0.0,
        Ordering::Greater => 1.0,
    }
}
