use crate::{
    ast::BinaryOperator,
    interpreter::value::Value,
    util::num::f64_to_repeat_count,
};

/// Evaluates an arithmetic operation between two values.
///
/// The left operand picks the behavior. With a number on the left, both
/// operands are viewed as numbers and combined with IEEE `f64` arithmetic;
/// division by zero yields an infinity or `NaN` rather than an error. With
/// text on the left, `+` concatenates, `*` repeats the text by the right
/// operand's truncated numeric view, and `-` and `/` fall back to
/// concatenation.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use rill::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let text = Value::Text("ab".to_string());
/// let count = Value::Number(3.0);
///
/// assert_eq!(eval_binary(BinaryOperator::Mul, &text, &count),
///            Value::Text("ababab".to_string()));
///
/// assert_eq!(eval_binary(BinaryOperator::Add, &Value::Number(1.0), &text),
///            Value::Number(1.0));
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    use BinaryOperator::{Add, Div, Mul, Sub};

    match left {
        Value::Text(text) => match op {
            Mul => Value::Text(text.repeat(f64_to_repeat_count(right.as_number()))),
            Add | Sub | Div => Value::Text(format!("{text}{}", right.as_text())),
        },
        Value::Number(number) => {
            let right = right.as_number();

            Value::Number(match op {
                              Add => number + right,
                              Sub => number - right,
                              Mul => number * right,
                              Div => number / right,
                          })
        },
    }
}
