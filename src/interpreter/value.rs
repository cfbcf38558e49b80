use crate::ast::LiteralValue;

/// A runtime value: a number or a piece of text.
///
/// Every value can be viewed as a number and as text; both coercions are
/// total, so expression evaluation never fails on a type mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit floating-point number.
    Number(f64),
    /// A piece of text.
    Text(String),
}

impl Value {
    /// Views the value as a number.
    ///
    /// Text parses as an `f64`; text that is not a valid number reads as
    /// zero.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(), 2.5);
    /// assert_eq!(Value::Text("2.5".to_string()).as_number(), 2.5);
    /// assert_eq!(Value::Text("abc".to_string()).as_number(), 0.0);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(number) => *number,
            Self::Text(text) => text.parse().unwrap_or(0.0),
        }
    }

    /// Views the value as text.
    ///
    /// Numbers use the standard `f64` rendering, so `7.0` becomes `"7"` and
    /// `2.5` stays `"2.5"`.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(7.0).as_text(), "7");
    /// assert_eq!(Value::Text("hi".to_string()).as_text(), "hi");
    /// ```
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Returns `true` when the value's numeric view is nonzero.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.as_number() != 0.0
    }
}

impl From<&LiteralValue> for Value {
    fn from(value: &LiteralValue) -> Self {
        match value {
            LiteralValue::Number(number) => Self::Number(*number),
            LiteralValue::Text(text) => Self::Text(text.clone()),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_text())
    }
}
