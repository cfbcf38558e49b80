#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The leading token fits no statement rule.
    UnknownStatement {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The token fits no expression rule.
    UnknownExpression {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric literal contained more than one decimal point.
    InvalidFloatLiteral {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A text literal was opened but never closed.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block comment was opened but never closed.
    UnterminatedBlockComment {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::UnknownStatement { token, line } => {
                write!(f, "Error on line {line}: Unknown statement: {token}.")
            },

            Self::UnknownExpression { token, line } => {
                write!(f, "Error on line {line}: Unknown expression: {token}.")
            },

            Self::InvalidFloatLiteral { line } => {
                write!(f, "Error on line {line}: Invalid float literal.")
            },

            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },

            Self::UnterminatedBlockComment { line } => {
                write!(f, "Error on line {line}: Unterminated block comment.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
