#[derive(Debug)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// A `break` statement was executed outside of any loop.
    BreakOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output sink failed.
    OutputFailed {
        /// Details about the I/O failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BreakOutsideLoop { line } => {
                write!(f, "Error on line {line}: 'break' outside of a loop.")
            },

            Self::OutputFailed { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
