use std::{
    collections::HashMap,
    io::{Stdout, Write, stdout},
};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        constants::NAMED_CONSTANTS,
        evaluator::{binary::eval_binary, comparison::eval_comparison, unary::eval_unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All execution functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The control-flow result of executing a statement.
///
/// `break` does not unwind; it surfaces as an explicit `Flow::Break` that
/// blocks propagate outward until a loop consumes it. A `Break` reaching the
/// top level is a runtime error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// The innermost enclosing loop must stop.
    Break,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the single flat variable
/// environment and the output sink that `print` writes to.
///
/// ## Usage
///
/// `Context` is created once and reused for executing statements. The sink
/// defaults to standard output; tests pass a `Vec<u8>` to capture what a
/// script printed.
pub struct Context<W = Stdout> {
    variables: HashMap<String, Value>,
    output:    W,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context printing to standard output.
    ///
    /// The environment is seeded with the named constants.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(stdout())
    }
}

impl<W: Write> Context<W> {
    /// Creates a new evaluation context printing to `output`.
    ///
    /// The environment is seeded with the named constants.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let context = Context::with_output(Vec::new());
    ///
    /// assert_eq!(context.get_variable("PI"),
    ///            Value::Number(std::f64::consts::PI));
    /// ```
    pub fn with_output(output: W) -> Self {
        let variables = NAMED_CONSTANTS.iter()
                                       .map(|(name, value)| {
                                           ((*name).to_string(), Value::Number(*value))
                                       })
                                       .collect();

        Self { variables, output }
    }

    /// Consumes the context and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Executes a whole program.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] when a statement fails or when a `break`
    /// escapes to the top level.
    pub fn run(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            if let Flow::Break = self.exec_statement(statement)? {
                return Err(RuntimeError::BreakOutsideLoop { line: statement.line_number() });
            }
        }

        Ok(())
    }

    /// Executes a single statement and reports how control flow continues.
    ///
    /// Handles assignments, printing, conditionals, loops, `break` and
    /// blocks. A `Flow::Break` propagates out of blocks and conditionals
    /// until the nearest loop consumes it.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// The resulting [`Flow`].
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] when writing `print` output fails.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value);
                self.set_variable(name, value);
                Ok(Flow::Normal)
            },
            Statement::Print { expr, line } => {
                let value = self.eval(expr);

                write!(self.output, "{}", value.as_text())
                    .and_then(|()| self.output.flush())
                    .map_err(|e| RuntimeError::OutputFailed { details: e.to_string(),
                                                              line:    *line, })?;
                Ok(Flow::Normal)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition).is_truthy() {
                    self.exec_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_statement(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition, body, .. } => self.exec_while(condition, body),
            Statement::For { initializer,
                             condition,
                             increment,
                             body,
                             .. } => self.exec_for(initializer, condition, increment, body),
            Statement::Break { .. } => Ok(Flow::Break),
            Statement::Block { statements, .. } => {
                for statement in statements {
                    if let Flow::Break = self.exec_statement(statement)? {
                        return Ok(Flow::Break);
                    }
                }
                Ok(Flow::Normal)
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Expression evaluation is total: coercions never fail, undefined
    /// variables read as zero, and division follows IEEE semantics, so no
    /// expression can raise a runtime error.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::{
    ///     evaluator::core::Context,
    ///     lexer::tokenize,
    ///     parser::core::parse_expression,
    ///     value::Value,
    /// };
    ///
    /// let tokens = tokenize("1 + 2 * 3").unwrap();
    /// let expr = parse_expression(&mut tokens.iter().peekable(), 1).unwrap();
    ///
    /// let context = Context::with_output(Vec::new());
    /// assert_eq!(context.eval(&expr), Value::Number(7.0));
    /// ```
    #[must_use]
    pub fn eval(&self, expr: &Expr) -> Value {
        match expr {
            Expr::Literal { value, .. } => Value::from(value),
            Expr::Variable { name, .. } => self.get_variable(name),
            Expr::UnaryOp { op, expr, .. } => eval_unary(*op, &self.eval(expr)),
            Expr::BinaryOp { left, op, right, .. } => {
                eval_binary(*op, &self.eval(left), &self.eval(right))
            },
            Expr::ComparisonOp { left, op, right, .. } => {
                eval_comparison(*op, &self.eval(left), &self.eval(right))
            },
        }
    }

    /// Reads a variable from the environment.
    ///
    /// An undefined name reads as `Number(0.0)`.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Value {
        self.variables
            .get(name)
            .cloned()
            .unwrap_or(Value::Number(0.0))
    }

    /// Binds a variable in the environment, overwriting any previous value.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }
}
