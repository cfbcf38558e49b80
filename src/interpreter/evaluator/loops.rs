use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

impl<W: Write> Context<W> {
    /// Executes a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration. A `Break` flow
    /// from the body stops the loop; the loop itself always continues with
    /// `Flow::Normal`.
    ///
    /// # Parameters
    /// - `condition`: The loop condition.
    /// - `body`: The loop body.
    ///
    /// # Errors
    /// Propagates runtime errors raised by the body.
    pub fn exec_while(&mut self, condition: &Expr, body: &Statement) -> EvalResult<Flow> {
        while self.eval(condition).is_truthy() {
            if let Flow::Break = self.exec_statement(body)? {
                break;
            }
        }

        Ok(Flow::Normal)
    }

    /// Executes a `for` loop.
    ///
    /// The initializer runs once. Each iteration then evaluates the
    /// condition, runs the body, and runs the increment. A `Break` flow from
    /// the body stops the loop before the increment of that iteration.
    ///
    /// # Parameters
    /// - `initializer`: Assignment executed once up front.
    /// - `condition`: The loop condition.
    /// - `increment`: Assignment executed after each completed iteration.
    /// - `body`: The loop body.
    ///
    /// # Errors
    /// Propagates runtime errors raised by the header statements or the
    /// body.
    pub fn exec_for(&mut self,
                    initializer: &Statement,
                    condition: &Expr,
                    increment: &Statement,
                    body: &Statement)
                    -> EvalResult<Flow> {
        self.exec_statement(initializer)?;

        while self.eval(condition).is_truthy() {
            if let Flow::Break = self.exec_statement(body)? {
                break;
            }
            self.exec_statement(increment)?;
        }

        Ok(Flow::Normal)
    }
}
