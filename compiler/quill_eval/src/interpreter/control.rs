//! Conditional chains and loops.
//!
//! None of these push a frame: bodies run in the enclosing frame, so a
//! `define` inside a loop body is visible after the loop.

use quill_ir::{Expr, IfChain, Stmt};
use quill_value::{invalid_loop_bound, type_mismatch, EvalError, Value};

use super::{ExecResult, Flow, Interpreter};

impl Interpreter<'_> {
    /// Run the first branch whose condition is truthy. An `else` branch
    /// always matches. Conditions after the taken branch are not evaluated.
    pub(super) fn exec_if(&mut self, chain: &IfChain) -> ExecResult {
        for branch in &chain.branches {
            let taken = match &branch.cond {
                Some(cond) => self.eval_expr(cond)?.is_truthy(),
                None => true,
            };
            if taken {
                return self.exec_block(&branch.body);
            }
        }
        Ok(Flow::Normal)
    }

    pub(super) fn exec_while(&mut self, cond: &Expr, body: &[Stmt]) -> ExecResult {
        while self.eval_expr(cond)?.is_truthy() {
            if let Flow::Return(value) = self.exec_block(body)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Run `body` a fixed number of times. `count` is evaluated once.
    pub(super) fn exec_for(&mut self, count: &Expr, body: &[Stmt]) -> ExecResult {
        let times = loop_count(&self.eval_expr(count)?)?;
        tracing::trace!(times, "for loop");
        for _ in 0..times {
            if let Flow::Return(value) = self.exec_block(body)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }
}

/// Iterations requested by a `for` count. A float count runs
/// `floor(count)` times; NaN counts as zero.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate and NaN maps to 0"
)]
fn loop_count(count: &Value) -> Result<i64, EvalError> {
    let times = match count {
        Value::Int(n) => *n,
        Value::Float(f) => f.floor() as i64,
        other => return Err(type_mismatch("number", other.type_name())),
    };
    if times < 1 {
        return Err(invalid_loop_bound(times));
    }
    Ok(times)
}
