//! Function call protocol.

use quill_ir::{Expr, Name};
use quill_value::{arity_mismatch, undefined_function, EvalResult, Value};

use super::{Flow, Interpreter};
use crate::diagnostics::CallFrame;

impl Interpreter<'_> {
    /// Call a user-defined function.
    ///
    /// Arguments are evaluated in the caller's scope before the callee's
    /// frame is pushed. The callee's frame sits on top of the caller's stack,
    /// so the body can read any variable visible at the call site.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = self.interner.lookup(name))
    )]
    pub(super) fn eval_call(&mut self, name: Name, args: &[Expr]) -> EvalResult {
        let def = self
            .functions
            .get(name)
            .ok_or_else(|| undefined_function(self.interner.lookup(name)))?;

        if args.len() != def.params.len() {
            return Err(arity_mismatch(
                self.interner.lookup(name),
                def.params.len(),
                args.len(),
            ));
        }

        let values = args
            .iter()
            .map(|arg| self.eval_expr(arg))
            .collect::<Result<Vec<_>, _>>()?;

        self.call_stack
            .push(CallFrame { name })
            .map_err(|err| self.call_stack.attach_backtrace(err, self.interner))?;

        let bindings = def.params.iter().copied().zip(values);
        let result = self
            .with_bindings(bindings, |scoped| scoped.exec_block(&def.body))
            .map_err(|err| self.call_stack.attach_backtrace(err, self.interner));
        self.call_stack.pop();

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Void),
        }
    }
}
