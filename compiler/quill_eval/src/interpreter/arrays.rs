//! Array mutation and indexing.
//!
//! Arrays are addressed by variable name. The array is resolved through the
//! environment like any variable read; since arrays are shared, mutating the
//! resolved value is visible through every binding that aliases it.

use quill_ir::{Expr, IndexOperand, Name, ResolvedIndex};
use quill_value::{
    empty_array, index_out_of_bounds, invalid_index, not_an_array, undefined_variable, ArrayValue,
    EvalError, EvalResult, Value,
};

use super::Interpreter;

impl Interpreter<'_> {
    /// Look up `name` and require an array.
    fn resolve_array(&self, name: Name) -> Result<ArrayValue, EvalError> {
        let ident = self.interner.lookup(name);
        match self.env.lookup(name) {
            Some(Value::Array(array)) => Ok(array),
            Some(other) => Err(not_an_array(ident, &other)),
            None => Err(undefined_variable(ident)),
        }
    }

    /// Append and yield the (same, shared) array.
    pub(super) fn eval_array_append(&mut self, name: Name, element: &Expr) -> EvalResult {
        let array = self.resolve_array(name)?;
        let value = self.eval_expr(element)?;
        array.push(value);
        Ok(Value::Array(array))
    }

    pub(super) fn eval_array_remove_last(&mut self, name: Name) -> EvalResult {
        let array = self.resolve_array(name)?;
        array
            .pop()
            .ok_or_else(|| empty_array(self.interner.lookup(name)))
    }

    /// Index into an array.
    ///
    /// The index operand is evaluated the first time this node runs; later
    /// runs reuse that result even if the operand's inputs changed.
    pub(super) fn eval_array_index(&mut self, name: Name, index: &IndexOperand) -> EvalResult {
        let resolved = index.resolve_with(|expr| {
            Ok::<_, EvalError>(match self.eval_expr(expr)? {
                Value::Int(n) => ResolvedIndex::Int(n),
                other => ResolvedIndex::NotInteger(other.type_name()),
            })
        })?;
        let index = match resolved {
            ResolvedIndex::Int(n) => {
                usize::try_from(n).map_err(|_| invalid_index(n.to_string()))?
            }
            ResolvedIndex::NotInteger(kind) => return Err(invalid_index(kind)),
        };

        let array = self.resolve_array(name)?;
        array
            .get(index)
            .ok_or_else(|| index_out_of_bounds(self.interner.lookup(name), index, array.len()))
    }
}
