//! Tree-walking interpreter for Quill.
//!
//! # Architecture
//!
//! Two dispatchers, one per node category:
//!
//! - `exec_stmt` runs a [`Stmt`] and yields a [`Flow`]
//! - `eval_expr` evaluates an [`Expr`] to a [`Value`]
//!
//! Helper modules split the work by concern:
//!
//! - `control` - conditional chains and loops
//! - `function_call` - the call protocol
//! - `arrays` - append, remove-last and indexing
//! - `scope_guard` - RAII frame management
//!
//! Both dispatchers run inside `ensure_sufficient_stack`, so deeply nested
//! programs grow the native stack instead of overflowing it.

mod arrays;
mod builder;
mod control;
mod function_call;
mod scope_guard;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use scope_guard::ScopedInterpreter;

use std::rc::Rc;

use quill_ir::{Expr, FunctionDef, Literal, Program, Stmt, StringInterner};
use quill_stack::ensure_sufficient_stack;
use quill_value::{function_already_defined, undefined_variable, EvalError, EvalResult, Value};

use crate::diagnostics::CallStack;
use crate::operators::{evaluate_binary, evaluate_compare, evaluate_logical, evaluate_not};
use crate::print_handler::SharedPrintHandler;
use crate::{DefineError, Environment, FunctionTable};

/// How a statement sequence finished.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    /// Ran to completion; continue with the next statement.
    Normal,
    /// A `return` executed; unwind to the enclosing call (or program).
    Return(Value),
}

/// Result of executing a statement.
pub type ExecResult = Result<Flow, EvalError>;

/// Tree-walking interpreter.
///
/// Owns every piece of mutable execution state; independent interpreters
/// never share state except through a shared print handler.
pub struct Interpreter<'a> {
    /// Owner of every `Name` in the programs this interpreter runs.
    pub(crate) interner: &'a StringInterner,
    pub(crate) env: Environment,
    pub(crate) functions: FunctionTable,
    /// Active calls: recursion limit and backtraces.
    pub(crate) call_stack: CallStack,
    pub(crate) print_handler: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with default settings (stdout output,
    /// [`DEFAULT_MAX_CALL_DEPTH`]).
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of function calls currently executing.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Register a function.
    ///
    /// Declaring the same definition twice (same `Rc`) is accepted, so a
    /// function discovered up front may also appear as a statement in the
    /// body. A different definition under a taken name fails.
    pub fn declare_function(&mut self, def: &Rc<FunctionDef>) -> Result<(), EvalError> {
        if let Some(existing) = self.functions.get(def.name) {
            if Rc::ptr_eq(&existing, def) {
                return Ok(());
            }
        }
        match self.functions.define(Rc::clone(def)) {
            Ok(()) => {
                tracing::debug!(
                    function = self.interner.lookup(def.name),
                    params = def.params.len(),
                    "registered function"
                );
                Ok(())
            }
            Err(DefineError::AlreadyDefined(name)) => {
                Err(function_already_defined(self.interner.lookup(name)))
            }
        }
    }

    /// Run a whole program.
    ///
    /// Pre-declared functions are registered first, then the body executes
    /// in the current environment. A top-level `return` ends the program.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &Program) -> Result<(), EvalError> {
        for def in &program.functions {
            self.declare_function(def)?;
        }
        match self.exec_block(&program.body)? {
            Flow::Normal => {}
            Flow::Return(value) => {
                tracing::debug!(%value, "program returned at top level");
            }
        }
        Ok(())
    }

    /// Execute statements in order, stopping at the first `return`.
    pub fn exec_block(&mut self, stmts: &[Stmt]) -> ExecResult {
        for stmt in stmts {
            if let Flow::Return(value) = self.exec_stmt(stmt)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Execute a single statement.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> ExecResult {
        tracing::trace!(kind = stmt.kind(), "exec");
        match stmt {
            Stmt::Define { name, value } => {
                let value = self.eval_expr(value)?;
                self.env.define(*name, value);
                Ok(Flow::Normal)
            }
            Stmt::Assign { name, value } => {
                if !self.env.contains(*name) {
                    tracing::trace!(
                        name = self.interner.lookup(*name),
                        "assignment to undefined variable ignored"
                    );
                    return Ok(Flow::Normal);
                }
                let value = self.eval_expr(value)?;
                self.env.define(*name, value);
                Ok(Flow::Normal)
            }
            Stmt::Print(expr) => {
                let value = self.eval_expr(expr)?;
                self.print_handler.print_line(&value.to_string());
                Ok(Flow::Normal)
            }
            Stmt::If(chain) => self.exec_if(chain),
            Stmt::While { cond, body } => self.exec_while(cond, body),
            Stmt::For { count, body } => self.exec_for(count, body),
            Stmt::FunctionDef(def) => {
                self.declare_function(def)?;
                Ok(Flow::Normal)
            }
            Stmt::Return(expr) => Ok(Flow::Return(self.eval_expr(expr)?)),
            Stmt::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(Flow::Normal)
            }
        }
    }

    /// Evaluate an expression.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Atom(literal) => Ok(eval_literal(literal)),
            Expr::ArrayLiteral(elements) => {
                let items = elements
                    .iter()
                    .map(|e| self.eval_expr(e))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::array(items))
            }
            Expr::Var(name) => self
                .env
                .lookup(*name)
                .ok_or_else(|| undefined_variable(self.interner.lookup(*name))),
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(left, right, *op)
            }
            Expr::Logical { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Ok(evaluate_logical(left, right, *op))
            }
            Expr::Not(operand) => Ok(evaluate_not(&self.eval_expr(operand)?)),
            Expr::Compare { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_compare(&left, &right, *op)
            }
            Expr::Call { name, args } => self.eval_call(*name, args),
            Expr::ArrayAppend { array, element } => self.eval_array_append(*array, element),
            Expr::ArrayRemoveLast { array } => self.eval_array_remove_last(*array),
            Expr::ArrayIndex { array, index } => self.eval_array_index(*array, index),
        }
    }
}

fn eval_literal(literal: &Literal) -> Value {
    match literal {
        Literal::Int(n) => Value::Int(*n),
        Literal::Float(f) => Value::Float(*f),
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Str(s) => Value::string(s.as_str()),
    }
}
