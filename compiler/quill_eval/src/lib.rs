//! Quill Eval - tree-walking evaluator for Quill programs.
//!
//! # Architecture
//!
//! All mutable execution state lives in one [`Interpreter`]:
//! - [`Environment`]: variable frames on a scope stack
//! - [`FunctionTable`]: user-defined functions, one entry per name
//! - [`CallStack`]: active calls, recursion limit and error backtraces
//! - a [`SharedPrintHandler`] receiving program output
//!
//! Statements execute to a [`Flow`]; a `return` travels up as
//! `Flow::Return` through every enclosing block until the call site consumes
//! it. Runtime errors are values of [`EvalError`] and halt the program.
//!
//! Operators dispatch through plain functions (`evaluate_binary`,
//! `evaluate_logical`, `evaluate_compare`, `evaluate_not`) so they can be
//! tested without an interpreter.

mod diagnostics;
mod environment;
mod functions;
pub mod interpreter;
mod operators;
mod print_handler;

// Re-export value types from quill_value
pub use quill_value::{EvalBacktrace, EvalError, EvalErrorKind, EvalResult, Value};

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{AssignError, Environment, Scope};
pub use functions::{DefineError, FunctionTable};
pub use interpreter::{
    ExecResult, Flow, Interpreter, InterpreterBuilder, ScopedInterpreter, DEFAULT_MAX_CALL_DEPTH,
};
pub use operators::{evaluate_binary, evaluate_compare, evaluate_logical, evaluate_not};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
