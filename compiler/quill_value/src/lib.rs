//! Quill Value - runtime values and evaluation errors.
//!
//! Values are produced by evaluating expression nodes. Arrays are shared,
//! mutable storage: every alias of an array observes appends and removals.
//! Errors are structured: [`EvalErrorKind`] names the failure, [`EvalError`]
//! adds the message and the call backtrace at the error site.

mod errors;
mod value;

pub use errors::{
    arity_mismatch, binary_type_mismatch, division_by_zero, empty_array, function_already_defined,
    index_out_of_bounds, integer_overflow, invalid_index, invalid_loop_bound, not_an_array,
    recursion_limit_exceeded, type_mismatch, undefined_function, undefined_variable,
    BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
};
pub use value::{ArrayValue, Heap, Value};
