//! Evaluation errors.
//!
//! Every runtime error is fatal: it halts the running program and is handed
//! back to the host as an [`EvalError`]. Factory functions are the public API
//! for creating errors; they fill in both `kind` and `message`.

use std::fmt;

use crate::value::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// Hosts match on the kind; the `Display` impl provides the user-facing
/// message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Access
    #[error("variable '{name}' is not defined")]
    UndefinedVariable { name: String },
    #[error("function '{name}' is not defined")]
    UndefinedFunction { name: String },
    #[error("function '{name}' is already defined")]
    FunctionAlreadyDefined { name: String },

    // Function
    #[error("{name} expects {expected} {}, got {got}", argument_word(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("maximum recursion depth exceeded (limit: {limit})")]
    RecursionLimitExceeded { limit: usize },

    // Loops
    #[error("for-loop count must be greater than 0, got {count}")]
    InvalidLoopBound { count: i64 },

    // Arrays
    #[error("'{name}' must be an array, found {found}")]
    NotAnArray { name: String, found: String },
    #[error("cannot remove the last element of empty array '{name}'")]
    EmptyArray { name: String },
    #[error("index must be a non-negative integer, got {got}")]
    InvalidIndex { got: String },
    #[error("index {index} is out of bounds for '{name}' of length {len}")]
    IndexOutOfBounds {
        name: String,
        index: usize,
        len: usize,
    },

    // Type/Operator
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },
}

fn argument_word(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Function name.
    pub name: String,
}

/// Snapshot of the active function calls at an error site, most recent first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    #[source]
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// Active calls at the error site, if it was raised inside a function.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            backtrace: None,
        }
    }

    /// Attach a backtrace to this error.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// Variable and Function Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn function_already_defined(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FunctionAlreadyDefined {
        name: name.to_string(),
    })
}

/// Argument count does not match the declared parameters.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimitExceeded { limit })
}

// Loop Errors

#[cold]
pub fn invalid_loop_bound(count: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidLoopBound { count })
}

// Array Errors

#[cold]
pub fn not_an_array(name: &str, found: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnArray {
        name: name.to_string(),
        found: found.type_name().to_string(),
    })
}

#[cold]
pub fn empty_array(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyArray {
        name: name.to_string(),
    })
}

/// Index operand is not a non-negative integer. `got` is its printed form.
#[cold]
pub fn invalid_index(got: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidIndex { got: got.into() })
}

#[cold]
pub fn index_out_of_bounds(name: &str, index: usize, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds {
        name: name.to_string(),
        index,
        len,
    })
}

// Type/Operator Errors

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Operands of a binary operator have unsupported kinds.
#[cold]
pub fn binary_type_mismatch(op: &str, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: format!("operands supported by `{op}`"),
        got: format!("{} and {}", left.type_name(), right.type_name()),
    })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}
