//! Runtime values for the Quill interpreter.
//!
//! Heap-backed values are built through the factory methods on [`Value`]
//! (`Value::string`, `Value::array`); `Heap::new` is private to this module.

mod array;
mod heap;

use std::fmt;

pub use array::ArrayValue;
pub use heap::Heap;

/// Runtime value in the Quill interpreter.
#[derive(Clone)]
pub enum Value {
    /// Integer number.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Immutable string.
    Str(Heap<str>),
    /// Shared, mutable array.
    Array(ArrayValue),
    /// Result of a function call that did not return a value.
    Void,
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::from_string(s.into()))
    }

    /// Create a new array with its own storage.
    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(ArrayValue::new(items))
    }
}

// Value Methods

impl Value {
    /// Runtime kind name, as shown in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
            Value::Void => "void",
        }
    }

    /// `false` and `Void` are falsy; everything else is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Void)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Numeric view used for mixed int/float arithmetic and comparison.
    #[expect(
        clippy::cast_precision_loss,
        reason = "mixed int/float operations promote the int operand"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Void, Value::Void) => true,
            (Value::Float(_), Value::Float(_) | Value::Int(_))
            | (Value::Int(_), Value::Float(_)) => self.as_f64() == other.as_f64(),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Array(array) => write!(f, "Array({:?})", array.to_vec()),
            Value::Void => write!(f, "Void"),
        }
    }
}

/// Printed form of a value.
///
/// Floats always carry a fractional part (`3.0`), strings print without
/// quotes and arrays print as `[e1, e2]`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
            Value::Array(array) => write!(f, "{array}"),
            Value::Void => Ok(()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
