//! Operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the set of value kinds is fixed, so pattern
//! matching gives exhaustiveness checking without trait objects. Operands
//! arrive already evaluated; operators never short-circuit.

use std::cmp::Ordering;

use quill_ir::{BinaryOp, CompareOp, LogicalOp};
use quill_value::{
    binary_type_mismatch, division_by_zero, integer_overflow, EvalError, EvalResult, Value,
};

/// Checked integer arithmetic with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate an arithmetic operation.
///
/// - int with int stays int (checked; division rounds toward negative infinity)
/// - any float operand promotes the other operand to float
/// - `+` on two strings concatenates
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => Ok(Value::Float(eval_float_binary(a, b, op))),
            _ => Err(binary_type_mismatch(op.as_symbol(), &left, &right)),
        },
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(floor_div(a, b), "division")
            }
        }
    }
}

/// Integer division rounding toward negative infinity. `b` is non-zero.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
    }
}

/// Evaluate `and` / `or` on two already evaluated operands.
///
/// `and` yields the left operand when it is falsy, otherwise the right one.
/// `or` yields the left operand when it is truthy, otherwise the right one.
pub fn evaluate_logical(left: Value, right: Value, op: LogicalOp) -> Value {
    match op {
        LogicalOp::And => {
            if left.is_truthy() {
                right
            } else {
                left
            }
        }
        LogicalOp::Or => {
            if left.is_truthy() {
                left
            } else {
                right
            }
        }
    }
}

/// Logical negation of an operand's truthiness.
pub fn evaluate_not(operand: &Value) -> Value {
    Value::Bool(!operand.is_truthy())
}

/// Evaluate a comparison, yielding a boolean.
///
/// `==` and `!=` accept any operands (different kinds are unequal).
/// Ordering comparisons accept numbers and strings only.
pub fn evaluate_compare(left: &Value, right: &Value, op: CompareOp) -> EvalResult {
    let holds = match op {
        CompareOp::Eq => left == right,
        CompareOp::NotEq => left != right,
        CompareOp::Lt => ordering(left, right, op)? == Some(Ordering::Less),
        CompareOp::Gt => ordering(left, right, op)? == Some(Ordering::Greater),
        CompareOp::LtEq => matches!(
            ordering(left, right, op)?,
            Some(Ordering::Less | Ordering::Equal)
        ),
        CompareOp::GtEq => matches!(
            ordering(left, right, op)?,
            Some(Ordering::Greater | Ordering::Equal)
        ),
    };
    Ok(Value::Bool(holds))
}

/// Ordering of two values; `None` when unordered (NaN).
fn ordering(left: &Value, right: &Value, op: CompareOp) -> Result<Option<Ordering>, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Some(a.cmp(b))),
        (Value::Str(a), Value::Str(b)) => Ok(Some((**a).cmp(&**b))),
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => Ok(a.partial_cmp(&b)),
            _ => Err(binary_type_mismatch(op.as_symbol(), left, right)),
        },
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
