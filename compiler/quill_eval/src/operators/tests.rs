use super::*;
use proptest::prelude::*;
use quill_value::EvalErrorKind;

mod arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn int_operations_stay_int() {
        assert_eq!(
            evaluate_binary(Value::int(2), Value::int(3), BinaryOp::Add).unwrap(),
            Value::int(5)
        );
        assert_eq!(
            evaluate_binary(Value::int(2), Value::int(3), BinaryOp::Sub).unwrap(),
            Value::int(-1)
        );
        assert_eq!(
            evaluate_binary(Value::int(4), Value::int(3), BinaryOp::Mul).unwrap(),
            Value::int(12)
        );
    }

    #[test]
    fn int_division_rounds_down() {
        let cases = [(7, 2, 3), (-7, 2, -4), (7, -2, -4), (-7, -2, 3), (-6, 2, -3), (0, -5, 0)];
        for (a, b, expected) in cases {
            assert_eq!(
                evaluate_binary(Value::int(a), Value::int(b), BinaryOp::Div).unwrap(),
                Value::int(expected),
                "{a} / {b}"
            );
        }
    }

    #[test]
    fn int_division_by_zero() {
        let err = evaluate_binary(Value::int(1), Value::int(0), BinaryOp::Div).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    }

    #[test]
    fn float_division_by_zero_is_infinite() {
        let result = evaluate_binary(Value::float(1.0), Value::int(0), BinaryOp::Div).unwrap();
        assert!(matches!(result, Value::Float(f) if f.is_infinite()));
    }

    #[test]
    fn overflow_is_an_error() {
        let err = evaluate_binary(Value::int(i64::MAX), Value::int(1), BinaryOp::Add).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::IntegerOverflow {
                operation: "addition".to_string()
            }
        );

        let err = evaluate_binary(Value::int(i64::MIN), Value::int(-1), BinaryOp::Div).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::IntegerOverflow { .. }));
    }

    #[test]
    fn float_operand_promotes() {
        assert!(matches!(
            evaluate_binary(Value::int(1), Value::float(0.5), BinaryOp::Add),
            Ok(Value::Float(f)) if (f - 1.5).abs() < f64::EPSILON
        ));
        assert!(matches!(
            evaluate_binary(Value::float(7.0), Value::int(2), BinaryOp::Div),
            Ok(Value::Float(f)) if (f - 3.5).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(
            evaluate_binary(Value::string("ab"), Value::string("cd"), BinaryOp::Add).unwrap(),
            Value::string("abcd")
        );
    }

    #[test]
    fn unsupported_operands() {
        let err =
            evaluate_binary(Value::string("a"), Value::string("b"), BinaryOp::Sub).unwrap_err();
        assert_eq!(
            err.message,
            "type mismatch: expected operands supported by `-`, got str and str"
        );

        let err = evaluate_binary(Value::int(1), Value::Bool(true), BinaryOp::Add).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                expected: "operands supported by `+`".to_string(),
                got: "int and bool".to_string(),
            }
        );
    }
}

mod logical {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn void_is_falsy() {
        assert_eq!(
            evaluate_logical(Value::Void, Value::int(1), LogicalOp::And),
            Value::Void
        );
        assert_eq!(
            evaluate_logical(Value::Void, Value::int(1), LogicalOp::Or),
            Value::int(1)
        );
    }

    #[test]
    fn and_returns_an_operand() {
        assert_eq!(
            evaluate_logical(Value::int(1), Value::int(2), LogicalOp::And),
            Value::int(2)
        );
        assert_eq!(
            evaluate_logical(Value::Bool(false), Value::int(2), LogicalOp::And),
            Value::Bool(false)
        );
    }

    #[test]
    fn or_returns_an_operand() {
        assert_eq!(
            evaluate_logical(Value::int(1), Value::int(2), LogicalOp::Or),
            Value::int(1)
        );
        assert_eq!(
            evaluate_logical(Value::Bool(false), Value::string("x"), LogicalOp::Or),
            Value::string("x")
        );
    }

    #[test]
    fn not_uses_truthiness() {
        assert_eq!(evaluate_not(&Value::Bool(false)), Value::Bool(true));
        assert_eq!(evaluate_not(&Value::int(0)), Value::Bool(false));
        assert_eq!(evaluate_not(&Value::Void), Value::Bool(true));
    }
}

mod comparison {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equality_across_kinds() {
        assert_eq!(
            evaluate_compare(&Value::int(1), &Value::float(1.0), CompareOp::Eq).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            evaluate_compare(&Value::int(1), &Value::string("1"), CompareOp::Eq).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            evaluate_compare(&Value::int(1), &Value::string("1"), CompareOp::NotEq).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn ordering_of_strings() {
        assert_eq!(
            evaluate_compare(&Value::string("a"), &Value::string("b"), CompareOp::Lt).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            evaluate_compare(&Value::string("b"), &Value::string("b"), CompareOp::GtEq).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn ordering_of_mixed_numbers() {
        assert_eq!(
            evaluate_compare(&Value::int(2), &Value::float(2.5), CompareOp::Lt).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            evaluate_compare(&Value::float(2.0), &Value::int(2), CompareOp::LtEq).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Value::float(f64::NAN);
        for op in [CompareOp::Lt, CompareOp::Gt, CompareOp::LtEq, CompareOp::GtEq] {
            assert_eq!(
                evaluate_compare(&nan, &Value::int(0), op).unwrap(),
                Value::Bool(false)
            );
        }
    }

    #[test]
    fn ordering_unsupported_kinds() {
        let err = evaluate_compare(&Value::Bool(true), &Value::int(1), CompareOp::Gt).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                expected: "operands supported by `>`".to_string(),
                got: "bool and int".to_string(),
            }
        );
    }
}

proptest! {
    #[test]
    fn int_comparisons_agree_with_i64(a in any::<i64>(), b in any::<i64>()) {
        let cases = [
            (CompareOp::Lt, a < b),
            (CompareOp::Gt, a > b),
            (CompareOp::LtEq, a <= b),
            (CompareOp::GtEq, a >= b),
            (CompareOp::Eq, a == b),
            (CompareOp::NotEq, a != b),
        ];
        for (op, expected) in cases {
            prop_assert_eq!(
                evaluate_compare(&Value::int(a), &Value::int(b), op).unwrap(),
                Value::Bool(expected)
            );
        }
    }

    #[test]
    fn int_division_is_floor_division(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0 && !(a == i64::MIN && b == -1));
        let q = evaluate_binary(Value::int(a), Value::int(b), BinaryOp::Div)
            .unwrap()
            .as_int()
            .unwrap();
        // floor(a / b) is the q with a - q*b in [0, b) for b > 0, (b, 0] for b < 0.
        let rem = i128::from(a) - i128::from(q) * i128::from(b);
        if b > 0 {
            prop_assert!((0..i128::from(b)).contains(&rem));
        } else {
            prop_assert!((i128::from(b) + 1..=0).contains(&rem));
        }
    }

    #[test]
    fn int_addition_matches_checked_add(a in any::<i64>(), b in any::<i64>()) {
        let result = evaluate_binary(Value::int(a), Value::int(b), BinaryOp::Add);
        match a.checked_add(b) {
            Some(sum) => prop_assert_eq!(result.unwrap(), Value::int(sum)),
            None => prop_assert!(result.is_err()),
        }
    }
}
