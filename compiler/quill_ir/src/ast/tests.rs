use super::*;
use pretty_assertions::assert_eq;
use std::cell::Cell;

#[test]
fn compare_op_symbols_roundtrip() {
    for symbol in ["<", ">", "<=", ">=", "==", "!="] {
        let op = CompareOp::from_symbol(symbol).unwrap();
        assert_eq!(op.as_symbol(), symbol);
    }
    assert_eq!(CompareOp::from_symbol("=<"), None);
}

#[test]
fn index_operand_evaluates_once() {
    let operand = IndexOperand::new(Expr::int(2));
    let calls = Cell::new(0);
    let eval = |expr: &Expr| {
        calls.set(calls.get() + 1);
        match expr {
            Expr::Atom(Literal::Int(n)) => Ok::<_, ()>(ResolvedIndex::Int(*n)),
            _ => Ok(ResolvedIndex::NotInteger("other")),
        }
    };

    assert!(!operand.is_resolved());
    assert_eq!(operand.resolve_with(eval).unwrap(), ResolvedIndex::Int(2));
    assert_eq!(operand.resolve_with(eval).unwrap(), ResolvedIndex::Int(2));
    assert!(operand.is_resolved());
    assert_eq!(calls.get(), 1);
}

#[test]
fn index_operand_failure_is_not_cached() {
    let operand = IndexOperand::new(Expr::int(0));
    assert_eq!(operand.resolve_with(|_| Err::<ResolvedIndex, _>("boom")), Err("boom"));
    assert!(!operand.is_resolved());
    assert_eq!(
        operand.resolve_with(|_| Ok::<_, &str>(ResolvedIndex::Int(0))),
        Ok(ResolvedIndex::Int(0))
    );
}

#[test]
fn if_chain_builder_marks_else() {
    let chain = IfChain::new(Expr::bool(true), vec![]).elseif(Expr::bool(false), vec![]);
    assert!(!chain.is_closed());
    let chain = chain.otherwise(vec![Stmt::Print(Expr::int(1))]);
    assert!(chain.is_closed());
    assert_eq!(chain.branches.len(), 3);
}

#[test]
fn statement_kinds() {
    let name = Name::EMPTY;
    let cases = [
        (Stmt::Define { name, value: Expr::int(1) }, "define"),
        (Stmt::Assign { name, value: Expr::int(1) }, "assign"),
        (Stmt::Print(Expr::int(1)), "print"),
        (Stmt::For { count: Expr::int(1), body: vec![] }, "for"),
        (Stmt::Return(Expr::int(1)), "return"),
        (Stmt::Expr(Expr::call(name, vec![])), "expr"),
    ];
    for (stmt, kind) in cases {
        assert_eq!(stmt.kind(), kind);
    }
}
