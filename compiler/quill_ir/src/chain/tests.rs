use super::*;
use crate::{Branch, StringInterner};
use pretty_assertions::assert_eq;

fn print(n: i64) -> Stmt {
    Stmt::Print(Expr::int(n))
}

#[test]
fn if_elseif_else_form_one_chain() {
    let mut builder = ChainBuilder::new();
    builder.push_if(Expr::bool(false), vec![print(1)]);
    builder.push_elseif(Expr::bool(true), vec![print(2)]).unwrap();
    builder.push_else(vec![print(3)]).unwrap();
    assert!(!builder.has_open_chain());

    let stmts = builder.finish();
    assert_eq!(
        stmts,
        vec![Stmt::If(IfChain {
            branches: vec![
                Branch {
                    cond: Some(Expr::bool(false)),
                    body: vec![print(1)],
                },
                Branch {
                    cond: Some(Expr::bool(true)),
                    body: vec![print(2)],
                },
                Branch {
                    cond: None,
                    body: vec![print(3)],
                },
            ],
        })]
    );
}

#[test]
fn stop_closes_chain_without_else() {
    let mut builder = ChainBuilder::new();
    builder.push_if(Expr::bool(false), vec![print(1)]);
    builder.push_elseif(Expr::bool(false), vec![print(2)]).unwrap();
    builder.push_stop();
    assert!(!builder.has_open_chain());

    let err = builder.push_else(vec![print(3)]).unwrap_err();
    assert_eq!(err, ChainError::DanglingBranch { keyword: "else" });
}

#[test]
fn new_if_starts_separate_chain() {
    let mut builder = ChainBuilder::new();
    builder.push_if(Expr::bool(false), vec![print(1)]);
    builder.push_if(Expr::bool(true), vec![print(2)]);
    builder.push_else(vec![print(3)]).unwrap();

    let stmts = builder.finish();
    assert_eq!(stmts.len(), 2);
    assert_eq!(
        stmts[0],
        Stmt::If(IfChain::new(Expr::bool(false), vec![print(1)]))
    );
    assert_eq!(
        stmts[1],
        Stmt::If(IfChain::new(Expr::bool(true), vec![print(2)]).otherwise(vec![print(3)]))
    );
}

#[test]
fn ordinary_statement_closes_chain() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut builder = ChainBuilder::new();
    builder.push_if(Expr::bool(true), vec![print(1)]);
    builder.push(Stmt::Define {
        name: x,
        value: Expr::int(0),
    });
    let err = builder.push_elseif(Expr::bool(true), vec![]).unwrap_err();
    assert_eq!(err, ChainError::DanglingBranch { keyword: "elseif" });

    let stmts = builder.finish();
    assert_eq!(stmts.len(), 2);
    assert!(matches!(stmts[0], Stmt::If(_)));
    assert!(matches!(stmts[1], Stmt::Define { .. }));
}

#[test]
fn dangling_else_is_rejected() {
    let mut builder = ChainBuilder::new();
    let err = builder.push_else(vec![print(1)]).unwrap_err();
    assert_eq!(err.to_string(), "`else` without a preceding `if`");
}

#[test]
fn open_chain_closed_by_finish() {
    let mut builder = ChainBuilder::new();
    builder.push_if(Expr::bool(true), vec![print(1)]);
    let stmts = builder.finish();
    match &stmts[..] {
        [Stmt::If(chain)] => assert!(!chain.is_closed()),
        other => panic!("expected one chain, got {other:?}"),
    }
}
