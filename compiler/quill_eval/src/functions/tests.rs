use super::*;
use quill_ir::{Expr, Stmt, StringInterner};

fn def(name: Name, params: Vec<Name>, body: Vec<Stmt>) -> Rc<FunctionDef> {
    Rc::new(FunctionDef { name, params, body })
}

#[test]
fn define_then_get() {
    let interner = StringInterner::new();
    let add = interner.intern("add");
    let a = interner.intern("a");

    let mut table = FunctionTable::new();
    assert!(table.is_empty());
    assert_eq!(table.define(def(add, vec![a], vec![])), Ok(()));

    let found = table.get(add);
    assert_eq!(found.map(|f| f.params.clone()), Some(vec![a]));
    assert!(table.contains(add));
    assert_eq!(table.len(), 1);
}

#[test]
fn redefinition_rejected_and_first_kept() {
    let interner = StringInterner::new();
    let f = interner.intern("f");

    let mut table = FunctionTable::new();
    let first = def(f, vec![], vec![Stmt::Return(Expr::int(1))]);
    let second = def(f, vec![], vec![Stmt::Return(Expr::int(2))]);

    assert_eq!(table.define(Rc::clone(&first)), Ok(()));
    assert_eq!(table.define(second), Err(DefineError::AlreadyDefined(f)));
    assert_eq!(table.get(f), Some(first));
}

#[test]
fn unknown_name_is_absent() {
    let interner = StringInterner::new();
    let table = FunctionTable::new();
    assert_eq!(table.get(interner.intern("missing")), None);
}
