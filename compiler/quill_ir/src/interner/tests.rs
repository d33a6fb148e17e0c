use super::*;

#[test]
fn test_intern_deduplicates() {
    let interner = StringInterner::new();
    let a = interner.intern("counter");
    let b = interner.intern("counter");
    assert_eq!(a, b);
    assert_eq!(interner.len(), 2);
}

#[test]
fn test_lookup_roundtrip() {
    let interner = StringInterner::new();
    let name = interner.intern("total");
    assert_eq!(interner.lookup(name), "total");
}

#[test]
fn test_empty_preinterned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    assert_ne!(interner.intern("x"), interner.intern("y"));
}

#[test]
fn test_foreign_name_resolves_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(999)), "");
}
