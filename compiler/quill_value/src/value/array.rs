//! Shared, mutable array storage.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Value;

/// Array value with reference semantics.
///
/// Cloning an `ArrayValue` creates another alias of the same storage, so a
/// push or pop through one alias is visible through all of them. Borrows of
/// the inner vector never outlive a single method call.
#[derive(Clone)]
pub struct ArrayValue(Rc<RefCell<Vec<Value>>>);

impl ArrayValue {
    pub(super) fn new(items: Vec<Value>) -> Self {
        ArrayValue(Rc::new(RefCell::new(items)))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Append in place.
    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    /// Remove and return the last element.
    pub fn pop(&self) -> Option<Value> {
        self.0.borrow_mut().pop()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Snapshot of the current elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Whether both values alias the same storage.
    pub fn ptr_eq(&self, other: &ArrayValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ArrayValue {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}

impl fmt::Display for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.borrow().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
