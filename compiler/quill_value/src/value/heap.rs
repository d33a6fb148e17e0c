//! Reference-counted storage for immutable heap values.
//!
//! The evaluator is single-threaded, so `Heap<T>` wraps `Rc` rather than
//! `Arc`. Construction is restricted to the value module; everything else goes
//! through the factory methods on `Value`.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl Heap<str> {
    #[inline]
    pub(super) fn from_string(s: String) -> Self {
        Heap(Rc::from(s))
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}
