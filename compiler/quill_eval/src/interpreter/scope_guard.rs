//! RAII frame management for the interpreter.
//!
//! [`ScopedInterpreter`] pushes a frame when created and pops it when
//! dropped, so a frame never outlives the call that pushed it, whether the
//! body returns normally, fails, or panics.
//!
//! The guard holds `&mut Interpreter` and derefs to it, so code inside the
//! scope uses the interpreter as usual.
//!
//! ```text
//! interpreter.with_bindings(params.zip(args), |scoped| scoped.exec_block(body))
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::Value;
use quill_ir::Name;

/// Guard over an interpreter with one extra frame pushed.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a frame; it is popped when the returned guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` with one extra frame on the stack.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    /// Run `f` in a new frame pre-populated with `bindings`.
    ///
    /// Later bindings of the same name overwrite earlier ones.
    pub fn with_bindings<T, F, I>(&mut self, bindings: I, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
        I: IntoIterator<Item = (Name, Value)>,
    {
        self.with_env_scope(|scoped| {
            for (name, value) in bindings {
                scoped.env.define(name, value);
            }
            f(scoped)
        })
    }
}
