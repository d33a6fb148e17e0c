//! Environment for variable scoping in the interpreter.
//!
//! A stack of frames with the global frame at the bottom. Lookup walks from
//! the innermost frame outward; writes only ever touch the innermost frame.
//!
//! Visibility is dynamic: a function call pushes its frame on top of the
//! caller's whole stack, so the callee sees every binding visible at the call
//! site unless it shadows it.

use rustc_hash::FxHashMap;

use quill_ir::Name;
use quill_value::Value;

/// Error returned by [`Environment::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable not found in any frame.
    Undefined,
}

/// A single frame of variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any existing binding in this frame.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    #[inline]
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Scope stack. Never empty: the global frame cannot be popped.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    /// Create a new environment holding only the global frame.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::new()],
        }
    }

    /// Number of frames, including the global frame.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Push an empty frame.
    #[inline]
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the innermost frame. The global frame is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Bind `name` in the innermost frame.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.current_mut().define(name, value);
    }

    /// Look up a variable, innermost frame first.
    ///
    /// Scalars come back as copies; arrays come back as aliases of the stored
    /// array.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .cloned()
    }

    /// Whether `name` is bound in any frame.
    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.scopes.iter().any(|scope| scope.contains(name))
    }

    /// Rebind a visible variable.
    ///
    /// The new binding goes into the innermost frame even when the existing
    /// binding lives further down the stack; outer frames are never written.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        if !self.contains(name) {
            return Err(AssignError::Undefined);
        }
        self.define(name, value);
        Ok(())
    }

    /// The bottom frame.
    pub fn global(&self) -> &Scope {
        &self.scopes[0]
    }

    /// The innermost frame.
    pub fn current(&self) -> &Scope {
        let top = self.scopes.len() - 1;
        &self.scopes[top]
    }

    fn current_mut(&mut self) -> &mut Scope {
        let top = self.scopes.len() - 1;
        &mut self.scopes[top]
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
