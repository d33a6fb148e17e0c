//! Registry of user-defined functions.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use quill_ir::{FunctionDef, Name};

/// Error returned by [`FunctionTable::define`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefineError {
    /// A function with this name is already registered.
    AlreadyDefined(Name),
}

/// Functions by name. Entries are never replaced or removed.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    functions: FxHashMap<Name, Rc<FunctionDef>>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `def` under its name.
    pub fn define(&mut self, def: Rc<FunctionDef>) -> Result<(), DefineError> {
        if self.functions.contains_key(&def.name) {
            return Err(DefineError::AlreadyDefined(def.name));
        }
        self.functions.insert(def.name, def);
        Ok(())
    }

    pub fn get(&self, name: Name) -> Option<Rc<FunctionDef>> {
        self.functions.get(&name).cloned()
    }

    pub fn contains(&self, name: Name) -> bool {
        self.functions.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests;
