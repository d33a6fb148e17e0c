//! Grouping of flat conditional statements into [`IfChain`] nodes.
//!
//! A linear parser sees `if`, `elseif`, `else` and `stop` as independent
//! statements. [`ChainBuilder`] collects one statement sequence, attaching
//! each `elseif` / `else` to the chain opened by the closest preceding `if`.
//!
//! A chain stays open until one of:
//! - an `else` branch is added,
//! - `stop` is pushed,
//! - another `if` or any ordinary statement is pushed,
//! - the sequence ends.

use crate::{Expr, IfChain, Stmt};

/// Error raised when a branch has no chain to attach to.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("`{keyword}` without a preceding `if`")]
    DanglingBranch { keyword: &'static str },
}

/// Builds one statement sequence, grouping conditionals into chains.
#[derive(Debug, Default)]
pub struct ChainBuilder {
    stmts: Vec<Stmt>,
    open: Option<IfChain>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new chain. Any chain still open is closed first.
    pub fn push_if(&mut self, cond: Expr, body: Vec<Stmt>) {
        self.close();
        self.open = Some(IfChain::new(cond, body));
    }

    pub fn push_elseif(&mut self, cond: Expr, body: Vec<Stmt>) -> Result<(), ChainError> {
        let chain = self.open.take().ok_or(ChainError::DanglingBranch {
            keyword: "elseif",
        })?;
        self.open = Some(chain.elseif(cond, body));
        Ok(())
    }

    /// Add the final branch and close the chain.
    pub fn push_else(&mut self, body: Vec<Stmt>) -> Result<(), ChainError> {
        let chain = self
            .open
            .take()
            .ok_or(ChainError::DanglingBranch { keyword: "else" })?;
        self.stmts.push(Stmt::If(chain.otherwise(body)));
        Ok(())
    }

    /// Close the open chain, if any, without adding a branch.
    pub fn push_stop(&mut self) {
        self.close();
    }

    /// Push an ordinary statement. Closes any open chain.
    pub fn push(&mut self, stmt: Stmt) {
        self.close();
        self.stmts.push(stmt);
    }

    /// Whether a chain is waiting for more branches.
    pub fn has_open_chain(&self) -> bool {
        self.open.is_some()
    }

    pub fn finish(mut self) -> Vec<Stmt> {
        self.close();
        self.stmts
    }

    fn close(&mut self) {
        if let Some(chain) = self.open.take() {
            self.stmts.push(Stmt::If(chain));
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
