//! Quill IR - node tree and interned names for the Quill evaluator.
//!
//! The parser (an external collaborator) produces a [`Program`]: an ordered
//! list of top-level [`Stmt`]s plus any functions it discovered in a first
//! pass. Every identifier in the tree is an interned [`Name`] owned by a
//! [`StringInterner`].
//!
//! Linear parsers emit conditionals as flat `if` / `elseif` / `else` / `stop`
//! statements. [`chain::ChainBuilder`] groups those into [`IfChain`] nodes so
//! the evaluator never needs shared "pending alternative" state.

mod ast;
pub mod chain;
mod interner;
mod name;

pub use ast::{
    BinaryOp, Branch, CompareOp, Expr, FunctionDef, IfChain, IndexOperand, Literal, LogicalOp,
    Program, ResolvedIndex, Stmt,
};
pub use interner::{InternError, StringInterner};
pub use name::Name;
