//! Statement and expression nodes.
//!
//! Node kinds are closed enums so the evaluator dispatches with one
//! exhaustive `match` per category.

use std::cell::OnceCell;
use std::rc::Rc;

use crate::Name;

/// Literal constants.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

/// Arithmetic binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// Logical operators. Both operands are always evaluated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicalOp {
    And,
    Or,
}

/// Comparison operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Lt,
    Gt,
    LtEq,
    GtEq,
    Eq,
    NotEq,
}

impl CompareOp {
    /// Parse the operator tag produced by the parser.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "<=" => Some(Self::LtEq),
            ">=" => Some(Self::GtEq),
            "==" => Some(Self::Eq),
            "!=" => Some(Self::NotEq),
            _ => None,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }
}

/// Cached result of evaluating an index operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolvedIndex {
    Int(i64),
    /// The operand evaluated to a non-integer of the named kind.
    NotInteger(&'static str),
}

/// Index operand of an array indexing expression.
///
/// The operand is evaluated the first time its node executes and the result
/// is kept for every later execution of the same node.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexOperand {
    expr: Box<Expr>,
    resolved: OnceCell<ResolvedIndex>,
}

impl IndexOperand {
    pub fn new(expr: Expr) -> Self {
        Self {
            expr: Box::new(expr),
            resolved: OnceCell::new(),
        }
    }

    /// Whether the operand has already been evaluated.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Return the cached operand, evaluating it with `eval` on first use.
    ///
    /// A failed evaluation is not cached.
    pub fn resolve_with<E>(
        &self,
        eval: impl FnOnce(&Expr) -> Result<ResolvedIndex, E>,
    ) -> Result<ResolvedIndex, E> {
        if let Some(index) = self.resolved.get() {
            return Ok(*index);
        }
        let index = eval(&self.expr)?;
        let _ = self.resolved.set(index);
        Ok(index)
    }
}

/// Expression nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Literal constant.
    Atom(Literal),
    /// Array literal; produces a fresh array every time it is evaluated.
    ArrayLiteral(Vec<Expr>),
    /// Variable reference.
    Var(Name),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Not(Box<Expr>),
    Compare {
        op: CompareOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Call of a user-defined function.
    Call { name: Name, args: Vec<Expr> },
    /// Append `element` to the array bound to `array`.
    ArrayAppend { array: Name, element: Box<Expr> },
    /// Remove and yield the last element of the array bound to `array`.
    ArrayRemoveLast { array: Name },
    /// Element of the array bound to `array`.
    ArrayIndex { array: Name, index: IndexOperand },
}

impl Expr {
    pub fn int(value: i64) -> Self {
        Expr::Atom(Literal::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Expr::Atom(Literal::Float(value))
    }

    pub fn bool(value: bool) -> Self {
        Expr::Atom(Literal::Bool(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Atom(Literal::Str(value.into()))
    }

    pub fn var(name: Name) -> Self {
        Expr::Var(name)
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn logical(op: LogicalOp, left: Expr, right: Expr) -> Self {
        Expr::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn not(operand: Expr) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn compare(op: CompareOp, left: Expr, right: Expr) -> Self {
        Expr::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(name: Name, args: Vec<Expr>) -> Self {
        Expr::Call { name, args }
    }

    pub fn append(array: Name, element: Expr) -> Self {
        Expr::ArrayAppend {
            array,
            element: Box::new(element),
        }
    }

    pub fn remove_last(array: Name) -> Self {
        Expr::ArrayRemoveLast { array }
    }

    pub fn index(array: Name, index: Expr) -> Self {
        Expr::ArrayIndex {
            array,
            index: IndexOperand::new(index),
        }
    }
}

/// One branch of a conditional chain.
///
/// `cond` is `None` for the trailing `else` branch.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub cond: Option<Expr>,
    pub body: Vec<Stmt>,
}

/// An `if` / `elseif`* / `else`? chain. At most one branch body runs.
#[derive(Clone, Debug, PartialEq)]
pub struct IfChain {
    pub branches: Vec<Branch>,
}

impl IfChain {
    /// Start a chain with its `if` branch.
    pub fn new(cond: Expr, body: Vec<Stmt>) -> Self {
        Self {
            branches: vec![Branch {
                cond: Some(cond),
                body,
            }],
        }
    }

    #[must_use]
    pub fn elseif(mut self, cond: Expr, body: Vec<Stmt>) -> Self {
        self.branches.push(Branch {
            cond: Some(cond),
            body,
        });
        self
    }

    #[must_use]
    pub fn otherwise(mut self, body: Vec<Stmt>) -> Self {
        self.branches.push(Branch { cond: None, body });
        self
    }

    /// Whether the chain already ends in an `else` branch.
    pub fn is_closed(&self) -> bool {
        self.branches.last().is_some_and(|b| b.cond.is_none())
    }
}

/// User-defined function: name, ordered parameters and body.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDef {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Vec<Stmt>,
}

/// Statement nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// Bind `name` in the innermost frame.
    Define { name: Name, value: Expr },
    /// Rebind an already visible `name`; no-op when `name` is not visible.
    Assign { name: Name, value: Expr },
    Print(Expr),
    If(IfChain),
    While { cond: Expr, body: Vec<Stmt> },
    /// Run `body` a fixed number of times; `count` is evaluated once.
    For { count: Expr, body: Vec<Stmt> },
    FunctionDef(Rc<FunctionDef>),
    Return(Expr),
    /// Expression evaluated for its effect (calls, array mutation).
    Expr(Expr),
}

impl Stmt {
    /// Short name of the statement kind, used in trace output.
    pub const fn kind(&self) -> &'static str {
        match self {
            Stmt::Define { .. } => "define",
            Stmt::Assign { .. } => "assign",
            Stmt::Print(_) => "print",
            Stmt::If(_) => "if",
            Stmt::While { .. } => "while",
            Stmt::For { .. } => "for",
            Stmt::FunctionDef(_) => "function",
            Stmt::Return(_) => "return",
            Stmt::Expr(_) => "expr",
        }
    }
}

/// A parsed program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    /// Functions discovered by the parser, registered before `body` runs.
    pub functions: Vec<Rc<FunctionDef>>,
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Self {
            functions: Vec::new(),
            body,
        }
    }

    #[must_use]
    pub fn with_function(mut self, def: FunctionDef) -> Self {
        self.functions.push(Rc::new(def));
        self
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
