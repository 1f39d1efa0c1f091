//! Resolved AST produced by the type checker.
//!
//! The resolved tree mirrors the parsed one, with two differences: every
//! variable reference carries the stack slot its binding will occupy at
//! runtime, and the two declaration forms collapse into a single node
//! with a mutability flag. The evaluator consumes this tree directly and
//! never resolves a name.

use crate::ast::types::Type;

/// Expression with every variable reference resolved to a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedExpr {
    Int(i64),
    Array(Vec<TypedExpr>),
    /// Variable reference; `slot` indexes the evaluator's variable stack.
    /// The name is kept for diagnostics only.
    Var { name: String, slot: usize },
    Add(Box<TypedExpr>, Box<TypedExpr>),
}

/// Statement with resolved initializer expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedStmt {
    Let {
        name: String,
        ty: Type,
        init: TypedExpr,
        /// Declared with `let var`. Nominal only, since no assignment
        /// statement exists.
        mutable: bool,
    },
    Block(Vec<TypedStmt>),
}
