use std::fmt::Display;

use super::{expressions::Expr, types::Type};

/// Statement node in the AST.
///
/// `Let` and `LetVar` differ only in declared mutability; no assignment
/// statement exists in the language, so the distinction is nominal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Immutable binding: `let name : ty = init`.
    Let { name: String, ty: Type, init: Expr },
    /// Mutable binding: `let var name : ty = init`.
    LetVar { name: String, ty: Type, init: Expr },
    /// Brace-delimited statement list introducing a new lexical scope.
    Block(Vec<Stmt>),
}

impl Stmt {
    /// Writes the canonical debug form of the statement into `out`.
    ///
    /// Examples: `Let {x, IntTy {}, Int {5}}`,
    /// `Block {Let {x, IntTy {}, Int {1}}, Let {y, IntTy {}, Int {2}}}`.
    pub fn dump(&self, out: &mut String) {
        match self {
            Stmt::Let { name, ty, init } => {
                out.push_str("Let {");
                out.push_str(name);
                out.push_str(", ");
                ty.dump(out);
                out.push_str(", ");
                init.dump(out);
                out.push('}');
            }
            Stmt::LetVar { name, ty, init } => {
                out.push_str("LetVar {");
                out.push_str(name);
                out.push_str(", ");
                ty.dump(out);
                out.push_str(", ");
                init.dump(out);
                out.push('}');
            }
            Stmt::Block(items) => {
                out.push_str("Block {");
                let mut sep = "";
                for item in items {
                    out.push_str(sep);
                    sep = ", ";
                    item.dump(out);
                }
                out.push('}');
            }
        }
    }

    /// Convenience wrapper over [`Stmt::dump`] returning a fresh string.
    pub fn dumped(&self) -> String {
        let mut out = String::new();
        self.dump(&mut out);
        out
    }
}

impl Display for Stmt {
    /// Renders the statement in source form, parseable back into an
    /// identical tree: `let x : int = 5`, `{ let a : int = 1; let b : int = 2 }`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let { name, ty, init } => write!(f, "let {} : {} = {}", name, ty, init),
            Stmt::LetVar { name, ty, init } => write!(f, "let var {} : {} = {}", name, ty, init),
            Stmt::Block(items) => {
                write!(f, "{{ ")?;
                let mut sep = "";
                for item in items {
                    write!(f, "{}{}", sep, item)?;
                    sep = "; ";
                }
                write!(f, " }}")
            }
        }
    }
}
