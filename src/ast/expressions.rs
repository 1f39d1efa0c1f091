use std::fmt::Display;

/// Expression node in the AST.
///
/// Expression trees are built once by the parser and never mutated
/// afterwards. Every child is owned exclusively by its parent, so the
/// tree is finite and acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal.
    Int(i64),
    /// Array literal with its items in source order.
    Array(Vec<Expr>),
    /// Reference to a named binding.
    Var(String),
    /// Addition, left operand first. Chained `+` nests to the left.
    Add(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Writes the canonical debug form of the expression into `out`.
    ///
    /// Examples: `Int {5}`, `Var {x}`, `Add {Int {1}, Int {2}}`,
    /// `Array {Int {1}, Int {2}}`.
    pub fn dump(&self, out: &mut String) {
        match self {
            Expr::Int(value) => {
                out.push_str("Int {");
                out.push_str(&value.to_string());
                out.push('}');
            }
            Expr::Array(items) => {
                out.push_str("Array {");
                let mut sep = "";
                for item in items {
                    out.push_str(sep);
                    sep = ", ";
                    item.dump(out);
                }
                out.push('}');
            }
            Expr::Var(name) => {
                out.push_str("Var {");
                out.push_str(name);
                out.push('}');
            }
            Expr::Add(lhs, rhs) => {
                out.push_str("Add {");
                lhs.dump(out);
                out.push_str(", ");
                rhs.dump(out);
                out.push('}');
            }
        }
    }
}

impl Display for Expr {
    /// Renders the expression in source form. The grammar has a single
    /// precedence level, so no parentheses are ever needed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Int(value) => write!(f, "{}", value),
            Expr::Array(items) => {
                write!(f, "[")?;
                let mut sep = "";
                for item in items {
                    write!(f, "{}{}", sep, item)?;
                    sep = ", ";
                }
                write!(f, "]")
            }
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Add(lhs, rhs) => write!(f, "{} + {}", lhs, rhs),
        }
    }
}
