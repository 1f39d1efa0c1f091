//! Bidirectional type checker.
//!
//! `check` and `infer` are mutually recursive. When the type of a
//! subexpression is known from the outside (the declared type of a
//! `let`, the element type of an expected array type) we use `check`,
//! which lets otherwise-ambiguous literals such as `[]` through. When
//! no expectation is available we use `infer` and compare the result
//! structurally.

use crate::{
    ast::{expressions::Expr, statements::Stmt, types::Type},
    errors::errors::TypeError,
};

use super::typed_ast::{TypedExpr, TypedStmt};

/// One active name/type binding.
#[derive(Debug, Clone)]
struct Binding {
    name: String,
    ty: Type,
}

/// The type checker holds the bindings currently in scope.
///
/// The scope is a plain stack: `Let`/`LetVar` push one binding, and a
/// `Block` truncates back to its entry depth on exit. Lookups scan from
/// the most recently declared binding, which makes shadowing work
/// without any nested map. A binding's position in the stack doubles as
/// the variable's runtime slot, because the evaluator's variable stack
/// grows and shrinks in lockstep with this one.
#[derive(Debug, Default)]
pub struct TypeChecker {
    bindings: Vec<Binding>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker { bindings: Vec::new() }
    }

    /// The number of bindings currently in scope.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Verifies that `expr` has the expected type, propagating
    /// structure-driven expectations downward.
    pub fn check(&mut self, expr: &Expr, expected: &Type) -> Result<TypedExpr, TypeError> {
        match expr {
            Expr::Array(items) => {
                let Type::Array(element) = expected else {
                    return Err(TypeError::UnexpectedArray {
                        expected: expected.clone(),
                    });
                };
                let items = items
                    .iter()
                    .map(|item| self.check(item, element))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TypedExpr::Array(items))
            }
            other => {
                let (typed, actual) = self.infer(other)?;
                if actual != *expected {
                    return Err(TypeError::Mismatch {
                        expected: expected.clone(),
                        received: actual,
                    });
                }
                Ok(typed)
            }
        }
    }

    /// Computes the type of `expr` bottom-up.
    pub fn infer(&mut self, expr: &Expr) -> Result<(TypedExpr, Type), TypeError> {
        match expr {
            Expr::Int(value) => Ok((TypedExpr::Int(*value), Type::Int)),
            Expr::Array(items) => {
                // With no expected type, the element type can only come
                // from the items themselves; the first one is
                // authoritative and the rest are checked against it.
                let Some(first) = items.first() else {
                    return Err(TypeError::EmptyArrayLiteral);
                };
                let (typed_first, element) = self.infer(first)?;
                let mut typed_items = vec![typed_first];
                for item in &items[1..] {
                    typed_items.push(self.check(item, &element)?);
                }
                Ok((TypedExpr::Array(typed_items), Type::Array(Box::new(element))))
            }
            Expr::Var(name) => {
                let (slot, binding) = self
                    .bindings
                    .iter()
                    .enumerate()
                    .rev()
                    .find(|(_, binding)| binding.name == *name)
                    .ok_or_else(|| TypeError::UnboundVariable { name: name.clone() })?;
                Ok((
                    TypedExpr::Var {
                        name: name.clone(),
                        slot,
                    },
                    binding.ty.clone(),
                ))
            }
            Expr::Add(lhs, rhs) => {
                let lhs = self.check(lhs, &Type::Int)?;
                let rhs = self.check(rhs, &Type::Int)?;
                Ok((TypedExpr::Add(Box::new(lhs), Box::new(rhs)), Type::Int))
            }
        }
    }

    /// Type-checks a statement, extending the scope for declarations.
    pub fn visit(&mut self, stmt: &Stmt) -> Result<TypedStmt, TypeError> {
        match stmt {
            Stmt::Let { name, ty, init } => self.visit_let(name, ty, init, false),
            Stmt::LetVar { name, ty, init } => self.visit_let(name, ty, init, true),
            Stmt::Block(items) => {
                let binding_count_on_enter = self.bindings.len();
                let items = items
                    .iter()
                    .map(|item| self.visit(item))
                    .collect::<Result<Vec<_>, _>>()?;
                self.bindings.truncate(binding_count_on_enter);
                Ok(TypedStmt::Block(items))
            }
        }
    }

    fn visit_let(
        &mut self,
        name: &str,
        ty: &Type,
        init: &Expr,
        mutable: bool,
    ) -> Result<TypedStmt, TypeError> {
        let init = self.check(init, ty)?;
        self.bindings.push(Binding {
            name: name.to_string(),
            ty: ty.clone(),
        });
        Ok(TypedStmt::Let {
            name: name.to_string(),
            ty: ty.clone(),
            init,
            mutable,
        })
    }
}

/// Type-checks a statement tree.
///
/// This is the main entry point for static analysis. On success it
/// returns the resolved tree consumed by the evaluator.
pub fn type_check(stmt: &Stmt) -> Result<TypedStmt, TypeError> {
    let mut type_checker = TypeChecker::new();
    type_checker.visit(stmt)
}
