#![allow(clippy::module_inception)]

//! A minimal expression language: parse one statement of source text
//! into an AST, verify it against a small structural type system, then
//! evaluate it by tree-walking.
//!
//! The stages compose as
//! `parse -> Stmt -> type_check -> TypedStmt -> Evaluator::exec`,
//! each returning a typed `Result` so callers decide how failures are
//! reported.

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod parser;
pub mod type_checker;
