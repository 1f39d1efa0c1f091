//! Unit tests for the AST module.
//!
//! These cover the canonical debug dump of each variant family and the
//! source-form rendering used for round-tripping.

use super::expressions::Expr;
use super::statements::Stmt;
use super::types::Type;

#[test]
fn test_dump_int_type() {
    let mut out = String::new();
    Type::Int.dump(&mut out);
    assert_eq!(out, "IntTy {}");
}

#[test]
fn test_dump_nested_array_type() {
    let ty = Type::Array(Box::new(Type::Array(Box::new(Type::Int))));
    let mut out = String::new();
    ty.dump(&mut out);
    assert_eq!(out, "ArrayTy {ArrayTy {IntTy {}}}");
}

#[test]
fn test_dump_add_expression() {
    let expr = Expr::Add(
        Box::new(Expr::Add(Box::new(Expr::Int(1)), Box::new(Expr::Int(2)))),
        Box::new(Expr::Int(3)),
    );
    let mut out = String::new();
    expr.dump(&mut out);
    assert_eq!(out, "Add {Add {Int {1}, Int {2}}, Int {3}}");
}

#[test]
fn test_dump_array_expression() {
    let expr = Expr::Array(vec![Expr::Int(1), Expr::Var("x".to_string())]);
    let mut out = String::new();
    expr.dump(&mut out);
    assert_eq!(out, "Array {Int {1}, Var {x}}");
}

#[test]
fn test_dump_empty_array_expression() {
    let mut out = String::new();
    Expr::Array(vec![]).dump(&mut out);
    assert_eq!(out, "Array {}");
}

#[test]
fn test_dump_let_statement() {
    let stmt = Stmt::Let {
        name: "x".to_string(),
        ty: Type::Int,
        init: Expr::Int(5),
    };
    assert_eq!(stmt.dumped(), "Let {x, IntTy {}, Int {5}}");
}

#[test]
fn test_dump_block_statement() {
    let stmt = Stmt::Block(vec![
        Stmt::Let {
            name: "x".to_string(),
            ty: Type::Int,
            init: Expr::Int(1),
        },
        Stmt::LetVar {
            name: "y".to_string(),
            ty: Type::Array(Box::new(Type::Int)),
            init: Expr::Array(vec![Expr::Int(2)]),
        },
    ]);
    assert_eq!(
        stmt.dumped(),
        "Block {Let {x, IntTy {}, Int {1}}, LetVar {y, ArrayTy {IntTy {}}, Array {Int {2}}}}"
    );
}

#[test]
fn test_display_type_source_form() {
    assert_eq!(Type::Int.to_string(), "int");
    assert_eq!(Type::Array(Box::new(Type::Int)).to_string(), "[int]");
}

#[test]
fn test_display_statement_source_form() {
    let stmt = Stmt::LetVar {
        name: "y".to_string(),
        ty: Type::Array(Box::new(Type::Int)),
        init: Expr::Array(vec![
            Expr::Int(1),
            Expr::Add(Box::new(Expr::Int(2)), Box::new(Expr::Int(3))),
        ]),
    };
    assert_eq!(stmt.to_string(), "let var y : [int] = [1, 2 + 3]");
}

#[test]
fn test_structural_type_equality() {
    let a = Type::Array(Box::new(Type::Array(Box::new(Type::Int))));
    let b = Type::Array(Box::new(Type::Array(Box::new(Type::Int))));
    assert_eq!(a, b);
    assert_ne!(a, Type::Array(Box::new(Type::Int)));
}
