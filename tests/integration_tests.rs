//! Integration tests for the end-to-end pipeline.
//!
//! These tests verify that the complete pipeline works correctly from
//! source text through parsing, type checking, and evaluation.

use minilang::{
    errors::errors::{SyntaxError, TypeError},
    interpreter::interpreter::Evaluator,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

fn run(source: &str) -> String {
    let stmt = parse(source).unwrap();
    let typed = type_check(&stmt).unwrap();
    let mut evaluator = Evaluator::new(Vec::new());
    evaluator.exec(&typed).unwrap();
    String::from_utf8(evaluator.out().clone()).unwrap()
}

#[test]
fn test_run_simple_let() {
    assert_eq!(run("let x : int = 2 + 3"), "5\n");
}

#[test]
fn test_run_nested_array() {
    assert_eq!(run("let y : [int] = [1, 2+3]"), "[1, 5]\n");
}

#[test]
fn test_run_empty_array() {
    assert_eq!(run("let y : [[int]] = [[], [1]]"), "[[], [1]]\n");
}

#[test]
fn test_run_block_with_variable_reads() {
    let source = "{ let a : int = 1 + 2; let b : [int] = [a, a + 1]; let var c : [[int]] = [b, []] }";
    assert_eq!(run(source), "3\n[3, 4]\n[[3, 4], []]\n");
}

#[test]
fn test_run_shadowing() {
    let source = "{ let a : int = 1; { let a : int = 2; let b : int = a }; let c : int = a }";
    assert_eq!(run(source), "1\n2\n2\n1\n");
}

#[test]
fn test_dump_matches_canonical_form() {
    let stmt = parse("let x : [int] = [1, 2 + 3]").unwrap();
    assert_eq!(
        stmt.dumped(),
        "Let {x, ArrayTy {IntTy {}}, Array {Int {1}, Add {Int {2}, Int {3}}}}"
    );
}

#[test]
fn test_dump_is_stable_across_reparse() {
    let sources = [
        "let x : int = 0",
        "let var y : [[int]] = [[1], []]",
        "{ let a : int = 1 + 2 + 3; { } }",
    ];
    for source in sources {
        let first = parse(source).unwrap();
        let reparsed = parse(&first.to_string()).unwrap();
        assert_eq!(first.dumped(), reparsed.dumped());
    }
}

#[test]
fn test_syntax_error_stops_pipeline() {
    assert_eq!(parse("let x : int = 01"), Err(SyntaxError::LeadingZero));
    assert!(parse("let x = 5").is_err());
    assert!(parse("{ let x : int = 1 ").is_err());
}

#[test]
fn test_type_error_stops_pipeline() {
    let stmt = parse("let x : [int] = []").unwrap();
    assert!(type_check(&stmt).is_ok());

    let stmt = parse("let x : int = []").unwrap();
    assert!(type_check(&stmt).is_err());

    let stmt = parse("let x : [int] = [1, [2]]").unwrap();
    assert_eq!(
        type_check(&stmt).unwrap_err(),
        TypeError::UnexpectedArray {
            expected: minilang::ast::types::Type::Int
        }
    );
}

#[test]
fn test_unbound_variable_is_a_type_error() {
    let stmt = parse("let x : int = missing").unwrap();
    assert_eq!(
        type_check(&stmt).unwrap_err(),
        TypeError::UnboundVariable {
            name: "missing".to_string()
        }
    );
}
