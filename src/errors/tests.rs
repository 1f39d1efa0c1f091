//! Unit tests for error handling.
//!
//! This module contains tests for error types and their display forms.

use crate::ast::types::Type;
use crate::errors::errors::{RuntimeError, SyntaxError, TypeError};

#[test]
fn test_expected_char_display() {
    let error = SyntaxError::ExpectedChar {
        expected: ':',
        found: Some('='),
    };
    assert_eq!(error.to_string(), "expected ':', found Some('=')");
}

#[test]
fn test_unexpected_eof_display() {
    assert_eq!(SyntaxError::UnexpectedEof.to_string(), "unexpected end of input");
}

#[test]
fn test_leading_zero_display() {
    assert_eq!(
        SyntaxError::LeadingZero.to_string(),
        "integer literal has a leading zero"
    );
}

#[test]
fn test_type_mismatch_display() {
    let error = TypeError::Mismatch {
        expected: Type::Array(Box::new(Type::Int)),
        received: Type::Int,
    };
    assert_eq!(
        error.to_string(),
        "types do not match: expected `[int]`, received `int`"
    );
}

#[test]
fn test_unbound_variable_display() {
    let error = TypeError::UnboundVariable {
        name: "foo".to_string(),
    };
    assert_eq!(error.to_string(), "variable \"foo\" not declared");
}

#[test]
fn test_empty_array_literal_display() {
    assert_eq!(
        TypeError::EmptyArrayLiteral.to_string(),
        "cannot infer the element type of an empty array literal"
    );
}

#[test]
fn test_stack_overflow_display() {
    assert_eq!(RuntimeError::StackOverflow.to_string(), "stack overflow");
}

#[test]
fn test_runtime_error_from_io_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error = RuntimeError::from(io_error);
    assert!(matches!(error, RuntimeError::Io(_)));
}
