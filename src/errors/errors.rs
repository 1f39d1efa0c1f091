use thiserror::Error;

use crate::ast::types::Type;

/// Errors raised by the parser.
///
/// All grammar violations route through one of these variants; the parser
/// never panics and never recovers, it reports the first violation found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("expected {expected:?}, found {found:?}")]
    ExpectedChar { expected: char, found: Option<char> },
    #[error("unexpected character: {found:?}")]
    UnexpectedChar { found: char },
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("integer literal has a leading zero")]
    LeadingZero,
    #[error("integer literal out of range")]
    IntegerOutOfRange,
    #[error("expected a statement")]
    ExpectedStatement,
    #[error("expected a type")]
    ExpectedType,
}

/// Errors raised by the type checker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("types do not match: expected `{expected}`, received `{received}`")]
    Mismatch { expected: Type, received: Type },
    #[error("expected `{expected}`, received an array literal")]
    UnexpectedArray { expected: Type },
    #[error("variable {name:?} not declared")]
    UnboundVariable { name: String },
    #[error("cannot infer the element type of an empty array literal")]
    EmptyArrayLiteral,
}

/// Errors raised by the evaluator.
///
/// The operand and variable stacks have a fixed capacity, and exhausting
/// either one is reported instead of aborting the process. The remaining
/// variants guard invariants the type checker is expected to uphold, so
/// a well-typed program never triggers them.
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("stack overflow")]
    StackOverflow,
    #[error("stack underflow")]
    StackUnderflow,
    #[error("operand is not an integer")]
    NonIntegerOperand,
    #[error("no variable bound at slot {slot}")]
    InvalidSlot { slot: usize },
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
