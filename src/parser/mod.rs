//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains a predictive recursive descent parser that works
//! directly over the characters of the source text, with one character of
//! lookahead and no separate tokenizer stage. It handles:
//!
//! - Statement parsing (`let` declarations and blocks)
//! - Expression parsing (integer literals, array literals, variable
//!   references, left-associative addition)
//! - Type parsing (`int` and nested array types)
//!
//! Whitespace is skippable between every token and comments are not
//! supported. Each production reports the first grammar violation it
//! finds as a `SyntaxError`.

pub mod expr;
pub mod parser;
pub mod stmt;
pub mod types;
