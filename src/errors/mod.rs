//! Error types and error handling for the interpreter.
//!
//! This module defines the error types used throughout the pipeline:
//!
//! - Syntax errors raised while parsing source text
//! - Type errors raised during static analysis
//! - Runtime errors raised while evaluating a statement
//!
//! Each stage returns a typed `Result`; only the driver decides how a
//! failure is reported and whether the process exits.

pub mod errors;

#[cfg(test)]
mod tests;
