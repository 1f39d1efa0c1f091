//! Type checking and semantic analysis module.
//!
//! This module performs bidirectional type checking on the AST. It
//! verifies the statement tree against the declared types while:
//!
//! - Checking expressions against expected types (`check`)
//! - Computing types bottom-up where no expectation exists (`infer`)
//! - Managing a block-structured scope of name/type bindings
//! - Resolving every variable reference to a runtime slot
//!
//! The output is a resolved statement tree that the evaluator executes
//! without any name lookups.

pub mod type_checker;
pub mod typed_ast;
