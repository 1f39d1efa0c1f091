/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - types: Definitions for type annotations in the AST
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
pub mod expressions;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
