use crate::{ast::types::Type, errors::errors::SyntaxError};

use super::parser::Parser;

/// Parses a type annotation.
///
/// ```text
/// Type ::= "int" | "[" Type "]"
/// ```
///
/// `int` only matches at an identifier boundary, so a would-be
/// identifier such as `ints` is not accepted as a type.
pub fn parse_type(parser: &mut Parser) -> Result<Type, SyntaxError> {
    parser.skip_whitespace();
    if parser.eat_keyword("int") {
        Ok(Type::Int)
    } else if parser.eat('[') {
        let element = parse_type(parser)?;
        parser.skip_whitespace();
        parser.expect(']')?;
        Ok(Type::Array(Box::new(element)))
    } else {
        Err(SyntaxError::ExpectedType)
    }
}
