use crate::{ast::statements::Stmt, errors::errors::SyntaxError};

use super::{expr::parse_expr, parser::Parser, types::parse_type};

/// Parses a single statement.
///
/// ```text
/// Statement ::= "let" ["var"] Identifier ":" Type "=" Expression
///             | "{" (Statement (";" Statement)*)? "}"
/// ```
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    parser.skip_whitespace();
    if parser.eat('{') {
        parse_block_body(parser)
    } else if parser.eat_keyword("let") {
        parse_let_stmt(parser)
    } else {
        Err(SyntaxError::ExpectedStatement)
    }
}

/// Parses the remainder of a block after the opening brace.
///
/// Statements are separated by semicolons; the body may be empty.
fn parse_block_body(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let mut items = Vec::new();
    parser.skip_whitespace();
    if !parser.eat('}') {
        loop {
            items.push(parse_stmt(parser)?);
            parser.skip_whitespace();
            if parser.eat(';') {
                continue;
            }
            if parser.eat('}') {
                break;
            }
            return Err(match parser.peek() {
                Some(found) => SyntaxError::UnexpectedChar { found },
                None => SyntaxError::UnexpectedEof,
            });
        }
    }
    Ok(Stmt::Block(items))
}

/// Parses the remainder of a declaration after the `let` keyword.
///
/// An optional `var` keyword marks the binding as mutable; the binding
/// value is still fixed after declaration since no assignment statement
/// exists.
fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    parser.skip_whitespace();
    let mutable = parser.eat_keyword("var");

    parser.skip_whitespace();
    let name = parser.parse_identifier()?;

    parser.skip_whitespace();
    parser.expect(':')?;

    let ty = parse_type(parser)?;

    parser.skip_whitespace();
    parser.expect('=')?;

    let init = parse_expr(parser)?;

    if mutable {
        Ok(Stmt::LetVar { name, ty, init })
    } else {
        Ok(Stmt::Let { name, ty, init })
    }
}
