use crate::{ast::expressions::Expr, errors::errors::SyntaxError};

use super::parser::Parser;

/// Parses an expression.
///
/// ```text
/// Expression ::= Atom ("+" Atom)*
/// ```
///
/// Addition is the only operator and chains left-associatively, so
/// `1 + 2 + 3` nests as `Add {Add {Int {1}, Int {2}}, Int {3}}`.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let mut lhs = parse_atom(parser)?;
    loop {
        parser.skip_whitespace();
        if parser.eat('+') {
            let rhs = parse_atom(parser)?;
            lhs = Expr::Add(Box::new(lhs), Box::new(rhs));
            continue;
        }
        break;
    }
    Ok(lhs)
}

/// Parses an atomic expression.
///
/// ```text
/// Atom ::= Integer | "[" (Expression ("," Expression)*)? "]" | Identifier
/// ```
pub fn parse_atom(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    parser.skip_whitespace();
    match parser.peek() {
        Some('0') => {
            // "0" alone is a valid literal; "01", "0x" and friends are not.
            if parser.peek_at(1).is_some_and(Parser::is_identifier_char) {
                Err(SyntaxError::LeadingZero)
            } else {
                parser.advance();
                Ok(Expr::Int(0))
            }
        }
        Some(c) if c.is_ascii_digit() => parse_integer(parser),
        Some(c) if Parser::is_identifier_starter(c) => {
            Ok(Expr::Var(parser.parse_identifier()?))
        }
        Some('[') => {
            parser.advance();
            parse_array_items(parser)
        }
        Some(found) => Err(SyntaxError::UnexpectedChar { found }),
        None => Err(SyntaxError::UnexpectedEof),
    }
}

/// Scans a non-zero integer literal at the cursor.
///
/// Accumulation is checked so that a literal past the integer range is
/// reported rather than wrapping.
fn parse_integer(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let mut value: i64 = 0;
    while let Some(c) = parser.peek() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit as i64))
            .ok_or(SyntaxError::IntegerOutOfRange)?;
        parser.advance();
    }
    Ok(Expr::Int(value))
}

/// Parses the remainder of an array literal after the opening bracket.
///
/// Items are separated by commas; the literal may be empty or nested to
/// any depth.
fn parse_array_items(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let mut items = Vec::new();
    parser.skip_whitespace();
    if !parser.eat(']') {
        loop {
            items.push(parse_expr(parser)?);
            parser.skip_whitespace();
            if parser.eat(',') {
                continue;
            }
            if parser.eat(']') {
                break;
            }
            return Err(match parser.peek() {
                Some(found) => SyntaxError::UnexpectedChar { found },
                None => SyntaxError::UnexpectedEof,
            });
        }
    }
    Ok(Expr::Array(items))
}
