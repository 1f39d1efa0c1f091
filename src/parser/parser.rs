//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry
//! point. The parser advances an integer cursor over the characters of
//! the source text and predicts each production from at most one
//! character of lookahead.
//!
//! It provides low-level cursor operations used by the statement,
//! expression, and type productions:
//! - Peeking and consuming single characters
//! - Keyword matching with identifier-boundary checks
//! - Identifier scanning
//! - Whitespace skipping

use crate::{ast::statements::Stmt, errors::errors::SyntaxError};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
///
/// This struct owns the characters of the source text and tracks the
/// current position in it. All productions borrow the parser mutably and
/// advance the cursor as they consume input.
pub struct Parser {
    /// The characters of the source text
    source: Vec<char>,
    /// Current position in the source text
    cursor: usize,
}

impl Parser {
    /// Creates a new Parser instance over the given source text.
    pub fn new(source: &str) -> Self {
        Parser {
            source: source.chars().collect(),
            cursor: 0,
        }
    }

    /// Returns the character at the cursor without advancing.
    pub fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Returns the character `offset` positions past the cursor.
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.source.get(self.cursor + offset).copied()
    }

    /// Advances the cursor by one character.
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Checks whether the cursor is at (or past) the end of the input.
    pub fn is_eof(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// Consumes `c` if it is the next character.
    ///
    /// # Returns
    ///
    /// Returns true if the character matched and was consumed.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Requires the next character to be `c` and consumes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(()) if the character matched, otherwise a SyntaxError
    /// recording what was expected and what was found instead.
    pub fn expect(&mut self, c: char) -> Result<(), SyntaxError> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(SyntaxError::ExpectedChar {
                expected: c,
                found: self.peek(),
            })
        }
    }

    /// Consumes `keyword` if it is the next run of characters and is
    /// followed by an identifier boundary.
    ///
    /// A keyword only matches when the character after it is not an
    /// identifier character, so `int` is a keyword while `ints` scans as
    /// an identifier.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        let len = keyword.len();
        for (offset, expected) in keyword.chars().enumerate() {
            if self.peek_at(offset) != Some(expected) {
                return false;
            }
        }
        if self.peek_at(len).is_some_and(Self::is_identifier_char) {
            return false;
        }
        self.cursor += len;
        true
    }

    /// Scans an identifier at the cursor.
    ///
    /// # Returns
    ///
    /// Returns the identifier text, or a SyntaxError if the next
    /// character cannot start an identifier.
    pub fn parse_identifier(&mut self) -> Result<String, SyntaxError> {
        match self.peek() {
            Some(c) if Self::is_identifier_starter(c) => {
                let mut name = String::new();
                name.push(c);
                self.advance();
                while let Some(c) = self.peek() {
                    if !Self::is_identifier_char(c) {
                        break;
                    }
                    name.push(c);
                    self.advance();
                }
                Ok(name)
            }
            Some(c) => Err(SyntaxError::UnexpectedChar { found: c }),
            None => Err(SyntaxError::UnexpectedEof),
        }
    }

    /// Skips past any run of whitespace characters at the cursor.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Checks whether `c` may start an identifier.
    pub fn is_identifier_starter(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    /// Checks whether `c` may continue an identifier.
    pub fn is_identifier_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

/// Parses one statement from the given source text.
///
/// This is the main entry point for parsing. It creates a parser
/// instance over the source text and parses a single statement from it;
/// text past the end of the statement is left unconsumed.
///
/// # Returns
///
/// The parsed statement tree, or the first SyntaxError encountered.
pub fn parse(source: &str) -> Result<Stmt, SyntaxError> {
    let mut parser = Parser::new(source);
    parse_stmt(&mut parser)
}
