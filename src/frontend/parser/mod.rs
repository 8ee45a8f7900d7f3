//! Parser module
//!
//! This module implements a Pratt Parser for the Chlorophyll language.
//! Statements are parsed by recursive descent, expressions by precedence
//! climbing over per-token prefix (nud) and infix (led) handlers.
//!
//! The parser pulls tokens from its [`Lexer`] one at a time and never looks
//! further than one token past the current one. Problems are collected as
//! [`ParseError`]s instead of aborting the parse, so a call to
//! [`Parser::parse_program`] always returns a tree.

pub mod ast;
mod expr;
mod led;
mod nud;
mod state;
mod stmt;

pub use expr::MAX_EXPRESSION_DEPTH;
pub use nud::parse_int_literal;
pub use state::Precedence;

use crate::frontend::lexer::tokens::*;
use crate::frontend::lexer::Lexer;
use crate::util::span::Span;
use ast::*;
use serde::Serialize;
use tracing::debug;

/// Parse source text into a program plus its diagnostics
///
/// A fresh lexer/parser pair is built for every call.
///
/// # Example
/// ```
/// use chlorophyll::frontend::parser::parse;
///
/// let (program, errors) = parse("let x = 5 + 5 * 10;");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (5 + (5 * 10));");
/// ```
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Tree builder
///
/// Owns its lexer exclusively and keeps a two-token window over it.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<ParseError>,
    /// Current `parse_expression` nesting
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser, priming the current and peek tokens
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::from(TokenKind::Eof),
            peek_token: Token::from(TokenKind::Eof),
            errors: Vec::new(),
            depth: 0,
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parse the remaining input into a [`Program`]
    ///
    /// Statements that fail are left out of the tree; the parser skips to
    /// the next `;` and carries on. Check [`Parser::errors`] afterwards.
    pub fn parse_program(&mut self) -> Program {
        self.errors.clear();
        let mut program = Program::default();

        while !self.cur_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(stmt) => {
                    debug!("parsed statement {}: {}", program.statements.len() + 1, stmt);
                    program.statements.push(stmt);
                }
                None => {
                    debug!(
                        "dropping statement at {}, current token {}",
                        self.cur_token.span.start, self.cur_token
                    );
                    self.synchronize();
                }
            }
            self.next_token();
        }

        debug!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );
        program
    }

    /// Diagnostics from the most recent parse, in the order they were found
    #[inline]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Diagnostics rendered as messages
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Consume the parser, keeping only its diagnostics
    #[inline]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}

/// Parse error types
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind, span: Span },

    #[error("could not parse {literal:?} as integer")]
    InvalidInteger { literal: String, span: Span },

    #[error("expression nested deeper than {max_depth} levels")]
    NestingTooDeep { max_depth: usize, span: Span },
}

impl ParseError {
    /// Location of the offending token
    pub fn span(&self) -> Span {
        match self {
            ParseError::ExpectedToken { span, .. }
            | ParseError::NoPrefixParseFn { span, .. }
            | ParseError::InvalidInteger { span, .. }
            | ParseError::NestingTooDeep { span, .. } => *span,
        }
    }
}

#[cfg(test)]
mod tests;
