//! Parser state and token window management

use super::{ParseError, Parser};
use crate::frontend::lexer::tokens::*;
use std::mem;
use tracing::trace;

/// Statement keywords that end error recovery
const SYNC_POINTS: &[TokenKind] = &[TokenKind::Let, TokenKind::Return];

/// Binding strength of operators, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// unary `-` `!`
    Prefix,
    /// reserved for call expressions
    Call,
}

impl Precedence {
    /// Precedence a token has when it appears in infix position
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

impl<'a> Parser<'a> {
    /// Current token
    #[inline]
    pub fn cur_token(&self) -> &Token {
        &self.cur_token
    }

    /// Lookahead token
    #[inline]
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Shift the window one token forward
    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = mem::replace(&mut self.peek_token, next);
        trace!("cur={} peek={}", self.cur_token, self.peek_token);
    }

    #[inline]
    pub(crate) fn cur_token_is(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.cur_token.kind == kind
    }

    #[inline]
    pub(crate) fn peek_token_is(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.peek_token.kind == kind
    }

    /// Advance if the lookahead is `kind`, otherwise record an error
    pub(crate) fn expect_peek(
        &mut self,
        kind: TokenKind,
    ) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(
        &mut self,
        expected: TokenKind,
    ) {
        self.error(ParseError::ExpectedToken {
            expected,
            found: self.peek_token.kind,
            span: self.peek_token.span,
        });
    }

    #[inline]
    pub(crate) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    #[inline]
    pub(crate) fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }

    /// Add a parse error
    #[inline]
    pub(crate) fn error(
        &mut self,
        error: ParseError,
    ) {
        trace!("parse error: {}", error);
        self.errors.push(error);
    }

    /// Check if there are errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Skip to the end of the current statement
    ///
    /// Stops on a `;` (left as the current token), at end of input, or just
    /// before a keyword that starts a new statement.
    pub(crate) fn synchronize(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            if SYNC_POINTS.contains(&self.peek_token.kind) {
                break;
            }
            self.next_token();
        }
    }
}
