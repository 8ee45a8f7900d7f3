//! Prefix expression parsing (nud - null denotation)

use super::ast::*;
use super::state::Precedence;
use super::{ParseError, Parser};
use crate::frontend::lexer::tokens::TokenKind;

/// Handler for a token that can start an expression
pub(crate) type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Option<Expression>;

impl<'a> Parser<'a> {
    /// Prefix handler table
    #[inline]
    pub(crate) fn prefix_fn(kind: TokenKind) -> Option<PrefixParseFn<'a>> {
        match kind {
            TokenKind::Ident => Some(Self::parse_identifier),
            TokenKind::Int => Some(Self::parse_integer_literal),
            TokenKind::Minus | TokenKind::Bang => Some(Self::parse_prefix_expression),
            TokenKind::LParen => Some(Self::parse_grouped_expression),
            _ => None,
        }
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::from_token(
            self.cur_token.clone(),
        )))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        match parse_int_literal(&token.literal) {
            Some(value) => Some(Expression::IntegerLiteral { token, value }),
            None => {
                self.error(ParseError::InvalidInteger {
                    span: token.span,
                    literal: token.literal,
                });
                None
            }
        }
    }

    /// Parse unary operator expression
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = PrefixOperator::from_kind(token.kind)?;
        self.next_token();

        let operand = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix {
            token,
            operator,
            operand: Box::new(operand),
        })
    }

    /// `( expr )` yields the inner expression itself
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }
}

/// Convert integer literal text to an `i64`
///
/// Accepts decimal, `0x` hex, `0o` or leading-`0` octal and `0b` binary.
/// Returns `None` for malformed text or values outside the `i64` range.
pub fn parse_int_literal(text: &str) -> Option<i64> {
    let (digits, radix) = if let Some(rest) = strip_radix_prefix(text, 'x') {
        (rest, 16)
    } else if let Some(rest) = strip_radix_prefix(text, 'o') {
        (rest, 8)
    } else if let Some(rest) = strip_radix_prefix(text, 'b') {
        (rest, 2)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };

    // from_str_radix would otherwise accept a sign
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

fn strip_radix_prefix(
    text: &str,
    marker: char,
) -> Option<&str> {
    let rest = text.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}
