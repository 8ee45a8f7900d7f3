//! Infix expression parsing (led - left denotation)

use super::ast::*;
use super::Parser;
use crate::frontend::lexer::tokens::TokenKind;

/// Handler for a token that continues an expression from its left operand
pub(crate) type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Option<Expression>;

impl<'a> Parser<'a> {
    /// Infix handler table
    #[inline]
    pub(crate) fn infix_fn(kind: TokenKind) -> Option<InfixParseFn<'a>> {
        match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => Some(Self::parse_infix_expression),
            _ => None,
        }
    }

    /// Parse binary operator expression
    ///
    /// Called with the operator as the current token.
    fn parse_infix_expression(
        &mut self,
        left: Expression,
    ) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = InfixOperator::from_kind(token.kind)?;
        let precedence = self.cur_precedence();
        self.next_token();

        // Recursing at the operator's own precedence (not one higher) makes
        // a - b - c fold as (a - b) - c
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix {
            token,
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}
