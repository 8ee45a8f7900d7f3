//! Pratt Parser expression parsing

use super::ast::*;
use super::state::Precedence;
use super::{ParseError, Parser};
use crate::frontend::lexer::tokens::TokenKind;

/// Deepest expression nesting the parser will descend into
pub const MAX_EXPRESSION_DEPTH: usize = 256;

impl<'a> Parser<'a> {
    /// Parse an expression using precedence climbing
    ///
    /// # Arguments
    /// * `precedence` - Only infix operators binding strictly tighter than
    ///   this are folded into the result
    ///
    /// # Algorithm
    /// 1. Parse the prefix expression (nud) for the current token
    /// 2. While the lookahead is not `;` and binds tighter than `precedence`:
    ///    - advance onto the operator
    ///    - fold it into the left-hand side with its infix handler (led)
    /// 3. Return the accumulated expression
    ///
    /// On return the current token is the last token of the expression.
    /// Nesting past [`MAX_EXPRESSION_DEPTH`] records an error and yields
    /// `None`.
    pub fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Option<Expression> {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            self.error(ParseError::NestingTooDeep {
                max_depth: MAX_EXPRESSION_DEPTH,
                span: self.cur_token.span,
            });
            return None;
        }

        self.depth += 1;
        let expr = self.parse_expression_inner(precedence);
        self.depth -= 1;
        expr
    }

    fn parse_expression_inner(
        &mut self,
        precedence: Precedence,
    ) -> Option<Expression> {
        let prefix = match Self::prefix_fn(self.cur_token.kind) {
            Some(prefix) => prefix,
            None => {
                self.error(ParseError::NoPrefixParseFn {
                    kind: self.cur_token.kind,
                    span: self.cur_token.span,
                });
                return None;
            }
        };

        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let infix = match Self::infix_fn(self.peek_token.kind) {
                Some(infix) => infix,
                None => return Some(left),
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }
}
