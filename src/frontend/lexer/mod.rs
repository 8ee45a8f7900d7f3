//! Lexer module
//!
//! Scans an immutable source string one byte at a time. Every call to
//! [`Lexer::next_token`] consumes exactly one token; the lexer never fails,
//! unrecognized bytes come back as [`TokenKind::Illegal`] and scanning
//! continues after them.

pub mod tokens;

pub use tokens::{lookup_ident, Token, TokenKind};

use crate::util::span::{Position, Span};
use tracing::trace;

/// Tokenize a whole source string
///
/// The returned vector always ends with exactly one `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}

/// Byte-oriented tokenizer over a borrowed source string
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    /// Offset of `ch`
    position: usize,
    /// Offset of the byte after `ch`
    read_position: usize,
    /// Byte under the cursor, `None` once the input is exhausted
    ch: Option<u8>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned on the first byte of `input`
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: None,
            line: 1,
            column: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Scan and return the next token
    ///
    /// At end of input this returns an `Eof` token with an empty literal,
    /// and keeps returning it on every later call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.cursor_pos();
        let ch = match self.ch {
            Some(ch) => ch,
            None => return Token::new(TokenKind::Eof, "", Span::new(start, start)),
        };

        let kind = match ch {
            b'=' => self.either(b'=', TokenKind::Eq, TokenKind::Assign),
            b'!' => self.either(b'=', TokenKind::NotEq, TokenKind::Bang),
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            c if is_letter(c) => return self.read_identifier(start),
            c if is_digit(c) => return self.read_number(start),
            _ => TokenKind::Illegal,
        };
        self.read_char();

        let literal = if kind == TokenKind::Illegal {
            // may be half of a multi-byte sequence, so never slice here
            char::from(ch).to_string()
        } else {
            self.input[start.offset..self.position].to_string()
        };
        let token = Token::new(kind, literal, Span::new(start, self.cursor_pos()));
        trace!("token {}", token);
        token
    }

    /// Advance the cursor by one byte
    fn read_char(&mut self) {
        match self.ch {
            Some(b'\n') => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }
        self.position = self.read_position.min(self.input.len());
        self.read_position = self.position + 1;
        self.ch = self.input.as_bytes().get(self.position).copied();
    }

    #[inline]
    fn peek_char(&self) -> Option<u8> {
        self.input.as_bytes().get(self.read_position).copied()
    }

    /// Two-byte operator if the next byte is `second`, else the one-byte form
    fn either(
        &mut self,
        second: u8,
        double: TokenKind,
        single: TokenKind,
    ) -> TokenKind {
        if self.peek_char() == Some(second) {
            self.read_char();
            double
        } else {
            single
        }
    }

    #[inline]
    fn cursor_pos(&self) -> Position {
        Position::with_offset(self.line, self.column, self.position)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    fn read_identifier(
        &mut self,
        start: Position,
    ) -> Token {
        while matches!(self.ch, Some(c) if is_letter(c)) {
            self.read_char();
        }
        let literal = &self.input[start.offset..self.position];
        let token = Token::new(
            lookup_ident(literal),
            literal,
            Span::new(start, self.cursor_pos()),
        );
        trace!("token {}", token);
        token
    }

    fn read_number(
        &mut self,
        start: Position,
    ) -> Token {
        while matches!(self.ch, Some(c) if is_digit(c)) {
            self.read_char();
        }
        let literal = &self.input[start.offset..self.position];
        let token = Token::new(TokenKind::Int, literal, Span::new(start, self.cursor_pos()));
        trace!("token {}", token);
        token
    }
}

/// Yields tokens up to, but not including, `Eof`
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}

#[inline]
fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

#[inline]
fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests;
