//! Abstract Syntax Tree (AST) definitions
//!
//! Every node keeps the token it was built from so diagnostics can point at
//! source text. Statements and expressions are closed sum types; extending
//! the language means adding a variant and letting the compiler find every
//! `match` that must handle it.

use crate::frontend::lexer::tokens::{Token, TokenKind};
use crate::util::span::Span;
use serde::Serialize;
use std::fmt;

/// Root of every tree the parser builds
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    /// Top-level statements in source order
    pub statements: Vec<Statement>,
}

impl Program {
    /// Literal of the first statement's token, or `""` for an empty program
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|s| s.token_literal())
            .unwrap_or("")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Identifier node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    /// Build an identifier from an `IDENT` token
    pub fn from_token(token: Token) -> Self {
        let name = token.literal.clone();
        Identifier { token, name }
    }
}

impl fmt::Display for Identifier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        token: Token,
        name: Identifier,
        value: Expression,
    },
    /// `return <value>;`
    Return { token: Token, value: Expression },
    /// A bare expression, optionally followed by `;`
    Expression { token: Token, expression: Expression },
}

impl Statement {
    /// Token the statement started with
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. } => token,
        }
    }

    #[inline]
    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    /// Span from the first token to the end of the last sub-expression
    pub fn span(&self) -> Span {
        match self {
            Statement::Let { token, value, .. } | Statement::Return { token, value } => {
                token.span.merge(value.span())
            }
            Statement::Expression { expression, .. } => expression.span(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Statement::Let { token, name, value } => {
                write!(f, "{} {} = {};", token.literal, name, value)
            }
            Statement::Return { token, value } => write!(f, "{} {};", token.literal, value),
            Statement::Expression { expression, .. } => write!(f, "{}", expression),
        }
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    /// `<operator><operand>`
    Prefix {
        token: Token,
        operator: PrefixOperator,
        operand: Box<Expression>,
    },
    /// `<left> <operator> <right>`
    Infix {
        token: Token,
        operator: InfixOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    /// Token the node was built from (the operator token for prefix/infix)
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(ident) => &ident.token,
            Expression::IntegerLiteral { token, .. }
            | Expression::Prefix { token, .. }
            | Expression::Infix { token, .. } => token,
        }
    }

    #[inline]
    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    pub fn span(&self) -> Span {
        match self {
            Expression::Identifier(ident) => ident.token.span,
            Expression::IntegerLiteral { token, .. } => token.span,
            Expression::Prefix { token, operand, .. } => token.span.merge(operand.span()),
            Expression::Infix { left, right, .. } => left.span().merge(right.span()),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral { value, .. } => write!(f, "{}", value),
            Expression::Prefix {
                operator, operand, ..
            } => write!(f, "({}{})", operator, operand),
            Expression::Infix {
                operator,
                left,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrefixOperator {
    /// `-`
    Minus,
    /// `!`
    Bang,
}

impl PrefixOperator {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Minus => Some(PrefixOperator::Minus),
            TokenKind::Bang => Some(PrefixOperator::Bang),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixOperator::Minus => "-",
            PrefixOperator::Bang => "!",
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InfixOperator {
    Plus,
    Minus,
    Asterisk,
    Slash,
    Eq,
    NotEq,
    Lt,
    Gt,
}

impl InfixOperator {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(InfixOperator::Plus),
            TokenKind::Minus => Some(InfixOperator::Minus),
            TokenKind::Asterisk => Some(InfixOperator::Asterisk),
            TokenKind::Slash => Some(InfixOperator::Slash),
            TokenKind::Eq => Some(InfixOperator::Eq),
            TokenKind::NotEq => Some(InfixOperator::NotEq),
            TokenKind::Lt => Some(InfixOperator::Lt),
            TokenKind::Gt => Some(InfixOperator::Gt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::Asterisk => "*",
            InfixOperator::Slash => "/",
            InfixOperator::Eq => "==",
            InfixOperator::NotEq => "!=",
            InfixOperator::Lt => "<",
            InfixOperator::Gt => ">",
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
