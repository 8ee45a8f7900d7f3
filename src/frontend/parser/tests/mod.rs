//! Parser tests module


use crate::frontend::parser::ast::*;
use crate::frontend::parser::{parse, ParseError};

/// Parse and insist on a clean result
pub(super) fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(
        errors.is_empty(),
        "parser had {} errors for {:?}: {:?}",
        errors.len(),
        source,
        errors.iter().map(ToString::to_string).collect::<Vec<_>>()
    );
    program
}

/// The expression of a program made of exactly one expression statement
pub(super) fn single_expression(source: &str) -> Expression {
    let program = parse_ok(source);
    assert_eq!(program.statements.len(), 1, "source {:?}", source);
    match program.statements.into_iter().next() {
        Some(Statement::Expression { expression, .. }) => expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

/// Parse expecting failures, returning the program and rendered messages
pub(super) fn parse_err(source: &str) -> (Program, Vec<String>) {
    let (program, errors) = parse(source);
    assert!(!errors.is_empty(), "expected errors for {:?}", source);
    (program, errors.iter().map(ParseError::to_string).collect())
}

pub(super) fn assert_integer(
    expr: &Expression,
    expected: i64,
) {
    match expr {
        Expression::IntegerLiteral { token, value } => {
            assert_eq!(*value, expected);
            assert_eq!(token.literal, expected.to_string());
        }
        other => panic!("expected integer literal {}, got {:?}", expected, other),
    }
}

pub(super) fn assert_identifier(
    expr: &Expression,
    expected: &str,
) {
    match expr {
        Expression::Identifier(ident) => {
            assert_eq!(ident.name, expected);
            assert_eq!(ident.token.literal, expected);
        }
        other => panic!("expected identifier {}, got {:?}", expected, other),
    }
}
