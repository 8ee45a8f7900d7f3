//! Frontend pipeline
//!
//! This module contains the lexer and parser.
//! The frontend turns source text into a syntax tree plus diagnostics.

use thiserror::Error;
use tracing::debug;

pub mod lexer;
pub mod parser;

use lexer::Lexer;
use parser::ast::Program;
use parser::{ParseError, Parser};

/// Result of running the frontend over one source string
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    /// Tree built from the statements that parsed
    pub program: Program,
    /// Diagnostics in the order they were found
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// Whether the tree is a faithful reflection of the input
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a hard result, failing if any diagnostic was recorded
    pub fn into_result(self) -> Result<Program, FrontendError> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(FrontendError::Parse {
                count: self.errors.len(),
                errors: self.errors,
            })
        }
    }
}

/// Parse source text with a fresh lexer/parser pair
pub fn parse_source(source: &str) -> ParseOutput {
    debug!("Parsing source code ({} bytes)", source.len());
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.into_errors();
    debug!(
        "Parsing finished: {} statements, {} errors",
        program.statements.len(),
        errors.len()
    );
    ParseOutput { program, errors }
}

/// Parse source text, treating any diagnostic as failure
pub fn check_source(source: &str) -> Result<Program, FrontendError> {
    parse_source(source).into_result()
}

/// Frontend errors
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("Parse error: {} problem(s), first: {}", .count, first_message(.errors))]
    Parse {
        count: usize,
        errors: Vec<ParseError>,
    },
}

fn first_message(errors: &[ParseError]) -> String {
    errors.first().map(ToString::to_string).unwrap_or_default()
}
