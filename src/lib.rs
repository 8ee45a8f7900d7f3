//! Chlorophyll Programming Language
//!
//! Front-end for a small educational language: a byte-oriented tokenizer and
//! a Pratt parser that turn source text into a syntax tree.
//!
//! # Example
//!
//! ```
//! use chlorophyll::frontend::parser::parse;
//!
//! let (program, errors) = parse("let x = 5; return -x;");
//! assert!(errors.is_empty());
//! assert_eq!(program.statements.len(), 2);
//! ```

#![doc(html_root_url = "https://docs.rs/chlorophyll")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod repl;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::lexer::{tokenize, Lexer, Token, TokenKind};
pub use frontend::parser::{parse, ParseError, Parser};
pub use frontend::{check_source, parse_source, FrontendError, ParseOutput};

use std::fs;
use std::path::Path;
use tracing::debug;

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Chlorophyll";

/// Parse a source file
///
/// Diagnostics are part of the returned [`ParseOutput`]; only I/O problems
/// are errors here.
pub fn parse_file(path: &Path) -> Result<ParseOutput> {
    debug!("Parsing file {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(parse_source(&source))
}

/// Parse a source file, failing if it has any diagnostics
pub fn check_file(path: &Path) -> Result<frontend::parser::ast::Program> {
    let output = parse_file(path)?;
    output
        .into_result()
        .with_context(|| format!("Failed to check: {}", path.display()))
}
