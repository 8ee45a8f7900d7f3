//! Shell integration tests over in-memory streams

use chlorophyll::repl::{greeting, run_with_io};
use chlorophyll::util::config::{ReplConfig, ReplMode};

fn run(
    input: &str,
    mode: ReplMode,
) -> String {
    let config = ReplConfig {
        mode,
        colors: false,
        ..ReplConfig::default()
    };
    let mut output = Vec::new();
    run_with_io(input.as_bytes(), &mut output, &config).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_token_mode_prints_each_token() {
    let output = run("x == 10\n", ReplMode::Tokens);
    assert_eq!(
        output,
        ">> {Type:IDENT Literal:x}\n{Type:== Literal:==}\n{Type:INT Literal:10}\n>> "
    );
}

#[test]
fn test_fresh_lexer_per_line() {
    let output = run("let\nlet\n", ReplMode::Tokens);
    assert_eq!(output.matches("{Type:LET Literal:let}").count(), 2);
}

#[test]
fn test_illegal_input_is_shown_not_fatal() {
    let output = run("#\n", ReplMode::Tokens);
    assert!(output.contains("{Type:ILLEGAL Literal:#}"));
}

#[test]
fn test_parse_mode_and_switching() {
    let output = run("-a * b\n:tokens\n;\n", ReplMode::Parse);
    assert_eq!(output, ">> ((-a) * b)\n>> mode: tokens\n>> {Type:; Literal:;}\n>> ");
}

#[test]
fn test_greeting() {
    let text = greeting();
    assert!(text.starts_with("Hello "));
    assert!(text.contains("Welcome to Chlorophyll."));
    assert!(text.ends_with("Type commands here"));
}
