//! Public API integration tests
//!
//! Drives the tokenizer and parser through the crate root re-exports.

use chlorophyll::frontend::parser::ast::{Expression, InfixOperator, Statement};
use chlorophyll::{check_source, parse, parse_source, tokenize, Lexer, Parser, TokenKind};

#[test]
fn test_tokenize_then_parse_same_source() {
    let source = "let total = price * 3 + tax;";
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[9].kind, TokenKind::Eof);

    let (program, errors) = parse(source);
    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "let total = ((price * 3) + tax);");
}

#[test]
fn test_parser_owns_its_lexer() {
    let lexer = Lexer::new("return 1 == 2;");
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());

    match &program.statements[0] {
        Statement::Return { value, .. } => match value {
            Expression::Infix { operator, .. } => assert_eq!(*operator, InfixOperator::Eq),
            other => panic!("expected infix, got {:?}", other),
        },
        other => panic!("expected return, got {:?}", other),
    }
}

#[test]
fn test_independent_parses_share_nothing() {
    let sources = ["let a = 1;", "let = 2;", "-b * c", "@"];
    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let source = source.to_string();
            std::thread::spawn(move || {
                let output = parse_source(&source);
                (output.program.to_string(), output.errors.len())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], ("let a = 1;".to_string(), 0));
    assert_eq!(results[1], (String::new(), 1));
    assert_eq!(results[2], ("((-b) * c)".to_string(), 0));
    assert_eq!(results[3], (String::new(), 1));
}

#[test]
fn test_check_source_fails_on_diagnostics() {
    assert!(check_source("let x = 1;").is_ok());

    let err = check_source("let x 1; let y = ;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error: 2 problem(s), first: expected next token to be =, got INT instead"
    );
}

#[test]
fn test_multiline_program() {
    let source = "
        let five = 5;
        let ten = 10;
        let result = five + ten * 2 - -1;
        result != 25;
        return !result;
    ";
    let output = parse_source(source);
    assert!(output.is_clean());
    assert_eq!(
        output.program.to_string(),
        "let five = 5;\nlet ten = 10;\nlet result = ((five + (ten * 2)) - (-1));\n(result != 25)\nreturn (!result);"
    );
}
