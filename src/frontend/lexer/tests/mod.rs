//! Lexer unit tests
//!
//! Exercises the byte tokenizer: operators, words, numbers, illegal input and
//! end-of-input behaviour.
#![allow(unused_imports)]
use crate::frontend::lexer::{lookup_ident, tokenize, Lexer, Token, TokenKind};
use crate::util::span::Span;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

#[cfg(test)]
mod lexer_basic_tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].literal, "");
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("   \t\n\r   ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        for _ in 0..5 {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.literal, "");
        }
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let tokens: Vec<Token> = Lexer::new("let x = 5;").collect();
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Eof));
    }

    #[test]
    fn test_iterator_adapters_keep_spans() {
        let mut lexer = Lexer::new("let x = 5;");
        assert_eq!(lexer.position(|t| t.kind == TokenKind::Assign), Some(2));

        let next = lexer.next_token();
        assert_eq!(next.kind, TokenKind::Int);
        assert_eq!(next.span.start.column, 9);
        assert_eq!(next.span.start.offset, 8);
        assert_eq!(next.span.end.offset, 9);
    }
}

#[cfg(test)]
mod lexer_operator_tests {
    use super::*;

    #[test]
    fn test_single_char_operators() {
        let cases = [
            ("=", TokenKind::Assign),
            (";", TokenKind::Semicolon),
            ("(", TokenKind::LParen),
            (")", TokenKind::RParen),
            (",", TokenKind::Comma),
            ("+", TokenKind::Plus),
            ("{", TokenKind::LBrace),
            ("}", TokenKind::RBrace),
            ("-", TokenKind::Minus),
            ("!", TokenKind::Bang),
            ("/", TokenKind::Slash),
            ("*", TokenKind::Asterisk),
            ("<", TokenKind::Lt),
            (">", TokenKind::Gt),
        ];

        for (input, kind) in cases {
            let tokens = tokenize(input);
            assert_eq!(tokens.len(), 2, "input {:?}", input);
            assert_eq!(tokens[0].kind, kind, "input {:?}", input);
            assert_eq!(tokens[0].literal, input);
            assert_eq!(tokens[1].kind, TokenKind::Eof);
        }
    }

    #[test]
    fn test_two_char_operators() {
        for (input, kind) in [("==", TokenKind::Eq), ("!=", TokenKind::NotEq)] {
            let tokens = tokenize(input);
            assert_eq!(tokens.len(), 2);
            assert_eq!(tokens[0].kind, kind);
            assert_eq!(tokens[0].literal, input);
        }
    }

    #[test]
    fn test_two_char_operators_take_priority() {
        assert_eq!(
            kinds("a == b != c = !d"),
            vec![
                TokenKind::Ident,
                TokenKind::Eq,
                TokenKind::Ident,
                TokenKind::NotEq,
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::Bang,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_triple_equals_splits() {
        assert_eq!(
            kinds("==="),
            vec![TokenKind::Eq, TokenKind::Assign, TokenKind::Eof]
        );
    }

    #[test]
    fn test_bang_at_end_of_input() {
        assert_eq!(kinds("!"), vec![TokenKind::Bang, TokenKind::Eof]);
        assert_eq!(kinds("="), vec![TokenKind::Assign, TokenKind::Eof]);
    }
}

#[cfg(test)]
mod lexer_word_tests {
    use super::*;

    #[test]
    fn test_keywords() {
        let cases = [
            ("fn", TokenKind::Function),
            ("let", TokenKind::Let),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("return", TokenKind::Return),
        ];
        for (word, kind) in cases {
            assert_eq!(lookup_ident(word), kind);
            assert!(kind.is_keyword());
            let tokens = tokenize(word);
            assert_eq!(tokens[0].kind, kind);
            assert_eq!(tokens[0].literal, word);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = tokenize("letter returns");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].literal, "letter");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].literal, "returns");
    }

    #[test]
    fn test_identifier_with_underscore() {
        let tokens = tokenize("my_variable _x");
        assert_eq!(tokens[0].literal, "my_variable");
        assert_eq!(tokens[1].literal, "_x");
    }

    #[test]
    fn test_digits_end_identifier() {
        let tokens = tokenize("x1");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].literal, "x");
        assert_eq!(tokens[1].kind, TokenKind::Int);
        assert_eq!(tokens[1].literal, "1");
    }

    #[test]
    fn test_integer_is_maximal_run() {
        let tokens = tokenize("838383;");
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].literal, "838383");
        assert_eq!(tokens[1].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_let_statement_stream() {
        let tokens = tokenize("let five = 5;\nlet ten = 10;");
        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "ten"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, literal)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, kind);
            assert_eq!(token.literal, literal);
        }
    }
}

#[cfg(test)]
mod lexer_illegal_tests {
    use super::*;

    #[test]
    fn test_illegal_byte_continues() {
        let tokens = tokenize("a @ b");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].literal, "@");
        assert_eq!(tokens[2].kind, TokenKind::Ident);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_non_ascii_becomes_illegal_per_byte() {
        let tokens = tokenize("é");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_nul_byte_is_not_end_of_input() {
        let tokens = tokenize("a\0b");
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[2].literal, "b");
    }
}

#[cfg(test)]
mod lexer_span_tests {
    use super::*;

    #[test]
    fn test_spans_track_lines_and_columns() {
        let source = "let x\n  = 10;";
        let tokens = tokenize(source);

        assert_eq!(tokens[0].span.start.line, 1);
        assert_eq!(tokens[0].span.start.column, 1);
        assert_eq!(tokens[1].span.start.column, 5);

        let assign = &tokens[2];
        assert_eq!(assign.span.start.line, 2);
        assert_eq!(assign.span.start.column, 3);

        let ten = &tokens[3];
        assert_eq!(ten.span.text(source), Some("10"));
        assert_eq!(ten.span.len(), 2);
    }

    #[test]
    fn test_every_literal_matches_its_span() {
        let source = "let add = a + b * (c != 10);";
        for token in tokenize(source) {
            assert_eq!(token.span.text(source), Some(token.literal.as_str()));
        }
    }

    #[test]
    fn test_eof_span_is_empty() {
        let tokens = tokenize("x  ");
        let eof = tokens.last().unwrap();
        assert!(eof.span.is_empty());
        assert_eq!(eof.span.start.offset, 3);
    }
}

#[cfg(test)]
mod token_display_tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let tokens = tokenize("let");
        assert_eq!(tokens[0].to_string(), "{Type:LET Literal:let}");
        assert_eq!(tokens[1].to_string(), "{Type:EOF Literal:}");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::Int.to_string(), "INT");
        assert_eq!(TokenKind::NotEq.to_string(), "!=");
        assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
    }

    #[test]
    fn test_token_from_kind() {
        let token = Token::from(TokenKind::Return);
        assert_eq!(token.literal, "return");
        assert!(token.span.is_dummy());
        assert_eq!(Token::from(TokenKind::Plus).literal, "+");
        assert_eq!(Token::from(TokenKind::Eof).literal, "");
    }
}
