//! Span unit tests
//!
//! Covers Position, Span and slicing source text by span.

use crate::util::span::{Position, Span};

#[cfg(test)]
mod position_tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(1, 5);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 5);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_position_with_offset() {
        let pos = Position::with_offset(2, 3, 17);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 3);
        assert_eq!(pos.offset, 17);
    }

    #[test]
    fn test_position_display() {
        let pos = Position::new(10, 20);
        assert_eq!(format!("{}", pos), "10:20");
    }
}

#[cfg(test)]
mod span_tests {
    use super::*;

    fn span(
        start: usize,
        end: usize,
    ) -> Span {
        Span::new(
            Position::with_offset(1, start + 1, start),
            Position::with_offset(1, end + 1, end),
        )
    }

    #[test]
    fn test_span_dummy() {
        assert!(Span::dummy().is_dummy());
        assert!(!span(0, 1).is_dummy());
    }

    #[test]
    fn test_span_len_and_empty() {
        assert_eq!(span(4, 9).len(), 5);
        assert!(span(3, 3).is_empty());
        assert!(!span(3, 4).is_empty());
    }

    #[test]
    fn test_span_merge() {
        let merged = span(4, 6).merge(span(0, 2));
        assert_eq!(merged.start.offset, 0);
        assert_eq!(merged.end.offset, 6);
    }

    #[test]
    fn test_span_merge_with_dummy() {
        let real = span(2, 5);
        assert_eq!(Span::dummy().merge(real), real);
        assert_eq!(real.merge(Span::dummy()), real);
    }

    #[test]
    fn test_span_text() {
        let source = "let foobar = 1;";
        assert_eq!(span(4, 10).text(source), Some("foobar"));
        assert_eq!(span(4, 99).text(source), None);
    }

    #[test]
    fn test_span_display() {
        let display = format!("{}", Span::new(Position::new(1, 1), Position::new(1, 10)));
        assert_eq!(display, "[1:1 - 1:10]");
    }
}
