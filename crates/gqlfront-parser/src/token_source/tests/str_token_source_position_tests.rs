//! Tests for line and column tracking in `StrTokenSource`.

use crate::Source;
use crate::token::Token;
use crate::token_source::StrTokenSource;
use proptest::prelude::*;
use std::sync::Arc;

fn lex(source: &Arc<Source>) -> Vec<Token<'_>> {
    StrTokenSource::new(source)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|err| panic!("unexpected lex error: {err}"))
}

/// Verifies that `\n`, `\r\n` and `\r` each count as one line break.
#[test]
fn line_terminators_count_once() {
    let source = Arc::new(Source::from("a\nb\r\nc\rd"));
    let tokens = lex(&source);
    let lines: Vec<usize> = tokens.iter().map(|t| t.start.line()).collect();
    assert_eq!(lines, vec![0, 1, 2, 3, 3]);
    assert!(tokens.iter().take(4).all(|t| t.start.column() == 0));
}

/// Verifies that columns count scalar values while UTF-16 columns count
/// code units.
#[test]
fn unicode_columns() {
    let source = Arc::new(Source::from("\"🎉\" x"));
    let tokens = lex(&source);
    let x = &tokens[1];
    assert_eq!(x.start.column(), 4);
    assert_eq!(x.start.column_utf16(), 5);
    assert_eq!(x.start.byte_offset(), 7);
}

/// Verifies that a comment with multi-byte characters leaves correct
/// positions on the following line.
#[test]
fn comment_then_next_line() {
    let source = Arc::new(Source::from("# é 🎉\n  name"));
    let tokens = lex(&source);
    assert_eq!(tokens[0].start.line(), 1);
    assert_eq!(tokens[0].start.column(), 2);
    assert_eq!(tokens[0].start.byte_offset(), 12);
}

/// Verifies positions after a block string spanning several lines.
#[test]
fn position_after_block_string() {
    let source = Arc::new(Source::from("\"\"\"\r\n  one\r\n\"\"\" z"));
    let tokens = lex(&source);
    let z = &tokens[1];
    assert_eq!(z.start.line(), 2);
    assert_eq!(z.start.column(), 4);
}

/// Verifies the end position of a token is just past its last character.
#[test]
fn token_end_is_exclusive() {
    let source = Arc::new(Source::from("  hello"));
    let tokens = lex(&source);
    assert_eq!(tokens[0].start.byte_offset(), 2);
    assert_eq!(tokens[0].end.byte_offset(), 7);
    assert_eq!(tokens[0].end.column(), 7);
}

proptest! {
    /// Verifies that every lexed name starts at the line and column where it
    /// was placed.
    #[test]
    fn names_land_where_placed(
        layout in prop::collection::vec((0usize..3, 0usize..4, "[a-z_][a-z0-9_]{0,6}"), 1..12),
    ) {
        let mut text = String::new();
        let mut expected = Vec::new();
        let mut line = 0;
        for (newlines, spaces, word) in &layout {
            // Words on the same line need at least one separator.
            let spaces = if *newlines == 0 && !text.is_empty() { spaces + 1 } else { *spaces };
            for _ in 0..*newlines {
                text.push('\n');
                line += 1;
            }
            text.push_str(&" ".repeat(spaces));
            let column = text.len() - text.rfind('\n').map_or(0, |i| i + 1);
            expected.push((line, column, word.clone()));
            text.push_str(word);
        }

        let source = Arc::new(Source::from(text.as_str()));
        let tokens = lex(&source);
        prop_assert_eq!(tokens.len(), expected.len() + 1);
        for (token, (line, column, word)) in tokens.iter().zip(&expected) {
            prop_assert_eq!(token.start.line(), *line);
            prop_assert_eq!(token.start.column(), *column);
            prop_assert!(token.kind.is_keyword(word));
        }
    }

    /// Verifies that every well-formed integer lexes to a single Int token
    /// with the same text.
    #[test]
    fn integers_lex_as_int(value in any::<i64>()) {
        let text = value.to_string();
        let source = Arc::new(Source::from(text.as_str()));
        let tokens = lex(&source);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(
            matches!(&tokens[0].kind, crate::token::TokenKind::IntValue(raw) if *raw == text)
        );
    }

    /// Verifies that finite floats printed with an exponent lex as a single
    /// Float token.
    #[test]
    fn floats_lex_as_float(value in -1.0e30f64..1.0e30f64) {
        let text = format!("{value:e}");
        let source = Arc::new(Source::from(text.as_str()));
        let tokens = lex(&source);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(
            matches!(&tokens[0].kind, crate::token::TokenKind::FloatValue(raw) if *raw == text)
        );
    }
}
