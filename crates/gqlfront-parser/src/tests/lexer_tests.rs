//! Tests for the `Lexer` cursor.

use crate::Lexer;
use crate::Source;
use crate::SyntaxErrorKind;
use crate::token::TokenKind;
use std::sync::Arc;

/// Verifies that the lexer starts on a start-of-file token and that
/// `advance()` returns the new current token.
#[test]
fn starts_on_start_of_file() {
    let source = Arc::new(Source::from("query"));
    let mut lexer = Lexer::new(&source);
    assert_eq!(lexer.token().kind, TokenKind::StartOfFile);
    assert!(lexer.advance().unwrap().kind.is_keyword("query"));
    assert!(lexer.token().kind.is_keyword("query"));
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::EndOfFile);
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::EndOfFile);
}

/// Verifies that `lookahead()` peeks without consuming, including repeated
/// peeks.
#[test]
fn lookahead_does_not_consume() {
    let source = Arc::new(Source::from("a b c"));
    let mut lexer = Lexer::new(&source);
    lexer.advance().unwrap();
    assert!(lexer.lookahead().unwrap().kind.is_keyword("b"));
    assert!(lexer.lookahead().unwrap().kind.is_keyword("b"));
    assert!(lexer.token().kind.is_keyword("a"));
    assert!(lexer.advance().unwrap().kind.is_keyword("b"));
    assert!(lexer.advance().unwrap().kind.is_keyword("c"));
}

/// Verifies that the end of the last consumed token is recorded.
#[test]
fn records_last_token_end() {
    let source = Arc::new(Source::from("  abc   def"));
    let mut lexer = Lexer::new(&source);
    lexer.advance().unwrap();
    let consumed = lexer.consume().unwrap();
    assert!(consumed.kind.is_keyword("abc"));
    assert_eq!(lexer.last_token_end().byte_offset(), 5);
    assert!(lexer.token().kind.is_keyword("def"));
}

/// Verifies that lexical errors surface through `advance()` and
/// `lookahead()`.
#[test]
fn errors_surface() {
    let source = Arc::new(Source::from("a ~"));
    let mut lexer = Lexer::new(&source);
    lexer.advance().unwrap();
    let error = lexer.lookahead().unwrap_err();
    assert_eq!(error.kind(), &SyntaxErrorKind::InvalidCharacter);
    assert_eq!(error.origin().byte_range(), 2..3);
}
