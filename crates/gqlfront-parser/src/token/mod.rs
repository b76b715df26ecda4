//! Tokens produced by the [`Lexer`](crate::Lexer).

mod string_cooking;
mod token_kind;

pub use token_kind::TokenKind;

use crate::SourcePosition;

/// A lexed token with its source positions.
///
/// `start.line()`/`start.column()` are the token's line number and line
/// position. Value-carrying kinds borrow their text from the source when
/// possible.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind<'src>, start: SourcePosition, end: SourcePosition) -> Self {
        Self { kind, start, end }
    }
}
