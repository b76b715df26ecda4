//! Token-level cursor with one token of lookahead.

use crate::Source;
use crate::SourcePosition;
use crate::SyntaxError;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token_source::StrTokenSource;
use std::sync::Arc;

/// A cursor over the tokens of a [`Source`].
///
/// The lexer always has a *current* token. It starts positioned on a
/// [`TokenKind::StartOfFile`] token; the first [`advance()`](Self::advance)
/// moves onto the first real token. Once the end of input is reached the
/// current token stays [`TokenKind::EndOfFile`].
///
/// Tokens are produced lazily: nothing past the lookahead slot is lexed.
pub struct Lexer<'src> {
    token_source: StrTokenSource<'src>,
    current: Token<'src>,

    /// The token after `current`, when [`lookahead()`](Self::lookahead)
    /// has already lexed it.
    lookahead: Option<Token<'src>>,

    /// End position of the most recently consumed token.
    last_token_end: SourcePosition,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src Arc<Source>) -> Self {
        let start = SourcePosition::default();
        Self {
            token_source: StrTokenSource::new(source),
            current: Token::new(TokenKind::StartOfFile, start, start),
            lookahead: None,
            last_token_end: start,
        }
    }

    pub fn source(&self) -> &'src Arc<Source> {
        self.token_source.source()
    }

    /// The current token.
    pub fn token(&self) -> &Token<'src> {
        &self.current
    }

    /// End position of the most recently consumed token. Used as the end of
    /// a production's origin.
    pub fn last_token_end(&self) -> SourcePosition {
        self.last_token_end
    }

    /// Consumes the current token and returns the new current token.
    pub fn advance(&mut self) -> Result<&Token<'src>, SyntaxError> {
        self.consume()?;
        Ok(&self.current)
    }

    /// Consumes the current token, returning it by value.
    pub fn consume(&mut self) -> Result<Token<'src>, SyntaxError> {
        let next = match self.lookahead.take() {
            Some(token) => token,
            None => self.token_source.next_token()?,
        };
        let consumed = std::mem::replace(&mut self.current, next);
        self.last_token_end = consumed.end;
        Ok(consumed)
    }

    /// Returns the token after the current one without consuming anything.
    pub fn lookahead(&mut self) -> Result<&Token<'src>, SyntaxError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.token_source.next_token()?,
        };
        Ok(self.lookahead.insert(token))
    }
}
