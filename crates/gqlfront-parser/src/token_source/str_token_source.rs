//! A token source that lexes from a [`Source`]'s text.
//!
//! Token values borrow directly from the source string (`Cow::Borrowed`),
//! so lexing allocates only for error messages. Positions track both
//! Unicode scalar columns (for display) and UTF-16 columns (for editor
//! integrations).
//!
//! Lexing is fatal on the first error: once a [`SyntaxError`] is returned
//! the token source is finished.
//!
//! ```rust
//! use gqlfront_parser::Source;
//! use gqlfront_parser::token::TokenKind;
//! use gqlfront_parser::token_source::StrTokenSource;
//! use std::sync::Arc;
//!
//! let source = Arc::new(Source::from("{ name }"));
//! let kinds = StrTokenSource::new(&source)
//!     .map(|token| token.map(|token| token.kind))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(kinds.len(), 4); // `{`, `name`, `}`, end of input
//! ```

use crate::Origin;
use crate::Source;
use crate::SourcePosition;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::token::Token;
use crate::token::TokenKind;
use std::borrow::Cow;
use std::sync::Arc;

const INT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Int-Value";
const FLOAT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Float-Value";
const UNTERMINATED_STRING: &str = "Unterminated string literal";
const SPREAD_HELP: &str =
    "These dots may have been intended to form a `...` spread operator. \
     Try removing the extra spacing between the dots.";

/// Lexes GraphQL tokens out of a [`Source`].
pub struct StrTokenSource<'src> {
    source: &'src Arc<Source>,

    /// The full text being lexed (`source.content()`).
    text: &'src str,

    /// Byte offset of the next unlexed character.
    curr_byte_offset: usize,

    curr_line: usize,

    /// Column in Unicode scalar values. "🎉" advances this by 1.
    curr_col_utf8: usize,

    /// Column in UTF-16 code units. "🎉" advances this by 2.
    curr_col_utf16: usize,

    /// Set after `\r` so that a following `\n` is not counted as a second
    /// line break.
    last_char_was_cr: bool,

    /// Set once the end-of-input token or an error has been produced.
    finished: bool,
}

impl<'src> StrTokenSource<'src> {
    pub fn new(source: &'src Arc<Source>) -> Self {
        Self {
            source,
            text: source.content(),
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    pub fn source(&self) -> &'src Arc<Source> {
        self.source
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.text[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes one character, updating line and column tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as a single line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        match ch {
            '\n' if self.last_char_was_cr => self.last_char_was_cr = false,
            '\n' => self.start_new_line(),
            '\r' => {
                self.start_new_line();
                self.last_char_was_cr = true;
            },
            _ => {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16();
                self.last_char_was_cr = false;
            },
        }
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn start_new_line(&mut self) {
        self.curr_line += 1;
        self.curr_col_utf8 = 0;
        self.curr_col_utf16 = 0;
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn make_origin(&self, start: SourcePosition) -> Origin {
        Origin::new(Arc::clone(self.source), start, self.curr_position())
    }

    fn make_token(&self, kind: TokenKind<'src>, start: SourcePosition) -> Token<'src> {
        Token::new(kind, start, self.curr_position())
    }

    fn make_error(
        &mut self,
        message: impl Into<String>,
        start: SourcePosition,
        kind: SyntaxErrorKind,
    ) -> SyntaxError {
        self.finished = true;
        SyntaxError::new(message, self.make_origin(start), kind)
    }

    fn punctuator(&mut self, kind: TokenKind<'src>, start: SourcePosition) -> Token<'src> {
        self.consume();
        self.make_token(kind, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Lexes the next token, skipping whitespace, commas and comments.
    ///
    /// Once the end-of-input token has been returned, every further call
    /// returns another end-of-input token at the same position.
    pub fn next_token(&mut self) -> Result<Token<'src>, SyntaxError> {
        loop {
            self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}'));
            let start = self.curr_position();

            let Some(ch) = self.peek_char() else {
                self.finished = true;
                return Ok(self.make_token(TokenKind::EndOfFile, start));
            };

            let token = match ch {
                '#' => {
                    self.skip_comment();
                    continue;
                },
                '!' => self.punctuator(TokenKind::Bang, start),
                '$' => self.punctuator(TokenKind::Dollar, start),
                '&' => self.punctuator(TokenKind::Ampersand, start),
                '(' => self.punctuator(TokenKind::ParenOpen, start),
                ')' => self.punctuator(TokenKind::ParenClose, start),
                ':' => self.punctuator(TokenKind::Colon, start),
                '=' => self.punctuator(TokenKind::Equals, start),
                '@' => self.punctuator(TokenKind::At, start),
                '[' => self.punctuator(TokenKind::SquareBracketOpen, start),
                ']' => self.punctuator(TokenKind::SquareBracketClose, start),
                '{' => self.punctuator(TokenKind::CurlyBraceOpen, start),
                '}' => self.punctuator(TokenKind::CurlyBraceClose, start),
                '|' => self.punctuator(TokenKind::Pipe, start),
                '.' => self.lex_dot_or_ellipsis(start)?,
                '"' => self.lex_string(start)?,
                c if is_name_start(c) => self.lex_name(start),
                c if c == '-' || c.is_ascii_digit() => self.lex_number(start)?,
                c => {
                    self.consume();
                    return Err(self.make_error(
                        format!("Unexpected character {}", describe_char(c)),
                        start,
                        SyntaxErrorKind::InvalidCharacter,
                    ));
                },
            };
            return Ok(token);
        }
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Skips a `#` comment up to (not including) the next line terminator.
    fn skip_comment(&mut self) {
        let rest = self.remaining();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let body = &rest[..len];
        self.curr_col_utf8 += body.chars().count();
        self.curr_col_utf16 += body.chars().map(char::len_utf16).sum::<usize>();
        self.curr_byte_offset += len;
        self.last_char_was_cr = false;
    }

    // =========================================================================
    // Dots
    // =========================================================================

    /// Lexes `...`, or reports a helpful error for `.`, `..` and dots
    /// separated by spaces on the same line.
    fn lex_dot_or_ellipsis(&mut self, start: SourcePosition) -> Result<Token<'src>, SyntaxError> {
        let first_dot_line = self.curr_line;
        self.consume();
        self.skip_whitespace_same_line();

        if self.peek_char() != Some('.') || self.curr_line != first_dot_line {
            return Err(self.make_error(
                "Unexpected `.`",
                start,
                SyntaxErrorKind::InvalidCharacter,
            ));
        }
        let second_dot = self.curr_position();
        let first_two_adjacent = second_dot.byte_offset() == start.byte_offset() + 1;
        self.consume();
        self.skip_whitespace_same_line();

        if self.peek_char() != Some('.') || self.curr_line != first_dot_line {
            let (message, help) = if first_two_adjacent {
                (
                    "Unexpected `..` (use `...` for spread operator)",
                    "Add one more `.` to form the spread operator `...`",
                )
            } else {
                ("Unexpected `. .` (use `...` for spread operator)", SPREAD_HELP)
            };
            let mut error = self.make_error(message, start, SyntaxErrorKind::InvalidCharacter);
            error.add_help(help);
            return Err(error);
        }
        let third_dot = self.curr_position();
        let last_two_adjacent = third_dot.byte_offset() == second_dot.byte_offset() + 1;
        self.consume();

        let message = match (first_two_adjacent, last_two_adjacent) {
            (true, true) => return Ok(self.make_token(TokenKind::Ellipsis, start)),
            (true, false) => "Unexpected `.. .`",
            (false, true) => "Unexpected `. ..`",
            (false, false) => "Unexpected `. . .`",
        };
        let mut error = self.make_error(message, start, SyntaxErrorKind::InvalidCharacter);
        error.add_help(SPREAD_HELP);
        Err(error)
    }

    fn skip_whitespace_same_line(&mut self) {
        self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\u{FEFF}'));
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Lexes `/[_A-Za-z][_0-9A-Za-z]*/`. `true`, `false` and `null` stay
    /// names; the parser gives them meaning in value positions.
    fn lex_name(&mut self, start: SourcePosition) -> Token<'src> {
        let name_start = self.curr_byte_offset;
        self.consume();
        self.consume_while(is_name_continue);
        let name = &self.text[name_start..self.curr_byte_offset];
        self.make_token(TokenKind::Name(Cow::Borrowed(name)), start)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an Int or Float literal:
    /// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
    ///
    /// A literal is a Float when it has a fraction or an exponent. The
    /// literal may not be directly followed by `.`, a digit or a name start.
    fn lex_number(&mut self, start: SourcePosition) -> Result<Token<'src>, SyntaxError> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return Err(self.number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                        INT_VALUE_SPEC_URL,
                    ));
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_while(|ch| ch.is_ascii_digit());
            },
            _ => {
                return Err(self.make_error(
                    "Unexpected `-`",
                    start,
                    SyntaxErrorKind::InvalidNumber,
                ));
            },
        }

        if self.peek_char() == Some('.') {
            self.consume();
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(self.number_error(
                    start,
                    num_start,
                    "Invalid number: expected digit after `.`",
                    FLOAT_VALUE_SPEC_URL,
                ));
            }
            is_float = true;
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(self.number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    FLOAT_VALUE_SPEC_URL,
                ));
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if let Some(next) = self.peek_char()
            && (next == '.' || is_name_start(next))
        {
            let message = format!("Invalid number: unexpected `{next}` after number");
            return Err(self.number_error(
                start,
                num_start,
                &message,
                if is_float { FLOAT_VALUE_SPEC_URL } else { INT_VALUE_SPEC_URL },
            ));
        }

        let text = Cow::Borrowed(&self.text[num_start..self.curr_byte_offset]);
        let kind = if is_float {
            TokenKind::FloatValue(text)
        } else {
            TokenKind::IntValue(text)
        };
        Ok(self.make_token(kind, start))
    }

    /// Builds an error for a malformed number whose origin covers the whole
    /// number-like run of characters.
    fn number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        spec_url: &str,
    ) -> SyntaxError {
        self.consume_while(|ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '+' | '-')
        });
        let invalid_text = &self.text[num_start..self.curr_byte_offset];
        let message = format!("{message}: `{invalid_text}`");
        let mut error = self.make_error(message, start, SyntaxErrorKind::InvalidNumber);
        error.add_spec(spec_url);
        error
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self, start: SourcePosition) -> Result<Token<'src>, SyntaxError> {
        let str_start = self.curr_byte_offset;
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        loop {
            let char_start = self.curr_position();
            match self.peek_char() {
                None => return Err(self.unterminated(start, UNTERMINATED_STRING, "`\"`")),
                Some('\n' | '\r') => {
                    let mut error = self.unterminated(start, UNTERMINATED_STRING, "`\"`");
                    error.add_note(
                        "Single-line strings cannot contain unescaped line terminators",
                    );
                    error.add_help(
                        "Use a block string (triple quotes) for multi-line strings, or \
                         escape the line break with `\\n`",
                    );
                    return Err(error);
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    match self.peek_char() {
                        Some('\n' | '\r') | None => (),
                        Some(_) => {
                            self.consume();
                        },
                    }
                },
                Some(ch) if is_disallowed_control(ch) => {
                    return Err(self.control_character_error(ch, char_start));
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let text = &self.text[str_start..self.curr_byte_offset];
        Ok(self.make_token(TokenKind::StringValue(Cow::Borrowed(text)), start))
    }

    fn lex_block_string(
        &mut self,
        start: SourcePosition,
        str_start: usize,
    ) -> Result<Token<'src>, SyntaxError> {
        for _ in 0..3 {
            self.consume();
        }

        loop {
            let char_start = self.curr_position();
            let rest = self.remaining();
            if rest.starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
            } else if rest.starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.consume();
                }
                break;
            } else {
                match self.peek_char() {
                    None => {
                        return Err(self.unterminated(
                            start,
                            "Unterminated block string",
                            "`\"\"\"`",
                        ));
                    },
                    Some(ch) if is_disallowed_control(ch) => {
                        return Err(self.control_character_error(ch, char_start));
                    },
                    Some(_) => {
                        self.consume();
                    },
                }
            }
        }

        let text = &self.text[str_start..self.curr_byte_offset];
        Ok(self.make_token(TokenKind::BlockStringValue(Cow::Borrowed(text)), start))
    }

    fn unterminated(
        &mut self,
        start: SourcePosition,
        message: &str,
        closing: &str,
    ) -> SyntaxError {
        let mut error = self.make_error(message, start, SyntaxErrorKind::InvalidString(None));
        error.add_help(format!("Add closing {closing}"));
        error
    }

    fn control_character_error(&mut self, ch: char, char_start: SourcePosition) -> SyntaxError {
        self.consume();
        self.make_error(
            format!("Invalid character within string: {}", describe_char(ch)),
            char_start,
            SyntaxErrorKind::InvalidCharacter,
        )
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

/// Yields tokens up to and including the end-of-input token, or up to and
/// including the first error.
impl<'src> Iterator for StrTokenSource<'src> {
    type Item = Result<Token<'src>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns `true` if `ch` can start a GraphQL name.
pub(crate) fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name.
pub(crate) fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Control characters other than tab and line terminators may not appear
/// literally inside strings.
fn is_disallowed_control(ch: char) -> bool {
    (ch < '\u{0020}' && !matches!(ch, '\t' | '\n' | '\r')) || ch == '\u{007F}'
}

/// Describes a character for error messages; invisible characters include
/// their code point and name.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || unicode_char_name(ch).is_some() {
        match unicode_char_name(ch) {
            Some(name) => format!("U+{:04X} ({name})", ch as u32),
            None => format!("U+{:04X}", ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

/// Names of commonly encountered invisible characters.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{00AD}' => Some("SOFT HYPHEN"),
        '\u{2000}'..='\u{200A}' => Some("TYPOGRAPHIC SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{200E}' => Some("LEFT-TO-RIGHT MARK"),
        '\u{200F}' => Some("RIGHT-TO-LEFT MARK"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{202A}'..='\u{202E}' => Some("BIDIRECTIONAL FORMATTING"),
        '\u{2060}' => Some("WORD JOINER"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FFFE}' | '\u{FFFF}' => Some("NONCHARACTER"),
        _ => None,
    }
}
