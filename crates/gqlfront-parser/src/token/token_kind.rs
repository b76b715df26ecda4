use crate::StringParsingError;
use crate::token::string_cooking;
use std::borrow::Cow;

/// The kind of a GraphQL token.
///
/// Literal values store only the raw source text; converting that text to a
/// semantic value (e.g. processing string escapes) happens when the parser
/// builds the AST. This keeps lexing zero-copy for the common case.
///
/// Names include `true`, `false` and `null`, which only become literals in
/// value positions.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals and names
    // =========================================================================
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal (e.g. `"-42"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal (e.g. `"1.5e10"`).
    FloatValue(Cow<'src, str>),

    /// Raw source text of a single-line string, including its quotes.
    StringValue(Cow<'src, str>),

    /// Raw source text of a block string, including its triple quotes.
    BlockStringValue(Cow<'src, str>),

    // =========================================================================
    // Boundaries
    // =========================================================================
    StartOfFile,
    EndOfFile,
}

impl<'src> TokenKind<'src> {
    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Ampersand => Some("&"),
            TokenKind::At => Some("@"),
            TokenKind::Bang => Some("!"),
            TokenKind::Colon => Some(":"),
            TokenKind::CurlyBraceClose => Some("}"),
            TokenKind::CurlyBraceOpen => Some("{"),
            TokenKind::Dollar => Some("$"),
            TokenKind::Ellipsis => Some("..."),
            TokenKind::Equals => Some("="),
            TokenKind::ParenClose => Some(")"),
            TokenKind::ParenOpen => Some("("),
            TokenKind::Pipe => Some("|"),
            TokenKind::SquareBracketClose => Some("]"),
            TokenKind::SquareBracketOpen => Some("["),

            TokenKind::Name(_)
            | TokenKind::IntValue(_)
            | TokenKind::FloatValue(_)
            | TokenKind::StringValue(_)
            | TokenKind::BlockStringValue(_)
            | TokenKind::StartOfFile
            | TokenKind::EndOfFile => None,
        }
    }

    /// Returns `true` for both single-line and block strings.
    pub fn is_string(&self) -> bool {
        matches!(self, TokenKind::StringValue(_) | TokenKind::BlockStringValue(_))
    }

    /// Returns `true` if this token is the given keyword (a `Name` with
    /// exactly that text).
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, TokenKind::Name(name) if name.as_ref() == keyword)
    }

    /// Compares token kinds, ignoring payloads.
    ///
    /// Deliberately exhaustive on `self` so that adding a variant forces
    /// this function to be revisited.
    pub fn same_kind(&self, other: &TokenKind<'_>) -> bool {
        match self {
            TokenKind::Name(_) => matches!(other, TokenKind::Name(_)),
            TokenKind::IntValue(_) => matches!(other, TokenKind::IntValue(_)),
            TokenKind::FloatValue(_) => matches!(other, TokenKind::FloatValue(_)),
            TokenKind::StringValue(_) => matches!(other, TokenKind::StringValue(_)),
            TokenKind::BlockStringValue(_) => {
                matches!(other, TokenKind::BlockStringValue(_))
            },
            TokenKind::Ampersand => matches!(other, TokenKind::Ampersand),
            TokenKind::At => matches!(other, TokenKind::At),
            TokenKind::Bang => matches!(other, TokenKind::Bang),
            TokenKind::Colon => matches!(other, TokenKind::Colon),
            TokenKind::CurlyBraceClose => matches!(other, TokenKind::CurlyBraceClose),
            TokenKind::CurlyBraceOpen => matches!(other, TokenKind::CurlyBraceOpen),
            TokenKind::Dollar => matches!(other, TokenKind::Dollar),
            TokenKind::Ellipsis => matches!(other, TokenKind::Ellipsis),
            TokenKind::Equals => matches!(other, TokenKind::Equals),
            TokenKind::ParenClose => matches!(other, TokenKind::ParenClose),
            TokenKind::ParenOpen => matches!(other, TokenKind::ParenOpen),
            TokenKind::Pipe => matches!(other, TokenKind::Pipe),
            TokenKind::SquareBracketClose => {
                matches!(other, TokenKind::SquareBracketClose)
            },
            TokenKind::SquareBracketOpen => matches!(other, TokenKind::SquareBracketOpen),
            TokenKind::StartOfFile => matches!(other, TokenKind::StartOfFile),
            TokenKind::EndOfFile => matches!(other, TokenKind::EndOfFile),
        }
    }

    /// Returns a short human-readable description for error messages.
    pub fn display(&self) -> String {
        match self {
            TokenKind::Name(name) => name.to_string(),
            TokenKind::IntValue(raw) | TokenKind::FloatValue(raw) => raw.to_string(),
            TokenKind::StringValue(_) => "string".to_string(),
            TokenKind::BlockStringValue(_) => "block string".to_string(),
            TokenKind::StartOfFile => "start of input".to_string(),
            TokenKind::EndOfFile => "end of input".to_string(),
            punctuator => punctuator
                .as_punctuator_str()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Cooks the raw text of a string token into its value.
    ///
    /// - Single-line strings (`"..."`) process `\n`, `\r`, `\t`, `\\`,
    ///   `\"`, `\/`, `\b`, `\f`, `\uXXXX` (including surrogate pairs) and
    ///   `\u{X...}`.
    /// - Block strings (`"""..."""`) only unescape `\"""`, then have their
    ///   common indentation and surrounding blank lines removed.
    ///
    /// Returns `None` if this is not a string token.
    pub fn cook_string(&self) -> Option<Result<String, StringParsingError>> {
        match self {
            TokenKind::StringValue(raw) => Some(string_cooking::cook_string(raw)),
            TokenKind::BlockStringValue(raw) => {
                Some(string_cooking::cook_block_string(raw))
            },
            _ => None,
        }
    }
}
