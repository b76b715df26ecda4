use crate::ReservedNameContext;
use crate::StringParsingError;

/// Categorizes syntax errors for programmatic handling.
///
/// Each variant carries the minimal data needed to act on the error. The
/// human-readable description lives in [`SyntaxError::message`](crate::SyntaxError::message).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// Expected a specific token but found something else.
    ///
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Option<String>,
        found: String,
    },

    /// The document ended before the production was complete.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Option<String>,
    },

    /// A character that cannot start any token, or a control character
    /// inside a string.
    #[error("invalid character")]
    InvalidCharacter,

    /// A malformed numeric literal (leading zeros, missing digits).
    #[error("invalid number")]
    InvalidNumber,

    /// An unterminated string or an invalid escape sequence.
    #[error("invalid string")]
    InvalidString(Option<StringParsingError>),

    /// A well-formed literal whose value is out of range (an Int beyond
    /// `i32`, a Float that is not finite).
    #[error("invalid value")]
    InvalidValue,

    /// A reserved name used where it is not allowed.
    ///
    /// ```text
    /// fragment on on User { name }
    ///          ^^ fragment name cannot be `on`
    /// ```
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
        context: ReservedNameContext,
    },

    /// A directive definition lists a location GraphQL does not define.
    #[error("unknown directive location: `{name}`")]
    UnknownDirectiveLocation {
        name: String,
    },

    /// A description precedes something that cannot be described.
    #[error("unexpected description")]
    UnexpectedDescription,

    /// A variable reference inside a const value.
    #[error("variable in const value")]
    VariableInConstValue,

    /// Values, selection sets or list types nested beyond the parser's
    /// recursion limit.
    #[error("maximum nesting depth exceeded")]
    NestingTooDeep,
}
