use crate::ErrorNoteKind;
use crate::Origin;
use crate::SmallVec;

/// A note providing additional context about a [`SyntaxError`](crate::SyntaxError).
///
/// Notes augment the primary message with explanations, suggestions,
/// specification references, or related source locations (e.g. where an
/// unterminated string started).
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorNote {
    pub kind: ErrorNoteKind,
    pub message: String,

    /// Optional origin pointing to a related location.
    pub origin: Option<Origin>,
}

impl ErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            origin: None,
        }
    }

    pub fn general_with_origin(message: impl Into<String>, origin: Origin) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            origin: Some(origin),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Help,
            message: message.into(),
            origin: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Spec,
            message: url.into(),
            origin: None,
        }
    }
}

/// Most errors carry 0-2 notes, so these live inline.
pub type ErrorNotes = SmallVec<[ErrorNote; 2]>;
