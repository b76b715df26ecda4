/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...`.
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...`.
    /// Example: "did you mean `FIELD_DEFINITION`?"
    Help,

    /// Reference to the GraphQL specification.
    ///
    /// Rendered as `= spec: ...`.
    Spec,
}

impl ErrorNoteKind {
    pub(crate) fn prefix(&self) -> &'static str {
        match self {
            ErrorNoteKind::General => "note",
            ErrorNoteKind::Help => "help",
            ErrorNoteKind::Spec => "spec",
        }
    }
}
