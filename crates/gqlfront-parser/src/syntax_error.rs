use crate::ErrorNote;
use crate::ErrorNotes;
use crate::Origin;
use crate::SyntaxErrorKind;

/// The first grammar violation found in a [`Source`](crate::Source).
///
/// Lexing and parsing are all-or-nothing: the first error ends the parse
/// call, so a `SyntaxError` always describes exactly one problem. The
/// [`origin`](Self::origin) spans the offending token (or malformed
/// literal).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct SyntaxError {
    /// Human-readable primary error message, e.g. "expected `:`, found
    /// `String`".
    message: String,

    origin: Origin,

    kind: SyntaxErrorKind,

    /// Context, suggestions and related locations.
    notes: ErrorNotes,
}

impl SyntaxError {
    pub fn new(
        message: impl Into<String>,
        origin: Origin,
        kind: SyntaxErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            origin,
            kind,
            notes: ErrorNotes::new(),
        }
    }

    pub fn with_notes(
        message: impl Into<String>,
        origin: Origin,
        kind: SyntaxErrorKind,
        notes: ErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            origin,
            kind,
            notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &ErrorNotes {
        &self.notes
    }

    /// Adds a general note without an origin.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::general(message));
    }

    /// Adds a general note pointing at a related location.
    pub fn add_note_with_origin(&mut self, message: impl Into<String>, origin: Origin) {
        self.notes.push(ErrorNote::general_with_origin(message, origin));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::help(message));
    }

    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(ErrorNote::spec(url));
    }

    /// Formats this error as a diagnostic with a source snippet.
    ///
    /// ```text
    /// error: Invalid number: leading zeros are not allowed: `01`
    ///   --> query.graphql:1:8
    ///    |
    ///  1 | { a(x: 01) }
    ///    |        ^^
    ///    = spec: https://spec.graphql.org/October2021/#sec-Int-Value
    /// ```
    pub fn format_detailed(&self) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> {}\n", self.origin));

        if let Some(snippet) = format_source_snippet(&self.origin, '^') {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!(
                "   = {}: {}\n",
                note.kind.prefix(),
                note.message,
            ));
            if let Some(note_origin) = &note.origin
                && let Some(snippet) = format_source_snippet(note_origin, '-')
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single line:
    ///
    /// ```text
    /// schema.graphql:5:12: error: Expected `:`, found `String`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.origin, self.message)
    }
}

fn format_source_snippet(origin: &Origin, marker: char) -> Option<String> {
    let start = origin.start_position();
    let end = origin.end_position();
    let line_content = nth_line(origin.source().content(), start.line())?;

    let display_line_num = start.line() + 1;
    let width = display_line_num.to_string().len().max(2);

    let underline_len = if end.line() == start.line() && end.column() > start.column() {
        end.column() - start.column()
    } else {
        1
    };

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", ""));
    output.push_str(&format!("{display_line_num:>width$} | {line_content}\n"));
    output.push_str(&format!(
        "{:>width$} | {:>padding$}{}\n",
        "",
        "",
        marker.to_string().repeat(underline_len),
        padding = start.column(),
    ));
    Some(output)
}

/// Returns the `n`th (0-based) line of `text`, treating `\n`, `\r` and
/// `\r\n` as single line terminators.
fn nth_line(text: &str, n: usize) -> Option<&str> {
    let mut line = 0;
    let mut line_start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let terminator_len = match bytes[i] {
            b'\n' => 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => 2,
            b'\r' => 1,
            _ => {
                i += 1;
                continue;
            },
        };
        if line == n {
            return Some(&text[line_start..i]);
        }
        line += 1;
        i += terminator_len;
        line_start = i;
    }
    (line == n).then(|| &text[line_start..])
}
