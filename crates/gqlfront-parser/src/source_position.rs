/// A position within a [`Source`](crate::Source), with dual column tracking.
///
/// This is a pure data struct; the token source computes position values as
/// it scans input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `column`: Unicode scalar values from the start of the current line
/// - `column_utf16`: UTF-16 code units from the start of the current line
/// - `byte_offset`: byte offset within the whole document
///
/// `\n`, `\r` and `\r\n` each terminate exactly one line.
///
/// For ASCII text both columns are equal. Characters outside the Basic
/// Multilingual Plane (e.g. emoji) advance `column` by 1 and `column_utf16`
/// by 2, which is what LSP clients expect.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    column_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        column: usize,
        column_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            column,
            column_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    pub fn column_utf16(&self) -> usize {
        self.column_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
