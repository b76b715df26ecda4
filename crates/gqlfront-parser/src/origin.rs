use crate::Source;
use crate::SourcePosition;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Where a token, AST node or error came from.
///
/// An origin is a half-open interval `[start, end)` of a [`Source`]:
/// - `start`: position of the first character
/// - `end`: position immediately after the last character
///
/// For AST nodes, `start` is the start of the first token of the production
/// and `end` is the end of the last token the production consumed.
#[derive(Clone, Debug)]
pub struct Origin {
    source: Arc<Source>,
    start: SourcePosition,
    end: SourcePosition,
}

impl Origin {
    pub fn new(
        source: Arc<Source>,
        start: SourcePosition,
        end: SourcePosition,
    ) -> Self {
        Self { source, start, end }
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    pub fn start_position(&self) -> SourcePosition {
        self.start
    }

    pub fn end_position(&self) -> SourcePosition {
        self.end
    }

    /// The 0-based line on which this origin starts.
    pub fn line(&self) -> usize {
        self.start.line()
    }

    /// The 0-based column at which this origin starts.
    pub fn column(&self) -> usize {
        self.start.column()
    }

    pub fn byte_range(&self) -> Range<usize> {
        self.start.byte_offset()..self.end.byte_offset()
    }

    /// The slice of source text covered by this origin.
    pub fn text(&self) -> &str {
        self.source
            .content()
            .get(self.byte_range())
            .unwrap_or_default()
    }
}

impl PartialEq for Origin {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.source, &other.source) || self.source == other.source)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Origin {}

/// Formats as `name:line:column` with 1-based line and column.
impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.source.name(),
            self.start.line() + 1,
            self.start.column() + 1,
        )
    }
}
