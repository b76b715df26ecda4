/// GraphQL source text together with a human-readable name (usually a file
/// path) used when reporting positions.
///
/// Sources are shared through an `Arc` so that every [`Origin`](crate::Origin)
/// in a parsed tree can point back at the text it came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    content: String,
    name: String,
}

impl Source {
    /// Name given to sources that were not given one explicitly.
    pub const DEFAULT_NAME: &'static str = "<input>";

    pub fn new(content: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            name: name.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Source {
    fn from(content: &str) -> Self {
        Self::new(content, Self::DEFAULT_NAME)
    }
}

impl From<String> for Source {
    fn from(content: String) -> Self {
        Self::new(content, Self::DEFAULT_NAME)
    }
}
