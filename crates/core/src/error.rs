use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors raised by the host glue around the annotator.
///
/// The annotator itself is total; these only come from parsing Markdown or
/// decoding a tree handed over as JSON.
#[derive(Debug, Error)]
pub enum SpotlightError {
    /// markdown-rs parser error surfaced through the adapter.
    #[error("Parse error at {location}: {message}")]
    MarkdownAdapter {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// The JSON handed in is not a valid HAST tree.
    #[error("Invalid tree: {0}")]
    InvalidTree(#[from] serde_json::Error),
}

impl SpotlightError {
    /// Create a parse error with location
    pub fn parse_error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::MarkdownAdapter {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }

    /// Returns the source location when the error carries one.
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            SpotlightError::MarkdownAdapter { location, .. } => Some(location),
            SpotlightError::InvalidTree(_) => None,
        }
    }
}
