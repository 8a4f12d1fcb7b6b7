use std::io;
use std::sync::Arc;

/// Errors that abort a parse.
///
/// There is no partial-document recovery: the first error encountered is
/// returned from [`parse`](crate::parse) and any blocks built so far are dropped.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// The underlying byte source failed (including input that is not UTF-8).
    #[error("read line: {0}")]
    Read(#[source] Arc<io::Error>),

    /// A paragraph ended inside an opened code span.
    #[error("unterminated code span in paragraph starting at line {line}: {text:?}")]
    UnterminatedCodeSpan {
        /// Line number of the paragraph's first line.
        line: usize,
        /// Paragraph text from the opening backtick to the end.
        text: String,
    },

    /// Input ended inside a fenced code block and the options ask for an error.
    #[error("code fence opened at line {line} is never closed")]
    UnterminatedCodeFence { line: usize, language: String },

    /// A scanner routine asked for a line it had not confirmed exists.
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),
}

impl ParseError {
    /// True for errors that indicate a scanner logic bug rather than bad input.
    #[must_use]
    pub fn is_bug(&self) -> bool {
        matches!(self, ParseError::PreconditionViolation(_))
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::Read(Arc::new(err))
    }
}
