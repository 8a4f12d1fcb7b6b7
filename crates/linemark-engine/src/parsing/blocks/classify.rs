use crate::parsing::source::is_blank;

use super::kinds::{BlockQuote, CodeFence, Header, ListMarker};

/// What kind of run a line starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace only; produces no block.
    Blank,
    Header,
    CodeFence,
    ListItem,
    Quote,
    /// Anything no other opener claims.
    Paragraph,
}

/// Classifies the line a block run starts on.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Applies the opener tests in precedence order; the first match wins.
    ///
    /// Order matters: `#-` is a header, `` ```- `` a fence and `- > x` a list.
    pub fn classify(&self, line: &str) -> LineClass {
        if is_blank(line) {
            LineClass::Blank
        } else if Header::opens(line) {
            LineClass::Header
        } else if CodeFence::opens(line) {
            LineClass::CodeFence
        } else if ListMarker::opens(line) {
            LineClass::ListItem
        } else if BlockQuote::opens(line) {
            LineClass::Quote
        } else {
            LineClass::Paragraph
        }
    }
}
