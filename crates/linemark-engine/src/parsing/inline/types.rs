use std::fmt;

/// A parsed inline element of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// A code span's content, without the backticks. Taken raw: no escapes.
    Code(String),
    /// A `[text](reference)` link.
    Link { text: String, reference: String },
}

impl InlineNode {
    /// The text a reader sees: content for text and code, label for links.
    pub fn literal(&self) -> &str {
        match self {
            InlineNode::Text(s) | InlineNode::Code(s) => s,
            InlineNode::Link { text, .. } => text,
        }
    }
}

impl fmt::Display for InlineNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}
