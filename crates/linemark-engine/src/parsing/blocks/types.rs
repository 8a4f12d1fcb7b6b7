use std::fmt;

use crate::parsing::inline::InlineNode;

/// A single bullet list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Nesting depth, starting at 1.
    pub level: usize,
    pub text: String,
}

/// A top-level block element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Consecutive `#` lines of the same level, newline-joined.
    Header { level: usize, text: String },
    /// A fenced code block. `code` excludes both fence lines.
    CodeBlock { language: String, code: String },
    /// Consecutive `-` lines in input order.
    List { items: Vec<ListItem> },
    /// Consecutive `>` lines with the prefix stripped, newline-joined.
    Quote { text: String },
    /// Everything else, split into inline elements.
    Paragraph { inline: Vec<InlineNode> },
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Plain-text rendering: markup dropped, link references omitted.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Header { text, .. } | Block::Quote { text } => f.write_str(text),
            Block::CodeBlock { code, .. } => f.write_str(code),
            Block::List { items } => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Block::Paragraph { inline } => {
                for node in inline {
                    write!(f, "{node}")?;
                }
                Ok(())
            }
        }
    }
}
