pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use std::fmt;
use std::io::BufRead;

use crate::error::ParseError;
use crate::options::ParseOptions;

use blocks::{Block, BlockScanner};

/// A parsed document: top-level blocks in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl IntoIterator for Document {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Plain-text rendering: each block's text on its own line.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

/// Parser configured with non-default [`ParseOptions`].
///
/// `Parser` holds no per-parse state, so one value can serve any number of
/// parses, including concurrent ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parses `source` to end of input.
    ///
    /// The first read or syntax error aborts the parse; no partial document
    /// is returned.
    pub fn parse<R: BufRead>(&self, source: R) -> Result<Document, ParseError> {
        let blocks = BlockScanner::new(source, self.options).scan()?;
        Ok(Document { blocks })
    }
}

/// Parses `source` with default options.
pub fn parse<R: BufRead>(source: R) -> Result<Document, ParseError> {
    Parser::default().parse(source)
}

/// Parses an in-memory string with default options.
pub fn parse_str(s: &str) -> Result<Document, ParseError> {
    parse(s.as_bytes())
}
