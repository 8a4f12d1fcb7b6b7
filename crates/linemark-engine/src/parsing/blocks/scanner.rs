use std::io::BufRead;

use crate::error::ParseError;
use crate::options::{ParseOptions, UnclosedFence};
use crate::parsing::inline::parse_inline;
use crate::parsing::source::{LineCursor, is_blank, join_lines};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{BlockQuote, CodeFence, Header, ListMarker},
    types::{Block, ListItem},
};

/// Pulls lines from a [`LineCursor`] and groups them into blocks.
///
/// Each run reader consumes the lines it owns and stops with the first
/// foreign line still peeked, so the main loop can classify it next.
pub struct BlockScanner<R> {
    cursor: LineCursor<R>,
    options: ParseOptions,
}

impl<R: BufRead> BlockScanner<R> {
    pub fn new(reader: R, options: ParseOptions) -> Self {
        Self {
            cursor: LineCursor::new(reader),
            options,
        }
    }

    /// Scans to end of input. The first error aborts the whole scan.
    pub fn scan(mut self) -> Result<Vec<Block>, ParseError> {
        let classifier = MarkdownLineClassifier;
        let mut out = vec![];

        while let Some(line) = self.cursor.peek()? {
            let block = match classifier.classify(line) {
                LineClass::Blank => {
                    self.cursor.advance();
                    continue;
                }
                LineClass::Header => self.read_header()?,
                LineClass::CodeFence => self.read_code_block()?,
                LineClass::ListItem => self.read_list()?,
                LineClass::Quote => self.read_quote()?,
                LineClass::Paragraph => self.read_paragraph()?,
            };
            out.push(block);
        }

        log::debug!(
            "scanned {} blocks from {} lines",
            out.len(),
            self.cursor.line_number() - 1
        );
        Ok(out)
    }

    fn read_header(&mut self) -> Result<Block, ParseError> {
        let start = self.cursor.line_number();
        let level = Header::level(self.cursor.peek_or_fail()?);

        let mut lines = vec![];
        while let Some(line) = self.cursor.peek()? {
            if Header::level(line) != level {
                break;
            }
            lines.push(Header::strip(line, level).to_owned());
            self.cursor.advance();
        }

        log::trace!("header run at line {start}: level {level}, {} lines", lines.len());
        Ok(Block::Header {
            level,
            text: join_lines(&lines),
        })
    }

    fn read_code_block(&mut self) -> Result<Block, ParseError> {
        let start = self.cursor.line_number();
        let language = CodeFence::language(self.cursor.peek_or_fail()?).to_owned();
        self.cursor.advance();

        let mut lines = vec![];
        loop {
            let Some(line) = self.cursor.peek()? else {
                match self.options.unclosed_fence {
                    UnclosedFence::Close => {
                        log::debug!("code fence opened at line {start} closed by end of input");
                        break;
                    }
                    UnclosedFence::Error => {
                        return Err(ParseError::UnterminatedCodeFence {
                            line: start,
                            language,
                        });
                    }
                }
            };
            if CodeFence::closes(line) {
                self.cursor.advance();
                break;
            }
            lines.push(line.to_owned());
            self.cursor.advance();
        }

        log::trace!("code block at line {start}: {language:?}, {} lines", lines.len());
        Ok(Block::CodeBlock {
            language,
            code: join_lines(&lines),
        })
    }

    fn read_list(&mut self) -> Result<Block, ParseError> {
        let start = self.cursor.line_number();

        let mut items = vec![];
        while let Some(line) = self.cursor.peek()? {
            if !ListMarker::continues(line) {
                break;
            }
            items.push(ListItem {
                level: ListMarker::level(line),
                text: ListMarker::text(line).to_owned(),
            });
            self.cursor.advance();
        }

        log::trace!("list run at line {start}: {} items", items.len());
        Ok(Block::List { items })
    }

    fn read_quote(&mut self) -> Result<Block, ParseError> {
        let start = self.cursor.line_number();

        let mut lines = vec![];
        while let Some(line) = self.cursor.peek()? {
            if !BlockQuote::opens(line) {
                break;
            }
            lines.push(BlockQuote::strip_prefix(line).to_owned());
            self.cursor.advance();
        }

        log::trace!("quote run at line {start}: {} lines", lines.len());
        Ok(Block::Quote {
            text: join_lines(&lines),
        })
    }

    fn read_paragraph(&mut self) -> Result<Block, ParseError> {
        let start = self.cursor.line_number();

        let mut lines = vec![];
        while let Some(line) = self.cursor.peek()? {
            if is_blank(line) {
                break;
            }
            lines.push(line.to_owned());
            self.cursor.advance();
        }

        log::trace!("paragraph run at line {start}: {} lines", lines.len());
        let inline = parse_inline(start, &join_lines(&lines))?;
        Ok(Block::Paragraph { inline })
    }
}
