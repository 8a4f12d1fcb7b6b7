use std::io::BufRead;
use std::sync::Arc;

use crate::error::ParseError;

/// Outcome of reading one line, cached until [`LineCursor::advance`].
#[derive(Debug)]
enum Peeked {
    Line(String),
    End,
    Failed(Arc<std::io::Error>),
}

/// A line reader with exactly one line of lookahead.
///
/// `peek` reads a line into a single-slot cache and keeps returning it until
/// `advance` discards it. There is no pushback beyond that one slot: block
/// readers use it to look at the line that ends their run without consuming it.
///
/// End of input is reported as `Ok(None)`, distinct from a read failure.
pub struct LineCursor<R> {
    reader: R,
    slot: Option<Peeked>,
    /// Number of lines consumed via `advance`.
    consumed: usize,
}

impl<R: BufRead> LineCursor<R> {
    /// Creates a cursor positioned before the first line of `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            slot: None,
            consumed: 0,
        }
    }

    /// Returns the current line without consuming it.
    ///
    /// Repeated calls without an intervening [`advance`](Self::advance) return
    /// the same cached line, end-of-input marker, or error.
    pub fn peek(&mut self) -> Result<Option<&str>, ParseError> {
        let peeked = self
            .slot
            .get_or_insert_with(|| read_line(&mut self.reader));
        match peeked {
            Peeked::Line(line) => Ok(Some(line.as_str())),
            Peeked::End => Ok(None),
            Peeked::Failed(err) => Err(ParseError::Read(Arc::clone(err))),
        }
    }

    /// Returns the current line, failing with
    /// [`ParseError::PreconditionViolation`] if there is none.
    ///
    /// Only for call sites that have already peeked and classified a line.
    pub fn peek_or_fail(&mut self) -> Result<&str, ParseError> {
        self.peek()?.ok_or(ParseError::PreconditionViolation(
            "peek_or_fail called with no line available",
        ))
    }

    /// Discards the cached line so the next `peek` reads a fresh one.
    ///
    /// A no-op when nothing has been peeked.
    pub fn advance(&mut self) {
        if let Some(Peeked::Line(_)) = self.slot.take() {
            self.consumed += 1;
        }
    }

    /// 1-based number of the line `peek` currently returns.
    pub fn line_number(&self) -> usize {
        self.consumed + 1
    }
}

/// Reads one line, stripping a trailing `\n` or `\r\n`.
fn read_line<R: BufRead>(reader: &mut R) -> Peeked {
    let mut buf = String::new();
    match reader.read_line(&mut buf) {
        Ok(0) => Peeked::End,
        Ok(_) => {
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Peeked::Line(buf)
        }
        Err(err) => Peeked::Failed(Arc::new(err)),
    }
}
