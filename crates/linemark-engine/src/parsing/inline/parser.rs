use crate::error::ParseError;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Escape, Link},
    types::InlineNode,
};

/// Parses one paragraph's text into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `line`: Line number the paragraph starts on (for error reporting)
/// - `s`: The newline-joined paragraph text
///
/// # Errors
/// [`ParseError::UnterminatedCodeSpan`] if an unescaped backtick has no
/// closing backtick before the end of `s`. An unmatched `[` is just text.
///
/// # Returns
/// Text between special constructs is emitted as `InlineNode::Text`; no
/// empty text node is ever produced.
pub fn parse_inline(line: usize, s: &str) -> Result<Vec<InlineNode>, ParseError> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text = String::new();
    // Previous character was a backslash that is still waiting in `text`
    let mut pending_escape = false;

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, text: &mut String) {
        if !text.is_empty() {
            out.push(InlineNode::Text(std::mem::take(text)));
        }
    }

    while let Some(c) = cur.peek() {
        if pending_escape && Escape::escapable(c) {
            text.pop(); // the buffered backslash
            text.push(c);
            cur.bump();
            pending_escape = false;
            continue;
        }
        pending_escape = false;

        if c == CodeSpan::TICK {
            let Some((code, len)) = CodeSpan::close(cur.rest()) else {
                return Err(ParseError::UnterminatedCodeSpan {
                    line,
                    text: cur.rest().to_owned(),
                });
            };
            flush_text(&mut out, &mut text);
            out.push(InlineNode::Code(code.to_owned()));
            cur.bump_n(len);
            continue;
        }

        if c == Link::OPEN
            && let Some((label, reference, len)) = Link::close(cur.rest())
        {
            flush_text(&mut out, &mut text);
            out.push(InlineNode::Link {
                text: label.to_owned(),
                reference: reference.to_owned(),
            });
            cur.bump_n(len);
            continue;
        }

        text.push(c);
        cur.bump();
        pending_escape = c == Escape::BACKSLASH;
    }

    flush_text(&mut out, &mut text);
    Ok(out)
}

/// Tokenizes standalone paragraph text, reporting errors against line 1.
pub fn tokenize(s: &str) -> Result<Vec<InlineNode>, ParseError> {
    parse_inline(1, s)
}
