use super::escape::Escape;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: their content is taken verbatim.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    /// Finds the closing backtick for a span opening at the start of `rest`.
    ///
    /// The closer is the nearest backtick that is not preceded by a backslash
    /// and leaves non-empty content. Returns `(content, consumed_bytes)`.
    pub fn close(rest: &str) -> Option<(&str, usize)> {
        let inner = rest.strip_prefix(Self::TICK)?;
        let mut prev = None;
        for (idx, c) in inner.char_indices() {
            if c == Self::TICK && idx > 0 && prev != Some(Escape::BACKSLASH) {
                let consumed = Self::TICK.len_utf8() + idx + Self::TICK.len_utf8();
                return Some((&inner[..idx], consumed));
            }
            prev = Some(c);
        }
        None
    }
}
