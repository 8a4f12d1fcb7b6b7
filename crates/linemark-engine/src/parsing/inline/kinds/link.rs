/// Link inline type with owned delimiter constants.
pub struct Link;

impl Link {
    pub const OPEN: char = '[';
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: char = ')';

    /// Matches `[text](reference)` at the start of `rest`.
    ///
    /// `text` runs to the first `](` that leaves it non-empty, `reference`
    /// to the first `)` that leaves it non-empty. Neither may contain a line
    /// break. Returns `(text, reference, consumed_bytes)`.
    pub fn close(rest: &str) -> Option<(&str, &str, usize)> {
        let inner = rest.strip_prefix(Self::OPEN)?;

        let mut text_end = None;
        for (idx, c) in inner.char_indices() {
            if c == '\n' {
                return None;
            }
            if idx > 0 && inner[idx..].starts_with(Self::MIDDLE) {
                text_end = Some(idx);
                break;
            }
        }
        let text_end = text_end?;

        let ref_start = text_end + Self::MIDDLE.len();
        let after = &inner[ref_start..];
        for (idx, c) in after.char_indices() {
            if c == '\n' {
                return None;
            }
            if idx > 0 && c == Self::CLOSE {
                let consumed = Self::OPEN.len_utf8() + ref_start + idx + Self::CLOSE.len_utf8();
                return Some((&inner[..text_end], &after[..idx], consumed));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_link() {
        assert_eq!(
            Link::close("[docs](https://x.io) tail"),
            Some(("docs", "https://x.io", 20))
        );
    }

    #[test]
    fn text_and_reference_are_shortest_runs() {
        assert_eq!(Link::close("[a](b)(c)"), Some(("a", "b", 6)));
        assert_eq!(Link::close("[a](b [c](d)"), Some(("a", "b [c](d", 12)));
    }

    #[test]
    fn empty_parts_extend_to_next_delimiter() {
        assert_eq!(Link::close("[](x)"), None);
        assert_eq!(Link::close("[]](x)"), Some(("]", "x", 6)));
        assert_eq!(Link::close("[a]())"), Some(("a", ")", 6)));
        assert_eq!(Link::close("[a]()"), None);
    }

    #[test]
    fn unclosed_link() {
        assert_eq!(Link::close("[a](b"), None);
        assert_eq!(Link::close("[a] (b)"), None);
        assert_eq!(Link::close("[abc"), None);
    }

    #[test]
    fn line_break_prevents_link() {
        assert_eq!(Link::close("[a\nb](c)"), None);
        assert_eq!(Link::close("[a](b\nc)"), None);
    }
}
