/// Blockquote block type with owned delimiter constant.
///
/// Only one level of quoting exists: a second `>` is quote text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True if the line's first character is the prefix.
    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one `>` and at most one space following it.
    ///
    /// Lines without the prefix are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), "hello");
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), "hello");
        assert_eq!(BlockQuote::strip_prefix(">hello"), "hello");
    }

    #[test]
    fn strip_only_one_space() {
        assert_eq!(BlockQuote::strip_prefix(">  indented"), " indented");
    }

    #[test]
    fn nested_marker_is_text() {
        assert_eq!(BlockQuote::strip_prefix(">> hello"), "> hello");
        assert_eq!(BlockQuote::strip_prefix("> > hello"), "> hello");
    }

    #[test]
    fn opens_requires_first_character() {
        assert!(BlockQuote::opens(">"));
        assert!(!BlockQuote::opens(" > x"));
    }
}
