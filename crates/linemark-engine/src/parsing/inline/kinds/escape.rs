use super::{code_span::CodeSpan, link::Link};

/// Backslash escapes.
///
/// Only the characters that could start or end a special sequence can be
/// escaped. A backslash before anything else is literal text.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: char = '\\';

    /// True if a preceding unescaped backslash turns `c` into a literal.
    pub fn escapable(c: char) -> bool {
        matches!(c, CodeSpan::TICK | Self::BACKSLASH | Link::OPEN)
    }
}
