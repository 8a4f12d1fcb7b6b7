use crate::parsing::source::count_leading;

/// Header block type with owned delimiter constant.
pub struct Header;

impl Header {
    /// The header marker character.
    pub const MARKER: char = '#';

    /// True if the line's literal first character is the header marker.
    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Number of consecutive leading `#` characters.
    pub fn level(line: &str) -> usize {
        count_leading(line, Self::MARKER)
    }

    /// Strips up to `level` leading markers and the spaces right after them.
    pub fn strip(line: &str, level: usize) -> &str {
        let mut rest = line;
        for _ in 0..level {
            match rest.strip_prefix(Self::MARKER) {
                Some(r) => rest = r,
                None => break,
            }
        }
        rest.trim_start_matches(' ')
    }
}
