use crate::parsing::source::{count_leading, is_blank};

/// Bullet list type with owned delimiter constants.
///
/// Nesting is expressed by indentation: two spaces or one tab per level.
pub struct ListMarker;

impl ListMarker {
    pub const DASH: char = '-';
    const INDENT: [char; 2] = [' ', '\t'];
    const SPACES_PER_LEVEL: usize = 2;

    /// True if the line, ignoring leading spaces and tabs, starts with a dash.
    pub fn opens(line: &str) -> bool {
        line.trim_start_matches(Self::INDENT).starts_with(Self::DASH)
    }

    /// True while a list run should keep consuming this line.
    pub fn continues(line: &str) -> bool {
        !is_blank(line) && Self::opens(line)
    }

    /// `leading spaces / 2 + leading tabs + 1`.
    ///
    /// Both counts only look at the very start of the line, so mixed
    /// indentation counts just the first run.
    pub fn level(line: &str) -> usize {
        count_leading(line, ' ') / Self::SPACES_PER_LEVEL + count_leading(line, '\t') + 1
    }

    /// Item text with leading spaces, tabs and dashes removed.
    pub fn text(line: &str) -> &str {
        line.trim_start_matches([' ', '\t', Self::DASH])
    }
}
