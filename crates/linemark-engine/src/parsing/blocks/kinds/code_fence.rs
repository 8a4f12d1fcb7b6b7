/// Fenced code block type with owned delimiter constants.
pub struct CodeFence;

impl CodeFence {
    pub const TICK: char = '`';
    pub const FENCE: &'static str = "```";

    /// True if the line starts with a backtick fence.
    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::FENCE)
    }

    /// True only for a line that is exactly the fence, nothing else.
    pub fn closes(line: &str) -> bool {
        line == Self::FENCE
    }

    /// The opener with all leading backticks stripped.
    pub fn language(opener: &str) -> &str {
        opener.trim_start_matches(Self::TICK)
    }
}
