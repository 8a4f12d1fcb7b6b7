/// Counts how many times `ch` repeats at the very start of `s`.
pub fn count_leading(s: &str, ch: char) -> usize {
    s.chars().take_while(|&c| c == ch).count()
}

/// True for empty lines and lines made only of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim_start().is_empty()
}

/// Joins accumulated lines with `\n`.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}
