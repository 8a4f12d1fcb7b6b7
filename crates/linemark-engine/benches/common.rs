// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with `some` content and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n> quoted\n> text\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_paragraphs(paragraphs: usize, lines: usize) -> String {
    let mut content = String::new();

    for p in 0..paragraphs {
        for l in 0..lines {
            content.push_str(&format!(
                "Line {l} of paragraph {p} has \\`escaped\\` ticks, `code {l}` and [ref {p}](target-{l}).\n"
            ));
        }
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
pub fn generate_deep_list(items: usize, max_depth: usize) -> String {
    let mut content = String::new();

    for i in 0..items {
        let indent = "  ".repeat(i % max_depth.max(1));
        content.push_str(&format!("{indent}- Item {i}\n"));
    }

    content
}
