use crate::parsing::{Document, blocks::Block, inline::InlineNode};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Header and list item levels are at least 1
/// - Paragraph inline runs contain no empty `Text` and no two adjacent `Text`s
/// - Code span content, link text and link reference are non-empty
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for (i, block) in doc.iter().enumerate() {
        match block {
            Block::Header { level, .. } => {
                assert!(*level >= 1, "block {i}: header level {level} < 1");
            }
            Block::List { items } => {
                assert!(!items.is_empty(), "block {i}: empty list");
                for item in items {
                    assert!(item.level >= 1, "block {i}: list item level {} < 1", item.level);
                }
            }
            Block::Paragraph { inline } => check_inline(i, inline),
            Block::CodeBlock { .. } | Block::Quote { .. } => {}
        }
    }
}

fn check_inline(block: usize, nodes: &[InlineNode]) {
    let mut prev_text = false;
    for node in nodes {
        match node {
            InlineNode::Text(s) => {
                assert!(!s.is_empty(), "block {block}: empty text node");
                assert!(!prev_text, "block {block}: adjacent text nodes at {s:?}");
            }
            InlineNode::Code(s) => {
                assert!(!s.is_empty(), "block {block}: empty code span");
            }
            InlineNode::Link { text, reference } => {
                assert!(
                    !text.is_empty() && !reference.is_empty(),
                    "block {block}: link with empty part: [{text}]({reference})"
                );
            }
        }
        prev_text = matches!(node, InlineNode::Text(_));
    }
}
