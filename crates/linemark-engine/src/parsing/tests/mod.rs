//! Integration tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/` and are parsed straight from disk
//! through a `BufReader`, the same way the CLI reads files.

use std::fs::File;
use std::io::BufReader;

use pretty_assertions::assert_eq;

use crate::error::ParseError;
use crate::options::{ParseOptions, UnclosedFence};
use crate::parsing::{
    Document, Parser,
    blocks::{Block, ListItem},
    inline::InlineNode,
    parse, parse_str, snapshot,
};

fn fixture(name: &str) -> BufReader<File> {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    BufReader::new(File::open(&path).unwrap())
}

fn parse_fixture(name: &str) -> Document {
    let doc = parse(fixture(name)).unwrap();
    snapshot::invariants(&doc);
    doc
}

fn text(s: &str) -> InlineNode {
    InlineNode::Text(s.into())
}

fn paragraph(s: &str) -> Block {
    Block::Paragraph {
        inline: vec![text(s)],
    }
}

// Fixture-based tests

#[test]
fn fixture_full_document() {
    let doc = parse_fixture("full_document");

    assert_eq!(
        doc.blocks,
        vec![
            Block::Header {
                level: 1,
                text: "aaa\nbbb".into()
            },
            Block::Header {
                level: 2,
                text: "ccc".into()
            },
            Block::Paragraph {
                inline: vec![
                    text("paragraph1"),
                    InlineNode::Code("code".into()),
                    text("\nparagraph2\n- paragraph5"),
                ]
            },
            Block::List {
                items: vec![
                    ListItem {
                        level: 1,
                        text: "l1".into()
                    },
                    ListItem {
                        level: 2,
                        text: "l2".into()
                    },
                    ListItem {
                        level: 1,
                        text: "l3".into()
                    },
                ]
            },
            Block::CodeBlock {
                language: "go".into(),
                code: "func main() {\n\tfmt.Println()\n}".into()
            },
            paragraph("paragraph3"),
            Block::Quote {
                text: "quote1\nquote2".into()
            },
            paragraph("paragraph4"),
        ]
    );
}

#[test]
fn fixture_full_document_plain_text() {
    let doc = parse_fixture("full_document");
    assert_eq!(
        doc.to_string(),
        "aaa\nbbb\nccc\nparagraph1code\nparagraph2\n- paragraph5\nl1 l2 l3\n\
         func main() {\n\tfmt.Println()\n}\nparagraph3\nquote1\nquote2\nparagraph4"
    );
}

#[test]
fn fixture_escapes_and_links() {
    let doc = parse_fixture("escapes_and_links");
    insta::assert_debug_snapshot!(doc, @r#"
    Document {
        blocks: [
            Paragraph {
                inline: [
                    Text(
                        "Escaped `ticks` and a ",
                    ),
                    Link {
                        text: "link",
                        reference: "https://example.com",
                    },
                    Text(
                        ".",
                    ),
                ],
            },
        ],
    }
    "#);
}

#[test]
fn fixture_unterminated_code_span() {
    let err = parse(fixture("unterminated_code_span")).unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnterminatedCodeSpan { line: 1, .. }
    ));
    assert!(!err.is_bug());
}

#[test]
fn fixture_unclosed_fence_default_policy() {
    let doc = parse_fixture("unclosed_fence");
    assert_eq!(
        doc.blocks[1],
        Block::CodeBlock {
            language: "sh".into(),
            code: "echo one\n\necho two".into()
        }
    );
}

#[test]
fn fixture_unclosed_fence_error_policy() {
    let parser = Parser::new(ParseOptions {
        unclosed_fence: UnclosedFence::Error,
    });
    let err = parser.parse(fixture("unclosed_fence")).unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnterminatedCodeFence { line: 3, .. }
    ));
}

#[test]
fn fixture_crlf_matches_lf() {
    let crlf = parse_fixture("crlf");
    let lf = parse_str("# crlf\n\n- a\n  - b\n\nsome `code` here\n").unwrap();
    assert_eq!(crlf, lf);
    assert_eq!(crlf.len(), 3);
}

// Document API

#[test]
fn empty_document() {
    let doc = parse_str("").unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.to_string(), "");
}

#[test]
fn blank_lines_only() {
    assert!(parse_str("\n\n\n").unwrap().is_empty());
}

#[test]
fn document_iterates_in_order() {
    let doc = parse_str("# h\n\np").unwrap();
    let kinds: Vec<_> = doc
        .iter()
        .map(|b| matches!(b, Block::Header { .. }))
        .collect();
    assert_eq!(kinds, vec![true, false]);

    let owned: Vec<Block> = doc.clone().into_iter().collect();
    assert_eq!(owned, doc.blocks().to_vec());
    assert_eq!((&doc).into_iter().count(), 2);
}

#[test]
fn quote_then_paragraph() {
    assert_eq!(
        parse_str(">quote1\n>quote2\nafter").unwrap().blocks,
        vec![
            Block::Quote {
                text: "quote1\nquote2".into()
            },
            paragraph("after"),
        ]
    );
}

/// Code spans are raw zones: link syntax inside them stays literal.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let doc = parse_str("`[not](a link)`").unwrap();
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            inline: vec![InlineNode::Code("[not](a link)".into())]
        }]
    );
}
