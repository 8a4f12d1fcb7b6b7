//! # Inline Parsing
//!
//! Cursor-based tokenization of paragraph text.
//!
//! ## Architecture
//!
//! Inline parsing runs once per paragraph, over the paragraph's lines joined
//! with `\n`. Headers, list items, quotes and code blocks keep their text raw.
//!
//! The parser walks the text left to right with one flag of state: whether the
//! previous character was an unescaped backslash.
//! - Code spans are raw zones: nothing inside them is interpreted
//! - Links are matched only outside code spans; their label is not re-parsed
//! - A backslash before `` ` ``, `\` or `[` makes that character literal
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Code, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Link, Escape)
//! - **`cursor`**: `Cursor` for character-by-character parsing
//! - **`parser`**: `parse_inline()` and `tokenize()` entry points
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `[a](b)` `` parses as a single Code node,
//! not as text containing a Link.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_inline, tokenize};
pub use types::InlineNode;
