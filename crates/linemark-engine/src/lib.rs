pub mod error;
pub mod options;
pub mod parsing;

// Re-export key types for easier usage
pub use error::ParseError;
pub use options::{ParseOptions, UnclosedFence};
pub use parsing::{
    Document, Parser,
    blocks::{Block, ListItem},
    inline::{InlineNode, tokenize},
    parse, parse_str,
    source::LineCursor,
};
