//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The classifier and
//! scanner call these; they never hardcode `#`, `` ``` ``, `-` or `>`.
//!
//! Paragraphs have no delimiter: they are whatever no other opener claims.

pub mod block_quote;
pub mod code_fence;
pub mod header;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use header::Header;
pub use list::ListMarker;
