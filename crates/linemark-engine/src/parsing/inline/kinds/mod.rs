//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` TICK = '`' `` - raw zone, content taken verbatim
//! - **`Link`**: `OPEN = '['`, `MIDDLE = "]("`, `CLOSE = ')'`
//! - **`Escape`**: `BACKSLASH = '\\'`, escapes only `` ` ``, `\` and `[`
//!
//! The parser calls these constants; it never hardcodes `[` or `` ` ``.

pub mod code_span;
pub mod escape;
pub mod link;

pub use code_span::CodeSpan;
pub use escape::Escape;
pub use link::Link;
