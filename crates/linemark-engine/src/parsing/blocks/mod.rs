//! # Block Parsing
//!
//! Line-driven block scanning over a [`LineCursor`](crate::parsing::source::LineCursor).
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): The next unconsumed line is
//!    classified into a `LineClass` by its leading characters
//!
//! 2. **Block Construction** (`scanner`): A `BlockScanner` reads the run of
//!    lines belonging to that class and emits one `Block`
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `ListItem`)
//! - **`kinds`**: Block-specific types with owned delimiters (Header, CodeFence, ListMarker, BlockQuote)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for each line
//! - **`scanner`**: `BlockScanner` run readers for each block kind
//!
//! ## Key Invariants
//!
//! - Every line is consumed by exactly one run or skipped as blank
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Only paragraphs get inline tokenization

pub mod classify;
pub mod kinds;
pub mod scanner;
pub mod types;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use scanner::BlockScanner;
pub use types::{Block, ListItem};
