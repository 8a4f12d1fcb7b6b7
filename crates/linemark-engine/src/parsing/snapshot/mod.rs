//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`invariants`**: Runtime checks for parser output shape (positive levels,
//!   no empty or adjacent text runs, non-empty code and link parts)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by fixture documents and
//! `insta` snapshots of the resulting tree rather than by a formal grammar.

pub mod invariants;

pub use invariants::check as invariants;
