use serde::{Deserialize, Serialize};

/// What the scanner does when input ends inside a fenced code block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnclosedFence {
    /// Treat the rest of the input as code, implicitly closed at end of input.
    #[default]
    Close,
    /// Fail with [`ParseError::UnterminatedCodeFence`](crate::ParseError::UnterminatedCodeFence).
    Error,
}

/// Tunables for a parse. The defaults match the dialect's reference behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParseOptions {
    pub unclosed_fence: UnclosedFence,
}
