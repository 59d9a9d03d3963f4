//! Error types for swipe parsing

use thiserror::Error;

/// Result type for parse operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors produced while decoding a card swipe
///
/// `Format` means the input does not look like ISO 7813 track data;
/// `Validation` means the structure was fine but the content failed a
/// semantic check. Neither is recoverable without a fresh swipe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not conform to the expected track structure
    #[error("format error: {0}")]
    Format(&'static str),

    /// Structurally valid input whose content failed a check
    #[error("validation error: {0}")]
    Validation(&'static str),
}
