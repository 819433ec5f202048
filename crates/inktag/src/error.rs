//! Error types for tag markup parsing.

use thiserror::Error;

/// Errors that can occur when parsing a hex color literal.
///
/// The parse loop never surfaces these: a tag whose color fails to parse is
/// treated as unrecognized and the text passes through unstyled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex literal with the wrong number of digits.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit: {0}")]
    InvalidDigit(char),
}
