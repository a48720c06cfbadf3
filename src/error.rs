//! Errors reported by strict hex parsing.

use thiserror::Error;

/// Why a string is not a hex color.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HexError {
    /// The number of digits after the optional `#` is neither 3 nor 6.
    #[error("expected 3 or 6 hex digits, found {length}")]
    InvalidLength {
        /// Length of the digits in bytes.
        length: usize,
    },
    /// A character that is not a hex digit.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Byte offset of the character in the input, counting the `#`.
        position: usize,
    },
}
