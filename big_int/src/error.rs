//! Error types for parsing and division

use thiserror::Error;

/// Everything that can go wrong in this crate.
///
/// Arithmetic never overflows, so the only failures are malformed input
/// text and a zero divisor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The numeral had no digits at all (`""` or a lone `"-"`).
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A character other than an ASCII digit was found.
    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit {
        /// The offending character
        found: char,
        /// Byte offset of `found` in the input
        index: usize,
    },

    /// The divisor of `/` or `%` was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type for fallible `BigInt` operations
pub type Result<T> = std::result::Result<T, Error>;
