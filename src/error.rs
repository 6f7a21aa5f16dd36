//! Standard errors that may occur when working with the codec.

use thiserror::Error;

/// Codec runtime errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A field or polynomial division was attempted with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// An encode input was not exactly 9 symbols, or a decode stream length was not
    /// a multiple of 15.
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// An on-disk byte fell outside `{'0'..'9', 'A'..'F'}` and whitespace.
    #[error("invalid symbol byte: {0:#04x}")]
    InvalidSymbol(u8),

    /// The decoder detected more errors than it can correct, or one of its internal
    /// consistency checks failed.
    #[error("uncorrectable code word at index {word_index}")]
    Uncorrectable {
        /// Index of the affected code word in the stream.
        word_index: usize,
    },

    /// An underlying read or write failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Standard result using `CodecError`.
pub type Result<T> = std::result::Result<T, CodecError>;
