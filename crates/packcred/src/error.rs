//! Packed credential error types

use thiserror::Error;

/// Errors produced while decoding or encoding packed credential buffers
#[derive(Debug, Error)]
pub enum CredError {
    /// Buffer smaller than the fixed header
    #[error("buffer too short: needed {needed} bytes, have {have}")]
    TooShort { needed: usize, have: usize },

    /// A self-described region escapes the buffer or aliases the header
    #[error("region out of bounds: offset {offset}, length {length}, buffer is {buffer_len} bytes")]
    OutOfBounds {
        offset: usize,
        length: usize,
        buffer_len: usize,
    },

    /// Offset, length or count arithmetic would overflow
    #[error("region offset/length arithmetic overflow")]
    Overflow,

    /// Password payload is not well-formed UTF-16LE
    #[error("invalid password payload: {0}")]
    InvalidPassword(String),

    /// UTF-16 decoding error
    #[error("UTF-16 error: {0}")]
    Utf16Error(#[from] std::char::DecodeUtf16Error),
}

/// Result type for packed credential operations
pub type Result<T> = std::result::Result<T, CredError>;
