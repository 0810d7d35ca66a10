//! Error type shared by the cipher engine and key providers.

use thiserror::Error;

/// Errors surfaced at the key boundary.
///
/// Once a key has been accepted, padding and every round transform are
/// total, so nothing past key validation can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied key is not exactly 16 bytes long.
    #[error("AES-128 key must be 16 bytes (128 bits), got {actual}")]
    InvalidKeyLength {
        /// Length of the rejected key in bytes.
        actual: usize,
    },
    /// A key provider could not read its input.
    #[error("failed to read key")]
    KeyInput(#[from] std::io::Error),
}

/// Result alias for fallible engine operations.
pub type Result<T> = core::result::Result<T, Error>;
