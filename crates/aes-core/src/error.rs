//! Error type for key construction and ECB decryption.

use thiserror::Error;

/// Failures surfaced by the AES-128 core.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AesError {
    /// The supplied key was not 16 bytes.
    #[error("AES-128 key must be 16 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// The ciphertext does not split into whole 16-byte blocks.
    #[error("ciphertext length {0} is not a multiple of 16 bytes")]
    InvalidCiphertextLength(usize),

    /// ECB decryption needs at least one block to read the padding from.
    #[error("ciphertext is empty")]
    EmptyCiphertext,
}
