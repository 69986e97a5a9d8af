//! Error type shared by every cipher in the suite.

use aes_core::AesError;
use thiserror::Error;

/// Failures raised while building a cipher or running it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Error from the textbook AES core.
    #[error(transparent)]
    Aes(#[from] AesError),

    /// Key material of the wrong size for the selected cipher.
    #[error("{cipher} expects a {expected}-byte key, got {actual}")]
    InvalidKeyLength {
        /// Cipher that rejected the key.
        cipher: &'static str,
        /// Required key length.
        expected: usize,
        /// Supplied key length.
        actual: usize,
    },

    /// Ciphertext too short to carry the CTR nonce prefix.
    #[error("ciphertext of {len} bytes is shorter than the 16-byte nonce prefix")]
    MissingNonce {
        /// Length of the rejected ciphertext.
        len: usize,
    },
}
