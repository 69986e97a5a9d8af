//! The capability every suite member provides.

use crate::error::CipherError;

/// A symmetric cipher bound to its key for its whole lifetime.
///
/// Implementations hold no per-call mutable state, so one instance may be
/// shared across threads.
pub trait Cipher: Send + Sync {
    /// Short, stable name used in logs and CLI output.
    fn name(&self) -> &'static str;

    /// Encrypts an arbitrary-length message.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError>;

    /// Reverses [`Cipher::encrypt`].
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError>;
}

impl<C: Cipher + ?Sized> Cipher for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        (**self).decrypt(ciphertext)
    }
}
