//! AES-128-ECB built on the from-scratch `aes-core` rounds.

use core::fmt;

use aes_core::{ecb_decrypt, ecb_encrypt, expand_key, Aes128Key, RoundKeys};
use log::debug;

use crate::cipher::Cipher;
use crate::error::CipherError;

/// Textbook AES-128 in ECB mode with PKCS#7 padding.
///
/// Round keys are expanded once at construction. Identical plaintext blocks
/// yield identical ciphertext blocks and padding is not authenticated.
#[derive(Clone)]
pub struct TextbookAes {
    key: Aes128Key,
    round_keys: RoundKeys,
}

impl TextbookAes {
    /// Name reported by [`Cipher::name`].
    pub const NAME: &'static str = "textbook-aes";

    /// Creates a cipher for `key`.
    pub fn new(key: Aes128Key) -> Self {
        debug!("{}: expanding round keys", Self::NAME);
        Self {
            key,
            round_keys: expand_key(&key),
        }
    }

    /// Creates a cipher from raw key bytes, which must be 16 bytes long.
    pub fn from_slice(key: &[u8]) -> Result<Self, CipherError> {
        let key = Aes128Key::try_from(key)?;
        Ok(Self::new(key))
    }

    /// Returns the key this instance was built with.
    pub fn key(&self) -> &Aes128Key {
        &self.key
    }
}

// Round key 0 is the key itself, so neither field is printed.
impl fmt::Debug for TextbookAes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextbookAes").finish_non_exhaustive()
    }
}

impl Cipher for TextbookAes {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(ecb_encrypt(plaintext, &self.round_keys))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(ecb_decrypt(ciphertext, &self.round_keys)?)
    }
}
