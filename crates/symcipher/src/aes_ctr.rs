//! AES-128-CTR from the RustCrypto `aes` and `ctr` crates.
//!
//! Ciphertexts are laid out as `nonce (16 bytes) ‖ keystream-xored body`. The
//! nonce is the initial 128-bit big-endian counter block.

use core::fmt;

use aes_core::{BLOCK_SIZE, KEY_SIZE};
use ctr::cipher::{KeyIvInit, StreamCipher};
use log::debug;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::cipher::Cipher;
use crate::error::CipherError;

type Aes128Ctr = ctr::Ctr128BE<aes::Aes128>;

/// Length of the nonce prefix carried by every ciphertext.
pub const NONCE_SIZE: usize = BLOCK_SIZE;

/// Library-backed AES-128 in counter mode with a random nonce per message.
#[derive(Clone)]
pub struct AesCtr {
    key: [u8; KEY_SIZE],
}

impl AesCtr {
    /// Name reported by [`Cipher::name`].
    pub const NAME: &'static str = "aes-ctr";

    /// Creates a cipher for `key`.
    pub fn new(key: [u8; KEY_SIZE]) -> Self {
        Self { key }
    }

    /// Creates a cipher from raw key bytes, which must be 16 bytes long.
    pub fn from_slice(key: &[u8]) -> Result<Self, CipherError> {
        let key: [u8; KEY_SIZE] = key.try_into().map_err(|_| CipherError::InvalidKeyLength {
            cipher: Self::NAME,
            expected: KEY_SIZE,
            actual: key.len(),
        })?;
        Ok(Self::new(key))
    }

    /// Encrypts under a caller-chosen nonce. Reusing a nonce with the same key
    /// reveals the XOR of the two plaintexts.
    pub fn encrypt_with_nonce(&self, nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(NONCE_SIZE + plaintext.len());
        out.extend_from_slice(nonce);
        out.extend_from_slice(plaintext);
        self.keystream(nonce).apply_keystream(&mut out[NONCE_SIZE..]);
        out
    }

    fn keystream(&self, nonce: &[u8; NONCE_SIZE]) -> Aes128Ctr {
        Aes128Ctr::new(&self.key.into(), &(*nonce).into())
    }
}

impl fmt::Debug for AesCtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesCtr").finish_non_exhaustive()
    }
}

impl Cipher for AesCtr {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut nonce = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce);
        debug!("{}: encrypting {} bytes", Self::NAME, plaintext.len());
        Ok(self.encrypt_with_nonce(&nonce, plaintext))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        if ciphertext.len() < NONCE_SIZE {
            return Err(CipherError::MissingNonce {
                len: ciphertext.len(),
            });
        }
        let (nonce, body) = ciphertext.split_at(NONCE_SIZE);
        let mut nonce_block = [0u8; NONCE_SIZE];
        nonce_block.copy_from_slice(nonce);
        debug!("{}: decrypting {} bytes", Self::NAME, body.len());
        let mut out = body.to_vec();
        self.keystream(&nonce_block).apply_keystream(&mut out);
        Ok(out)
    }
}
