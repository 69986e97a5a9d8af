//! Byte-wise Caesar shift, kept as a weak baseline for comparison.

use crate::cipher::Cipher;
use crate::error::CipherError;

/// Shift used when none is configured.
pub const DEFAULT_SHIFT: u8 = 5;

/// Adds a fixed shift to every byte modulo 256.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caesar {
    shift: u8,
}

impl Caesar {
    /// Name reported by [`Cipher::name`].
    pub const NAME: &'static str = "caesar";

    /// Creates a cipher that shifts by `shift`.
    pub fn new(shift: u8) -> Self {
        Self { shift }
    }

    /// Creates a cipher from a one-byte key.
    pub fn from_slice(key: &[u8]) -> Result<Self, CipherError> {
        match key {
            [shift] => Ok(Self::new(*shift)),
            _ => Err(CipherError::InvalidKeyLength {
                cipher: Self::NAME,
                expected: 1,
                actual: key.len(),
            }),
        }
    }

    /// Returns the configured shift.
    pub fn shift(&self) -> u8 {
        self.shift
    }
}

impl Default for Caesar {
    fn default() -> Self {
        Self::new(DEFAULT_SHIFT)
    }
}

impl Cipher for Caesar {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(plaintext.iter().map(|b| b.wrapping_add(self.shift)).collect())
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(ciphertext.iter().map(|b| b.wrapping_sub(self.shift)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_and_wraps() {
        let cipher = Caesar::default();
        assert_eq!(cipher.encrypt(&[0, 250, 251, 255]).unwrap(), vec![5, 255, 0, 4]);
        assert_eq!(cipher.decrypt(&[5, 255, 0, 4]).unwrap(), vec![0, 250, 251, 255]);
    }

    #[test]
    fn preserves_length() {
        let cipher = Caesar::new(200);
        let msg = b"journey before destination";
        let ct = cipher.encrypt(msg).unwrap();
        assert_eq!(ct.len(), msg.len());
        assert_eq!(cipher.decrypt(&ct).unwrap(), msg);
    }

    #[test]
    fn key_must_be_one_byte() {
        assert_eq!(Caesar::from_slice(&[9]).unwrap().shift(), 9);
        assert!(Caesar::from_slice(&[]).is_err());
        assert!(Caesar::from_slice(&[1, 2]).is_err());
    }
}
