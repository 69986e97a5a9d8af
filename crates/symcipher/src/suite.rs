//! Cipher selection, key generation, and construction.

use core::fmt;
use core::str::FromStr;

use aes_core::{Aes128Key, KEY_SIZE};
use log::debug;
use rand::{CryptoRng, RngCore};

use crate::aes_ctr::AesCtr;
use crate::caesar::{Caesar, DEFAULT_SHIFT};
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::textbook::TextbookAes;

/// Identifies one member of the suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CipherKind {
    /// From-scratch AES-128-ECB with PKCS#7 padding.
    TextbookAes,
    /// Library AES-128-CTR with a 16-byte nonce prefix.
    AesCtr,
    /// Byte-wise Caesar shift.
    Caesar,
}

impl CipherKind {
    /// Every kind, in the order the demo runs them.
    pub const ALL: [CipherKind; 3] = [
        CipherKind::Caesar,
        CipherKind::TextbookAes,
        CipherKind::AesCtr,
    ];

    /// Stable name, identical to [`Cipher::name`] of the built cipher.
    pub fn name(self) -> &'static str {
        match self {
            CipherKind::TextbookAes => TextbookAes::NAME,
            CipherKind::AesCtr => AesCtr::NAME,
            CipherKind::Caesar => Caesar::NAME,
        }
    }

    /// Key length in bytes.
    pub fn key_len(self) -> usize {
        match self {
            CipherKind::TextbookAes | CipherKind::AesCtr => KEY_SIZE,
            CipherKind::Caesar => 1,
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown cipher '{s}'"))
    }
}

/// Configuration for key generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Which cipher to build.
    pub kind: CipherKind,
    /// Shift handed out as the Caesar "key".
    pub caesar_shift: u8,
}

impl SuiteConfig {
    /// Default configuration for `kind`.
    pub fn new(kind: CipherKind) -> Self {
        Self {
            kind,
            caesar_shift: DEFAULT_SHIFT,
        }
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self::new(CipherKind::TextbookAes)
    }
}

/// Builds the cipher for `kind` from raw key bytes.
///
/// # Errors
///
/// Fails when `key` is not [`CipherKind::key_len`] bytes long.
pub fn build_cipher(kind: CipherKind, key: &[u8]) -> Result<Box<dyn Cipher>, CipherError> {
    debug!("building {kind} cipher");
    let cipher: Box<dyn Cipher> = match kind {
        CipherKind::TextbookAes => {
            let key = Aes128Key::try_from(key).map_err(|_| CipherError::InvalidKeyLength {
                cipher: TextbookAes::NAME,
                expected: KEY_SIZE,
                actual: key.len(),
            })?;
            Box::new(TextbookAes::new(key))
        }
        CipherKind::AesCtr => Box::new(AesCtr::from_slice(key)?),
        CipherKind::Caesar => Box::new(Caesar::from_slice(key)?),
    };
    Ok(cipher)
}

/// A freshly generated key together with the cipher built from it.
pub struct GeneratedCipher {
    /// Raw key bytes; keep them to decrypt later.
    pub key: Vec<u8>,
    /// Cipher bound to `key`.
    pub cipher: Box<dyn Cipher>,
}

impl fmt::Debug for GeneratedCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedCipher")
            .field("cipher", &self.cipher.name())
            .finish_non_exhaustive()
    }
}

/// Key generator parametrized by an RNG.
pub struct KeyGenerator<R: RngCore + CryptoRng> {
    rng: R,
    config: SuiteConfig,
}

impl<R: RngCore + CryptoRng> KeyGenerator<R> {
    /// Creates a generator with the default configuration.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: SuiteConfig::default(),
        }
    }

    /// Creates a generator with explicit configuration.
    pub fn with_config(rng: R, config: SuiteConfig) -> Self {
        Self { rng, config }
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut SuiteConfig {
        &mut self.config
    }

    /// Draws key material for the configured cipher.
    ///
    /// AES variants take 16 bytes from the RNG; Caesar returns the configured
    /// shift without consuming randomness.
    pub fn generate_key(&mut self) -> Vec<u8> {
        match self.config.kind {
            CipherKind::Caesar => vec![self.config.caesar_shift],
            kind => {
                let mut key = vec![0u8; kind.key_len()];
                self.rng.fill_bytes(&mut key);
                key
            }
        }
    }

    /// Generates a key and builds the configured cipher around it.
    pub fn generate_cipher(&mut self) -> Result<GeneratedCipher, CipherError> {
        let key = self.generate_key();
        let cipher = build_cipher(self.config.kind, &key)?;
        Ok(GeneratedCipher { key, cipher })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn kind_names_parse_back() {
        for kind in CipherKind::ALL {
            assert_eq!(kind.name().parse::<CipherKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert!("rot13".parse::<CipherKind>().is_err());
    }

    #[test]
    fn built_cipher_reports_kind_name() {
        for kind in CipherKind::ALL {
            let key = vec![1u8; kind.key_len()];
            assert_eq!(build_cipher(kind, &key).unwrap().name(), kind.name());
        }
    }

    #[test]
    fn wrong_key_length_is_rejected_for_every_kind() {
        for kind in CipherKind::ALL {
            let key = vec![0u8; kind.key_len() + 1];
            match build_cipher(kind, &key) {
                Err(CipherError::InvalidKeyLength {
                    expected, actual, ..
                }) => {
                    assert_eq!(expected, kind.key_len());
                    assert_eq!(actual, kind.key_len() + 1);
                }
                other => panic!("unexpected result for {kind}: {:?}", other.map(|c| c.name())),
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = SuiteConfig::new(CipherKind::TextbookAes);
        let mut a = KeyGenerator::with_config(ChaCha20Rng::from_seed([4u8; 32]), config.clone());
        let mut b = KeyGenerator::with_config(ChaCha20Rng::from_seed([4u8; 32]), config);
        let ka = a.generate_key();
        assert_eq!(ka.len(), 16);
        assert_eq!(ka, b.generate_key());
        assert_ne!(ka, a.generate_key());
    }

    #[test]
    fn caesar_key_is_configured_shift() {
        let mut gen = KeyGenerator::with_config(
            ChaCha20Rng::from_seed([0u8; 32]),
            SuiteConfig::new(CipherKind::Caesar),
        );
        assert_eq!(gen.generate_key(), vec![DEFAULT_SHIFT]);
        gen.config_mut().caesar_shift = 13;
        let generated = gen.generate_cipher().unwrap();
        assert_eq!(generated.key, vec![13]);
        assert_eq!(generated.cipher.encrypt(b"a").unwrap(), vec![b'a' + 13]);
    }
}
