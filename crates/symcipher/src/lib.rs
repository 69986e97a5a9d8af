//! Interchangeable symmetric ciphers behind one [`Cipher`] trait.
//!
//! Three variants are provided and selected by [`CipherKind`]:
//! - [`TextbookAes`]: the from-scratch AES-128 in ECB mode from `aes-core`.
//! - [`AesCtr`]: AES-128-CTR from the RustCrypto crates, nonce-prefixed.
//! - [`Caesar`]: a byte shift kept only as a weak point of comparison.
//!
//! None of them authenticate ciphertexts.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod aes_ctr;
mod caesar;
mod cipher;
mod error;
mod suite;
mod textbook;

pub use crate::aes_ctr::{AesCtr, NONCE_SIZE};
pub use crate::caesar::{Caesar, DEFAULT_SHIFT};
pub use crate::cipher::Cipher;
pub use crate::error::CipherError;
pub use crate::suite::{build_cipher, CipherKind, GeneratedCipher, KeyGenerator, SuiteConfig};
pub use crate::textbook::TextbookAes;
