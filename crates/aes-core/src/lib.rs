//! Textbook AES-128 (FIPS-197) with PKCS#7 padding and ECB chaining.
//!
//! This crate provides:
//! - GF(2^8) arithmetic and the constant S-box / round-constant tables.
//! - The AES-128 key schedule.
//! - The round transforms over a column-major [`State`] and their inverses.
//! - Single-block encryption and decryption.
//! - PKCS#7 padding and ECB-mode message encryption.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened. ECB leaks
//! equality of plaintext blocks and the padding is not authenticated.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod ecb;
mod error;
mod gf;
mod key;
mod padding;
mod round;
mod sbox;
mod state;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block};
pub use crate::ecb::{ecb_decrypt, ecb_encrypt};
pub use crate::error::AesError;
pub use crate::gf::{double, multiply};
pub use crate::key::{expand_key, Aes128Key, RoundKeys, KEY_SIZE, ROUNDS};
pub use crate::padding::{pad_len, pkcs7_pad, pkcs7_unpad};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, RCON, SBOX};
pub use crate::state::State;
