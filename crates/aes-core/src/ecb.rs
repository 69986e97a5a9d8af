//! Electronic Codebook chaining over PKCS#7-padded messages.
//!
//! Every block is processed independently with the same round keys, so equal
//! plaintext blocks produce equal ciphertext blocks.

use log::{debug, trace};

use crate::block::{block_from_chunk, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block};
use crate::error::AesError;
use crate::key::RoundKeys;
use crate::padding::{pkcs7_pad, pkcs7_unpad};

/// Pads `plaintext` and encrypts it block by block.
///
/// The output is always a non-empty multiple of 16 bytes.
pub fn ecb_encrypt(plaintext: &[u8], round_keys: &RoundKeys) -> Vec<u8> {
    let padded = pkcs7_pad(plaintext);
    debug!(
        "ecb encrypt: {} plaintext bytes, {} blocks",
        plaintext.len(),
        padded.len() / BLOCK_SIZE
    );
    let mut out = Vec::with_capacity(padded.len());
    for (idx, chunk) in padded.chunks_exact(BLOCK_SIZE).enumerate() {
        trace!("ecb encrypt block {idx}");
        out.extend_from_slice(&encrypt_block(&block_from_chunk(chunk), round_keys));
    }
    out
}

/// Decrypts `ciphertext` block by block and strips the padding.
///
/// # Errors
///
/// Returns [`AesError::InvalidCiphertextLength`] if the input is not a whole
/// number of blocks and [`AesError::EmptyCiphertext`] if it holds no blocks.
pub fn ecb_decrypt(ciphertext: &[u8], round_keys: &RoundKeys) -> Result<Vec<u8>, AesError> {
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(AesError::InvalidCiphertextLength(ciphertext.len()));
    }
    if ciphertext.is_empty() {
        return Err(AesError::EmptyCiphertext);
    }
    debug!("ecb decrypt: {} blocks", ciphertext.len() / BLOCK_SIZE);
    let mut out = Vec::with_capacity(ciphertext.len());
    for (idx, chunk) in ciphertext.chunks_exact(BLOCK_SIZE).enumerate() {
        trace!("ecb decrypt block {idx}");
        out.extend_from_slice(&decrypt_block(&block_from_chunk(chunk), round_keys));
    }
    let plain_len = pkcs7_unpad(&out).len();
    out.truncate(plain_len);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{expand_key, Aes128Key};

    fn counting_round_keys() -> RoundKeys {
        expand_key(&Aes128Key::from(core::array::from_fn(|i| i as u8)))
    }

    fn unhex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("valid hex"))
            .collect()
    }

    #[test]
    fn empty_message_encrypts_padding_block() {
        let rks = counting_round_keys();
        let ct = ecb_encrypt(b"", &rks);
        assert_eq!(ct, unhex("954f64f2e4e86e9eee82d20216684899"));
        assert_eq!(ecb_decrypt(&ct, &rks).unwrap(), b"");
    }

    #[test]
    fn known_message_vector() {
        let rks = counting_round_keys();
        let ct = ecb_encrypt(b"journey before destination", &rks);
        assert_eq!(
            ct,
            unhex("666231721e5a4ace29a158b889b0a5d961ec865550cc9115a2d5395e541765d5")
        );
        assert_eq!(ecb_decrypt(&ct, &rks).unwrap(), b"journey before destination");
    }

    #[test]
    fn ciphertext_length_follows_padding() {
        let rks = counting_round_keys();
        for len in 0..50usize {
            let msg = vec![0x5a; len];
            let ct = ecb_encrypt(&msg, &rks);
            assert_eq!(ct.len(), len + (16 - len % 16));
            assert_eq!(ecb_decrypt(&ct, &rks).unwrap(), msg);
        }
    }

    #[test]
    fn identical_blocks_encrypt_identically() {
        let rks = counting_round_keys();
        let msg = [0x42u8; 32];
        let ct = ecb_encrypt(&msg, &rks);
        assert_eq!(ct.len(), 48);
        assert_eq!(ct[..16], ct[16..32]);
        assert_ne!(ct[..16], ct[32..]);
    }

    #[test]
    fn rejects_partial_blocks() {
        let rks = counting_round_keys();
        assert_eq!(
            ecb_decrypt(&[0u8; 17], &rks),
            Err(AesError::InvalidCiphertextLength(17))
        );
        assert_eq!(
            ecb_decrypt(&[0u8; 15], &rks),
            Err(AesError::InvalidCiphertextLength(15))
        );
    }

    #[test]
    fn rejects_empty_ciphertext() {
        let rks = counting_round_keys();
        assert_eq!(ecb_decrypt(&[], &rks), Err(AesError::EmptyCiphertext));
    }
}
