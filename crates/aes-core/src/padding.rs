//! PKCS#7 padding.
//!
//! [`pkcs7_unpad`] trusts the final byte as the pad length and does not check
//! the other padding bytes. Without an integrity tag this is the classic
//! padding-oracle exposure; callers that need tamper detection must layer
//! authentication on top.

use crate::block::BLOCK_SIZE;

/// Number of padding bytes appended to a message of `len` bytes, in `1..=16`.
#[inline]
pub fn pad_len(len: usize) -> usize {
    BLOCK_SIZE - (len % BLOCK_SIZE)
}

/// Appends PKCS#7 padding. Block-aligned input gains a full block of `0x10`.
pub fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let n = pad_len(data.len());
    let mut out = Vec::with_capacity(data.len() + n);
    out.extend_from_slice(data);
    out.resize(data.len() + n, n as u8);
    out
}

/// Strips as many trailing bytes as the last byte says.
///
/// A count larger than the buffer yields an empty slice and a count of zero
/// strips nothing. Empty input is returned unchanged.
pub fn pkcs7_unpad(data: &[u8]) -> &[u8] {
    match data.last() {
        Some(&n) => &data[..data.len().saturating_sub(usize::from(n))],
        None => data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_len_is_always_in_range() {
        for len in 0..100 {
            let n = pad_len(len);
            assert!((1..=16).contains(&n), "len={len} pad={n}");
            assert_eq!((len + n) % 16, 0);
        }
    }

    #[test]
    fn aligned_input_gets_a_full_block() {
        let padded = pkcs7_pad(&[0xaa; 16]);
        assert_eq!(padded.len(), 32);
        assert!(padded[16..].iter().all(|&b| b == 16));
    }

    #[test]
    fn empty_input_pads_to_one_block() {
        assert_eq!(pkcs7_pad(&[]), vec![16u8; 16]);
    }

    #[test]
    fn pad_then_unpad_restores_message() {
        let msg = b"journey before destination";
        let padded = pkcs7_pad(msg);
        assert_eq!(padded.len(), 32);
        assert!(padded[26..].iter().all(|&b| b == 6));
        assert_eq!(pkcs7_unpad(&padded), msg);
    }

    #[test]
    fn unpad_does_not_inspect_padding_content() {
        // Only the final byte is read; the rest of the "padding" is ignored.
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 3];
        assert_eq!(pkcs7_unpad(&data), &data[..13]);
    }

    #[test]
    fn unpad_with_oversized_count_saturates_to_empty() {
        let data = [0u8, 0, 0, 0xff];
        assert!(pkcs7_unpad(&data).is_empty());
    }

    #[test]
    fn unpad_with_zero_count_strips_nothing() {
        let data = [7u8, 8, 0];
        assert_eq!(pkcs7_unpad(&data), &data[..]);
    }
}
