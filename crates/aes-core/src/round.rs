//! AES round transformations.

use crate::block::Block;
use crate::gf::{double, multiply};
use crate::sbox::{inv_sbox, sbox};
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        state.row_mut(row).rotate_left(row);
    }
}

/// Rotates row `r` right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for row in 1..4 {
        state.row_mut(row).rotate_right(row);
    }
}

fn mix_single_column([a0, a1, a2, a3]: [u8; 4]) -> [u8; 4] {
    // 3·x is computed as 2·x ⊕ x.
    [
        double(a0) ^ (double(a1) ^ a1) ^ a2 ^ a3,
        a0 ^ double(a1) ^ (double(a2) ^ a2) ^ a3,
        a0 ^ a1 ^ double(a2) ^ (double(a3) ^ a3),
        (double(a0) ^ a0) ^ a1 ^ a2 ^ double(a3),
    ]
}

fn inv_mix_single_column([a0, a1, a2, a3]: [u8; 4]) -> [u8; 4] {
    [
        multiply(a0, 0x0e) ^ multiply(a1, 0x0b) ^ multiply(a2, 0x0d) ^ multiply(a3, 0x09),
        multiply(a0, 0x09) ^ multiply(a1, 0x0e) ^ multiply(a2, 0x0b) ^ multiply(a3, 0x0d),
        multiply(a0, 0x0d) ^ multiply(a1, 0x09) ^ multiply(a2, 0x0e) ^ multiply(a3, 0x0b),
        multiply(a0, 0x0b) ^ multiply(a1, 0x0d) ^ multiply(a2, 0x09) ^ multiply(a3, 0x0e),
    ]
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = mix_single_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = inv_mix_single_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Adds (XORs) a round key into the state.
///
/// The key byte for `(row, col)` is `round_key[col * 4 + row]`, matching the
/// column-major layout of [`State`].
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    for col in 0..4 {
        let key_column = [
            round_key[col * 4],
            round_key[col * 4 + 1],
            round_key[col * 4 + 2],
            round_key[col * 4 + 3],
        ];
        let mut column = state.column(col);
        for (byte, k) in column.iter_mut().zip(key_column) {
            *byte ^= k;
        }
        state.set_column(col, column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    fn random_state(rng: &mut impl RngCore) -> State {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        State::from_block(&block)
    }

    #[test]
    fn shift_rows_matches_fips_layout() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let mut state = State::from_block(&block);
        shift_rows(&mut state);
        assert_eq!(
            state.to_block(),
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
        inv_shift_rows(&mut state);
        assert_eq!(state.to_block(), block);
    }

    #[test]
    fn mix_columns_known_column() {
        // Common test column: db 13 53 45 -> 8e 4d a1 bc.
        let mut block = [0u8; 16];
        block[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        block[4..8].copy_from_slice(&[0xf2, 0x0a, 0x22, 0x5c]);
        let mut state = State::from_block(&block);
        mix_columns(&mut state);
        let out = state.to_block();
        assert_eq!(&out[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(&out[4..8], &[0x9f, 0xdc, 0x58, 0x9d]);
    }

    #[test]
    fn sub_bytes_inverts_for_every_byte() {
        for start in (0..=255u8).step_by(16) {
            let block: Block = core::array::from_fn(|i| start.wrapping_add(i as u8));
            let mut state = State::from_block(&block);
            sub_bytes(&mut state);
            inv_sub_bytes(&mut state);
            assert_eq!(state.to_block(), block);
        }
    }

    #[test]
    fn inverses_undo_transforms_on_random_states() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let original = random_state(&mut rng);

            let mut state = original;
            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);

            let mut state = original;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn add_round_key_is_an_involution() {
        let mut rng = rand::thread_rng();
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);
        let original = random_state(&mut rng);
        let mut state = original;
        add_round_key(&mut state, &key);
        let mut expected = original.to_block();
        for (e, k) in expected.iter_mut().zip(key) {
            *e ^= k;
        }
        assert_eq!(state.to_block(), expected);
        add_round_key(&mut state, &key);
        assert_eq!(state, original);
    }
}
