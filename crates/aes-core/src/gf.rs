//! Arithmetic in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial.
const REDUCTION: u8 = 0x1b;

/// Multiplies `a` by x (doubling) in GF(2^8).
#[inline]
pub fn double(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements using shift-and-add over the bits of `b`.
pub fn multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = double(a);
        b >>= 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_reduces_when_high_bit_set() {
        assert_eq!(double(0x57), 0xae);
        assert_eq!(double(0xae), 0x47);
        assert_eq!(double(0x80), 0x1b);
        assert_eq!(double(0x00), 0x00);
    }

    #[test]
    fn multiply_matches_fips_example() {
        // FIPS-197 section 4.2: {57} * {83} = {c1}, {57} * {13} = {fe}.
        assert_eq!(multiply(0x57, 0x83), 0xc1);
        assert_eq!(multiply(0x57, 0x13), 0xfe);
    }

    #[test]
    fn multiply_identity_and_zero() {
        for a in 0..=255u8 {
            assert_eq!(multiply(a, 1), a);
            assert_eq!(multiply(a, 0), 0);
            assert_eq!(multiply(a, 2), double(a));
        }
    }

    #[test]
    fn multiply_is_commutative_for_all_pairs() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(multiply(a, b), multiply(b, a), "a={a:#04x} b={b:#04x}");
            }
        }
    }
}
