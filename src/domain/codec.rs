//! Bit-packed grid membership.
//!
//! Bit `n` lives in byte `n / 8` under mask `1 << (n % 8)`, least
//! significant bit first. The collaborator packs its state this way and
//! the renderer must read it back identically.

/// Number of bytes needed to hold `cells` bits.
pub const fn packed_len(cells: usize) -> usize {
    cells.div_ceil(8)
}

/// Check whether cell `index` is set in `buffer`.
///
/// Requires `index < 8 * buffer.len()`.
#[inline]
pub fn is_alive(index: usize, buffer: &[u8]) -> bool {
    debug_assert!(index < buffer.len() * 8);
    let mask = 1u8 << (index % 8);
    buffer[index / 8] & mask == mask
}

/// Set or clear cell `index` in `buffer`.
#[inline]
pub fn set(index: usize, buffer: &mut [u8], alive: bool) {
    let mask = 1u8 << (index % 8);
    if alive {
        buffer[index / 8] |= mask;
    } else {
        buffer[index / 8] &= !mask;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_packed_len_rounds_up() {
        assert_eq!(packed_len(0), 0);
        assert_eq!(packed_len(1), 1);
        assert_eq!(packed_len(8), 1);
        assert_eq!(packed_len(9), 2);
        assert_eq!(packed_len(64 * 64), 512);
    }

    #[test]
    fn test_lsb_first_numbering() {
        let buffer = [0b0000_0101u8, 0b1000_0000];
        assert!(is_alive(0, &buffer));
        assert!(!is_alive(1, &buffer));
        assert!(is_alive(2, &buffer));
        assert!(!is_alive(8, &buffer));
        assert!(is_alive(15, &buffer));
    }

    #[test]
    fn test_set_and_clear() {
        let mut buffer = [0u8; 2];
        set(9, &mut buffer, true);
        assert_eq!(buffer, [0, 0b10]);
        set(9, &mut buffer, false);
        assert_eq!(buffer, [0, 0]);
    }

    proptest! {
        #[test]
        fn is_alive_matches_bit_of_byte(buffer in prop::collection::vec(any::<u8>(), 1..64), n in 0usize..512) {
            let n = n % (buffer.len() * 8);
            let expected = (buffer[n / 8] >> (n % 8)) & 1 == 1;
            prop_assert_eq!(is_alive(n, &buffer), expected);
        }

        #[test]
        fn set_only_touches_one_bit(buffer in prop::collection::vec(any::<u8>(), 1..32), n in 0usize..256, alive in any::<bool>()) {
            let n = n % (buffer.len() * 8);
            let mut changed = buffer.clone();
            set(n, &mut changed, alive);
            prop_assert_eq!(is_alive(n, &changed), alive);
            for i in (0..buffer.len() * 8).filter(|&i| i != n) {
                prop_assert_eq!(is_alive(i, &changed), is_alive(i, &buffer));
            }
        }
    }
}
