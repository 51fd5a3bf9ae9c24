//! Basis-state index arithmetic.
//!
//! A basis state of an n-qubit register is an integer whose bit `q` is the
//! value of qubit `q`. The helpers here splice fixed qubit values into the
//! index of a smaller "spectator" register, which is how the two-qubit
//! embedder locates matrix entries without building tensor products.

use std::cmp::Ordering;

use crate::error::{SimError, SimResult};

/// Insert `bit` as bit `position` of `value`.
///
/// Bits of `value` at or above `position` move up one place; lower bits stay.
///
/// ```
/// use unisim_core::index::insert_bit;
///
/// // 0b101 with a 1 spliced in at position 1 -> 0b1011
/// assert_eq!(insert_bit(1, 1, 0b101), 0b1011);
/// ```
#[inline]
pub fn insert_bit(bit: usize, position: usize, value: usize) -> usize {
    debug_assert!(bit <= 1, "bit must be 0 or 1, got {bit}");
    let low = value & ((1 << position) - 1);
    let high = (value >> position) << (position + 1);
    high | (bit << position) | low
}

/// Insert `bit1` at `pos1` and `bit2` at `pos2` into `value`.
///
/// Both positions refer to the final (two bits wider) index. The higher
/// position is inserted first, one place lower than its target, and is moved
/// into place by the second insertion. Doing it the other way round would
/// shift the higher position after it had been computed.
///
/// Fails with [`SimError::CoincidentPositions`] when `pos1 == pos2`.
#[inline]
pub fn insert_two_bits(
    bit1: usize,
    pos1: usize,
    bit2: usize,
    pos2: usize,
    value: usize,
) -> SimResult<usize> {
    match pos1.cmp(&pos2) {
        Ordering::Greater => Ok(insert_bit(bit2, pos2, insert_bit(bit1, pos1 - 1, value))),
        Ordering::Less => Ok(insert_bit(bit1, pos1, insert_bit(bit2, pos2 - 1, value))),
        Ordering::Equal => Err(SimError::CoincidentPositions(pos1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Remove bit `position` from `index`, undoing `insert_bit`.
    fn remove_bit(position: usize, index: usize) -> usize {
        let low = index & ((1 << position) - 1);
        ((index >> (position + 1)) << position) | low
    }

    #[test]
    fn test_insert_bit_at_bottom() {
        assert_eq!(insert_bit(0, 0, 0b11), 0b110);
        assert_eq!(insert_bit(1, 0, 0b11), 0b111);
    }

    #[test]
    fn test_insert_bit_at_top() {
        assert_eq!(insert_bit(1, 2, 0b11), 0b111);
        assert_eq!(insert_bit(0, 2, 0b11), 0b011);
    }

    #[test]
    fn test_insert_two_bits_into_empty_register() {
        // With no spectators the result is just bit1 * 2^pos1 + bit2 * 2^pos2.
        for (b1, b2) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert_eq!(insert_two_bits(b1, 0, b2, 1, 0).unwrap(), b1 | (b2 << 1));
            assert_eq!(insert_two_bits(b1, 1, b2, 0, 0).unwrap(), (b1 << 1) | b2);
        }
    }

    #[test]
    fn test_insert_two_bits_around_spectator() {
        // value 0b1 lands on the only free position (1) of a 3-bit index.
        assert_eq!(insert_two_bits(0, 0, 0, 2, 1).unwrap(), 0b010);
        assert_eq!(insert_two_bits(1, 2, 1, 0, 0).unwrap(), 0b101);
        assert_eq!(insert_two_bits(1, 0, 0, 2, 1).unwrap(), 0b011);
    }

    #[test]
    fn test_insert_two_bits_same_position() {
        assert!(matches!(
            insert_two_bits(0, 3, 1, 3, 0),
            Err(SimError::CoincidentPositions(3))
        ));
    }

    proptest! {
        #[test]
        fn insert_bit_places_bit_and_preserves_rest(
            bit in 0usize..=1,
            position in 0usize..16,
            value in 0usize..(1 << 16),
        ) {
            let index = insert_bit(bit, position, value);
            prop_assert_eq!((index >> position) & 1, bit);
            prop_assert_eq!(remove_bit(position, index), value);
        }

        #[test]
        fn insert_two_bits_places_both_bits(
            bit1 in 0usize..=1,
            bit2 in 0usize..=1,
            pos1 in 0usize..16,
            pos2 in 0usize..16,
            value in 0usize..(1 << 14),
        ) {
            prop_assume!(pos1 != pos2);
            let index = insert_two_bits(bit1, pos1, bit2, pos2, value).unwrap();
            prop_assert_eq!((index >> pos1) & 1, bit1);
            prop_assert_eq!((index >> pos2) & 1, bit2);

            let (hi, lo) = if pos1 > pos2 { (pos1, pos2) } else { (pos2, pos1) };
            prop_assert_eq!(remove_bit(lo, remove_bit(hi, index)), value);
        }

        #[test]
        fn insert_two_bits_is_argument_order_independent(
            bit1 in 0usize..=1,
            bit2 in 0usize..=1,
            pos1 in 0usize..12,
            pos2 in 0usize..12,
            value in 0usize..(1 << 10),
        ) {
            prop_assume!(pos1 != pos2);
            prop_assert_eq!(
                insert_two_bits(bit1, pos1, bit2, pos2, value).unwrap(),
                insert_two_bits(bit2, pos2, bit1, pos1, value).unwrap()
            );
        }
    }
}
