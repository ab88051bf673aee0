//! Fixed-capacity wide bit vector.
//!
//! [`BitVec`] is the arithmetic primitive backing integer constants wider
//! than 32 bits. Capacity is fixed at [`WIDE_BITS`] (80) bits; all
//! operations are total and wrap modulo 2^80. The vector is backed by a
//! `u128` whose bits above the capacity are always zero, and arithmetic is
//! carried out in the `u128` domain with a capacity mask applied on the way
//! out.

use std::fmt;

use crate::{WIDE_BITS, WIDE_BYTES};

/// Mask selecting the low [`WIDE_BITS`] bits of a `u128`.
const WIDE_MASK: u128 = (1u128 << WIDE_BITS) - 1;

/// Fixed-capacity (80-bit) unsigned bit vector.
///
/// Ordering is unsigned lexicographic comparison of the bit patterns.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitVec {
    /// Low [`WIDE_BITS`] bits significant; the rest are kept zero.
    bits: u128,
}

impl BitVec {
    /// The empty (all-zero) vector.
    pub const ZERO: Self = Self { bits: 0 };

    /// Build from a `u128`, truncating to capacity.
    #[inline]
    pub const fn from_u128(bits: u128) -> Self {
        Self {
            bits: bits & WIDE_MASK,
        }
    }

    /// Zero-extend a native 32-bit word into a wide vector.
    #[inline]
    pub const fn from_u32(val: u32) -> Self {
        Self { bits: val as u128 }
    }

    /// A single-bit boolean result: 1 for true, 0 for false.
    #[inline]
    pub const fn from_bool(val: bool) -> Self {
        Self { bits: val as u128 }
    }

    /// Build from little-endian bytes. Bytes beyond the capacity are
    /// ignored; short inputs are zero-extended.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let mut bits = 0u128;
        for (i, &b) in bytes.iter().take(WIDE_BYTES).enumerate() {
            bits |= (b as u128) << (8 * i);
        }
        Self::from_u128(bits)
    }

    /// The full value as a `u128` (high bits zero).
    #[inline]
    pub const fn to_u128(self) -> u128 {
        self.bits
    }

    /// Read the low 32 bits.
    #[inline]
    pub const fn low_u32(self) -> u32 {
        self.bits as u32
    }

    /// The raw little-endian byte block backing the vector.
    pub fn to_le_bytes(self) -> [u8; WIDE_BYTES] {
        let all = self.bits.to_le_bytes();
        let mut out = [0u8; WIDE_BYTES];
        out.copy_from_slice(&all[..WIDE_BYTES]);
        out
    }

    /// True when no bit is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// True when every bit within capacity is set.
    #[inline]
    pub const fn is_full(self) -> bool {
        self.bits == WIDE_MASK
    }

    /// The top capacity bit, i.e. the sign bit under a two's-complement
    /// reading of the full width.
    #[inline]
    pub const fn msb(self) -> bool {
        self.bits >> (WIDE_BITS - 1) != 0
    }

    /// Position of the highest set bit, or `None` when empty.
    #[inline]
    pub fn highest_set_bit(self) -> Option<u32> {
        if self.bits == 0 {
            None
        } else {
            Some(127 - self.bits.leading_zeros())
        }
    }

    /// Addition modulo 2^80.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self::from_u128(self.bits.wrapping_add(rhs.bits))
    }

    /// Subtraction modulo 2^80.
    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self::from_u128(self.bits.wrapping_sub(rhs.bits))
    }

    /// Multiplication modulo 2^80.
    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_u128(self.bits.wrapping_mul(rhs.bits))
    }

    /// Combined unsigned divide-with-remainder. `None` on a zero divisor.
    #[inline]
    pub fn div_rem(self, rhs: Self) -> Option<(Self, Self)> {
        if rhs.bits == 0 {
            return None;
        }
        Some((
            Self::from_u128(self.bits / rhs.bits),
            Self::from_u128(self.bits % rhs.bits),
        ))
    }

    /// Two's-complement negation within the capacity.
    #[inline]
    pub fn negate(self) -> Self {
        Self::from_u128(self.bits.wrapping_neg())
    }

    /// Bitwise complement within the capacity.
    #[inline]
    pub const fn complement(self) -> Self {
        Self {
            bits: !self.bits & WIDE_MASK,
        }
    }

    /// Bitwise AND.
    #[inline]
    pub const fn and(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }

    /// Bitwise OR.
    #[inline]
    pub const fn or(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }

    /// Bitwise XOR.
    #[inline]
    pub const fn xor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits ^ rhs.bits,
        }
    }

    /// Left shift; shifts of the capacity or more produce zero.
    #[inline]
    pub fn shift_left(self, shift: u32) -> Self {
        if shift >= WIDE_BITS {
            Self::ZERO
        } else {
            Self::from_u128(self.bits << shift)
        }
    }

    /// Logical right shift; shifts of the capacity or more produce zero.
    #[inline]
    pub fn shift_right(self, shift: u32) -> Self {
        if shift >= WIDE_BITS {
            Self::ZERO
        } else {
            Self::from_u128(self.bits >> shift)
        }
    }

    /// Parse a digit string in the given radix.
    ///
    /// Accumulates `char::to_digit` values, reducing modulo 2^80 at each
    /// step, so an oversized literal yields its truncated low bits plus a
    /// sticky overflow flag. Characters that are not digits of the radix
    /// are skipped; callers hand this pre-lexed digit strings.
    pub fn parse_radix(s: &str, radix: u32) -> (Self, bool) {
        let mut acc = 0u128;
        let mut overflowed = false;
        for c in s.chars() {
            let Some(d) = c.to_digit(radix) else {
                continue;
            };
            acc = acc * radix as u128 + d as u128;
            if acc > WIDE_MASK {
                overflowed = true;
                acc &= WIDE_MASK;
            }
        }
        (Self { bits: acc }, overflowed)
    }
}

impl fmt::Debug for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVec({:#x})", self.bits)
    }
}

impl fmt::Display for BitVec {
    /// Fixed-width hex: one nibble per 4 bits of capacity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:020x}", self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_masks_to_capacity() {
        let v = BitVec::from_u128(u128::MAX);
        assert!(v.is_full());
        assert_eq!(v.to_u128(), (1u128 << 80) - 1);

        let v = BitVec::from_u32(0xDEAD_BEEF);
        assert_eq!(v.low_u32(), 0xDEAD_BEEF);
        assert_eq!(v.to_u128(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_highest_set_bit() {
        assert_eq!(BitVec::ZERO.highest_set_bit(), None);
        assert_eq!(BitVec::from_u32(1).highest_set_bit(), Some(0));
        assert_eq!(BitVec::from_u32(0x8000_0000).highest_set_bit(), Some(31));
        assert_eq!(
            BitVec::from_u128(1u128 << 79).highest_set_bit(),
            Some(79)
        );
    }

    #[test]
    fn test_wrapping_arithmetic() {
        let max = BitVec::from_u128((1u128 << 80) - 1);
        let one = BitVec::from_u32(1);
        assert!(max.wrapping_add(one).is_empty());
        assert_eq!(BitVec::ZERO.wrapping_sub(one), max);

        let big = BitVec::from_u128(1u128 << 79);
        let sq = big.wrapping_mul(big);
        assert!(sq.is_empty()); // 2^158 mod 2^80
    }

    #[test]
    fn test_div_rem() {
        let a = BitVec::from_u128(1u128 << 40);
        let b = BitVec::from_u32(3);
        let (q, r) = a.div_rem(b).unwrap();
        assert_eq!(q.to_u128(), (1u128 << 40) / 3);
        assert_eq!(r.to_u128(), (1u128 << 40) % 3);

        assert!(a.div_rem(BitVec::ZERO).is_none());
    }

    #[test]
    fn test_negate_is_twos_complement() {
        let one = BitVec::from_u32(1);
        assert!(one.negate().is_full());
        assert_eq!(one.negate().negate(), one);
        assert!(BitVec::ZERO.negate().is_empty());
    }

    #[test]
    fn test_shifts_saturate_at_capacity() {
        let v = BitVec::from_u32(1);
        assert_eq!(v.shift_left(79).highest_set_bit(), Some(79));
        assert!(v.shift_left(80).is_empty());
        assert!(v.shift_left(u32::MAX).is_empty());

        let top = BitVec::from_u128(1u128 << 79);
        assert_eq!(top.shift_right(79), BitVec::from_u32(1));
        assert!(top.shift_right(80).is_empty());
    }

    #[test]
    fn test_le_bytes_round_trip() {
        let v = BitVec::from_u128(0x1234_5678_9ABC_DEF0_1122u128);
        let bytes = v.to_le_bytes();
        assert_eq!(bytes[0], 0x22);
        assert_eq!(bytes[9], 0x12);
        assert_eq!(BitVec::from_le_bytes(&bytes), v);
    }

    #[test]
    fn test_parse_radix() {
        let (v, ovfl) = BitVec::parse_radix("ff", 16);
        assert_eq!(v.to_u128(), 0xFF);
        assert!(!ovfl);

        let (v, ovfl) = BitVec::parse_radix("12345678901234567890", 10);
        assert_eq!(v.to_u128(), 12345678901234567890);
        assert!(!ovfl);

        // 21 hex digits = 84 bits: overflows, keeps the low 80 bits
        let (v, ovfl) = BitVec::parse_radix("fffffffffffffffffffff", 16);
        assert!(ovfl);
        assert!(v.is_full());
    }

    #[test]
    fn test_ordering_is_unsigned() {
        let small = BitVec::from_u32(1);
        let large = BitVec::from_u128(1u128 << 79);
        assert!(small < large);
        assert!(large > small);
    }

    #[test]
    fn test_display_fixed_width() {
        assert_eq!(BitVec::from_u32(0xFF).to_string(), "000000000000000000ff");
        assert_eq!(
            BitVec::from_u128((1u128 << 80) - 1).to_string(),
            "ffffffffffffffffffff"
        );
    }
}
