//! The dual-representation integer constant type.

use std::fmt;

use crate::bitvec::BitVec;

/// Active representation of an [`IntNum`].
///
/// Exactly one arm is live at a time; the enum enforces the ownership
/// transfer on narrowing/widening that the original design tracked with a
/// discriminant field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Repr {
    /// Value fits in a native 32-bit word. Consumers needing signedness
    /// apply a two's-complement reading.
    Narrow(u32),
    /// Value needs more than 32 bits; held in a fixed-capacity vector.
    Wide(BitVec),
}

/// One integer constant of up to [`crate::WIDE_BITS`] bits.
///
/// Invariant: the `Wide` arm is held only while the value's highest set
/// bit is at position 32 or above. Every operation producing a wide
/// intermediate that fits in 32 bits demotes it before returning, so the
/// common case stays in a single machine word.
#[derive(Debug, Clone)]
pub struct IntNum {
    pub(crate) repr: Repr,
    /// Bit width implied by the parsed literal (hex digits × 4 and so on);
    /// zero when the value did not come from a sized literal. Diagnostic
    /// only, never consulted by arithmetic.
    pub(crate) origsize: u32,
}

impl IntNum {
    /// Wrap a native unsigned word.
    pub fn from_native(val: u32) -> Self {
        Self {
            repr: Repr::Narrow(val),
            origsize: 0,
        }
    }

    /// Build from a wide vector, demoting to narrow when it fits.
    pub fn from_wide(bv: BitVec) -> Self {
        let mut intn = Self::from_native(0);
        intn.set_wide_demoted(bv);
        intn
    }

    /// Reconstruct from little-endian bytes (at most
    /// [`crate::WIDE_BYTES`]; extra bytes are ignored).
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        Self::from_wide(BitVec::from_le_bytes(bytes))
    }

    /// Install a wide result, applying the demotion rule.
    pub(crate) fn set_wide_demoted(&mut self, bv: BitVec) {
        self.repr = match bv.highest_set_bit() {
            Some(bit) if bit >= 32 => Repr::Wide(bv),
            _ => Repr::Narrow(bv.low_u32()),
        };
    }

    /// Materialize either arm as a wide vector (narrow values are
    /// zero-extended into a transient copy).
    pub(crate) fn to_wide(&self) -> BitVec {
        match &self.repr {
            Repr::Narrow(val) => BitVec::from_u32(*val),
            Repr::Wide(bv) => *bv,
        }
    }

    /// True when the wide arm is active.
    pub fn is_wide(&self) -> bool {
        matches!(self.repr, Repr::Wide(_))
    }

    /// The literal width recorded at parse time, in bits (0 when the
    /// value was not built from a sized literal).
    pub fn parsed_width_bits(&self) -> u32 {
        self.origsize
    }

    pub fn is_zero(&self) -> bool {
        match &self.repr {
            Repr::Narrow(val) => *val == 0,
            Repr::Wide(bv) => bv.is_empty(),
        }
    }

    pub fn is_one(&self) -> bool {
        match &self.repr {
            Repr::Narrow(val) => *val == 1,
            Repr::Wide(bv) => bv.highest_set_bit() == Some(0),
        }
    }

    /// True for the all-ones pattern, i.e. -1 under a two's-complement
    /// reading of the active width.
    pub fn is_neg_one(&self) -> bool {
        match &self.repr {
            Repr::Narrow(val) => *val as i32 == -1,
            Repr::Wide(bv) => bv.is_full(),
        }
    }

    /// The low 32 bits of either representation.
    pub fn as_u32(&self) -> u32 {
        match &self.repr {
            Repr::Narrow(val) => *val,
            Repr::Wide(bv) => bv.low_u32(),
        }
    }

    /// Two's-complement signed reading.
    ///
    /// A negative wide value is reduced by negating its magnitude, reading
    /// the low word of the (now small) absolute value, and negating back,
    /// rather than by reinterpreting raw bits.
    pub fn as_i32(&self) -> i32 {
        match &self.repr {
            Repr::Narrow(val) => *val as i32,
            Repr::Wide(bv) => {
                if bv.msb() {
                    (bv.negate().low_u32() as i32).wrapping_neg()
                } else {
                    bv.low_u32() as i32
                }
            }
        }
    }
}

impl From<u32> for IntNum {
    fn from(val: u32) -> Self {
        Self::from_native(val)
    }
}

/// Equality compares magnitude only; the parsed-width metadata is
/// diagnostic and ignored. The demotion invariant guarantees equal
/// magnitudes always occupy the same arm.
impl PartialEq for IntNum {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl Eq for IntNum {}

impl fmt::Display for IntNum {
    /// Diagnostic rendering: hexadecimal literal suffixed with `/` and the
    /// parsed width. Not a parseable round-trip format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Narrow(val) => write!(f, "{:#x}/{}", val, self.origsize),
            Repr::Wide(bv) => write!(f, "0x{}/{}", bv, self.origsize),
        }
    }
}
