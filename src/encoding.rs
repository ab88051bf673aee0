//! Operand-size validation and little-endian byte emission.

use crate::error::{IntNumError, Result};
use crate::value::{IntNum, Repr};
use crate::WIDE_BYTES;

impl IntNum {
    /// Check whether this value fits a target operand of `size` bytes.
    ///
    /// Unsigned: the magnitude must fit in `size * 8` bits; narrow values
    /// trivially fit 4 bytes and up, wide values trivially fit the full
    /// backing capacity and up.
    ///
    /// Signed: the absolute value is taken first (negating when the sign
    /// bit of the active representation is set) and must fit in
    /// `size * 8 - 1` bits, reserving the sign bit. A negative value gets
    /// no credit for the extra two's-complement headroom, so the exact
    /// minimum of a signed width (e.g. -128 for one byte) is rejected.
    pub fn check_size(&self, size: usize, is_signed: bool) -> bool {
        match (&self.repr, is_signed) {
            (Repr::Narrow(val), false) => {
                if size >= 4 {
                    return true;
                }
                match size {
                    3 => val & 0x00FF_FFFF == *val,
                    2 => val & 0x0000_FFFF == *val,
                    1 => val & 0x0000_00FF == *val,
                    _ => false,
                }
            }
            (Repr::Narrow(val), true) => {
                if size >= 4 {
                    return true;
                }
                let abs = (*val as i32).wrapping_abs();
                match size {
                    3 => abs & 0x007F_FFFF == abs,
                    2 => abs & 0x0000_7FFF == abs,
                    1 => abs & 0x0000_007F == abs,
                    _ => false,
                }
            }
            (Repr::Wide(bv), is_signed) => {
                if size >= WIDE_BYTES {
                    return true;
                }
                if size == 0 {
                    return false;
                }
                let (magnitude, budget) = if is_signed {
                    let abs = if bv.msb() { bv.negate() } else { *bv };
                    (abs, size as u32 * 8 - 1)
                } else {
                    (*bv, size as u32 * 8)
                };
                magnitude.highest_set_bit().map_or(true, |bit| bit < budget)
            }
        }
    }

    /// Write the value's little-endian bytes into `out`, emitting exactly
    /// `out.len()` bytes.
    ///
    /// Narrow values are zero-extended past their four significant bytes.
    /// For wide values the request must not exceed the backing block;
    /// capacity always covers the supported operand sizes, so a larger
    /// request is an invariant violation and fails with
    /// [`IntNumError::SizeTooLarge`].
    pub fn write_sized(&self, out: &mut [u8]) -> Result<()> {
        match &self.repr {
            Repr::Narrow(val) => {
                let mut rest = *val;
                for byte in out.iter_mut() {
                    *byte = rest as u8;
                    rest >>= 8;
                }
                Ok(())
            }
            Repr::Wide(bv) => {
                let block = bv.to_le_bytes();
                if out.len() > block.len() {
                    return Err(IntNumError::SizeTooLarge {
                        requested: out.len(),
                        capacity: block.len(),
                    });
                }
                out.copy_from_slice(&block[..out.len()]);
                Ok(())
            }
        }
    }

    /// Allocate and fill a `size`-byte little-endian buffer.
    pub fn to_sized_bytes(&self, size: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; size];
        self.write_sized(&mut out)?;
        Ok(out)
    }
}
