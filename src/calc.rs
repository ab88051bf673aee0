//! The operator-evaluation engine.
//!
//! [`IntNum::apply`] folds one operator into an accumulator, in place.
//! The operation runs in the narrow (native `u32`/`i32`) domain unless
//! either side is already wide or a narrow add/multiply/left-shift would
//! exceed 32 bits, in which case both operands are materialized as wide
//! vectors, the result is computed at full capacity, and the demotion
//! rule decides which arm the accumulator ends up in.

use crate::bitvec::BitVec;
use crate::error::{IntNumError, Result};
use crate::op::Op;
use crate::value::{IntNum, Repr};

/// Whether a narrow-domain evaluation of `op` would need more than 32
/// bits. Only growth operators can; everything else stays within the
/// native word (subtraction and negation deliberately keep 32-bit
/// two's-complement wrapping).
fn narrow_promotes(op: Op, acc: u32, operand: Option<u32>) -> bool {
    let Some(rhs) = operand else {
        return false;
    };
    let (a, b) = (acc as u64, rhs as u64);
    match op {
        Op::Add => a + b > u32::MAX as u64,
        Op::Mul => a * b > u32::MAX as u64,
        Op::Shl => acc != 0 && rhs > acc.leading_zeros(),
        _ => false,
    }
}

impl IntNum {
    /// Apply `op` to `self` (and `operand`, if the operator takes one),
    /// leaving the result in `self`.
    ///
    /// The operand is borrowed and never mutated; `self` is the sole
    /// carrier of the result. The parsed-width metadata on `self` is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`IntNumError::MissingOperand`] when a non-unary operator is
    /// called without one, and [`IntNumError::DivisionByZero`] for a zero
    /// divisor in either domain.
    pub fn apply(&mut self, op: Op, operand: Option<&IntNum>) -> Result<()> {
        if operand.is_none() && !op.is_unary() {
            return Err(IntNumError::MissingOperand { op });
        }

        let go_wide = self.is_wide()
            || operand.is_some_and(IntNum::is_wide)
            || narrow_promotes(op, self.as_u32(), operand.map(IntNum::as_u32));

        if go_wide {
            self.apply_wide(op, operand)
        } else {
            self.apply_narrow(op, operand)
        }
    }

    /// Native machine-word evaluation. Both sides are narrow here.
    fn apply_narrow(&mut self, op: Op, operand: Option<&IntNum>) -> Result<()> {
        let a = self.as_u32();
        // Binary operators are guaranteed an operand by `apply`
        let b = operand.map_or(0, IntNum::as_u32);

        let result = match op {
            Op::Add => a.wrapping_add(b),
            Op::Sub => a.wrapping_sub(b),
            Op::Mul => a.wrapping_mul(b),
            Op::Div => {
                if b == 0 {
                    return Err(IntNumError::DivisionByZero);
                }
                a / b
            }
            Op::SignDiv => {
                if b == 0 {
                    return Err(IntNumError::DivisionByZero);
                }
                (a as i32).wrapping_div(b as i32) as u32
            }
            Op::Mod => {
                if b == 0 {
                    return Err(IntNumError::DivisionByZero);
                }
                a % b
            }
            Op::SignMod => {
                if b == 0 {
                    return Err(IntNumError::DivisionByZero);
                }
                (a as i32).wrapping_rem(b as i32) as u32
            }
            Op::Neg => a.wrapping_neg(),
            Op::Not => !a,
            Op::Or => a | b,
            Op::And => a & b,
            Op::Xor => a ^ b,
            Op::Shl => {
                if b >= 32 {
                    0
                } else {
                    a << b
                }
            }
            Op::Shr => {
                if b >= 32 {
                    0
                } else {
                    a >> b
                }
            }
            Op::LOr => (a != 0 || b != 0) as u32,
            Op::LAnd => (a != 0 && b != 0) as u32,
            Op::LNot => (a == 0) as u32,
            Op::Eq => (a == b) as u32,
            Op::Ne => (a != b) as u32,
            Op::Lt => (a < b) as u32,
            Op::Gt => (a > b) as u32,
            Op::Le => (a <= b) as u32,
            Op::Ge => (a >= b) as u32,
            Op::Ident => a,
        };

        self.repr = Repr::Narrow(result);
        Ok(())
    }

    /// Full-capacity evaluation. Narrow sides are zero-extended into
    /// transient vectors; a wide operand is read, never written.
    fn apply_wide(&mut self, op: Op, operand: Option<&IntNum>) -> Result<()> {
        let op1 = self.to_wide();
        let op2 = operand.map_or(BitVec::ZERO, IntNum::to_wide);

        let result = match op {
            Op::Add => op1.wrapping_add(op2),
            Op::Sub => op1.wrapping_sub(op2),
            Op::Mul => op1.wrapping_mul(op2),
            // The divide-with-remainder primitive works on unsigned
            // magnitudes; the signed variants use it unchanged
            Op::Div | Op::SignDiv => {
                op1.div_rem(op2).ok_or(IntNumError::DivisionByZero)?.0
            }
            Op::Mod | Op::SignMod => {
                op1.div_rem(op2).ok_or(IntNumError::DivisionByZero)?.1
            }
            Op::Neg => op1.negate(),
            Op::Not => op1.complement(),
            Op::Or => op1.or(op2),
            Op::And => op1.and(op2),
            Op::Xor => op1.xor(op2),
            // A shift amount needing more than 32 bits is never
            // meaningful for supported operand sizes; the result is
            // defined to be all-zero
            Op::Shl => match operand {
                Some(amount) if !amount.is_wide() => op1.shift_left(amount.as_u32()),
                _ => BitVec::ZERO,
            },
            Op::Shr => match operand {
                Some(amount) if !amount.is_wide() => op1.shift_right(amount.as_u32()),
                _ => BitVec::ZERO,
            },
            Op::LOr => BitVec::from_bool(!op1.is_empty() || !op2.is_empty()),
            Op::LAnd => BitVec::from_bool(!op1.is_empty() && !op2.is_empty()),
            Op::LNot => BitVec::from_bool(op1.is_empty()),
            Op::Eq => BitVec::from_bool(op1 == op2),
            Op::Ne => BitVec::from_bool(op1 != op2),
            Op::Lt => BitVec::from_bool(op1 < op2),
            Op::Gt => BitVec::from_bool(op1 > op2),
            Op::Le => BitVec::from_bool(op1 <= op2),
            Op::Ge => BitVec::from_bool(op1 >= op2),
            Op::Ident => op1,
        };

        self.set_wide_demoted(result);
        Ok(())
    }
}
