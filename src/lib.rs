//! # Integer constant engine
//!
//! Arbitrary-precision integer values for an assembler's expression
//! evaluator. An [`IntNum`] holds one integer constant of up to
//! [`WIDE_BITS`] bits and switches automatically between a fast native
//! 32-bit representation and a wide bit-vector representation as
//! operations demand:
//!
//! - values that fit in 32 bits stay in a single machine word
//! - wider intermediate results are carried in an 80-bit [`BitVec`]
//! - every wide result that turns out to fit in 32 bits is demoted back
//!
//! The evaluator drives a chain of [`IntNum::apply`] calls over an
//! expression tree, mutating one accumulator in place. Before emission,
//! [`IntNum::check_size`] validates that a constant fits its target
//! operand width, and [`IntNum::write_sized`] produces the little-endian
//! bytes for object-code output.
//!
//! ## Parsing
//!
//! Radix and character-constant literals are parsed through a
//! [`ParseContext`], a reusable scratch buffer plus warning accumulator
//! owned by the caller. The `IntNum::from_dec`/`from_hex`/... convenience
//! constructors use a lazily created thread-local context instead;
//! [`shutdown`] releases it.

pub mod bitvec;
mod calc;
mod encoding;
pub mod error;
pub mod op;
pub mod parse;
pub mod value;

pub use bitvec::BitVec;
pub use error::{IntNumError, Result};
pub use op::Op;
pub use parse::{shutdown, LiteralWarning, ParseContext};
pub use value::IntNum;

/// Fixed capacity of a wide value, in bits.
pub const WIDE_BITS: u32 = 80;

/// Fixed capacity of a wide value, in bytes.
pub const WIDE_BYTES: usize = (WIDE_BITS as usize) / 8;
