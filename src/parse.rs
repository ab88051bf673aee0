//! Literal constructors: radix strings and packed character constants.
//!
//! Parsing goes through a [`ParseContext`], which owns the reusable
//! scratch vector that radix parses land in before demotion, and
//! accumulates any [`LiteralWarning`]s raised along the way. The context
//! is an explicit parameter rather than process-wide state, so concurrent
//! parsing is safe by construction: give each thread (or each evaluator)
//! its own context.
//!
//! For callers that do not want to thread a context around, `IntNum`
//! carries convenience constructors backed by a lazily created
//! thread-local context; [`shutdown`] releases it.

use std::cell::RefCell;

use thiserror::Error;
use tracing::warn;

use crate::bitvec::BitVec;
use crate::value::IntNum;
use crate::WIDE_BITS;

/// Maximum number of bytes packed into a character constant.
const CHARCONST_BYTES: usize = 4;

/// Recoverable literal problems.
///
/// Warnings never abort a parse; the constructor continues with the
/// best-effort (truncated) value. Each warning is logged via
/// `tracing::warn!` at the point of detection and recorded on the
/// [`ParseContext`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LiteralWarning {
    #[error("numeric constant too large for internal format")]
    ConstantTooLarge,

    #[error("character constant too large, ignoring trailing characters")]
    CharConstTooLarge,
}

/// Reusable parsing context: scratch storage plus warning accumulator.
#[derive(Debug, Default)]
pub struct ParseContext {
    /// Hosts the wide parse result before it is demoted into a fresh
    /// value, so back-to-back parses share working storage.
    scratch: BitVec,
    warnings: Vec<LiteralWarning>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a decimal digit string.
    ///
    /// Decimal leaves the parsed width at zero: there is no reliable
    /// digit-count to bit-width mapping for base 10. Overflow is detected
    /// by the parse itself.
    pub fn from_dec(&mut self, s: &str) -> IntNum {
        let (bv, overflowed) = BitVec::parse_radix(s, 10);
        self.scratch = bv;
        if overflowed {
            self.report(LiteralWarning::ConstantTooLarge);
        }
        self.demoted(0)
    }

    /// Parse a binary digit string; parsed width is one bit per digit.
    pub fn from_bin(&mut self, s: &str) -> IntNum {
        self.from_pow2(s, 2, 1)
    }

    /// Parse an octal digit string; parsed width is three bits per digit.
    pub fn from_oct(&mut self, s: &str) -> IntNum {
        self.from_pow2(s, 8, 3)
    }

    /// Parse a hexadecimal digit string; parsed width is four bits per
    /// digit.
    pub fn from_hex(&mut self, s: &str) -> IntNum {
        self.from_pow2(s, 16, 4)
    }

    /// Shared path for the power-of-two radices, which warn on a
    /// length-derived width rather than on the parse itself.
    fn from_pow2(&mut self, s: &str, radix: u32, bits_per_digit: u32) -> IntNum {
        let origsize = s.len() as u32 * bits_per_digit;
        if origsize > WIDE_BITS {
            self.report(LiteralWarning::ConstantTooLarge);
        }
        let (bv, _) = BitVec::parse_radix(s, radix);
        self.scratch = bv;
        self.demoted(origsize)
    }

    /// Pack a short character sequence into a narrow value.
    ///
    /// Bytes accumulate from the last kept character to the first, so the
    /// first kept character lands in the low-order byte. Inputs longer
    /// than four bytes keep only the last four and warn.
    pub fn from_charconst(&mut self, s: &str) -> IntNum {
        let bytes = s.as_bytes();
        if bytes.len() > CHARCONST_BYTES {
            self.report(LiteralWarning::CharConstTooLarge);
        }
        let kept = &bytes[bytes.len().saturating_sub(CHARCONST_BYTES)..];

        let mut packed = 0u32;
        for &b in kept.iter().rev() {
            packed = (packed << 8) | b as u32;
        }

        let mut intn = IntNum::from_native(packed);
        intn.origsize = kept.len() as u32 * 8;
        intn
    }

    /// Warnings raised since the last [`Self::take_warnings`].
    pub fn warnings(&self) -> &[LiteralWarning] {
        &self.warnings
    }

    /// Drain the accumulated warnings.
    pub fn take_warnings(&mut self) -> Vec<LiteralWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Copy the scratch result into a fresh value, demoting when it fits
    /// in a native word.
    fn demoted(&self, origsize: u32) -> IntNum {
        let mut intn = IntNum::from_wide(self.scratch);
        intn.origsize = origsize;
        intn
    }

    fn report(&mut self, warning: LiteralWarning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }
}

thread_local! {
    /// Backing context for the convenience constructors; created on first
    /// use, released by [`shutdown`].
    static CONTEXT: RefCell<Option<ParseContext>> = const { RefCell::new(None) };
}

fn with_context<R>(f: impl FnOnce(&mut ParseContext) -> R) -> R {
    CONTEXT.with(|slot| {
        let mut slot = slot.borrow_mut();
        let cx = slot.get_or_insert_with(ParseContext::new);
        let out = f(cx);
        // Convenience callers have no warning channel beyond the log
        cx.warnings.clear();
        out
    })
}

/// Release this thread's convenience parsing context.
///
/// Idempotent; a later convenience constructor call simply re-creates the
/// context.
pub fn shutdown() {
    CONTEXT.with(|slot| {
        slot.borrow_mut().take();
    });
}

impl IntNum {
    /// Parse a decimal literal with the thread-local context.
    pub fn from_dec(s: &str) -> Self {
        with_context(|cx| cx.from_dec(s))
    }

    /// Parse a binary literal with the thread-local context.
    pub fn from_bin(s: &str) -> Self {
        with_context(|cx| cx.from_bin(s))
    }

    /// Parse an octal literal with the thread-local context.
    pub fn from_oct(s: &str) -> Self {
        with_context(|cx| cx.from_oct(s))
    }

    /// Parse a hexadecimal literal with the thread-local context.
    pub fn from_hex(s: &str) -> Self {
        with_context(|cx| cx.from_hex(s))
    }

    /// Pack a character constant with the thread-local context.
    pub fn from_charconst(s: &str) -> Self {
        with_context(|cx| cx.from_charconst(s))
    }
}
