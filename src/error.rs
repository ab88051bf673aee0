//! Error types for the integer constant engine.

use crate::op::Op;
use thiserror::Error;

/// Invariant violations and arithmetic faults.
///
/// These correspond to conditions the original implementation treated as
/// fatal internal errors; they are surfaced as `Err` so callers (and
/// tests) can handle a broken invariant without the process going down.
/// Literal-parsing problems are not errors — see
/// [`crate::parse::LiteralWarning`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntNumError {
    #[error("operation {op} needs an operand")]
    MissingOperand { op: Op },

    #[error("division by zero")]
    DivisionByZero,

    #[error(
        "invalid size specified: {requested} bytes exceeds the \
         {capacity}-byte backing store"
    )]
    SizeTooLarge { requested: usize, capacity: usize },
}

impl IntNumError {
    /// Whether this error indicates a caller-side invariant violation, as
    /// opposed to a data-dependent arithmetic fault.
    pub fn is_internal(&self) -> bool {
        !matches!(self, IntNumError::DivisionByZero)
    }
}

pub type Result<T> = std::result::Result<T, IntNumError>;
