//! Expression operators evaluated by the calculation engine.

use std::fmt;

/// Operator applied to an accumulator by [`crate::IntNum::apply`].
///
/// Signed and unsigned division/modulo are distinct operators because the
/// evaluator selects them syntactically (`/` vs `//` and friends), not
/// from operand types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Unsigned division.
    Div,
    /// Signed (truncating) division.
    SignDiv,
    /// Unsigned modulo.
    Mod,
    /// Signed modulo.
    SignMod,
    /// Two's-complement negation (unary).
    Neg,
    /// Bitwise complement (unary).
    Not,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Bitwise XOR.
    Xor,
    /// Left shift.
    Shl,
    /// Logical right shift.
    Shr,
    /// Logical OR: 1 if either operand is nonzero.
    LOr,
    /// Logical AND: 1 if both operands are nonzero.
    LAnd,
    /// Logical NOT: 1 if the accumulator is zero (unary).
    LNot,
    /// Equality test.
    Eq,
    /// Inequality test.
    Ne,
    /// Unsigned less-than.
    Lt,
    /// Unsigned greater-than.
    Gt,
    /// Unsigned less-or-equal.
    Le,
    /// Unsigned greater-or-equal.
    Ge,
    /// Pass the accumulator through unchanged.
    Ident,
}

impl Op {
    /// Operators that work on the accumulator alone.
    pub const fn is_unary(self) -> bool {
        matches!(self, Op::Neg | Op::Not | Op::LNot)
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::SignDiv => "signdiv",
            Op::Mod => "mod",
            Op::SignMod => "signmod",
            Op::Neg => "neg",
            Op::Not => "not",
            Op::Or => "or",
            Op::And => "and",
            Op::Xor => "xor",
            Op::Shl => "shl",
            Op::Shr => "shr",
            Op::LOr => "lor",
            Op::LAnd => "land",
            Op::LNot => "lnot",
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Lt => "lt",
            Op::Gt => "gt",
            Op::Le => "le",
            Op::Ge => "ge",
            Op::Ident => "ident",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_set() {
        assert!(Op::Neg.is_unary());
        assert!(Op::Not.is_unary());
        assert!(Op::LNot.is_unary());
        // Ident copies the first operand but still requires one
        assert!(!Op::Ident.is_unary());
        assert!(!Op::Add.is_unary());
    }

    #[test]
    fn test_display() {
        assert_eq!(Op::SignDiv.to_string(), "signdiv");
        assert_eq!(Op::LNot.to_string(), "lnot");
    }
}
