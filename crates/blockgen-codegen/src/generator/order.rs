//! Operator precedence tables.
//!
//! Each target has one enum listing its precedence levels from the tightest
//! binding (`Atomic`) to the loosest (`None`). Variants derive `Ord` in that
//! order, so "looser than" is plain `>`.

use std::fmt::Debug;

/// A target's precedence table.
pub trait Precedence: Copy + Ord + Debug {
    /// Literals, identifiers and already-bracketed code.
    const ATOMIC: Self;
    /// No surrounding operator: a whole statement or a function argument.
    const NONE: Self;

    /// Decides whether a child expression of order `self` must be wrapped in
    /// parentheses when placed where the parent requires `required`.
    ///
    /// A child is wrapped when it binds no tighter than the requirement. Equal
    /// `ATOMIC`/`ATOMIC` and `NONE`/`NONE` pairs are never wrapped.
    fn needs_parens(self, required: Self) -> bool {
        if self == required && (self == Self::ATOMIC || self == Self::NONE) {
            return false;
        }
        self >= required
    }
}

/// Python precedence levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PythonOrder {
    Atomic,
    /// Tuples, lists and dictionaries.
    Collection,
    /// `.` and `[]`.
    Member,
    Exponentiation,
    /// Unary `+` and `-`.
    UnarySign,
    Multiplicative,
    Additive,
    BitwiseShift,
    BitwiseAnd,
    BitwiseXor,
    BitwiseOr,
    /// `in`, `is`, and the comparison operators.
    Relational,
    LogicalNot,
    LogicalAnd,
    LogicalOr,
    /// `x if c else y`
    Conditional,
    Lambda,
    None,
}

impl PythonOrder {
    pub const STRING_CONVERSION: Self = Self::Collection;
    pub const FUNCTION_CALL: Self = Self::Member;
    pub const BITWISE_NOT: Self = Self::UnarySign;
}

impl Precedence for PythonOrder {
    const ATOMIC: Self = Self::Atomic;
    const NONE: Self = Self::None;
}

/// JavaScript precedence levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JsOrder {
    Atomic,
    /// `.` and `[]`.
    Member,
    FunctionCall,
    /// Postfix `++` and `--`.
    Increment,
    /// `!`, `~`, unary `+`/`-`, `typeof`, `void`, `delete`.
    Unary,
    Multiplicative,
    Additive,
    BitwiseShift,
    /// `<`, `<=`, `>`, `>=`, `in`, `instanceof`.
    Relational,
    Equality,
    BitwiseAnd,
    BitwiseXor,
    BitwiseOr,
    LogicalAnd,
    LogicalOr,
    Conditional,
    Assignment,
    Comma,
    None,
}

impl JsOrder {
    pub const NEW: Self = Self::Member;
    pub const DECREMENT: Self = Self::Increment;
    pub const LOGICAL_NOT: Self = Self::Unary;
    pub const BITWISE_NOT: Self = Self::Unary;
    pub const UNARY_NEGATION: Self = Self::Unary;
    pub const TYPEOF: Self = Self::Unary;
    pub const IN: Self = Self::Relational;
    pub const INSTANCEOF: Self = Self::Relational;
}

impl Precedence for JsOrder {
    const ATOMIC: Self = Self::Atomic;
    const NONE: Self = Self::None;
}
