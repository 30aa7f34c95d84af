//! Implementation methods for AST enum types.
//!
//! Operator descriptions are the human-readable phrases used in diagnostics,
//! e.g. "Cannot perform addition on bool".

use crate::nodes::{
    BoolOperatorKind, Constant, LiteralKind, Operation, OperatorKind, UnaryOperatorKind,
};

impl UnaryOperatorKind {
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            UnaryOperatorKind::Not => "logical negation",
            UnaryOperatorKind::USub => "negation",
            UnaryOperatorKind::Invert => "bitwise not",
        }
    }
}

impl OperatorKind {
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            OperatorKind::Add => "addition",
            OperatorKind::Sub => "subtraction",
            OperatorKind::Mult => "multiplication",
            OperatorKind::Div => "division",
            OperatorKind::FloorDiv => "integer division",
            OperatorKind::Mod => "modulus",
            OperatorKind::Pow => "exponentiation",
            OperatorKind::BitAnd => "bitwise and",
            OperatorKind::BitOr => "bitwise or",
            OperatorKind::BitXor => "bitwise xor",
            OperatorKind::LShift => "bitwise left shift",
            OperatorKind::RShift => "bitwise right shift",
        }
    }

    /// Returns `true` for the bitwise family (`&`, `|`, `^`, `<<`, `>>`).
    #[must_use = "this is a pure check with no side effects"]
    pub const fn is_bitwise(&self) -> bool {
        matches!(
            self,
            OperatorKind::BitAnd
                | OperatorKind::BitOr
                | OperatorKind::BitXor
                | OperatorKind::LShift
                | OperatorKind::RShift
        )
    }
}

impl BoolOperatorKind {
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            BoolOperatorKind::And => "logical and",
            BoolOperatorKind::Or => "logical or",
        }
    }
}

impl Operation {
    /// Unary operator carried by this node, if it is a `UnaryOp`.
    #[must_use]
    pub fn unary_operator(&self) -> Option<UnaryOperatorKind> {
        match self {
            Operation::UnaryOp(node) => Some(node.op),
            Operation::BinOp(_) | Operation::AugAssign(_) => None,
        }
    }

    /// Binary operator carried by this node; augmented assignments carry one too.
    #[must_use]
    pub fn binary_operator(&self) -> Option<OperatorKind> {
        match self {
            Operation::UnaryOp(_) => None,
            Operation::BinOp(node) => Some(node.op),
            Operation::AugAssign(node) => Some(node.op),
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Operation::UnaryOp(node) => node.op.description(),
            Operation::BinOp(node) => node.op.description(),
            Operation::AugAssign(node) => node.op.description(),
        }
    }
}

impl Constant {
    #[must_use]
    pub fn kind(&self) -> LiteralKind {
        match self {
            Constant::Int(_) => LiteralKind::Int,
            Constant::Decimal(_) => LiteralKind::Decimal,
            Constant::Hex(_) => LiteralKind::Hex,
            Constant::Str(_) => LiteralKind::Str,
            Constant::Bytes(_) => LiteralKind::Bytes,
            Constant::NameConstant(_) => LiteralKind::NameConstant,
        }
    }
}

impl std::fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralKind::Int => write!(f, "Int"),
            LiteralKind::Decimal => write!(f, "Decimal"),
            LiteralKind::Hex => write!(f, "Hex"),
            LiteralKind::Str => write!(f, "Str"),
            LiteralKind::Bytes => write!(f, "Bytes"),
            LiteralKind::NameConstant => write!(f, "NameConstant"),
        }
    }
}
