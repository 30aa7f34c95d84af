use core::fmt;
use std::{
    fmt::{Display, Formatter},
    rc::Rc,
};

#[derive(Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct Location {
    pub offset_start: u32,
    pub offset_end: u32,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub source: String,
}

impl Location {
    #[must_use]
    pub fn new(
        offset_start: u32,
        offset_end: u32,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
        source: String,
    ) -> Self {
        Self {
            offset_start,
            offset_end,
            start_line,
            start_column,
            end_line,
            end_column,
            source,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_column)
    }
}

#[macro_export]
macro_rules! ast_node {
    (
        $(#[$outer:meta])*
        $struct_vis:vis struct $name:ident {
            $(
                $(#[$field_attr:meta])*
                $field_vis:vis $field_name:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, PartialEq, Eq, Debug)]
        $struct_vis struct $name {
            pub id: u32,
            pub location: $crate::nodes::Location,
            $(
                $(#[$field_attr])*
                $field_vis $field_name : $field_ty,
            )*
        }
    };
}

macro_rules! ast_nodes {
    (
        $(
            $(#[$outer:meta])*
            $struct_vis:vis struct $name:ident { $($fields:tt)* }
        )+
    ) => {
        $(
            ast_node! {
                $(#[$outer])*
                $struct_vis struct $name { $($fields)* }
            }
        )+
    };
}

macro_rules! ast_enum {
    (
        $(#[$outer:meta])*
        $enum_vis:vis enum $name:ident {
            $(
                $(#[$arm_attr:meta])*
                $(@$conv:ident)? $arm:ident $( ( $($tuple:tt)* ) )? ,
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, PartialEq, Eq, Debug)]
        $enum_vis enum $name {
            $(
                $(#[$arm_attr])*
                $arm $( ( $($tuple)* ) )? ,
            )*
        }

        impl $name {

            #[must_use]
            pub fn id(&self) -> u32 {
                match self {
                    $(
                        $name::$arm(n, ..) => { ast_enum!(@id_arm n, $($conv)?) }
                    )*
                }
            }

            #[must_use]
            pub fn location(&self) -> Location {
                match self {
                    $(
                        $name::$arm(n, ..) => { ast_enum!(@location_arm n, $($conv)?) }
                    )*
                }
            }
        }
    };

    (@id_arm $inner:ident, inner_enum) => {
        $inner.id()
    };

    (@id_arm $inner:ident, ) => {
        $inner.id
    };

    (@location_arm $inner:ident, inner_enum) => {
        $inner.location()
    };

    (@location_arm $inner:ident, ) => {
        $inner.location.clone()
    };
}

macro_rules! ast_enums {
    (
        $(
            $(#[$outer:meta])*
            $enum_vis:vis enum $name:ident { $($arms:tt)* }
        )+
    ) => {
        $(
            ast_enum! {
                $(#[$outer])*
                $enum_vis enum $name { $($arms)* }
            }
        )+
    };
}

ast_enums! {

    pub enum Statement {
        VariableDecl(Rc<VariableDecl>),
        AnnAssign(Rc<AnnAssign>),
        AugAssign(Rc<AugAssign>),
    }

    pub enum Expression {
        Name(Rc<Name>),
        Attribute(Rc<Attribute>),
        Subscript(Rc<Subscript>),
        Tuple(Rc<Tuple>),
        @inner_enum Constant(Constant),
        UnaryOp(Rc<UnaryOp>),
        BinOp(Rc<BinOp>),
        BoolOp(Rc<BoolOp>),
    }

    /// Literal values. Every variant is a valid type-checking target for
    /// `validate_literal`.
    pub enum Constant {
        Int(Rc<Int>),
        Decimal(Rc<Decimal>),
        Hex(Rc<Hex>),
        Str(Rc<Str>),
        Bytes(Rc<Bytes>),
        NameConstant(Rc<NameConstant>),
    }

    /// Nodes that carry a numeric operator.
    pub enum Operation {
        UnaryOp(Rc<UnaryOp>),
        BinOp(Rc<BinOp>),
        AugAssign(Rc<AugAssign>),
    }
}

/// Shape of a literal node, used by type objects to declare which literals they accept.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum LiteralKind {
    Int,
    Decimal,
    Hex,
    Str,
    Bytes,
    NameConstant,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum UnaryOperatorKind {
    Not,
    USub,
    Invert,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum OperatorKind {
    Add,
    Sub,
    Mult,
    Div,
    FloorDiv,
    Mod,
    Pow,
    BitAnd,
    BitOr,
    BitXor,
    LShift,
    RShift,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum BoolOperatorKind {
    And,
    Or,
}

ast_nodes! {

    /// Storage variable declaration, e.g. `balances: public(uint256[4])`.
    pub struct VariableDecl {
        pub target: Rc<Name>,
        pub annotation: Expression,
        pub value: Option<Expression>,
        pub is_constant: bool,
        pub is_public: bool,
        pub is_immutable: bool,
    }

    pub struct AnnAssign {
        pub target: Rc<Name>,
        pub annotation: Expression,
        pub value: Option<Expression>,
    }

    pub struct AugAssign {
        pub target: Expression,
        pub op: OperatorKind,
        pub value: Expression,
    }

    pub struct Name {
        pub name: String,
    }

    pub struct Attribute {
        pub value: Expression,
        pub attr: String,
    }

    pub struct Subscript {
        pub value: Expression,
        pub slice: Expression,
    }

    pub struct Tuple {
        pub elements: Vec<Expression>,
    }

    pub struct UnaryOp {
        pub op: UnaryOperatorKind,
        pub operand: Expression,
    }

    pub struct BinOp {
        pub left: Expression,
        pub op: OperatorKind,
        pub right: Expression,
    }

    pub struct BoolOp {
        pub op: BoolOperatorKind,
        pub values: Vec<Expression>,
    }

    /// Integer literal. The value is kept as written (decimal digits, optional sign)
    /// since it may exceed any native integer width.
    pub struct Int {
        pub value: String,
    }

    pub struct Decimal {
        pub value: String,
    }

    pub struct Hex {
        pub value: String,
    }

    pub struct Str {
        pub value: String,
    }

    pub struct Bytes {
        pub value: Vec<u8>,
    }

    /// `True`, `False` or `None`.
    pub struct NameConstant {
        pub value: Option<bool>,
    }

}
