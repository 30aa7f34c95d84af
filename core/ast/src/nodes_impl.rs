use std::rc::Rc;

use super::nodes::{
    AnnAssign, Attribute, AugAssign, BinOp, BoolOp, BoolOperatorKind, Bytes, Constant, Decimal,
    Expression, Hex, Int, Location, Name, NameConstant, OperatorKind, Statement, Str, Subscript,
    Tuple, UnaryOp, UnaryOperatorKind, VariableDecl,
};

impl VariableDecl {
    #[must_use]
    pub fn new(id: u32, location: Location, target: Rc<Name>, annotation: Expression) -> Self {
        VariableDecl {
            id,
            location,
            target,
            annotation,
            value: None,
            is_constant: false,
            is_public: false,
            is_immutable: false,
        }
    }
}

impl AnnAssign {
    #[must_use]
    pub fn new(
        id: u32,
        location: Location,
        target: Rc<Name>,
        annotation: Expression,
        value: Option<Expression>,
    ) -> Self {
        AnnAssign {
            id,
            location,
            target,
            annotation,
            value,
        }
    }
}

impl Statement {
    /// Type annotation attached to a declaring statement.
    #[must_use]
    pub fn annotation(&self) -> Option<&Expression> {
        match self {
            Statement::VariableDecl(decl) => Some(&decl.annotation),
            Statement::AnnAssign(assign) => Some(&assign.annotation),
            Statement::AugAssign(_) => None,
        }
    }
}

impl AugAssign {
    #[must_use]
    pub fn new(
        id: u32,
        location: Location,
        target: Expression,
        op: OperatorKind,
        value: Expression,
    ) -> Self {
        AugAssign {
            id,
            location,
            target,
            op,
            value,
        }
    }
}

impl Name {
    #[must_use]
    pub fn new(id: u32, location: Location, name: String) -> Self {
        Name { id, location, name }
    }
}

impl Attribute {
    #[must_use]
    pub fn new(id: u32, location: Location, value: Expression, attr: String) -> Self {
        Attribute {
            id,
            location,
            value,
            attr,
        }
    }
}

impl Subscript {
    #[must_use]
    pub fn new(id: u32, location: Location, value: Expression, slice: Expression) -> Self {
        Subscript {
            id,
            location,
            value,
            slice,
        }
    }

    /// Identifier of the subscripted base when it is a bare `Name`.
    ///
    /// `DynArray[uint256, 3]` yields `Some("DynArray")`; `uint256[2][3]` yields
    /// `None` for the outer subscript because its base is another subscript.
    #[must_use]
    pub fn base_name(&self) -> Option<&str> {
        match &self.value {
            Expression::Name(name) => Some(name.name.as_str()),
            _ => None,
        }
    }
}

impl Tuple {
    #[must_use]
    pub fn new(id: u32, location: Location, elements: Vec<Expression>) -> Self {
        Tuple {
            id,
            location,
            elements,
        }
    }
}

impl UnaryOp {
    #[must_use]
    pub fn new(id: u32, location: Location, op: UnaryOperatorKind, operand: Expression) -> Self {
        UnaryOp {
            id,
            location,
            op,
            operand,
        }
    }
}

impl BinOp {
    #[must_use]
    pub fn new(
        id: u32,
        location: Location,
        left: Expression,
        op: OperatorKind,
        right: Expression,
    ) -> Self {
        BinOp {
            id,
            location,
            left,
            op,
            right,
        }
    }
}

impl BoolOp {
    #[must_use]
    pub fn new(id: u32, location: Location, op: BoolOperatorKind, values: Vec<Expression>) -> Self {
        BoolOp {
            id,
            location,
            op,
            values,
        }
    }
}

impl Int {
    #[must_use]
    pub fn new(id: u32, location: Location, value: String) -> Self {
        Int {
            id,
            location,
            value,
        }
    }
}

impl Decimal {
    #[must_use]
    pub fn new(id: u32, location: Location, value: String) -> Self {
        Decimal {
            id,
            location,
            value,
        }
    }
}

impl Hex {
    #[must_use]
    pub fn new(id: u32, location: Location, value: String) -> Self {
        Hex {
            id,
            location,
            value,
        }
    }
}

impl Str {
    #[must_use]
    pub fn new(id: u32, location: Location, value: String) -> Self {
        Str {
            id,
            location,
            value,
        }
    }
}

impl Bytes {
    #[must_use]
    pub fn new(id: u32, location: Location, value: Vec<u8>) -> Self {
        Bytes {
            id,
            location,
            value,
        }
    }
}

impl NameConstant {
    #[must_use]
    pub fn new(id: u32, location: Location, value: Option<bool>) -> Self {
        NameConstant {
            id,
            location,
            value,
        }
    }
}

impl Expression {
    /// Direct child expressions in source order.
    #[must_use]
    pub fn children(&self) -> Vec<Expression> {
        match self {
            Expression::Name(_) | Expression::Constant(_) => vec![],
            Expression::Attribute(attribute) => vec![attribute.value.clone()],
            Expression::Subscript(subscript) => {
                vec![subscript.value.clone(), subscript.slice.clone()]
            }
            Expression::Tuple(tuple) => tuple.elements.clone(),
            Expression::UnaryOp(unary) => vec![unary.operand.clone()],
            Expression::BinOp(binary) => vec![binary.left.clone(), binary.right.clone()],
            Expression::BoolOp(bool_op) => bool_op.values.clone(),
        }
    }

    /// Leftmost `Name` within this expression, including the expression itself.
    ///
    /// Walks the tree depth-first in source order, so for `foo.bar[3]` the
    /// result is `foo` and for `uint256[2][3]` it is `uint256`.
    #[must_use]
    pub fn leftmost_name(&self) -> Option<Rc<Name>> {
        if let Expression::Name(name) = self {
            return Some(name.clone());
        }
        self.children()
            .iter()
            .find_map(Expression::leftmost_name)
    }

    #[must_use]
    pub fn as_constant(&self) -> Option<&Constant> {
        if let Expression::Constant(constant) = self {
            Some(constant)
        } else {
            None
        }
    }
}
