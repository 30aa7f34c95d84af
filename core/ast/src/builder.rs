//! Programmatic AST construction.
//!
//! The `Builder` creates typed nodes with unique IDs and source locations.
//! Front ends that already know the shape of a declaration (ABI ingestion,
//! interface files, tests) use it instead of going through the parser.
//!
//! # Example
//!
//! ```
//! use vyper_ast::builder::Builder;
//!
//! let mut builder = Builder::new("contract.vy");
//! // uint256[4]
//! let elem = builder.name("uint256");
//! let len = builder.int(4);
//! let annotation = builder.subscript(elem, len);
//! assert_eq!(annotation.leftmost_name().unwrap().name, "uint256");
//! ```
//!
//! # Node ID Assignment
//!
//! Node IDs are assigned sequentially starting from 1 using an atomic counter:
//!
//! - **Zero is reserved**: ID 0 represents invalid/uninitialized nodes
//! - **Thread-safe**: Uses `AtomicU32` with relaxed ordering
//!
//! Every node receives the builder's current position; `at` moves it.

use std::{
    rc::Rc,
    sync::atomic::{AtomicU32, Ordering},
};

use crate::nodes::{
    AnnAssign, Attribute, AugAssign, BinOp, BoolOp, BoolOperatorKind, Bytes, Constant, Decimal,
    Expression, Hex, Int, Location, Name, NameConstant, OperatorKind, Statement, Str,
    Subscript, Tuple, UnaryOp, UnaryOperatorKind, VariableDecl,
};

pub struct Builder {
    source: String,
    line: u32,
    column: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new("<unknown>")
    }
}

impl Builder {
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            line: 1,
            column: 1,
        }
    }

    /// Moves the position stamped on subsequently built nodes.
    pub fn at(&mut self, line: u32, column: u32) -> &mut Self {
        self.line = line;
        self.column = column;
        self
    }

    pub fn name(&mut self, name: &str) -> Expression {
        Expression::Name(self.name_node(name))
    }

    pub fn name_node(&mut self, name: &str) -> Rc<Name> {
        let (id, location) = self.next();
        Rc::new(Name::new(id, location, name.to_string()))
    }

    pub fn attribute(&mut self, value: Expression, attr: &str) -> Expression {
        let (id, location) = self.next();
        Expression::Attribute(Rc::new(Attribute::new(id, location, value, attr.to_string())))
    }

    pub fn subscript(&mut self, value: Expression, slice: Expression) -> Expression {
        let (id, location) = self.next();
        Expression::Subscript(Rc::new(Subscript::new(id, location, value, slice)))
    }

    pub fn tuple(&mut self, elements: Vec<Expression>) -> Expression {
        let (id, location) = self.next();
        Expression::Tuple(Rc::new(Tuple::new(id, location, elements)))
    }

    pub fn int(&mut self, value: i64) -> Expression {
        self.int_literal(&value.to_string())
    }

    /// Integer literal from its source spelling; used for values wider than `i64`.
    pub fn int_literal(&mut self, value: &str) -> Expression {
        let (id, location) = self.next();
        Expression::Constant(Constant::Int(Rc::new(Int::new(
            id,
            location,
            value.to_string(),
        ))))
    }

    pub fn decimal(&mut self, value: &str) -> Expression {
        let (id, location) = self.next();
        Expression::Constant(Constant::Decimal(Rc::new(Decimal::new(
            id,
            location,
            value.to_string(),
        ))))
    }

    pub fn hex(&mut self, value: &str) -> Expression {
        let (id, location) = self.next();
        Expression::Constant(Constant::Hex(Rc::new(Hex::new(
            id,
            location,
            value.to_string(),
        ))))
    }

    pub fn str(&mut self, value: &str) -> Expression {
        let (id, location) = self.next();
        Expression::Constant(Constant::Str(Rc::new(Str::new(
            id,
            location,
            value.to_string(),
        ))))
    }

    pub fn bytes(&mut self, value: &[u8]) -> Expression {
        let (id, location) = self.next();
        Expression::Constant(Constant::Bytes(Rc::new(Bytes::new(
            id,
            location,
            value.to_vec(),
        ))))
    }

    pub fn name_constant(&mut self, value: Option<bool>) -> Expression {
        let (id, location) = self.next();
        Expression::Constant(Constant::NameConstant(Rc::new(NameConstant::new(
            id, location, value,
        ))))
    }

    pub fn unary_op(&mut self, op: UnaryOperatorKind, operand: Expression) -> Rc<UnaryOp> {
        let (id, location) = self.next();
        Rc::new(UnaryOp::new(id, location, op, operand))
    }

    pub fn bin_op(&mut self, left: Expression, op: OperatorKind, right: Expression) -> Rc<BinOp> {
        let (id, location) = self.next();
        Rc::new(BinOp::new(id, location, left, op, right))
    }

    pub fn aug_assign(
        &mut self,
        target: Expression,
        op: OperatorKind,
        value: Expression,
    ) -> Rc<AugAssign> {
        let (id, location) = self.next();
        Rc::new(AugAssign::new(id, location, target, op, value))
    }

    pub fn bool_op(&mut self, op: BoolOperatorKind, values: Vec<Expression>) -> Rc<BoolOp> {
        let (id, location) = self.next();
        Rc::new(BoolOp::new(id, location, op, values))
    }

    pub fn variable_decl(&mut self, target: &str, annotation: Expression) -> Statement {
        let target = self.name_node(target);
        let (id, location) = self.next();
        Statement::VariableDecl(Rc::new(VariableDecl::new(id, location, target, annotation)))
    }

    pub fn ann_assign(
        &mut self,
        target: &str,
        annotation: Expression,
        value: Option<Expression>,
    ) -> Statement {
        let target = self.name_node(target);
        let (id, location) = self.next();
        Statement::AnnAssign(Rc::new(AnnAssign::new(
            id, location, target, annotation, value,
        )))
    }

    fn next(&self) -> (u32, Location) {
        let location = Location {
            offset_start: 0,
            offset_end: 0,
            start_line: self.line,
            start_column: self.column,
            end_line: self.line,
            end_column: self.column,
            source: self.source.clone(),
        };
        (Self::get_node_id(), location)
    }

    /// Generate a unique node ID using an atomic counter.
    ///
    /// Uses a global atomic counter to ensure unique IDs across all AST nodes.
    /// Starting from 1 (0 is reserved as invalid/uninitialized).
    fn get_node_id() -> u32 {
        static COUNTER: AtomicU32 = AtomicU32::new(1);
        COUNTER.fetch_add(1, Ordering::Relaxed)
    }
}
