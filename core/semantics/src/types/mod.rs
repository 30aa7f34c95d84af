//! Type objects.
//!
//! A [`TypeObject`] is one concrete type usable in program text. Leaf types
//! live in the namespace; arrays and tuples are built fresh by each
//! resolution. Type objects are immutable and compare by value, so two
//! resolutions of `bool` are interchangeable.
//!
//! Behaviour is defined per concrete type through the [`VyperType`] and
//! [`BasePrimitive`] traits; `TypeObject` forwards to the wrapped type.

use core::fmt;
use std::fmt::{Display, Formatter};

use vyper_ast::nodes::{BoolOp, Constant, Operation};

use crate::abi_types::AbiType;
use crate::errors::TypeError;

pub mod base;
mod boolean;
mod bytestrings;
mod primitives;
mod subscriptable;

pub use base::{
    BasePrimitive, BaseTypeDefinition, ValueTypeDefinition, VyperType, reject_boolean_op,
    reject_numeric_op,
};
pub use boolean::BoolT;
pub use bytestrings::{BytesT, StringT};
pub use primitives::{AddressT, BytesMT, DecimalT, IntegerT};
pub use subscriptable::{SArrayT, TupleT};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeObject {
    Bool(BoolT),
    Integer(IntegerT),
    Decimal(DecimalT),
    Address(AddressT),
    BytesM(BytesMT),
    Bytes(BytesT),
    String(StringT),
    SArray(SArrayT),
    Tuple(TupleT),
}

macro_rules! dispatch {
    ($self:ident, $ty:ident => $body:expr) => {
        match $self {
            TypeObject::Bool($ty) => $body,
            TypeObject::Integer($ty) => $body,
            TypeObject::Decimal($ty) => $body,
            TypeObject::Address($ty) => $body,
            TypeObject::BytesM($ty) => $body,
            TypeObject::Bytes($ty) => $body,
            TypeObject::String($ty) => $body,
            TypeObject::SArray($ty) => $body,
            TypeObject::Tuple($ty) => $body,
        }
    };
}

impl TypeObject {
    /// Literal validation for primitive types.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidLiteral`] when the literal does not fit the
    /// type. Arrays and tuples are never written as a single constant, so they
    /// reject every literal.
    pub fn validate_literal(&self, node: &Constant) -> Result<(), TypeError> {
        match self {
            TypeObject::Bool(ty) => ty.validate_literal(node),
            TypeObject::Integer(ty) => ty.validate_literal(node),
            TypeObject::Decimal(ty) => ty.validate_literal(node),
            TypeObject::Address(ty) => ty.validate_literal(node),
            TypeObject::BytesM(ty) => ty.validate_literal(node),
            TypeObject::Bytes(ty) => ty.validate_literal(node),
            TypeObject::String(ty) => ty.validate_literal(node),
            TypeObject::SArray(_) | TypeObject::Tuple(_) => Err(TypeError::InvalidLiteral {
                message: format!("Invalid literal type for {self}"),
                location: node.location(),
            }),
        }
    }

    #[must_use]
    pub fn as_sarray(&self) -> Option<&SArrayT> {
        if let TypeObject::SArray(array) = self {
            Some(array)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_tuple(&self) -> Option<&TupleT> {
        if let TypeObject::Tuple(tuple) = self {
            Some(tuple)
        } else {
            None
        }
    }
}

impl Display for TypeObject {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        dispatch!(self, ty => Display::fmt(ty, f))
    }
}

impl VyperType for TypeObject {
    fn id(&self) -> String {
        dispatch!(self, ty => ty.id())
    }

    fn as_array(&self) -> bool {
        dispatch!(self, ty => ty.as_array())
    }

    fn abi_type(&self) -> AbiType {
        dispatch!(self, ty => ty.abi_type())
    }

    fn validate_numeric_op(&self, node: &Operation) -> Result<(), TypeError> {
        dispatch!(self, ty => ty.validate_numeric_op(node))
    }

    fn validate_boolean_op(&self, node: &BoolOp) -> Result<(), TypeError> {
        dispatch!(self, ty => ty.validate_boolean_op(node))
    }
}

impl BaseTypeDefinition for TypeObject {}

impl From<BoolT> for TypeObject {
    fn from(ty: BoolT) -> Self {
        TypeObject::Bool(ty)
    }
}

impl From<IntegerT> for TypeObject {
    fn from(ty: IntegerT) -> Self {
        TypeObject::Integer(ty)
    }
}

impl From<DecimalT> for TypeObject {
    fn from(ty: DecimalT) -> Self {
        TypeObject::Decimal(ty)
    }
}

impl From<AddressT> for TypeObject {
    fn from(ty: AddressT) -> Self {
        TypeObject::Address(ty)
    }
}

impl From<BytesMT> for TypeObject {
    fn from(ty: BytesMT) -> Self {
        TypeObject::BytesM(ty)
    }
}

impl From<BytesT> for TypeObject {
    fn from(ty: BytesT) -> Self {
        TypeObject::Bytes(ty)
    }
}

impl From<StringT> for TypeObject {
    fn from(ty: StringT) -> Self {
        TypeObject::String(ty)
    }
}

impl From<SArrayT> for TypeObject {
    fn from(ty: SArrayT) -> Self {
        TypeObject::SArray(ty)
    }
}

impl From<TupleT> for TypeObject {
    fn from(ty: TupleT) -> Self {
        TypeObject::Tuple(ty)
    }
}
