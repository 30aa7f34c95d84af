//! Dynamic byte arrays and strings.
//!
//! The namespace holds the unbounded form of each (`Bytes`, `String`). The
//! maximum-length subscript (`String[100]`) is resolved by the bytestring
//! machinery, not by fixed-size array resolution, so neither type can be an
//! array element here.

use core::fmt;
use std::fmt::{Display, Formatter};

use vyper_ast::nodes::LiteralKind;

use super::base::{BasePrimitive, BaseTypeDefinition, ValueTypeDefinition, VyperType};
use crate::abi_types::AbiType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BytesT;

impl Display for BytesT {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Bytes")
    }
}

impl VyperType for BytesT {
    fn abi_type(&self) -> AbiType {
        AbiType::Bytes
    }
}

impl BaseTypeDefinition for BytesT {}

impl ValueTypeDefinition for BytesT {}

impl BasePrimitive for BytesT {
    fn valid_literals(&self) -> &'static [LiteralKind] {
        &[LiteralKind::Bytes, LiteralKind::Hex]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringT;

impl Display for StringT {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "String")
    }
}

impl VyperType for StringT {
    fn abi_type(&self) -> AbiType {
        AbiType::String
    }
}

impl BaseTypeDefinition for StringT {}

impl ValueTypeDefinition for StringT {}

impl BasePrimitive for StringT {
    fn valid_literals(&self) -> &'static [LiteralKind] {
        &[LiteralKind::Str]
    }
}
