//! Composite types built by type resolution: fixed-size arrays and tuples.

use core::fmt;
use std::fmt::{Display, Formatter};

use super::TypeObject;
use super::base::{BaseTypeDefinition, VyperType};
use crate::abi_types::AbiType;
use crate::errors::TypeError;

/// Fixed-size array, `value_type[length]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SArrayT {
    value_type: Box<TypeObject>,
    length: u64,
}

impl SArrayT {
    /// Builds `value_type[length]`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidType`] when `length` is zero or when
    /// `value_type` cannot be an array element.
    pub fn new(value_type: TypeObject, length: u64) -> Result<Self, TypeError> {
        if length == 0 {
            return Err(TypeError::invalid_type("Array length is invalid"));
        }
        if !value_type.as_array() {
            return Err(TypeError::invalid_type(format!(
                "Arrays of {value_type} are not allowed"
            )));
        }
        Ok(Self {
            value_type: Box::new(value_type),
            length,
        })
    }

    #[must_use]
    pub fn value_type(&self) -> &TypeObject {
        &self.value_type
    }

    #[must_use]
    pub fn length(&self) -> u64 {
        self.length
    }
}

impl Display for SArrayT {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}[{}]", self.value_type, self.length)
    }
}

impl VyperType for SArrayT {
    fn as_array(&self) -> bool {
        true
    }

    fn abi_type(&self) -> AbiType {
        AbiType::StaticArray(Box::new(self.value_type.abi_type()), self.length)
    }
}

impl BaseTypeDefinition for SArrayT {}

/// Ordered tuple of member types, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleT {
    member_types: Vec<TypeObject>,
}

impl TupleT {
    #[must_use]
    pub fn new(member_types: Vec<TypeObject>) -> Self {
        Self { member_types }
    }

    #[must_use]
    pub fn member_types(&self) -> &[TypeObject] {
        &self.member_types
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.member_types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.member_types.is_empty()
    }
}

impl Display for TupleT {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let members = self
            .member_types
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({members})")
    }
}

impl VyperType for TupleT {
    fn abi_type(&self) -> AbiType {
        AbiType::Tuple(self.member_types.iter().map(VyperType::abi_type).collect())
    }
}

impl BaseTypeDefinition for TupleT {}
