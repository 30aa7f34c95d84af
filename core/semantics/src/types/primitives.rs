//! Numeric, address and fixed-size bytes types.
//!
//! Only the parts of these types that type resolution needs are modelled:
//! identity, ABI projection, accepted literal shapes and operator support.

use core::fmt;
use std::fmt::{Display, Formatter};

use vyper_ast::nodes::{Constant, LiteralKind, Operation, UnaryOperatorKind};

use super::base::{
    BasePrimitive, BaseTypeDefinition, ValueTypeDefinition, VyperType, check_literal_kind,
    invalid_literal, reject_numeric_op,
};
use crate::abi_types::AbiType;
use crate::errors::TypeError;

/// `uintN` / `intN` for `N` in `8..=256`, step 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerT {
    bits: u16,
    signed: bool,
}

impl IntegerT {
    #[must_use]
    pub fn new(bits: u16, signed: bool) -> Option<Self> {
        (bits % 8 == 0 && (8..=256).contains(&bits)).then_some(Self { bits, signed })
    }

    /// Every integer type, unsigned first, narrowest first.
    #[must_use]
    pub fn all() -> Vec<Self> {
        [false, true]
            .into_iter()
            .flat_map(|signed| (1..=32).map(move |n| Self { bits: n * 8, signed }))
            .collect()
    }

    #[must_use]
    pub fn bits(&self) -> u16 {
        self.bits
    }

    #[must_use]
    pub fn is_signed(&self) -> bool {
        self.signed
    }
}

impl Display for IntegerT {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}int{}", if self.signed { "" } else { "u" }, self.bits)
    }
}

impl VyperType for IntegerT {
    fn as_array(&self) -> bool {
        true
    }

    fn abi_type(&self) -> AbiType {
        AbiType::Int {
            bits: self.bits,
            signed: self.signed,
        }
    }

    fn validate_numeric_op(&self, node: &Operation) -> Result<(), TypeError> {
        match (node.unary_operator(), node.binary_operator()) {
            (Some(UnaryOperatorKind::USub), _) if self.signed => Ok(()),
            (Some(UnaryOperatorKind::Invert), _) if !self.signed => Ok(()),
            (None, Some(op)) if !op.is_bitwise() || !self.signed => Ok(()),
            _ => reject_numeric_op(self, node),
        }
    }
}

impl BaseTypeDefinition for IntegerT {}

impl ValueTypeDefinition for IntegerT {}

impl BasePrimitive for IntegerT {
    fn valid_literals(&self) -> &'static [LiteralKind] {
        &[LiteralKind::Int]
    }

    /// Only the shape and sign of the literal are checked here.
    fn validate_literal(&self, node: &Constant) -> Result<(), TypeError> {
        check_literal_kind(self, node)?;
        if let Constant::Int(int) = node {
            let digits = int.value.strip_prefix('-');
            let negative = digits.is_some();
            let digits = digits.unwrap_or(&int.value);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid_literal(self, node));
            }
            if negative && !self.signed {
                return Err(invalid_literal(self, node));
            }
        }
        Ok(())
    }
}

/// Fixed-point decimal, `fixed168x10` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecimalT;

impl DecimalT {
    pub const BITS: u16 = 168;
    pub const DECIMAL_PLACES: u8 = 10;
}

impl Display for DecimalT {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "decimal")
    }
}

impl VyperType for DecimalT {
    fn as_array(&self) -> bool {
        true
    }

    fn abi_type(&self) -> AbiType {
        AbiType::Fixed {
            bits: Self::BITS,
            places: Self::DECIMAL_PLACES,
            signed: true,
        }
    }

    fn validate_numeric_op(&self, node: &Operation) -> Result<(), TypeError> {
        match (node.unary_operator(), node.binary_operator()) {
            (Some(UnaryOperatorKind::USub), _) => Ok(()),
            (None, Some(op)) if !op.is_bitwise() => Ok(()),
            _ => reject_numeric_op(self, node),
        }
    }
}

impl BaseTypeDefinition for DecimalT {}

impl ValueTypeDefinition for DecimalT {}

impl BasePrimitive for DecimalT {
    fn valid_literals(&self) -> &'static [LiteralKind] {
        &[LiteralKind::Decimal]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AddressT;

impl Display for AddressT {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "address")
    }
}

impl VyperType for AddressT {
    fn as_array(&self) -> bool {
        true
    }

    fn abi_type(&self) -> AbiType {
        AbiType::Address
    }
}

impl BaseTypeDefinition for AddressT {}

impl ValueTypeDefinition for AddressT {}

impl BasePrimitive for AddressT {
    fn valid_literals(&self) -> &'static [LiteralKind] {
        &[LiteralKind::Hex]
    }

    fn validate_literal(&self, node: &Constant) -> Result<(), TypeError> {
        check_literal_kind(self, node)?;
        if let Constant::Hex(hex) = node
            && hex_payload_len(&hex.value) != Some(40)
        {
            return Err(invalid_literal(self, node));
        }
        Ok(())
    }
}

/// `bytesM` for `1 <= M <= 32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BytesMT {
    length: u8,
}

impl BytesMT {
    #[must_use]
    pub fn new(length: u8) -> Option<Self> {
        (1..=32).contains(&length).then_some(Self { length })
    }

    #[must_use]
    pub fn all() -> Vec<Self> {
        (1..=32).map(|length| Self { length }).collect()
    }

    #[must_use]
    pub fn length(&self) -> u8 {
        self.length
    }
}

impl Display for BytesMT {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "bytes{}", self.length)
    }
}

impl VyperType for BytesMT {
    fn as_array(&self) -> bool {
        true
    }

    fn abi_type(&self) -> AbiType {
        AbiType::BytesM(self.length)
    }
}

impl BaseTypeDefinition for BytesMT {}

impl ValueTypeDefinition for BytesMT {}

impl BasePrimitive for BytesMT {
    fn valid_literals(&self) -> &'static [LiteralKind] {
        &[LiteralKind::Hex, LiteralKind::Bytes]
    }

    fn validate_literal(&self, node: &Constant) -> Result<(), TypeError> {
        check_literal_kind(self, node)?;
        let expected = usize::from(self.length);
        let fits = match node {
            Constant::Hex(hex) => hex_payload_len(&hex.value) == Some(expected * 2),
            Constant::Bytes(bytes) => bytes.value.len() == expected,
            _ => true,
        };
        if fits {
            Ok(())
        } else {
            Err(invalid_literal(self, node))
        }
    }
}

/// Number of hex digits after the `0x` prefix, if the literal is well formed.
fn hex_payload_len(value: &str) -> Option<usize> {
    let payload = value.strip_prefix("0x")?;
    payload
        .bytes()
        .all(|b| b.is_ascii_hexdigit())
        .then_some(payload.len())
}
