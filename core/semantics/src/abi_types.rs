//! Wire-level ABI type descriptors.
//!
//! Every type object projects to an [`AbiType`] through `VyperType::abi_type`.
//! The canonical descriptor (`selector_name`) is the string that appears in
//! function selectors and in the `type` field of JSON ABI entries.

use core::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AbiType {
    Bool,
    Address,
    /// `uintN` / `intN`.
    Int { bits: u16, signed: bool },
    /// `fixedMxN` / `ufixedMxN`.
    Fixed { bits: u16, places: u8, signed: bool },
    /// `bytesN` for `1 <= N <= 32`.
    BytesM(u8),
    Bytes,
    String,
    StaticArray(Box<AbiType>, u64),
    Tuple(Vec<AbiType>),
}

impl AbiType {
    /// Canonical descriptor, e.g. `uint256[4]` or `(bool,address)`.
    #[must_use]
    pub fn selector_name(&self) -> String {
        match self {
            AbiType::Bool => "bool".to_string(),
            AbiType::Address => "address".to_string(),
            AbiType::Int { bits, signed } => {
                format!("{}int{bits}", if *signed { "" } else { "u" })
            }
            AbiType::Fixed {
                bits,
                places,
                signed,
            } => format!("{}fixed{bits}x{places}", if *signed { "" } else { "u" }),
            AbiType::BytesM(m) => format!("bytes{m}"),
            AbiType::Bytes => "bytes".to_string(),
            AbiType::String => "string".to_string(),
            AbiType::StaticArray(subtype, length) => {
                format!("{}[{length}]", subtype.selector_name())
            }
            AbiType::Tuple(members) => {
                let members = members
                    .iter()
                    .map(AbiType::selector_name)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("({members})")
            }
        }
    }

    /// Whether the encoding of this type has a dynamic size.
    #[must_use = "this is a pure check with no side effects"]
    pub fn is_dynamic(&self) -> bool {
        match self {
            AbiType::Bytes | AbiType::String => true,
            AbiType::StaticArray(subtype, _) => subtype.is_dynamic(),
            AbiType::Tuple(members) => members.iter().any(AbiType::is_dynamic),
            AbiType::Bool
            | AbiType::Address
            | AbiType::Int { .. }
            | AbiType::Fixed { .. }
            | AbiType::BytesM(_) => false,
        }
    }

    /// Size in bytes of the static (head) part of the encoding.
    ///
    /// Dynamic types occupy a single 32-byte offset word in the head. Returns
    /// `None` when the size does not fit a `u64`.
    #[must_use]
    pub fn embedded_static_size(&self) -> Option<u64> {
        if self.is_dynamic() {
            return Some(32);
        }
        match self {
            AbiType::StaticArray(subtype, length) => {
                subtype.embedded_static_size()?.checked_mul(*length)
            }
            AbiType::Tuple(members) => members.iter().try_fold(0u64, |size, member| {
                size.checked_add(member.embedded_static_size()?)
            }),
            _ => Some(32),
        }
    }
}

impl Display for AbiType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.selector_name())
    }
}
