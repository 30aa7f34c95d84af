//! Type resolution from JSON ABI type descriptors.
//!
//! A descriptor is a leaf type name optionally followed by any number of
//! `[<length>]` suffixes, e.g. `uint256`, `bool[4]` or `uint256[2][3]`.
//! The last suffix is the outermost dimension.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::TypeError;
use crate::namespace::Namespace;
use crate::types::{SArrayT, TypeObject};

/// ABI spellings whose namespace name differs.
pub const ABI_ALIASES: &[(&str, &str)] = &[
    ("fixed168x10", "decimal"),
    ("string", "String"),
    ("bytes", "Bytes"),
];

/// One entry of an ABI `inputs` or `outputs` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiTypeEntry {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AbiTypeEntry {
    #[must_use]
    pub fn new(type_: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            name: None,
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>, type_: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            name: Some(name.into()),
        }
    }
}

fn normalize(descriptor: &str) -> &str {
    ABI_ALIASES
        .iter()
        .find(|(abi_name, _)| *abi_name == descriptor)
        .map_or(descriptor, |(_, name)| name)
}

/// Resolves an ABI entry to a type object.
///
/// # Errors
///
/// Returns [`TypeError::UnknownType`] naming the whole descriptor when the
/// leaf type is unknown, an array length does not parse, or the array cannot
/// be built.
pub fn type_from_abi(namespace: &Namespace, entry: &AbiTypeEntry) -> Result<TypeObject, TypeError> {
    type_from_abi_str(namespace, &entry.type_)
}

/// Resolves a bare ABI type descriptor.
///
/// # Errors
///
/// See [`type_from_abi`].
pub fn type_from_abi_str(namespace: &Namespace, descriptor: &str) -> Result<TypeObject, TypeError> {
    let descriptor = normalize(descriptor);
    let unknown = || TypeError::unknown_type(format!("ABI contains unknown type: {descriptor}"));

    let resolved = if let Some((value_descriptor, length)) = descriptor.rsplit_once('[') {
        let length = match length.trim_end_matches(']').trim().parse::<i128>() {
            Ok(length) => length,
            // An integer too wide to parse can never be a valid length.
            Err(err)
                if matches!(
                    err.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                return Err(unknown());
            }
            Err(_) => {
                return Err(TypeError::unknown_type(format!(
                    "ABI type has an invalid length: {descriptor}"
                )));
            }
        };
        let value_type = match type_from_abi_str(namespace, value_descriptor) {
            Err(TypeError::UnknownType { .. }) => return Err(unknown()),
            other => other?,
        };
        let length = u64::try_from(length).map_err(|_| unknown())?;
        match SArrayT::new(value_type, length) {
            Ok(array) => TypeObject::from(array),
            Err(TypeError::InvalidType { .. }) => return Err(unknown()),
            Err(err) => return Err(err),
        }
    } else {
        namespace.get(descriptor).cloned().ok_or_else(unknown)?
    };

    debug!(descriptor, ty = %resolved, "resolved ABI type");
    Ok(resolved)
}
