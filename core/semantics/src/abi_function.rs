//! Function signatures read from a JSON ABI.
//!
//! Interfaces of external contracts arrive as ABI function entries. Each
//! entry becomes a [`FunctionSignature`] whose argument and return types are
//! resolved with [`type_from_abi`].

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::abi_resolver::{AbiTypeEntry, type_from_abi};
use crate::errors::InternalError;
use crate::namespace::Namespace;
use crate::string_enum::StringEnum;
use crate::types::{TypeObject, VyperType};

crate::string_enum! {
    pub enum FunctionVisibility {
        External,
        Internal,
    }
}

crate::string_enum! {
    /// Ordered from most to least restrictive.
    pub enum StateMutability {
        Pure,
        View,
        Nonpayable,
        Payable,
    }
}

impl StateMutability {
    /// Mutability declared by an ABI entry.
    ///
    /// Entries without `stateMutability` predate it and are read from the
    /// legacy `payable` and `constant` flags.
    ///
    /// # Errors
    ///
    /// Returns [`InternalError::InvalidEnumValue`] for an unrecognised
    /// `stateMutability` value.
    pub fn from_abi(entry: &AbiFunctionEntry) -> Result<Self, InternalError> {
        if let Some(value) = &entry.state_mutability {
            return Self::from_value(value);
        }
        Ok(if entry.payable {
            StateMutability::Payable
        } else if entry.constant {
            StateMutability::View
        } else {
            StateMutability::Nonpayable
        })
    }
}

/// One `"type": "function"` entry of a JSON ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiFunctionEntry {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiTypeEntry>,
    #[serde(default)]
    pub outputs: Vec<AbiTypeEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
    #[serde(default)]
    pub payable: bool,
    #[serde(default)]
    pub constant: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub argument_types: Vec<TypeObject>,
    pub return_types: Vec<TypeObject>,
    pub visibility: FunctionVisibility,
    pub mutability: StateMutability,
}

impl FunctionSignature {
    /// Builds the signature of an external function from its ABI entry.
    ///
    /// # Errors
    ///
    /// Fails with the underlying [`crate::errors::TypeError`] when an argument or
    /// return type cannot be resolved, and with [`InternalError`] when the
    /// declared mutability is not recognised.
    pub fn from_abi(namespace: &Namespace, entry: &AbiFunctionEntry) -> anyhow::Result<Self> {
        let resolve = |types: &[AbiTypeEntry]| {
            types
                .iter()
                .map(|ty| type_from_abi(namespace, ty))
                .collect::<Result<Vec<_>, _>>()
        };
        let argument_types = resolve(entry.inputs.as_slice())
            .with_context(|| format!("in arguments of function '{}'", entry.name))?;
        let return_types = resolve(entry.outputs.as_slice())
            .with_context(|| format!("in return types of function '{}'", entry.name))?;
        let mutability = StateMutability::from_abi(entry)?;

        debug!(name = %entry.name, %mutability, "read ABI function");
        Ok(Self {
            name: entry.name.clone(),
            argument_types,
            return_types,
            visibility: FunctionVisibility::External,
            mutability,
        })
    }

    /// ABI selector text, e.g. `transfer(address,uint256)`.
    #[must_use]
    pub fn selector_signature(&self) -> String {
        let arguments = self
            .argument_types
            .iter()
            .map(|ty| ty.abi_type().selector_name())
            .collect::<Vec<_>>()
            .join(",");
        format!("{}({arguments})", self.name)
    }
}
