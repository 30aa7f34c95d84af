//! The capability contract shared by every type object.
//!
//! [`VyperType`] is implemented by all type objects, composite ones included.
//! The refinements narrow it down:
//!
//! - [`BaseTypeDefinition`]: a type a variable can be declared with.
//! - [`ValueTypeDefinition`]: a type whose values are copied, not referenced.
//! - [`BasePrimitive`]: a value type that can be written as a literal constant,
//!   and so carries literal validation.
//!
//! Operator rejection is produced in exactly one place: [`reject_numeric_op`]
//! and [`reject_boolean_op`]. Trait defaults call them, and types that accept
//! some operators call them explicitly for everything they do not handle, so
//! an operator added to the language is rejected by every existing type.

use std::fmt::Display;

use vyper_ast::nodes::{BoolOp, Constant, LiteralKind, Operation};

use crate::abi_types::AbiType;
use crate::errors::TypeError;

pub trait VyperType: Display {
    /// Canonical identifier, e.g. `bool` or `uint256[4]`.
    fn id(&self) -> String {
        self.to_string()
    }

    /// Whether values of this type may be array elements.
    fn as_array(&self) -> bool {
        false
    }

    /// Projection to the wire-level ABI type.
    fn abi_type(&self) -> AbiType;

    /// Checks a unary, binary or augmented-assignment operator against this type.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidOperation`] when the operator is not supported.
    fn validate_numeric_op(&self, node: &Operation) -> Result<(), TypeError> {
        reject_numeric_op(self, node)
    }

    /// Checks an `and`/`or` operation against this type.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidOperation`] when the type is not a valid operand.
    fn validate_boolean_op(&self, node: &BoolOp) -> Result<(), TypeError> {
        reject_boolean_op(self, node)
    }
}

pub trait BaseTypeDefinition: VyperType {}

pub trait ValueTypeDefinition: BaseTypeDefinition {}

/// A type that can be constructed from a literal constant.
pub trait BasePrimitive: ValueTypeDefinition {
    /// Literal node shapes accepted by this type.
    fn valid_literals(&self) -> &'static [LiteralKind];

    /// Checks that `node` is an acceptable literal for this type.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidLiteral`] naming the offending node.
    fn validate_literal(&self, node: &Constant) -> Result<(), TypeError> {
        check_literal_kind(self, node)
    }
}

/// Rejects a numeric operator for `ty`. The single source of numeric operator rejections.
///
/// # Errors
///
/// Always returns [`TypeError::InvalidOperation`].
pub fn reject_numeric_op<T: VyperType + ?Sized>(ty: &T, node: &Operation) -> Result<(), TypeError> {
    Err(TypeError::InvalidOperation {
        message: format!("Cannot perform {} on {ty}", node.description()),
        location: node.location(),
    })
}

/// Rejects a boolean operator for `ty`. The single source of boolean operator rejections.
///
/// # Errors
///
/// Always returns [`TypeError::InvalidOperation`].
pub fn reject_boolean_op<T: VyperType + ?Sized>(ty: &T, node: &BoolOp) -> Result<(), TypeError> {
    Err(TypeError::InvalidOperation {
        message: format!("Invalid type for operand: {ty}"),
        location: node.location.clone(),
    })
}

/// Default literal check: the node's shape must be one the type accepts.
///
/// # Errors
///
/// Returns [`TypeError::InvalidLiteral`] for any other literal shape.
pub fn check_literal_kind<T: BasePrimitive + ?Sized>(
    ty: &T,
    node: &Constant,
) -> Result<(), TypeError> {
    if ty.valid_literals().contains(&node.kind()) {
        return Ok(());
    }
    Err(TypeError::InvalidLiteral {
        message: format!("Invalid literal type for {ty}"),
        location: node.location(),
    })
}

/// Literal of an accepted shape whose value does not fit the type.
pub(crate) fn invalid_literal<T: VyperType + ?Sized>(ty: &T, node: &Constant) -> TypeError {
    TypeError::InvalidLiteral {
        message: format!("Invalid literal for type '{ty}'"),
        location: node.location(),
    }
}
