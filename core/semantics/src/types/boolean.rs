use core::fmt;
use std::fmt::{Display, Formatter};

use vyper_ast::nodes::{BoolOp, Constant, LiteralKind, Operation, UnaryOperatorKind};

use super::base::{
    BasePrimitive, BaseTypeDefinition, ValueTypeDefinition, VyperType, check_literal_kind,
    invalid_literal, reject_numeric_op,
};
use crate::abi_types::AbiType;
use crate::errors::TypeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoolT;

impl Display for BoolT {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "bool")
    }
}

impl VyperType for BoolT {
    fn as_array(&self) -> bool {
        true
    }

    fn abi_type(&self) -> AbiType {
        AbiType::Bool
    }

    fn validate_numeric_op(&self, node: &Operation) -> Result<(), TypeError> {
        if node.unary_operator() == Some(UnaryOperatorKind::Not) {
            return Ok(());
        }
        reject_numeric_op(self, node)
    }

    fn validate_boolean_op(&self, _node: &BoolOp) -> Result<(), TypeError> {
        Ok(())
    }
}

impl BaseTypeDefinition for BoolT {}

impl ValueTypeDefinition for BoolT {}

impl BasePrimitive for BoolT {
    fn valid_literals(&self) -> &'static [LiteralKind] {
        &[LiteralKind::NameConstant]
    }

    fn validate_literal(&self, node: &Constant) -> Result<(), TypeError> {
        check_literal_kind(self, node)?;
        if let Constant::NameConstant(constant) = node
            && constant.value.is_none()
        {
            return Err(invalid_literal(self, node));
        }
        Ok(())
    }
}
