//! Boolean type contract tests
//!
//! `bool` accepts `not`, `and` and `or`, the literals `True` and `False`, and
//! nothing else.

use std::rc::Rc;

use vyper_ast::builder::Builder;
use vyper_ast::nodes::{BoolOperatorKind, Constant, Operation, OperatorKind, UnaryOperatorKind};
use vyper_semantics::types::{BasePrimitive, BoolT, VyperType};
use vyper_semantics::TypeError;

fn constant(builder: &mut Builder, value: Option<bool>) -> Constant {
    builder
        .name_constant(value)
        .as_constant()
        .cloned()
        .expect("name constant")
}

#[test]
fn test_identity() {
    assert_eq!(BoolT.id(), "bool");
    assert!(BoolT.as_array());
    assert_eq!(BoolT.abi_type().selector_name(), "bool");
}

#[test]
fn test_true_and_false_are_valid_literals() {
    let mut builder = Builder::new("contract.vy");
    for value in [true, false] {
        let literal = constant(&mut builder, Some(value));
        assert!(BoolT.validate_literal(&literal).is_ok());
    }
}

#[test]
fn test_none_is_not_a_bool() {
    let mut builder = Builder::new("contract.vy");
    let literal = constant(builder.at(5, 12), None);
    let err = BoolT.validate_literal(&literal).unwrap_err();
    assert!(matches!(err, TypeError::InvalidLiteral { .. }));
    assert_eq!(err.to_string(), "5:12: Invalid literal for type 'bool'");
}

#[test]
fn test_other_literal_kinds_are_rejected() {
    let mut builder = Builder::new("contract.vy");
    let literals = [builder.int(1), builder.str("True"), builder.hex("0x01")];
    for literal in &literals {
        let err = BoolT
            .validate_literal(literal.as_constant().unwrap())
            .unwrap_err();
        assert!(matches!(err, TypeError::InvalidLiteral { .. }));
    }
}

#[test]
fn test_not_is_accepted() {
    let mut builder = Builder::new("contract.vy");
    let operand = builder.name("flag");
    let node = Operation::UnaryOp(builder.unary_op(UnaryOperatorKind::Not, operand));
    assert!(BoolT.validate_numeric_op(&node).is_ok());
}

#[test]
fn test_arithmetic_is_rejected_with_operator_description() {
    let mut builder = Builder::new("contract.vy");
    let expected = [
        (OperatorKind::Add, "addition"),
        (OperatorKind::Mult, "multiplication"),
        (OperatorKind::BitAnd, "bitwise and"),
    ];
    for (op, description) in expected {
        let left = builder.name("a");
        let right = builder.name("b");
        let node = Operation::BinOp(builder.bin_op(left, op, right));
        let err = BoolT.validate_numeric_op(&node).unwrap_err();
        assert!(matches!(err, TypeError::InvalidOperation { .. }));
        assert_eq!(err.message(), format!("Cannot perform {description} on bool"));
    }
}

#[test]
fn test_unary_negation_is_rejected() {
    let mut builder = Builder::new("contract.vy");
    let operand = builder.name("flag");
    let node = Operation::UnaryOp(builder.unary_op(UnaryOperatorKind::USub, operand));
    let err = BoolT.validate_numeric_op(&node).unwrap_err();
    assert_eq!(err.message(), "Cannot perform negation on bool");
}

#[test]
fn test_augmented_assignment_is_rejected() {
    let mut builder = Builder::new("contract.vy");
    let target = builder.name("flag");
    let value = builder.name_constant(Some(true));
    let node = Operation::AugAssign(builder.aug_assign(target, OperatorKind::BitOr, value));
    assert!(BoolT.validate_numeric_op(&node).is_err());
}

#[test]
fn test_boolean_operators_are_accepted() {
    let mut builder = Builder::new("contract.vy");
    for op in [BoolOperatorKind::And, BoolOperatorKind::Or] {
        let values = vec![builder.name("a"), builder.name("b")];
        let node: Rc<_> = builder.bool_op(op, values);
        assert!(BoolT.validate_boolean_op(&node).is_ok());
    }
}
