//! ABI descriptor resolution tests

use serde_json::json;
use vyper_semantics::abi_resolver::{AbiTypeEntry, type_from_abi, type_from_abi_str};
use vyper_semantics::types::{BoolT, IntegerT, VyperType};
use vyper_semantics::{Namespace, TypeError, TypeObject};

fn resolve_json(value: serde_json::Value) -> Result<TypeObject, TypeError> {
    let entry: AbiTypeEntry = serde_json::from_value(value).unwrap();
    type_from_abi(&Namespace::default(), &entry)
}

#[test]
fn test_bool_is_the_namespace_bool() -> anyhow::Result<()> {
    let namespace = Namespace::default();
    let ty = resolve_json(json!({"type": "bool"}))?;
    assert_eq!(ty, namespace.lookup("bool")?);
    assert_eq!(ty, TypeObject::from(BoolT));
    Ok(())
}

#[test]
fn test_single_dimension_array() -> anyhow::Result<()> {
    let ty = resolve_json(json!({"name": "values", "type": "uint256[4]"}))?;
    let array = ty.as_sarray().expect("expected an array");
    assert_eq!(array.length(), 4);
    assert_eq!(
        array.value_type(),
        &TypeObject::from(IntegerT::new(256, false).unwrap())
    );
    Ok(())
}

#[test]
fn test_nested_array_outer_length_is_last() -> anyhow::Result<()> {
    let ty = resolve_json(json!({"type": "uint256[2][3]"}))?;
    let outer = ty.as_sarray().expect("expected an array");
    assert_eq!(outer.length(), 3);
    let inner = outer.value_type().as_sarray().expect("expected a nested array");
    assert_eq!(inner.length(), 2);
    assert_eq!(inner.value_type().id(), "uint256");
    Ok(())
}

#[test]
fn test_unknown_leaf_type() {
    let err = resolve_json(json!({"type": "bogus"})).unwrap_err();
    assert!(matches!(err, TypeError::UnknownType { .. }));
    assert_eq!(err.to_string(), "ABI contains unknown type: bogus");
}

#[test]
fn test_invalid_length() {
    let err = resolve_json(json!({"type": "uint8[abc]"})).unwrap_err();
    assert!(matches!(err, TypeError::UnknownType { .. }));
    assert_eq!(err.to_string(), "ABI type has an invalid length: uint8[abc]");
}

#[test]
fn test_messages_name_the_normalised_descriptor() {
    let err = type_from_abi_str(&Namespace::default(), "string[2]").unwrap_err();
    assert_eq!(err.to_string(), "ABI contains unknown type: string[2]");
}

#[test]
fn test_user_declared_leaf() -> anyhow::Result<()> {
    let mut namespace = Namespace::default();
    namespace.declare("Flag", BoolT.into())?;
    let ty = type_from_abi_str(&namespace, "Flag[2]")?;
    assert_eq!(ty.to_string(), "bool[2]");
    Ok(())
}

#[test]
fn test_selector_names_resolve_back() -> anyhow::Result<()> {
    let namespace = Namespace::default();
    for descriptor in [
        "bool",
        "address",
        "int128",
        "bytes4",
        "bytes",
        "string",
        "fixed168x10",
        "uint256[4]",
        "address[2][3]",
    ] {
        let ty = type_from_abi_str(&namespace, descriptor)?;
        let selector = ty.abi_type().selector_name();
        assert_eq!(selector, descriptor);
        assert_eq!(type_from_abi_str(&namespace, &selector)?, ty);
    }
    Ok(())
}
