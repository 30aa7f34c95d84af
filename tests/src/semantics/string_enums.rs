//! Ordered string enumeration tests

use vyper_semantics::abi_function::{FunctionVisibility, StateMutability};
use vyper_semantics::string_enum;
use vyper_semantics::string_enum::StringEnum;
use vyper_semantics::InternalError;

string_enum! {
    enum Location {
        Unset,
        Memory,
        Storage,
        Calldata,
    }
}

#[test]
fn test_values_are_lowercase_variant_names() {
    assert_eq!(
        Location::values(),
        vec!["unset", "memory", "storage", "calldata"]
    );
    assert_eq!(Location::Calldata.to_string(), "calldata");
}

#[test]
fn test_options_follow_declaration_order() {
    assert_eq!(
        Location::options(),
        &[
            Location::Unset,
            Location::Memory,
            Location::Storage,
            Location::Calldata
        ]
    );
}

#[test]
fn test_membership() {
    assert!(Location::is_valid_value("storage"));
    assert!(!Location::is_valid_value("Storage"));
    assert!(!Location::is_valid_value("stack"));
}

#[test]
fn test_round_trip_through_value() -> anyhow::Result<()> {
    for option in Location::options() {
        assert_eq!(Location::from_value(&option.value())?, *option);
        assert_eq!(option.value().parse::<Location>()?, *option);
    }
    Ok(())
}

#[test]
fn test_unknown_value_is_an_internal_error() {
    let err = "stack".parse::<Location>().unwrap_err();
    assert_eq!(
        err,
        InternalError::InvalidEnumValue {
            value: "stack".to_string(),
            family: "Location",
        }
    );
}

#[test]
#[allow(clippy::eq_op)]
fn test_ordering() {
    assert!(Location::Unset < Location::Memory);
    assert!(Location::Memory <= Location::Storage);
    assert!(Location::Calldata > Location::Storage);
    assert!(Location::Storage >= Location::Storage);
    assert!(!(Location::Memory < Location::Memory));
    assert!(Location::Memory <= Location::Memory);
}

#[test]
fn test_builtin_families() {
    assert_eq!(FunctionVisibility::values(), vec!["external", "internal"]);
    assert!(StateMutability::View < StateMutability::Payable);
    assert_eq!(
        "nonpayable".parse::<StateMutability>().ok(),
        Some(StateMutability::Nonpayable)
    );
}
