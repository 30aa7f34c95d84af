//! ABI function ingestion tests
//!
//! Reads a JSON ABI from `test_data` and checks the resulting signatures.

use crate::utils::load_abi_functions;
use vyper_semantics::abi_function::{FunctionSignature, FunctionVisibility, StateMutability};
use vyper_semantics::Namespace;

fn signatures(name: &str) -> anyhow::Result<Vec<FunctionSignature>> {
    let namespace = Namespace::default();
    load_abi_functions(module_path!(), name)?
        .iter()
        .map(|entry| FunctionSignature::from_abi(&namespace, entry))
        .collect()
}

fn find<'a>(signatures: &'a [FunctionSignature], name: &str) -> &'a FunctionSignature {
    signatures
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("no function named {name}"))
}

#[test]
fn test_events_are_skipped() -> anyhow::Result<()> {
    let signatures = signatures("erc20")?;
    assert_eq!(signatures.len(), 6);
    assert!(signatures.iter().all(|s| s.name != "Transfer"));
    Ok(())
}

#[test]
fn test_all_functions_are_external() -> anyhow::Result<()> {
    let signatures = signatures("erc20")?;
    assert!(
        signatures
            .iter()
            .all(|s| s.visibility == FunctionVisibility::External)
    );
    Ok(())
}

#[test]
fn test_selector_signatures() -> anyhow::Result<()> {
    let signatures = signatures("erc20")?;
    assert_eq!(
        find(&signatures, "transfer").selector_signature(),
        "transfer(address,uint256)"
    );
    assert_eq!(
        find(&signatures, "batchTransfer").selector_signature(),
        "batchTransfer(address[4],uint256[4])"
    );
    assert_eq!(
        find(&signatures, "scale").selector_signature(),
        "scale(fixed168x10)"
    );
    Ok(())
}

#[test]
fn test_mutability_from_modern_and_legacy_fields() -> anyhow::Result<()> {
    let signatures = signatures("erc20")?;
    let expected = [
        ("transfer", StateMutability::Nonpayable),
        ("balanceOf", StateMutability::View),
        ("name", StateMutability::View),
        ("deposit", StateMutability::Payable),
        ("scale", StateMutability::Pure),
    ];
    for (name, mutability) in expected {
        assert_eq!(
            find(&signatures, name).mutability,
            mutability,
            "unexpected mutability for {name}"
        );
    }
    Ok(())
}

#[test]
fn test_return_types() -> anyhow::Result<()> {
    let signatures = signatures("erc20")?;
    let name = find(&signatures, "name");
    assert_eq!(name.return_types.len(), 1);
    assert_eq!(name.return_types[0].to_string(), "String");
    assert!(find(&signatures, "deposit").return_types.is_empty());
    Ok(())
}

#[test]
fn test_unresolvable_entry_fails_the_whole_function() {
    let namespace = Namespace::default();
    let entry = serde_json::from_value(serde_json::json!({
        "type": "function",
        "name": "broken",
        "inputs": [{"name": "x", "type": "uint256"}],
        "outputs": [{"name": "", "type": "uint256[abc]"}]
    }))
    .unwrap();
    let err = FunctionSignature::from_abi(&namespace, &entry).unwrap_err();
    assert_eq!(err.to_string(), "in return types of function 'broken'");
    assert_eq!(
        err.root_cause().to_string(),
        "ABI type has an invalid length: uint256[abc]"
    );
}
