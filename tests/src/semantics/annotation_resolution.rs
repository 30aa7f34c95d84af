//! Annotation resolution tests
//!
//! Annotations are built with the AST builder the way a parser would produce
//! them for declarations such as `x: uint256[2][3]`.

use crate::utils::array_annotation;
use vyper_ast::builder::Builder;
use vyper_ast::nodes::Statement;
use vyper_semantics::abi_resolver::type_from_abi_str;
use vyper_semantics::annotation_resolver::type_from_annotation;
use vyper_semantics::types::{BoolT, VyperType};
use vyper_semantics::{Namespace, TypeError, TypeObject};

fn resolve_declaration(statement: &Statement) -> Result<TypeObject, TypeError> {
    let annotation = statement.annotation().expect("declaration without annotation");
    type_from_annotation(&Namespace::default(), annotation)
}

mod declarations {
    use super::*;

    #[test]
    fn test_variable_declaration() -> anyhow::Result<()> {
        let mut builder = Builder::new("contract.vy");
        let annotation = array_annotation(&mut builder, "uint256", &[4]);
        let decl = builder.variable_decl("balances", annotation);
        assert_eq!(resolve_declaration(&decl)?.to_string(), "uint256[4]");
        Ok(())
    }

    #[test]
    fn test_annotated_assignment() -> anyhow::Result<()> {
        let mut builder = Builder::new("contract.vy");
        let annotation = builder.name("bool");
        let value = builder.name_constant(Some(true));
        let assign = builder.ann_assign("flag", annotation, Some(value));
        assert_eq!(resolve_declaration(&assign)?, TypeObject::from(BoolT));
        Ok(())
    }

    #[test]
    fn test_tuple_annotation() -> anyhow::Result<()> {
        let mut builder = Builder::new("contract.vy");
        let first = builder.name("uint256");
        let second = builder.name("bool");
        let annotation = builder.tuple(vec![first, second]);
        let ty = type_from_annotation(&Namespace::default(), &annotation)?;
        let tuple = ty.as_tuple().expect("expected a tuple");
        assert_eq!(tuple.len(), 2);
        assert_eq!(tuple.member_types()[0].id(), "uint256");
        assert_eq!(tuple.member_types()[1].id(), "bool");
        Ok(())
    }
}

mod agreement_with_abi {
    use super::*;

    #[test]
    fn test_annotation_and_abi_produce_equal_types() -> anyhow::Result<()> {
        let namespace = Namespace::default();
        let cases: [(&str, &[i64], &str); 4] = [
            ("bool", &[], "bool"),
            ("uint256", &[4], "uint256[4]"),
            ("uint256", &[2, 3], "uint256[2][3]"),
            ("decimal", &[5], "fixed168x10[5]"),
        ];
        for (name, dims, descriptor) in cases {
            let mut builder = Builder::new("contract.vy");
            let annotation = array_annotation(&mut builder, name, dims);
            let from_annotation = type_from_annotation(&namespace, &annotation)?;
            let from_abi = type_from_abi_str(&namespace, descriptor)?;
            assert_eq!(from_annotation, from_abi, "mismatch for {descriptor}");
        }
        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_literal_is_not_a_type() {
        let mut builder = Builder::new("contract.vy");
        let annotation = builder.at(4, 8).str("uint256");
        let err = type_from_annotation(&Namespace::default(), &annotation).unwrap_err();
        assert!(matches!(err, TypeError::StructureException { .. }));
        assert_eq!(err.to_string(), "4:8: Invalid syntax for type declaration");
    }

    #[test]
    fn test_misspelled_type_gets_a_suggestion() {
        let mut builder = Builder::new("contract.vy");
        let annotation = builder.at(2, 4).name("adress");
        let err = type_from_annotation(&Namespace::default(), &annotation).unwrap_err();
        assert!(matches!(err, TypeError::UnknownType { .. }));
        assert_eq!(
            err.to_string(),
            "2:4: No builtin or user-defined type named 'adress'. Did you mean 'address'?"
        );
    }

    #[test]
    fn test_unrelated_name_gets_no_suggestion() {
        let mut builder = Builder::new("contract.vy");
        let annotation = builder.name("Qwertyuiop");
        let err = type_from_annotation(&Namespace::default(), &annotation).unwrap_err();
        assert_eq!(
            err.message(),
            "No builtin or user-defined type named 'Qwertyuiop'. "
        );
    }

    #[test]
    fn test_declared_names_are_suggested() {
        let mut namespace = Namespace::default();
        namespace.declare("Ballot", BoolT.into()).unwrap();
        let mut builder = Builder::new("contract.vy");
        let annotation = builder.name("Balot");
        let err = type_from_annotation(&namespace, &annotation).unwrap_err();
        assert!(err.message().ends_with("Did you mean 'Ballot'?"), "{err}");
    }

    #[test]
    fn test_zero_length_array() {
        let mut builder = Builder::new("contract.vy");
        let annotation = array_annotation(&mut builder, "uint256", &[0]);
        let err = type_from_annotation(&Namespace::default(), &annotation).unwrap_err();
        assert!(matches!(err, TypeError::ArrayIndexException { .. }));
    }

    #[test]
    fn test_non_literal_length() {
        let mut builder = Builder::new("contract.vy");
        let base = builder.name("uint256");
        let slice = builder.name("LENGTH");
        let annotation = builder.subscript(base, slice);
        let err = type_from_annotation(&Namespace::default(), &annotation).unwrap_err();
        assert!(matches!(err, TypeError::InvalidType { .. }));
        assert_eq!(err.message(), "Subscript must be a literal integer");
    }
}
