//! Semantic type core for the Vyper compiler.
//!
//! This crate turns type references into type objects and answers the
//! questions type checking asks of them.
//!
//! ## Core Features
//!
//! **Type Objects** ([`types`]):
//! - Leaf types: `bool`, `int8`..`int256`, `uint8`..`uint256`, `decimal`,
//!   `address`, `bytes1`..`bytes32`, `Bytes`, `String`
//! - Composite types: fixed-size arrays (`uint256[4]`) and tuples
//! - Capability contract: operator and literal validation per type, with a
//!   single place where unsupported operators are rejected
//!
//! **Type Resolution**:
//! - [`abi_resolver::type_from_abi`]: JSON ABI descriptors such as `uint256[2][3]`
//! - [`annotation_resolver::type_from_annotation`]: annotation AST nodes such as
//!   `uint256[4]` or `(uint256, bool)`
//! - [`abi_function::FunctionSignature::from_abi`]: whole ABI function entries
//!
//! **Namespace** ([`namespace::Namespace`]):
//! - Builtin leaf types registered on construction
//! - Scoped user declarations with collision detection
//!
//! **Error Handling** ([`errors`]):
//! - [`TypeError`] for user-facing diagnostics with source locations
//! - [`InternalError`] for compiler bugs, never converted into a user error
//! - Unknown names carry "Did you mean" suggestions ([`levenshtein`])
//!
//! ## Quick Start
//!
//! ```
//! use vyper_ast::builder::Builder;
//! use vyper_semantics::annotation_resolver::type_from_annotation;
//! use vyper_semantics::abi_resolver::type_from_abi_str;
//! use vyper_semantics::namespace::Namespace;
//!
//! let namespace = Namespace::default();
//!
//! let mut builder = Builder::new("contract.vy");
//! let elem = builder.name("uint256");
//! let len = builder.int(4);
//! let annotation = builder.subscript(elem, len);
//!
//! let from_source = type_from_annotation(&namespace, &annotation).unwrap();
//! let from_abi = type_from_abi_str(&namespace, "uint256[4]").unwrap();
//! assert_eq!(from_source, from_abi);
//! ```
//!
//! Resolution is synchronous and pure: the namespace is passed in by
//! reference and never modified. Progress is reported through `tracing` at
//! `debug` and `trace` level; the crate installs no subscriber.

#![warn(clippy::pedantic)]

pub mod abi_function;
pub mod abi_resolver;
pub mod abi_types;
pub mod annotation_resolver;
pub mod errors;
pub mod levenshtein;
pub mod namespace;
pub mod string_enum;
pub mod types;

pub use errors::{InternalError, TypeError};
pub use namespace::Namespace;
pub use types::TypeObject;
