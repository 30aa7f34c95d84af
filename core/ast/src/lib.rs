#![warn(clippy::pedantic)]
//! Syntax nodes consumed by the Vyper semantic analysis pass.
//!
//! Only the node shapes that type resolution and literal/operator validation
//! inspect live here: type annotations (`Name`, `Subscript`, `Tuple`,
//! `Attribute`), literal constants, and operator nodes.

pub mod builder;
pub(crate) mod enums_impl;
pub mod nodes;
pub(crate) mod nodes_impl;
