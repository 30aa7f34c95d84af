//! Type resolution from annotation AST nodes.
//!
//! Annotations are the `x: <annotation>` part of variable declarations and
//! annotated assignments. The type is named by the leftmost identifier of the
//! annotation; a fixed-size array is a subscript on a type that allows array
//! elements, and a tuple annotation resolves each element in order.

use tracing::{debug, trace};
use vyper_ast::nodes::{Constant, Expression};

use crate::errors::TypeError;
use crate::levenshtein::{SUGGESTION_THRESHOLD, get_levenshtein_error_suggestions};
use crate::namespace::Namespace;
use crate::types::{SArrayT, TupleT, TypeObject, VyperType};

/// Subscripts on this name are dynamic arrays and never become `SArrayT`.
pub const DYN_ARRAY_NAME: &str = "DynArray";

/// Resolves an annotation node to a type object.
///
/// # Errors
///
/// - [`TypeError::StructureException`] when the annotation contains no identifier.
/// - [`TypeError::UnknownType`] when the identifier is not declared; the
///   message carries spelling suggestions.
/// - [`TypeError::InvalidType`] or [`TypeError::ArrayIndexException`] for a bad
///   array length or element type.
pub fn type_from_annotation(
    namespace: &Namespace,
    node: &Expression,
) -> Result<TypeObject, TypeError> {
    trace!(node_id = node.id(), "resolving annotation");

    if let Expression::Tuple(tuple) = node {
        let member_types = tuple
            .elements
            .iter()
            .map(|element| type_from_annotation(namespace, element))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(TupleT::new(member_types).into());
    }

    let Some(type_name) = node.leftmost_name() else {
        return Err(TypeError::StructureException {
            message: "Invalid syntax for type declaration".to_string(),
            location: node.location(),
        });
    };

    let Some(type_obj) = namespace.get(&type_name.name) else {
        let suggestions = get_levenshtein_error_suggestions(
            &type_name.name,
            namespace.names(),
            SUGGESTION_THRESHOLD,
        );
        return Err(TypeError::UnknownType {
            message: format!(
                "No builtin or user-defined type named '{}'. {suggestions}",
                type_name.name
            ),
            location: Some(node.location()),
        });
    };

    if type_obj.as_array()
        && let Expression::Subscript(subscript) = node
        && subscript.base_name() != Some(DYN_ARRAY_NAME)
    {
        let length = get_index_value(&subscript.slice)?;
        let value_type = type_from_annotation(namespace, &subscript.value)?;
        let array = TypeObject::from(SArrayT::new(value_type, length)?);
        debug!(node_id = node.id(), ty = %array, "resolved array annotation");
        return Ok(array);
    }

    debug!(node_id = node.id(), ty = %type_obj, "resolved annotation");
    Ok(type_obj.clone())
}

/// Array length written in a subscript.
///
/// # Errors
///
/// - [`TypeError::InvalidType`] when the slice is not an integer literal.
/// - [`TypeError::ArrayIndexException`] when the value is not positive or does
///   not fit a `u64`.
pub fn get_index_value(node: &Expression) -> Result<u64, TypeError> {
    let Some(Constant::Int(int)) = node.as_constant() else {
        return Err(TypeError::InvalidType {
            message: "Subscript must be a literal integer".to_string(),
            location: Some(node.location()),
        });
    };

    let not_positive = || TypeError::ArrayIndexException {
        message: "Subscript must be greater than 0".to_string(),
        location: int.location.clone(),
    };
    let value = int.value.trim();
    if value.starts_with('-') || value.trim_start_matches(['+', '0']).is_empty() {
        return Err(not_positive());
    }
    value.parse::<u64>().map_err(|_| TypeError::ArrayIndexException {
        message: format!("Subscript exceeds the maximum array length of {}", u64::MAX),
        location: int.location.clone(),
    })
}
