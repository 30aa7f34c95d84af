//! Error types for type resolution and type validation.
//!
//! Two tiers exist:
//!
//! - [`TypeError`] is a user-facing diagnostic. It carries a message and,
//!   when the failure originates from source text, the offending node's
//!   [`Location`].
//! - [`InternalError`] reports a bug in the compiler itself. There is no
//!   conversion from it into [`TypeError`], so it cannot be reported as a
//!   user error by accident; callers propagate it to the top level.

use thiserror::Error;
use vyper_ast::nodes::Location;

fn located(location: &Option<Location>) -> String {
    location
        .as_ref()
        .map_or(String::new(), |location| format!("{location}: "))
}

/// Represents a type resolution or type validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum TypeError {
    /// An ABI string or annotation identifier does not name a known type.
    #[error("{}{message}", located(.location))]
    UnknownType {
        message: String,
        location: Option<Location>,
    },

    /// A type construction violated the type's own invariants.
    #[error("{}{message}", located(.location))]
    InvalidType {
        message: String,
        location: Option<Location>,
    },

    /// The annotation is not syntactically a type.
    #[error("{location}: {message}")]
    StructureException { message: String, location: Location },

    /// A literal's value does not match the type it is checked against.
    #[error("{location}: {message}")]
    InvalidLiteral { message: String, location: Location },

    /// An operator is not defined for the operand type.
    #[error("{location}: {message}")]
    InvalidOperation { message: String, location: Location },

    /// An array length in an annotation is out of range.
    #[error("{location}: {message}")]
    ArrayIndexException { message: String, location: Location },

    #[error("'{name}' has not been declared")]
    UndeclaredDefinition { name: String },

    #[error("'{name}' has already been declared")]
    NamespaceCollision { name: String },
}

impl TypeError {
    pub(crate) fn unknown_type(message: impl Into<String>) -> Self {
        TypeError::UnknownType {
            message: message.into(),
            location: None,
        }
    }

    pub(crate) fn invalid_type(message: impl Into<String>) -> Self {
        TypeError::InvalidType {
            message: message.into(),
            location: None,
        }
    }

    /// Returns the source location associated with this error, if any.
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        match self {
            TypeError::UnknownType { location, .. } | TypeError::InvalidType { location, .. } => {
                location.as_ref()
            }
            TypeError::StructureException { location, .. }
            | TypeError::InvalidLiteral { location, .. }
            | TypeError::InvalidOperation { location, .. }
            | TypeError::ArrayIndexException { location, .. } => Some(location),
            TypeError::UndeclaredDefinition { .. } | TypeError::NamespaceCollision { .. } => None,
        }
    }

    /// Returns the message without the location prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            TypeError::UnknownType { message, .. }
            | TypeError::InvalidType { message, .. }
            | TypeError::StructureException { message, .. }
            | TypeError::InvalidLiteral { message, .. }
            | TypeError::InvalidOperation { message, .. }
            | TypeError::ArrayIndexException { message, .. } => message.clone(),
            TypeError::UndeclaredDefinition { .. } | TypeError::NamespaceCollision { .. } => {
                self.to_string()
            }
        }
    }
}

/// A broken compiler invariant. Never a user error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum InternalError {
    #[error("{value} is not a valid {family}")]
    InvalidEnumValue { value: String, family: &'static str },
}
