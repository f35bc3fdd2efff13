//! Error types for route encoding and resolution.
//!
//! Navigation itself never fails: every [`Router`](crate::Router) operation
//! is an infallible state mutation. The two error types here only surface
//! through the explicit `try_*` APIs:
//!
//! - [`RouteError`]: a route could not be encoded, or an envelope could not
//!   be turned back into a concrete route.
//! - [`ResolveError`]: the registry could not produce a screen for an
//!   envelope.
//!
//! The soft-failing counterparts ([`AnyRoute::decode`](crate::AnyRoute::decode),
//! [`RouteRegistry::resolve`](crate::RouteRegistry::resolve)) log these errors
//! and degrade to "none" or to a placeholder screen.
//!
//! # Examples
//!
//! ```
//! use erased_navigator::error::{ResolveError, RouteError};
//!
//! let err = ResolveError::UnregisteredNamespace { namespace: "tasks".into() };
//! assert_eq!(err.to_string(), "No route factory registered for namespace 'tasks'");
//!
//! let err = RouteError::MissingPayload { namespace: "tasks".into() };
//! assert!(err.is_missing_payload());
//! ```

use std::error::Error;
use std::fmt;

// ============================================================================
// RouteError
// ============================================================================

/// Failure while converting between a concrete route and its erased form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The envelope belongs to a different route family.
    NamespaceMismatch { expected: String, found: String },

    /// The envelope carries no payload (its route failed to encode).
    MissingPayload { namespace: String },

    /// The route could not be serialized.
    Encode { namespace: String, message: String },

    /// The payload bytes are not a valid route of the family.
    Decode { namespace: String, message: String },
}

impl RouteError {
    pub(crate) fn encode(namespace: &str, err: impl fmt::Display) -> Self {
        Self::Encode {
            namespace: namespace.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(namespace: &str, err: impl fmt::Display) -> Self {
        Self::Decode {
            namespace: namespace.to_string(),
            message: err.to_string(),
        }
    }

    /// The namespace of the family involved in the failure.
    pub fn namespace(&self) -> &str {
        match self {
            RouteError::NamespaceMismatch { expected, .. } => expected,
            RouteError::MissingPayload { namespace }
            | RouteError::Encode { namespace, .. }
            | RouteError::Decode { namespace, .. } => namespace,
        }
    }

    /// Check if the envelope was meant for another family
    pub fn is_namespace_mismatch(&self) -> bool {
        matches!(self, RouteError::NamespaceMismatch { .. })
    }

    /// Check if the envelope had no payload
    pub fn is_missing_payload(&self) -> bool {
        matches!(self, RouteError::MissingPayload { .. })
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::NamespaceMismatch { expected, found } => {
                write!(
                    f,
                    "Namespace mismatch: expected '{}', found '{}'",
                    expected, found
                )
            }
            RouteError::MissingPayload { namespace } => {
                write!(f, "Route in namespace '{}' has no payload", namespace)
            }
            RouteError::Encode { namespace, message } => {
                write!(f, "Failed to encode '{}' route: {}", namespace, message)
            }
            RouteError::Decode { namespace, message } => {
                write!(f, "Failed to decode '{}' route: {}", namespace, message)
            }
        }
    }
}

impl Error for RouteError {}

// ============================================================================
// ResolveError
// ============================================================================

/// Failure while resolving an envelope into a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No factory was registered for the envelope's namespace.
    UnregisteredNamespace { namespace: String },

    /// A factory was found but the envelope did not decode into its family.
    Decode(RouteError),
}

impl ResolveError {
    /// Check if the namespace was never registered
    pub fn is_unregistered(&self) -> bool {
        matches!(self, ResolveError::UnregisteredNamespace { .. })
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnregisteredNamespace { namespace } => {
                write!(
                    f,
                    "No route factory registered for namespace '{}'",
                    namespace
                )
            }
            ResolveError::Decode(err) => write!(f, "Route resolution failed: {}", err),
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ResolveError::UnregisteredNamespace { .. } => None,
            ResolveError::Decode(err) => Some(err),
        }
    }
}

impl From<RouteError> for ResolveError {
    fn from(err: RouteError) -> Self {
        ResolveError::Decode(err)
    }
}

// ============================================================================
// Tests
// ============================================================================
