//! Type-erased route envelope.
//!
//! [`AnyRoute`] is "some route, from some family": a namespace tag plus the
//! serialized payload of the concrete route. A single navigation stack can
//! hold envelopes of every family, and [`decode`](AnyRoute::decode) is the
//! one place where the concrete type is recovered.
//!
//! ```text
//! OnboardingRoute::Intro ──wrap──▶ AnyRoute { "onboarding", b"\"intro\"" }
//!                                        │
//!           decode::<OnboardingRoute>() ◀┘  ──▶ Some(Intro)
//!           decode::<TaskRoute>()            ──▶ None
//! ```
//!
//! Envelopes are plain values: cloning one is cheap for the small payloads
//! routes carry, equality compares namespace and payload bytes, and the whole
//! envelope serializes with serde so navigation state can be saved and
//! restored.

use crate::error::RouteError;
use crate::route::Route;
use crate::{trace_log, warn_log};
use serde::{Deserialize, Serialize};
use std::fmt;

const DJB2_SEED: u64 = 5381;

/// A route of any family, erased to its namespace and payload bytes.
///
/// Two envelopes are equal iff their namespaces and payload bytes are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnyRoute {
    namespace: String,
    payload: Option<Vec<u8>>,
}

impl AnyRoute {
    /// Build an envelope from its raw parts.
    ///
    /// Used when restoring navigation from an external source such as a deep
    /// link; routes produced in-process should go through [`wrap`](Self::wrap).
    pub fn new(namespace: impl Into<String>, payload: Option<Vec<u8>>) -> Self {
        Self {
            namespace: namespace.into(),
            payload,
        }
    }

    /// Erase a concrete route.
    ///
    /// If the route fails to encode the envelope keeps the namespace and has
    /// no payload; decoding it later fails through the usual mismatch path.
    pub fn wrap<R: Route>(route: &R) -> Self {
        let payload = match route.encode() {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                warn_log!("Degraded envelope for {:?}: {}", route, err);
                None
            }
        };
        Self {
            namespace: R::NAMESPACE.to_string(),
            payload,
        }
    }

    /// Recover the concrete route, or `None` if this envelope belongs to a
    /// different family or its payload does not decode.
    pub fn decode<R: Route>(&self) -> Option<R> {
        match self.try_decode() {
            Ok(route) => Some(route),
            Err(err) => {
                trace_log!("decode '{}' as '{}': {}", self.namespace, R::NAMESPACE, err);
                None
            }
        }
    }

    /// Like [`decode`](Self::decode) but reports why the envelope did not
    /// match.
    pub fn try_decode<R: Route>(&self) -> Result<R, RouteError> {
        if self.namespace != R::NAMESPACE {
            return Err(RouteError::NamespaceMismatch {
                expected: R::NAMESPACE.to_string(),
                found: self.namespace.clone(),
            });
        }
        let payload = self
            .payload
            .as_deref()
            .ok_or_else(|| RouteError::MissingPayload {
                namespace: self.namespace.clone(),
            })?;
        R::decode(payload)
    }

    /// Whether this envelope was produced by family `R`.
    pub fn is<R: Route>(&self) -> bool {
        self.namespace == R::NAMESPACE
    }

    /// Namespace of the originating family.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Serialized route, absent if encoding failed.
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// Stable key for display lists.
    ///
    /// Namespace plus a short non-cryptographic hash of the payload. Equal
    /// envelopes always share an identity; different payloads collide only
    /// with negligible probability.
    pub fn identity(&self) -> String {
        match &self.payload {
            Some(bytes) => format!("{}#{:x}", self.namespace, djb2(bytes)),
            None => self.namespace.clone(),
        }
    }
}

impl fmt::Display for AnyRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identity())
    }
}

impl<R: Route> From<&R> for AnyRoute {
    fn from(route: &R) -> Self {
        AnyRoute::wrap(route)
    }
}

fn djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |hash, &byte| {
        (hash << 5).wrapping_add(hash).wrapping_add(u64::from(byte))
    })
}
