//! Typed route families.
//!
//! A route family is a closed set of destinations owned by one feature,
//! usually an enum. Each family declares a unique [`NAMESPACE`](Route::NAMESPACE)
//! which is how an erased [`AnyRoute`](crate::AnyRoute) finds its way back to
//! the right decoder.
//!
//! # Example
//!
//! ```
//! use erased_navigator::Route;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! enum TaskRoute {
//!     List,
//!     Detail { id: u64 },
//! }
//!
//! impl Route for TaskRoute {
//!     const NAMESPACE: &'static str = "tasks";
//! }
//!
//! let bytes = TaskRoute::Detail { id: 7 }.encode().unwrap();
//! assert_eq!(TaskRoute::decode(&bytes).unwrap(), TaskRoute::Detail { id: 7 });
//! ```

use crate::error::RouteError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A typed, serializable navigation destination.
///
/// The default codec is JSON. It never produces empty bytes: a unit variant
/// encodes as a JSON string (`"intro"`) and a unit struct as `null`, so a
/// parameterless route still carries an explicit marker. Families that need
/// a different wire form can override [`encode`](Route::encode) and
/// [`decode`](Route::decode) together.
///
/// Namespaces must be unique across every family registered in a
/// [`RouteRegistry`](crate::RouteRegistry). Two families sharing a namespace
/// are not detected; the later registration wins.
pub trait Route: Serialize + DeserializeOwned + Clone + PartialEq + Debug + 'static {
    /// Discriminator recorded in every envelope of this family.
    const NAMESPACE: &'static str;

    /// Serialize this route into payload bytes.
    fn encode(&self) -> Result<Vec<u8>, RouteError> {
        serde_json::to_vec(self).map_err(|err| RouteError::encode(Self::NAMESPACE, err))
    }

    /// Rebuild a route from payload bytes produced by [`encode`](Route::encode).
    fn decode(bytes: &[u8]) -> Result<Self, RouteError> {
        serde_json::from_slice(bytes).map_err(|err| RouteError::decode(Self::NAMESPACE, err))
    }
}
