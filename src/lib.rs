//! Type-erased navigation for UI applications.
//!
//! Features define their destinations as small typed enums. The navigation
//! stack stores them erased, so one stack can hold every feature's routes
//! without knowing their types, and a registry turns each entry back into a
//! screen when the display layer asks for it.
//!
//! | Type | Role |
//! |------|------|
//! | [`Route`] | A feature's route family: serializable enum + unique namespace |
//! | [`AnyRoute`] | Erased envelope: namespace + payload bytes + identity |
//! | [`RouteRegistry`] | Namespace → screen factory, placeholder on failure |
//! | [`Router`] | Push/pop stack, `sheet` and `full_screen` slots, observers |
//! | [`NavigationHost`] | Router + registry + root route, for the display layer |
//!
//! # Feature flags
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `log`      | yes     | Log through the `log` crate |
//! | `tracing`  | no      | Log through the `tracing` crate instead |
//!
//! # Example
//!
//! ```
//! use erased_navigator::{register_onboarding, NavigationHost, OnboardingRoute};
//!
//! let host: NavigationHost<String> = NavigationHost::new(OnboardingRoute::Intro, |registry| {
//!     register_onboarding(registry, |route, _navigator| format!("{:?}", route));
//! });
//!
//! host.router().push(OnboardingRoute::Philosophy);
//! host.router().present(OnboardingRoute::Finish);
//!
//! let destinations = host.destinations();
//! assert_eq!(destinations.current(), "Philosophy");
//! assert_eq!(destinations.sheet.unwrap().screen, "Finish");
//! ```

pub mod any_route;
pub mod destinations;
pub mod error;
pub mod logging;
pub mod observer;
pub mod onboarding;
pub mod registry;
pub mod route;
pub mod router;
pub mod state;

pub use any_route::AnyRoute;
pub use destinations::{
    resolve_destinations, Destination, Destinations, ModalBinding, NavigationHost,
};
pub use error::{ResolveError, RouteError};
pub use observer::{observer_fn, FnObserver, NavigationObserver, Subscription};
pub use onboarding::{
    register_onboarding, OnboardingNavigating, OnboardingNavigator, OnboardingRoute,
};
pub use registry::{PlaceholderFactory, RouteFactory, RouteRegistry};
pub use route::Route;
pub use router::Router;
pub use state::{ModalSlot, NavigationChange, NavigationState, RouteChangeEvent};
