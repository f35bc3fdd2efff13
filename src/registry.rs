//! Route registry: from erased envelopes back to screens.
//!
//! Each feature registers its route family once at startup. The display
//! layer then hands every envelope it finds in the [`Router`] to
//! [`RouteRegistry::resolve`], which looks the namespace up, decodes the
//! concrete route, and calls the feature's factory with it.
//!
//! ```text
//! AnyRoute { "onboarding", .. } ──▶ factories["onboarding"]
//!                                      │ decode::<OnboardingRoute>()
//!                                      ▼
//!                           factory(OnboardingRoute::Intro, &router) ──▶ S
//! ```
//!
//! Resolution never fails from the caller's point of view: an unregistered
//! namespace or a payload that does not decode yields the placeholder screen
//! (and a warning in the log). Use [`try_resolve`](RouteRegistry::try_resolve)
//! to see the reason instead.
//!
//! # Example
//!
//! ```
//! use erased_navigator::{AnyRoute, OnboardingRoute, RouteRegistry, Router};
//!
//! let mut registry: RouteRegistry<String> = RouteRegistry::new();
//! registry.register(|route: OnboardingRoute, _router: &Router| format!("{:?}", route));
//!
//! let router = Router::new();
//! let screen = registry.resolve(&AnyRoute::wrap(&OnboardingRoute::Finish), &router);
//! assert_eq!(screen, "Finish");
//!
//! // Unknown namespace: placeholder (String::default()), no panic
//! let unknown = AnyRoute::new("tasks", None);
//! assert_eq!(registry.resolve(&unknown, &router), "");
//! ```

use crate::any_route::AnyRoute;
use crate::error::{ResolveError, RouteError};
use crate::route::Route;
use crate::router::Router;
use crate::{debug_log, info_log, warn_log};
use std::collections::HashMap;
use std::fmt;

/// Erased factory stored per namespace.
pub type RouteFactory<S> = Box<dyn Fn(&AnyRoute, &Router) -> Result<S, RouteError>>;

/// Builds the screen shown when an envelope cannot be resolved.
pub type PlaceholderFactory<S> = Box<dyn Fn(&AnyRoute) -> S>;

/// Namespace → factory table.
///
/// `S` is whatever the display layer renders: a widget tree, a view handle,
/// or a plain description in tests.
pub struct RouteRegistry<S> {
    factories: HashMap<String, RouteFactory<S>>,
    placeholder: PlaceholderFactory<S>,
}

impl<S: Default + 'static> RouteRegistry<S> {
    /// Create an empty registry whose placeholder is `S::default()`.
    pub fn new() -> Self {
        Self::with_placeholder(|_| S::default())
    }
}

impl<S: Default + 'static> Default for RouteRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static> RouteRegistry<S> {
    /// Create an empty registry with a custom placeholder screen.
    pub fn with_placeholder<P>(placeholder: P) -> Self
    where
        P: Fn(&AnyRoute) -> S + 'static,
    {
        Self {
            factories: HashMap::new(),
            placeholder: Box::new(placeholder),
        }
    }

    /// Register the factory for route family `R`.
    ///
    /// Registering a namespace twice replaces the earlier factory. This is
    /// logged but not prevented.
    pub fn register<R, F>(&mut self, factory: F) -> &mut Self
    where
        R: Route,
        F: Fn(R, &Router) -> S + 'static,
    {
        let erased: RouteFactory<S> = Box::new(move |envelope: &AnyRoute, router: &Router| {
            envelope.try_decode::<R>().map(|route| factory(route, router))
        });
        if self
            .factories
            .insert(R::NAMESPACE.to_string(), erased)
            .is_some()
        {
            warn_log!(
                "Namespace '{}' registered twice; previous factory replaced",
                R::NAMESPACE
            );
        } else {
            info_log!("Registered route family '{}'", R::NAMESPACE);
        }
        self
    }

    /// Register a factory whose output converts into `S`.
    pub fn register_view<R, V, F>(&mut self, factory: F) -> &mut Self
    where
        R: Route,
        V: Into<S>,
        F: Fn(R, &Router) -> V + 'static,
    {
        self.register(move |route: R, router: &Router| factory(route, router).into())
    }

    /// Resolve an envelope, reporting why it could not be resolved.
    pub fn try_resolve(&self, envelope: &AnyRoute, router: &Router) -> Result<S, ResolveError> {
        let factory = self.factories.get(envelope.namespace()).ok_or_else(|| {
            ResolveError::UnregisteredNamespace {
                namespace: envelope.namespace().to_string(),
            }
        })?;
        debug_log!("Resolving '{}'", envelope.identity());
        factory(envelope, router).map_err(ResolveError::from)
    }

    /// Resolve an envelope, falling back to the placeholder screen.
    pub fn resolve(&self, envelope: &AnyRoute, router: &Router) -> S {
        match self.try_resolve(envelope, router) {
            Ok(screen) => screen,
            Err(err) => {
                warn_log!("Showing placeholder for '{}': {}", envelope.identity(), err);
                self.placeholder(envelope)
            }
        }
    }

    /// The placeholder screen for an envelope.
    pub fn placeholder(&self, envelope: &AnyRoute) -> S {
        (self.placeholder)(envelope)
    }

    pub fn is_registered(&self, namespace: &str) -> bool {
        self.factories.contains_key(namespace)
    }

    /// Registered namespaces, sorted.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut namespaces: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        namespaces.sort_unstable();
        namespaces
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<S> fmt::Debug for RouteRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut namespaces: Vec<&String> = self.factories.keys().collect();
        namespaces.sort_unstable();
        f.debug_struct("RouteRegistry")
            .field("namespaces", &namespaces)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    enum InboxRoute {
        List,
        Thread { id: u32 },
    }

    impl Route for InboxRoute {
        const NAMESPACE: &'static str = "inbox";
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    enum OtherInbox {
        Archive,
    }

    impl Route for OtherInbox {
        const NAMESPACE: &'static str = "inbox";
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    enum Screen {
        #[default]
        Empty,
        Inbox(String),
    }

    impl From<&str> for Screen {
        fn from(label: &str) -> Self {
            Screen::Inbox(label.to_string())
        }
    }

    fn inbox_registry() -> RouteRegistry<Screen> {
        let mut registry = RouteRegistry::new();
        registry.register(|route: InboxRoute, _router: &Router| match route {
            InboxRoute::List => Screen::Inbox("list".to_string()),
            InboxRoute::Thread { id } => Screen::Inbox(format!("thread {}", id)),
        });
        registry
    }

    #[test]
    fn test_resolve_registered() {
        let registry = inbox_registry();
        let router = Router::new();
        let screen = registry.resolve(&AnyRoute::wrap(&InboxRoute::Thread { id: 4 }), &router);
        assert_eq!(screen, Screen::Inbox("thread 4".to_string()));
    }

    #[test]
    fn test_factory_receives_router() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let mut registry: RouteRegistry<Screen> = RouteRegistry::new();
        registry.register(move |route: InboxRoute, router: &Router| {
            *sink.borrow_mut() = Some((route, router.clone()));
            Screen::Empty
        });

        let router = Router::new();
        registry.resolve(&AnyRoute::wrap(&InboxRoute::List), &router);

        let (route, passed) = seen.borrow_mut().take().unwrap();
        assert_eq!(route, InboxRoute::List);
        assert!(passed.ptr_eq(&router));
    }

    #[test]
    fn test_unregistered_namespace() {
        let registry = inbox_registry();
        let router = Router::new();
        let envelope = AnyRoute::new("calendar", Some(b"\"today\"".to_vec()));

        assert_eq!(registry.resolve(&envelope, &router), Screen::Empty);
        assert!(registry
            .try_resolve(&envelope, &router)
            .unwrap_err()
            .is_unregistered());
    }

    #[test]
    fn test_decode_failure_in_factory() {
        let registry = inbox_registry();
        let router = Router::new();
        let envelope = AnyRoute::new("inbox", Some(b"42".to_vec()));

        assert_eq!(registry.resolve(&envelope, &router), Screen::Empty);
        assert!(matches!(
            registry.try_resolve(&envelope, &router),
            Err(ResolveError::Decode(RouteError::Decode { .. }))
        ));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = inbox_registry();
        registry.register(|_: OtherInbox, _: &Router| Screen::Inbox("archive".to_string()));
        assert_eq!(registry.len(), 1);

        let router = Router::new();
        // Envelopes of the first family no longer decode under the new factory
        assert_eq!(
            registry.resolve(&AnyRoute::wrap(&InboxRoute::List), &router),
            Screen::Empty
        );
        assert_eq!(
            registry.resolve(&AnyRoute::wrap(&OtherInbox::Archive), &router),
            Screen::Inbox("archive".to_string())
        );
    }

    #[test]
    fn test_register_view_converts() {
        let mut registry: RouteRegistry<Screen> = RouteRegistry::new();
        registry.register_view(|_: InboxRoute, _: &Router| "converted");

        let router = Router::new();
        assert_eq!(
            registry.resolve(&AnyRoute::wrap(&InboxRoute::List), &router),
            Screen::Inbox("converted".to_string())
        );
    }

    #[test]
    fn test_custom_placeholder() {
        let registry: RouteRegistry<String> =
            RouteRegistry::with_placeholder(|envelope| format!("missing {}", envelope.namespace()));
        let router = Router::new();
        assert_eq!(
            registry.resolve(&AnyRoute::new("settings", None), &router),
            "missing settings"
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_namespaces_sorted() {
        let mut registry = inbox_registry();
        registry.register(|_: crate::OnboardingRoute, _: &Router| Screen::Empty);
        assert_eq!(registry.namespaces(), vec!["inbox", "onboarding"]);
        assert!(registry.is_registered("onboarding"));
        assert!(!registry.is_registered("tasks"));
        assert!(format!("{:?}", registry).contains("inbox"));
    }
}
