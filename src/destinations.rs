//! Display-layer glue between a [`Router`] and a [`RouteRegistry`].
//!
//! The router only stores envelopes and the registry only turns one envelope
//! into a screen. This module combines them the way a UI shell does:
//!
//! - [`resolve_destinations`] resolves the root route, every stack entry and
//!   both modal slots into a [`Destinations`] value, keyed by envelope
//!   identity for list diffing.
//! - [`ModalBinding`] is the "is presented" flag a toolkit binds to a sheet
//!   or cover. When the user swipes the overlay away the toolkit writes
//!   `false`, which calls back into the router instead of editing a copy.
//! - [`NavigationHost`] bundles a router, a shared registry and the root
//!   route, and can re-render on every navigation change.
//!
//! ```text
//! Router state                  Destinations
//! ─────────────                 ────────────────────────────
//! (root)         ──resolve──▶   root
//! stack[0..n]    ──resolve──▶   stack[0..n]  (id = identity)
//! sheet          ──resolve──▶   sheet
//! full_screen    ──resolve──▶   full_screen
//! ```

use crate::any_route::AnyRoute;
use crate::observer::{observer_fn, Subscription};
use crate::registry::RouteRegistry;
use crate::route::Route;
use crate::router::Router;
use crate::state::ModalSlot;
use crate::{debug_log, trace_log};
use std::rc::Rc;

// ============================================================================
// Destinations
// ============================================================================

/// A resolved envelope, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination<S> {
    /// Display-list key, from [`AnyRoute::identity`].
    pub id: String,
    pub route: AnyRoute,
    pub screen: S,
}

impl<S> Destination<S> {
    fn resolve(registry: &RouteRegistry<S>, router: &Router, route: AnyRoute) -> Self
    where
        S: 'static,
    {
        let screen = registry.resolve(&route, router);
        Self {
            id: route.identity(),
            route,
            screen,
        }
    }
}

/// Every screen the current navigation state calls for.
#[derive(Debug, Clone, PartialEq)]
pub struct Destinations<S> {
    pub root: S,
    pub stack: Vec<Destination<S>>,
    pub sheet: Option<Destination<S>>,
    pub full_screen: Option<Destination<S>>,
}

impl<S> Destinations<S> {
    /// Screen on top of the push/pop stack, or the root.
    pub fn current(&self) -> &S {
        self.stack
            .last()
            .map_or(&self.root, |destination| &destination.screen)
    }

    /// Modal destination to foreground; full screen wins over sheet.
    pub fn foreground_modal(&self) -> Option<&Destination<S>> {
        self.full_screen.as_ref().or(self.sheet.as_ref())
    }

    /// Display-list keys of the stack, in order.
    pub fn stack_ids(&self) -> Vec<&str> {
        self.stack
            .iter()
            .map(|destination| destination.id.as_str())
            .collect()
    }
}

/// Resolve the whole navigation state of `router`.
///
/// The state is copied before any factory runs, so factories may navigate.
pub fn resolve_destinations<S: 'static>(
    registry: &RouteRegistry<S>,
    router: &Router,
    root: &AnyRoute,
) -> Destinations<S> {
    let state = router.snapshot();
    trace_log!(
        "Resolving destinations (depth {}, sheet: {}, full screen: {})",
        state.depth(),
        state.sheet().is_some(),
        state.full_screen().is_some()
    );

    let root = registry.resolve(root, router);
    let stack = state
        .stack()
        .iter()
        .cloned()
        .map(|route| Destination::resolve(registry, router, route))
        .collect();
    let sheet = state
        .sheet()
        .cloned()
        .map(|route| Destination::resolve(registry, router, route));
    let full_screen = state
        .full_screen()
        .cloned()
        .map(|route| Destination::resolve(registry, router, route));

    Destinations {
        root,
        stack,
        sheet,
        full_screen,
    }
}

// ============================================================================
// ModalBinding
// ============================================================================

/// Two-way "is presented" binding for one modal slot.
#[derive(Debug, Clone)]
pub struct ModalBinding {
    router: Router,
    slot: ModalSlot,
}

impl ModalBinding {
    pub fn new(router: Router, slot: ModalSlot) -> Self {
        Self { router, slot }
    }

    pub fn slot(&self) -> ModalSlot {
        self.slot
    }

    pub fn is_presented(&self) -> bool {
        self.item().is_some()
    }

    /// Envelope currently in the slot.
    pub fn item(&self) -> Option<AnyRoute> {
        self.router.modal(self.slot)
    }

    /// Write from the display layer.
    ///
    /// `false` dismisses the slot through the router. `true` is ignored: only
    /// a screen can present, because presenting needs a route.
    pub fn set_presented(&self, presented: bool) {
        if presented {
            trace_log!("Ignoring presentation request for {:?} binding", self.slot);
        } else {
            debug_log!("{:?} dismissed by the display layer", self.slot);
            self.router.dismiss(self.slot);
        }
    }
}

// ============================================================================
// NavigationHost
// ============================================================================

/// Root of a navigable UI: a router, the registry and the root route.
pub struct NavigationHost<S> {
    router: Router,
    registry: Rc<RouteRegistry<S>>,
    root: AnyRoute,
}

impl<S: Default + 'static> NavigationHost<S> {
    /// Create a host rooted at `root`.
    ///
    /// `configure` registers every route family before anything is resolved.
    pub fn new<R, F>(root: R, configure: F) -> Self
    where
        R: Route,
        F: FnOnce(&mut RouteRegistry<S>),
    {
        let mut registry = RouteRegistry::new();
        configure(&mut registry);
        Self::with_registry(Router::new(), registry, AnyRoute::wrap(&root))
    }
}

impl<S: 'static> NavigationHost<S> {
    /// Create a host from existing parts, e.g. a router restored from a
    /// saved state.
    pub fn with_registry(router: Router, registry: RouteRegistry<S>, root: AnyRoute) -> Self {
        debug_log!(
            "Navigation host rooted at '{}' with {} route families",
            root.identity(),
            registry.len()
        );
        Self {
            router,
            registry: Rc::new(registry),
            root,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn registry(&self) -> &RouteRegistry<S> {
        &self.registry
    }

    pub fn root(&self) -> &AnyRoute {
        &self.root
    }

    /// Resolve the root screen only.
    pub fn render_root(&self) -> S {
        self.registry.resolve(&self.root, &self.router)
    }

    /// Resolve everything the current state calls for.
    pub fn destinations(&self) -> Destinations<S> {
        resolve_destinations(&self.registry, &self.router, &self.root)
    }

    pub fn sheet_binding(&self) -> ModalBinding {
        ModalBinding::new(self.router.clone(), ModalSlot::Sheet)
    }

    pub fn full_screen_binding(&self) -> ModalBinding {
        ModalBinding::new(self.router.clone(), ModalSlot::FullScreen)
    }

    /// Re-resolve and hand the result to `render` after every navigation
    /// change.
    pub fn on_render<F>(&self, render: F) -> Subscription
    where
        F: Fn(Destinations<S>) + 'static,
    {
        let registry = Rc::clone(&self.registry);
        let root = self.root.clone();
        self.router.subscribe(observer_fn(move |router, _event| {
            render(resolve_destinations(&registry, router, &root));
        }))
    }
}

impl<S> std::fmt::Debug for NavigationHost<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationHost")
            .field("router", &self.router)
            .field("registry", &self.registry)
            .field("root", &self.root)
            .finish()
    }
}
