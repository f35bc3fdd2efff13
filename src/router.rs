//! The navigation controller.
//!
//! [`Router`] owns a [`NavigationState`] (the push/pop stack plus the `sheet`
//! and `full_screen` slots) and is the only way to mutate it. Screens call
//! its typed operations with concrete routes; the router erases them into
//! [`AnyRoute`] envelopes and notifies its [observers](crate::observer).
//!
//! `Router` is a cheap, clonable handle around shared state. It is passed
//! explicitly (to registry factories, to feature navigators) rather than
//! stored in a global, and it is `!Send`: all navigation happens on the UI
//! thread.
//!
//! # Example
//!
//! ```
//! use erased_navigator::{OnboardingRoute, Router};
//!
//! let router = Router::new();
//! router.push(OnboardingRoute::Intro);
//! router.push(OnboardingRoute::Philosophy);
//! router.replace_top(OnboardingRoute::NameEntry);
//!
//! assert_eq!(router.depth(), 2);
//! assert_eq!(
//!     router.top().and_then(|top| top.decode::<OnboardingRoute>()),
//!     Some(OnboardingRoute::NameEntry)
//! );
//!
//! router.pop_to_root();
//! assert!(router.is_at_root());
//! ```

use crate::any_route::AnyRoute;
use crate::observer::{NavigationObserver, Subscription};
use crate::route::Route;
use crate::state::{ModalSlot, NavigationState, RouteChangeEvent};
use crate::{debug_log, trace_log};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

// ============================================================================
// RouterInner
// ============================================================================

pub(crate) struct RouterInner {
    state: RefCell<NavigationState>,
    observers: RefCell<Vec<(u64, Rc<dyn NavigationObserver>)>>,
    next_observer_id: Cell<u64>,
    /// Events waiting for delivery while observers are running.
    pending: RefCell<VecDeque<RouteChangeEvent>>,
    notifying: Cell<bool>,
}

impl RouterInner {
    pub(crate) fn has_observer(&self, id: u64) -> bool {
        self.observers
            .borrow()
            .iter()
            .any(|(observer_id, _)| *observer_id == id)
    }

    pub(crate) fn remove_observer(&self, id: u64) {
        self.observers
            .borrow_mut()
            .retain(|(observer_id, _)| *observer_id != id);
    }
}

// ============================================================================
// Router
// ============================================================================

/// Navigation controller: owns the stack and the two modal slots.
///
/// No operation fails. Popping at root or dismissing an empty slot is a
/// silent no-op that notifies nobody.
#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

impl Router {
    /// Create a router at root with no modal presented.
    pub fn new() -> Self {
        Self::from_state(NavigationState::new())
    }

    /// Create a router starting from a previously captured state.
    pub fn from_state(state: NavigationState) -> Self {
        Self {
            inner: Rc::new(RouterInner {
                state: RefCell::new(state),
                observers: RefCell::new(Vec::new()),
                next_observer_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    // ========================================================================
    // Stack operations
    // ========================================================================

    /// Push a concrete route on top of the stack.
    pub fn push<R: Route>(&self, route: R) {
        self.push_erased(AnyRoute::wrap(&route));
    }

    /// Push an already-erased envelope.
    pub fn push_erased(&self, route: AnyRoute) {
        self.apply(|state| Some(state.push(route)));
    }

    /// Replace the whole stack with concrete routes, in order.
    ///
    /// Entry point for deep links and restored navigation.
    pub fn set_stack<R, I>(&self, routes: I)
    where
        R: Route,
        I: IntoIterator<Item = R>,
    {
        let envelopes = routes.into_iter().map(|route| AnyRoute::wrap(&route));
        self.set_stack_erased(envelopes);
    }

    /// Replace the whole stack with envelopes, possibly of mixed families.
    pub fn set_stack_erased<I>(&self, routes: I)
    where
        I: IntoIterator<Item = AnyRoute>,
    {
        let routes: Vec<AnyRoute> = routes.into_iter().collect();
        self.apply(|state| state.set_stack(routes));
    }

    /// Remove the top of the stack, if any.
    pub fn pop(&self) {
        self.apply(NavigationState::pop);
    }

    /// Clear the stack.
    pub fn pop_to_root(&self) {
        self.apply(NavigationState::pop_to_root);
    }

    /// Swap the top of the stack for `route`; pushes when at root.
    pub fn replace_top<R: Route>(&self, route: R) {
        let envelope = AnyRoute::wrap(&route);
        self.apply(|state| Some(state.replace_top(envelope)));
    }

    // ========================================================================
    // Modal operations
    // ========================================================================

    /// Present `route` as a sheet, replacing any current sheet.
    pub fn present<R: Route>(&self, route: R) {
        self.present_in(ModalSlot::Sheet, AnyRoute::wrap(&route));
    }

    pub fn dismiss_sheet(&self) {
        self.dismiss(ModalSlot::Sheet);
    }

    /// Present `route` full screen, replacing any current full-screen route.
    ///
    /// The sheet slot is left untouched.
    pub fn present_full_screen<R: Route>(&self, route: R) {
        self.present_in(ModalSlot::FullScreen, AnyRoute::wrap(&route));
    }

    pub fn dismiss_full_screen(&self) {
        self.dismiss(ModalSlot::FullScreen);
    }

    /// Fill a modal slot with an already-erased envelope.
    pub fn present_in(&self, slot: ModalSlot, route: AnyRoute) {
        self.apply(|state| state.present(slot, route));
    }

    /// Clear a modal slot.
    pub fn dismiss(&self, slot: ModalSlot) {
        self.apply(|state| state.dismiss(slot));
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn stack(&self) -> Vec<AnyRoute> {
        self.with_state(|state| state.stack().to_vec())
    }

    pub fn sheet(&self) -> Option<AnyRoute> {
        self.modal(ModalSlot::Sheet)
    }

    pub fn full_screen(&self) -> Option<AnyRoute> {
        self.modal(ModalSlot::FullScreen)
    }

    pub fn modal(&self, slot: ModalSlot) -> Option<AnyRoute> {
        self.with_state(|state| state.modal(slot).cloned())
    }

    /// The modal that should be on top: full screen wins over sheet.
    pub fn foreground_modal(&self) -> Option<(ModalSlot, AnyRoute)> {
        self.with_state(|state| {
            state
                .foreground_modal()
                .map(|(slot, route)| (slot, route.clone()))
        })
    }

    pub fn top(&self) -> Option<AnyRoute> {
        self.with_state(|state| state.top().cloned())
    }

    pub fn depth(&self) -> usize {
        self.with_state(NavigationState::depth)
    }

    pub fn is_at_root(&self) -> bool {
        self.depth() == 0
    }

    pub fn can_pop(&self) -> bool {
        !self.is_at_root()
    }

    /// Borrow the state without cloning it.
    ///
    /// The router must not be mutated from inside `f`.
    pub fn with_state<T>(&self, f: impl FnOnce(&NavigationState) -> T) -> T {
        f(&self.inner.state.borrow())
    }

    /// Copy of the full navigation state, suitable for persisting.
    pub fn snapshot(&self) -> NavigationState {
        self.with_state(NavigationState::clone)
    }

    /// Replace the full navigation state, modals included.
    pub fn restore(&self, state: NavigationState) {
        self.apply(|current| current.restore(state));
    }

    /// Whether two handles refer to the same router.
    pub fn ptr_eq(&self, other: &Router) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ========================================================================
    // Observation
    // ========================================================================

    /// Register an observer; it stays subscribed while the returned handle
    /// lives.
    pub fn subscribe<O: NavigationObserver>(&self, observer: O) -> Subscription {
        let id = self.inner.next_observer_id.get();
        self.inner.next_observer_id.set(id + 1);
        debug_log!("Subscribed observer '{}' (id {})", observer.name(), id);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        Subscription::new(Rc::downgrade(&self.inner), id)
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    /// Run a mutation and, if it changed anything, notify observers once the
    /// state borrow is released.
    ///
    /// A mutation made by an observer is queued and delivered after the
    /// current event has reached every observer, so all observers see events
    /// in the order the state changed.
    fn apply<F>(&self, mutate: F)
    where
        F: FnOnce(&mut NavigationState) -> Option<RouteChangeEvent>,
    {
        let event = mutate(&mut self.inner.state.borrow_mut());
        let Some(event) = event else {
            trace_log!("Navigation request left state unchanged");
            return;
        };
        debug_log!(
            "Navigation {:?}: {} → {} (depth {})",
            event.change,
            describe(event.from.as_ref()),
            describe(event.to.as_ref()),
            event.depth
        );
        self.inner.pending.borrow_mut().push_back(event);
        if self.inner.notifying.get() {
            trace_log!("Queued event raised during delivery");
            return;
        }

        self.inner.notifying.set(true);
        let _delivery = DeliveryGuard(&self.inner);
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            match next {
                Some(event) => self.notify(&event),
                None => break,
            }
        }
    }

    fn notify(&self, event: &RouteChangeEvent) {
        let observers: Vec<(u64, Rc<dyn NavigationObserver>)> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(id, observer)| (*id, Rc::clone(observer)))
            .collect();
        for (id, observer) in observers {
            // Unsubscribed by an earlier observer in this pass
            if !self.inner.has_observer(id) {
                continue;
            }
            trace_log!("Notifying '{}' of {:?}", observer.name(), event.change);
            observer.on_change(self, event);
        }
    }
}

/// Ends a delivery pass, even one cut short by a panicking observer.
struct DeliveryGuard<'a>(&'a RouterInner);

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        self.0.pending.borrow_mut().clear();
        self.0.notifying.set(false);
    }
}

fn describe(route: Option<&AnyRoute>) -> String {
    route.map_or_else(|| "-".to_string(), AnyRoute::identity)
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("state", &*self.inner.state.borrow())
            .field("observers", &self.observer_count())
            .finish_non_exhaustive()
    }
}
