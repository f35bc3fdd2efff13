//! Observing navigation state changes.
//!
//! The [`Router`] notifies observers **synchronously** after every mutation
//! that changed its state. The display layer is one such observer; logging,
//! analytics or state persistence can be others.
//!
//! # Delivery rules
//!
//! - One [`RouteChangeEvent`] per effective mutation. No-ops (`pop` at root,
//!   dismissing an empty slot) produce nothing.
//! - Observers run in subscription order, after the router released its
//!   state, so they may read the router or mutate it again.
//! - A mutation made from inside an observer is delivered once the current
//!   event has reached every observer. Every observer sees the same events
//!   in the order the state changed.
//! - An observer unsubscribed during a pass (its [`Subscription`] dropped by
//!   an earlier observer) receives nothing more, not even the current event.
//! - There is no batching. Coalescing several mutations into one re-render is
//!   up to the observer.
//!
//! # Creating observers
//!
//! | Approach | When to use |
//! |----------|-------------|
//! | Implement [`NavigationObserver`] | Named observer with its own state |
//! | [`observer_fn`] | Quick one-off from a closure |
//!
//! # Example
//!
//! ```
//! use erased_navigator::{observer_fn, Router};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let router = Router::new();
//! let renders = Rc::new(Cell::new(0));
//!
//! let counter = Rc::clone(&renders);
//! let subscription = router.subscribe(observer_fn(move |_router, _event| {
//!     counter.set(counter.get() + 1);
//! }));
//!
//! router.pop(); // at root: no event
//! router.dismiss_sheet(); // empty slot: no event
//! assert_eq!(renders.get(), 0);
//!
//! drop(subscription);
//! ```

use crate::router::{Router, RouterInner};
use crate::state::RouteChangeEvent;
use std::rc::Weak;

// ============================================================================
// NavigationObserver trait
// ============================================================================

/// Receives navigation state changes from a [`Router`].
///
/// The router is passed to every call, so an observer never needs to hold a
/// clone of it. Capturing one would keep the router alive through its own
/// observer list.
pub trait NavigationObserver: 'static {
    /// Called after the router's state changed.
    fn on_change(&self, router: &Router, event: &RouteChangeEvent);

    /// Observer name for debugging.
    fn name(&self) -> &'static str {
        "NavigationObserver"
    }
}

// ============================================================================
// observer_fn helper
// ============================================================================

/// Create an observer from a closure.
pub const fn observer_fn<F>(f: F) -> FnObserver<F>
where
    F: Fn(&Router, &RouteChangeEvent) + 'static,
{
    FnObserver { f }
}

/// Observer created from a closure via [`observer_fn`].
pub struct FnObserver<F> {
    f: F,
}

impl<F> NavigationObserver for FnObserver<F>
where
    F: Fn(&Router, &RouteChangeEvent) + 'static,
{
    fn on_change(&self, router: &Router, event: &RouteChangeEvent) {
        (self.f)(router, event);
    }

    fn name(&self) -> &'static str {
        "FnObserver"
    }
}

// ============================================================================
// Subscription
// ============================================================================

/// Handle returned by [`Router::subscribe`].
///
/// Dropping it unsubscribes the observer. Call [`detach`](Self::detach) to
/// keep the observer for as long as the router lives.
#[must_use = "dropping a Subscription immediately unsubscribes the observer"]
pub struct Subscription {
    router: Weak<RouterInner>,
    id: u64,
}

impl Subscription {
    pub(crate) fn new(router: Weak<RouterInner>, id: u64) -> Self {
        Self { router, id }
    }

    /// Keep the observer subscribed after this handle is dropped.
    pub fn detach(mut self) {
        self.router = Weak::new();
    }

    /// Whether the observer is still registered with a live router.
    pub fn is_active(&self) -> bool {
        self.router
            .upgrade()
            .is_some_and(|inner| inner.has_observer(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.router.upgrade() {
            inner.remove_observer(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NavigationChange;
    use crate::AnyRoute;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Recorder {
        events: Rc<RefCell<Vec<NavigationChange>>>,
    }

    impl NavigationObserver for Recorder {
        fn on_change(&self, _router: &Router, event: &RouteChangeEvent) {
            self.events.borrow_mut().push(event.change);
        }

        fn name(&self) -> &'static str {
            "Recorder"
        }
    }

    fn envelope(name: &str) -> AnyRoute {
        AnyRoute::new("test", Some(name.as_bytes().to_vec()))
    }

    #[test]
    fn test_observer_receives_events() {
        let router = Router::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let _subscription = router.subscribe(Recorder {
            events: Rc::clone(&events),
        });

        router.push_erased(envelope("a"));
        router.pop();
        router.pop();

        assert_eq!(
            *events.borrow(),
            vec![NavigationChange::Push, NavigationChange::Pop]
        );
    }

    #[test]
    fn test_drop_unsubscribes() {
        let router = Router::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let subscription = router.subscribe(Recorder {
            events: Rc::clone(&events),
        });
        assert!(subscription.is_active());
        assert_eq!(router.observer_count(), 1);

        drop(subscription);
        router.push_erased(envelope("a"));

        assert!(events.borrow().is_empty());
        assert_eq!(router.observer_count(), 0);
    }

    #[test]
    fn test_detach_keeps_observer() {
        let router = Router::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        router
            .subscribe(Recorder {
                events: Rc::clone(&events),
            })
            .detach();

        router.push_erased(envelope("a"));
        assert_eq!(events.borrow().len(), 1);
        assert_eq!(router.observer_count(), 1);
    }

    #[test]
    fn test_subscription_outlives_router() {
        let router = Router::new();
        let subscription = router.subscribe(observer_fn(|_, _| {}));
        drop(router);
        assert!(!subscription.is_active());
    }

    #[test]
    fn test_observer_can_mutate_router() {
        let router = Router::new();
        // Immediately unwind any push deeper than two
        router
            .subscribe(observer_fn(|router, event| {
                if event.depth > 2 {
                    router.pop();
                }
            }))
            .detach();

        router.push_erased(envelope("a"));
        router.push_erased(envelope("b"));
        router.push_erased(envelope("c"));

        assert_eq!(router.depth(), 2);
        assert_eq!(router.top(), Some(envelope("b")));
    }

    #[test]
    fn test_nested_mutation_delivered_in_order() {
        let router = Router::new();
        router
            .subscribe(observer_fn(|router, event| {
                if event.change == NavigationChange::Push && event.depth > 1 {
                    router.pop();
                }
            }))
            .detach();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _recorder = router.subscribe(observer_fn(move |_, event| {
            sink.borrow_mut().push((event.change, event.depth));
        }));

        router.push_erased(envelope("a"));
        router.push_erased(envelope("b"));

        assert_eq!(
            *seen.borrow(),
            vec![
                (NavigationChange::Push, 1),
                (NavigationChange::Push, 2),
                (NavigationChange::Pop, 1),
            ]
        );
        assert_eq!(seen.borrow().last().map(|(_, depth)| *depth), Some(router.depth()));
    }

    #[test]
    fn test_unsubscribed_mid_pass_gets_nothing() {
        let router = Router::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let victim = Rc::clone(&slot);
        router
            .subscribe(observer_fn(move |_, _| {
                drop(victim.borrow_mut().take());
            }))
            .detach();

        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        *slot.borrow_mut() = Some(router.subscribe(observer_fn(move |_, _| {
            *counter.borrow_mut() += 1;
        })));

        router.push_erased(envelope("a"));
        router.push_erased(envelope("b"));

        assert_eq!(*hits.borrow(), 0);
        assert_eq!(router.observer_count(), 1);
    }

    #[test]
    fn test_delivery_resets_after_panicking_observer() {
        let router = Router::new();
        let armed = Rc::new(Cell::new(true));
        let trigger = Rc::clone(&armed);
        router
            .subscribe(observer_fn(move |_, _| {
                if trigger.replace(false) {
                    panic!("observer failure");
                }
            }))
            .detach();
        let events = Rc::new(RefCell::new(Vec::new()));
        let _recorder = router.subscribe(Recorder {
            events: Rc::clone(&events),
        });

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            router.push_erased(envelope("a"));
        }));
        assert!(outcome.is_err());

        router.pop();
        assert_eq!(*events.borrow(), vec![NavigationChange::Pop]);
    }
}
