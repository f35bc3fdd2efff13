//! The onboarding flow's route family.
//!
//! Four parameterless destinations walked through in order:
//! intro → philosophy → name entry → finish. Screens of the flow never touch
//! the [`Router`] directly; they talk to an [`OnboardingNavigating`]
//! implementation, which keeps them testable with a fake navigator.

use crate::registry::RouteRegistry;
use crate::route::Route;
use crate::router::Router;
use serde::{Deserialize, Serialize};

/// Onboarding destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnboardingRoute {
    Intro,
    Philosophy,
    NameEntry,
    Finish,
}

impl Route for OnboardingRoute {
    const NAMESPACE: &'static str = "onboarding";
}

/// Navigation the onboarding screens are allowed to perform.
pub trait OnboardingNavigating {
    fn to_philosophy(&self);
    fn to_name(&self);
    fn to_finish(&self);
}

/// [`OnboardingNavigating`] backed by a [`Router`].
#[derive(Debug, Clone)]
pub struct OnboardingNavigator {
    router: Router,
}

impl OnboardingNavigator {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }
}

impl OnboardingNavigating for OnboardingNavigator {
    fn to_philosophy(&self) {
        self.router.push(OnboardingRoute::Philosophy);
    }

    fn to_name(&self) {
        self.router.push(OnboardingRoute::NameEntry);
    }

    fn to_finish(&self) {
        self.router.push(OnboardingRoute::Finish);
    }
}

/// Register the onboarding family.
///
/// `build` receives the decoded route and a navigator bound to the router
/// that asked for the screen.
pub fn register_onboarding<S, F>(registry: &mut RouteRegistry<S>, build: F)
where
    S: 'static,
    F: Fn(OnboardingRoute, OnboardingNavigator) -> S + 'static,
{
    registry.register(move |route: OnboardingRoute, router: &Router| {
        build(route, OnboardingNavigator::new(router.clone()))
    });
}
