//! Shared fixtures for the integration tests
//!
//! Two extra route families next to onboarding, a `Screen` type the registry
//! resolves into, and helpers to read a router's stack back as typed routes.

#![allow(dead_code)]

use erased_navigator::*;
use serde::{Deserialize, Serialize};

/// Route family with associated data
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskRoute {
    List,
    Detail { id: u64 },
    Edit { id: u64, title: String },
}

impl Route for TaskRoute {
    const NAMESPACE: &'static str = "tasks";
}

/// Route family sharing variant names with onboarding but not its namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsRoute {
    Intro,
    Theme { accent: String },
}

impl Route for SettingsRoute {
    const NAMESPACE: &'static str = "settings";
}

/// What the test registry renders
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Empty,
    Onboarding(OnboardingRoute),
    Task(TaskRoute),
    Settings(SettingsRoute),
}

/// Route the test output through `RUST_LOG`
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Registry knowing the onboarding and task families (not settings)
pub fn screen_registry() -> RouteRegistry<Screen> {
    let mut registry = RouteRegistry::new();
    register_onboarding(&mut registry, |route, _navigator| Screen::Onboarding(route));
    registry.register(|route: TaskRoute, _router: &Router| Screen::Task(route));
    registry
}

/// Decode every stack entry as `R`, dropping the ones of other families
pub fn decoded_stack<R: Route>(router: &Router) -> Vec<R> {
    router
        .stack()
        .iter()
        .filter_map(AnyRoute::decode::<R>)
        .collect()
}

pub fn wrap_all<R: Route>(routes: &[R]) -> Vec<AnyRoute> {
    routes.iter().map(AnyRoute::wrap).collect()
}

/// Assert the stack holds exactly `expected`, in order
pub fn assert_stack<R: Route>(router: &Router, expected: &[R]) {
    assert_eq!(
        router.stack(),
        wrap_all(expected),
        "stack mismatch: decoded {:?}",
        decoded_stack::<R>(router)
    );
}
