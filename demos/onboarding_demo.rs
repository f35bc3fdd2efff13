//! Onboarding Demo
//!
//! Walks the onboarding flow on a text "display layer": every navigation
//! change re-resolves the destinations and prints what would be on screen.
//!
//! Run with `RUST_LOG=debug cargo run --example onboarding_demo` to see the
//! router's own log output.

use erased_navigator::{
    register_onboarding, Destinations, NavigationHost, OnboardingNavigating, OnboardingNavigator,
    OnboardingRoute, Route, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum ProfileRoute {
    EditName { current: String },
}

impl Route for ProfileRoute {
    const NAMESPACE: &'static str = "profile";
}

fn main() {
    env_logger::init();

    let host: NavigationHost<String> = NavigationHost::new(OnboardingRoute::Intro, |registry| {
        register_onboarding(registry, |route, _navigator| onboarding_page(route));
        registry.register(|route: ProfileRoute, _router: &Router| match route {
            ProfileRoute::EditName { current } => format!("Edit name (currently '{}')", current),
        });
    });

    let _display = host.on_render(|destinations| print_screen(&destinations));
    print_screen(&host.destinations());

    // Screens only see the navigator
    let navigator = OnboardingNavigator::new(host.router().clone());
    navigator.to_philosophy();
    navigator.to_name();

    host.router().present(ProfileRoute::EditName {
        current: "Ada".to_string(),
    });
    // User swipes the sheet down
    host.sheet_binding().set_presented(false);

    navigator.to_finish();

    // What a deep-link or state-restoration blob looks like
    let saved = serde_json::to_string_pretty(&host.router().snapshot())
        .unwrap_or_else(|err| format!("<unserializable: {}>", err));
    println!("\nSaved navigation state:\n{}", saved);

    host.router().pop_to_root();
}

fn onboarding_page(route: OnboardingRoute) -> String {
    match route {
        OnboardingRoute::Intro => "Welcome".to_string(),
        OnboardingRoute::Philosophy => "One task at a time".to_string(),
        OnboardingRoute::NameEntry => "What should we call you?".to_string(),
        OnboardingRoute::Finish => "All set".to_string(),
    }
}

fn print_screen(destinations: &Destinations<String>) {
    let trail: Vec<&str> = std::iter::once(destinations.root.as_str())
        .chain(destinations.stack.iter().map(|d| d.screen.as_str()))
        .collect();
    println!("┌ {}", trail.join(" › "));
    if let Some(modal) = destinations.foreground_modal() {
        println!("└ modal [{}]: {}", modal.id, modal.screen);
    } else {
        println!("└ {}", destinations.current());
    }
}
