//! Logging abstraction layer.
//!
//! Provides macros that dispatch to either the [`log`](https://docs.rs/log)
//! or [`tracing`](https://docs.rs/tracing) crate depending on which feature
//! is enabled. With both enabled (e.g. `--all-features`), `tracing` wins and
//! each message is emitted once.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! The router logs mutations at **debug**, observer delivery at **trace**,
//! route family registration at **info**, and every soft failure (an
//! unresolvable envelope, a route that failed to encode, a namespace that was
//! registered twice) at **warn**. No navigation failure is fatal, so there is
//! no error-level macro.
//!
//! ```ignore
//! use erased_navigator::{debug_log, warn_log};
//!
//! debug_log!("push '{}' (depth {})", envelope.identity(), depth);
//! warn_log!("no factory registered for namespace '{}'", namespace);
//! ```

/// Emit a **trace**-level log message.
///
/// Dispatches to `log::trace!` or `tracing::trace!` depending on the
/// enabled feature flag. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "tracing")))]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level log message.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "tracing")))]
        ::log::debug!($($arg)*);
    };
}

/// Emit an **info**-level log message.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "tracing")))]
        ::log::info!($($arg)*);
    };
}

/// Emit a **warn**-level log message.
///
/// Used for every soft failure the router swallows instead of surfacing.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "tracing")))]
        ::log::warn!($($arg)*);
    };
}
