//! Browser console logging.
//!
//! In hydrate builds `log` records go to the devtools console and panics are
//! reported through `console_error_panic_hook`. SSR and test builds no-op so
//! server rendering stays deterministic.

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}

/// Record a UI event at debug level.
pub fn debug(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("{message}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
