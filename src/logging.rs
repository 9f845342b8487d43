//! Logger setup for the browser build.
//!
//! All modules log through the `log` facade. In the browser, `console_log`
//! forwards records to the devtools console and `console_error_panic_hook`
//! turns panics into readable console errors. Native test runs install no
//! logger, so records are dropped.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`),
/// case-insensitively.
pub fn parse_level(raw: &str) -> Option<log::Level> {
    raw.trim().parse().ok()
}

/// Install the console logger and panic hook. Safe to call more than once.
#[cfg(feature = "hydrate")]
pub fn init(level: &str) {
    console_error_panic_hook::set_once();
    let level = parse_level(level).unwrap_or(log::Level::Info);
    // A second init returns Err because the logger is already set.
    let _ = console_log::init_with_level(level);
}
