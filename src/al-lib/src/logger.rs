//! Debug logging shared by the library and its front ends.
//!
//! Front ends call [`Logger::init`] once at startup. Until then, and in
//! builds that never call it, every message is discarded.

use std::fmt;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    debug: bool,
}

impl Logger {
    /// First call wins; later calls keep the existing setting.
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| Logger { debug });
    }

    pub fn enabled() -> bool {
        LOGGER.get().is_some_and(|logger| logger.debug)
    }

    pub fn debug(message: &str) {
        Self::debug_fmt(format_args!("{message}"));
    }

    pub fn debug_fmt(args: fmt::Arguments) {
        if Self::enabled() {
            eprintln!("debug: {args}");
        }
    }
}

/// `format!`-style debug line, e.g. `debug_log!("session {id} started")`.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::Logger::debug_fmt(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_before_init_does_not_panic() {
        Logger::debug("maybe printed");
        crate::debug_log!("also {}", "maybe printed");
    }

    #[test]
    fn test_init_enables_debug_output() {
        Logger::init(true);
        assert!(Logger::enabled());
        Logger::debug("Test message");
        crate::debug_log!("Formatted: {}", "test");
    }
}
