//! Process-wide logger
//!
//! The global logger is installed at most once. [`init`] installs a
//! configured logger; any use before that (including through the
//! logging macros) installs the default one: stderr sink, everything
//! shown, call sites omitted, Fatal exits the process. Once installed,
//! the logger lives until the process ends. Its settings can still be
//! changed through [`set_severity_threshold`] and [`enable_call_site`].

use sevlog_core_types::Severity;
use std::sync::OnceLock;

use crate::errors::{Result, SevlogError};
use crate::logger::Logger;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide logger
///
/// Call this before the first log statement.
///
/// # Errors
///
/// Returns [`SevlogError::AlreadyInitialized`] if a logger is already
/// installed, either by an earlier `init` or implicitly by an earlier
/// log call.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| SevlogError::AlreadyInitialized)
}

/// The process-wide logger, installing the default one if needed
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

/// Set the global threshold. Applies to every subsequent call on every thread.
pub fn set_severity_threshold(level: Severity) {
    global().set_severity_threshold(level);
}

/// Turn on `file:line` reporting for the global logger
pub fn enable_call_site() {
    global().enable_call_site();
}
