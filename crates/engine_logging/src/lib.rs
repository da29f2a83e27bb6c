#![deny(missing_docs)]
//! Shared logging utilities for the reel workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every message is
//! prefixed with the dispatch number of the message loop that produced it.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current dispatch number.
    static DISPATCH: Cell<u64> = const { Cell::new(0) };
}

/// Sets the dispatch number for the current thread.
/// The app loop calls this once per dispatched message.
pub fn set_dispatch(dispatch: u64) {
    DISPATCH.with(|v| v.set(dispatch));
}

/// Retrieves the dispatch number for the current thread.
/// Returns 0 on threads that never dispatch (engine workers, tests).
pub fn dispatch() -> u64 {
    DISPATCH.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!("[d{}] {}", $crate::dispatch(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!("[d{}] {}", $crate::dispatch(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!("[d{}] {}", $crate::dispatch(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!("[d{}] {}", $crate::dispatch(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!("[d{}] {}", $crate::dispatch(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
