//! Convenient macros for application messaging and logging.
//!
//! The macros route every message either to the tracing system (when the
//! user runs with `WORKLOG_DEBUG` or `RUST_LOG` set) or to plain console
//! output. Commands never call `println!` directly; they emit a
//! [`Message`](crate::libs::messages::Message) through one of these macros
//! so that output stays uniform and capturable.
//!
//! ## Macro categories
//!
//! - **`msg_print!`**: general message display
//! - **`msg_success!`**: success notifications with ✅ prefix
//! - **`msg_info!`**: informational messages with ℹ️ prefix
//! - **`msg_warning!`**: warnings with ⚠️ prefix
//! - **`msg_error!`**: errors with ❌ prefix, written to stderr
//! - **`msg_debug!`**: debug-only output with 🔍 prefix
//! - **`msg_error_anyhow!` / `msg_bail_anyhow!`**: build or return an
//!   `anyhow::Error` from a message

use std::sync::OnceLock;

/// Cached result of the debug-mode environment check.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// Debug mode is enabled when either `WORKLOG_DEBUG` or `RUST_LOG` is set
/// in the environment. The result is computed once and reused.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("WORKLOG_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message with automatic debug mode routing.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️  {}", $msg);
        } else {
            println!("ℹ️  {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️  {}", $msg);
        } else {
            println!("⚠️  {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix.
///
/// In normal mode errors go to stderr so scripts can separate them from
/// regular output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a debug message with 🔍 prefix, only when debug mode is enabled.
#[macro_export]
macro_rules! msg_debug {
    ($($arg:tt)*) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", format!($($arg)*));
        }
    };
}

/// Creates an `anyhow::Error` from a message for propagation.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early from the enclosing function with an error built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
