//! Message display and logging macros.
//!
//! The macros print plain console output in normal runs and switch to
//! `tracing` events when debug mode is enabled, so that diagnostics and user
//! messages end up in the same ordered log.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when any of these hold, checked once per process:
//! - **`WORKLOG_DEBUG`** is set
//! - **`RUST_LOG`** is set
//! - [`enable_debug_mode`] was called before the first message (`--debug`)
//!
//! ## Usage
//!
//! ```rust
//! use jira_worklog::{msg_error, msg_info, msg_success};
//! use jira_worklog::libs::messages::Message;
//!
//! msg_info!(Message::IssueOk("PROY-123".into(), "Fix bug".into()));
//! msg_success!(Message::WorklogSubmitted("7h".into(), "PROY-123".into(), "08:30–15:30".into()));
//! msg_error!("Error logging work: 400 bad");
//! ```

use std::sync::OnceLock;

/// Cached debug mode flag.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Forces debug mode on. Has no effect once any message was printed.
pub fn enable_debug_mode() {
    let _ = DEBUG_MODE.set(true);
}

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("WORKLOG_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            eprintln!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
