//! Building blocks of a worklog run: configuration, the time window,
//! formatting, the confirmation prompt and user-facing messages.

pub mod config;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod prompt;
pub mod window;
