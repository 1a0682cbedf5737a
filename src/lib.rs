//! # jira-worklog
//!
//! Logs today's fixed work window to a single Jira issue after the user
//! confirms the entry on screen.
//!
//! ## Flow
//!
//! 1. **Configuration**: read from the environment and an optional `.env`
//! 2. **Time window**: today's start/end in the configured timezone
//! 3. **Issue check**: the issue must exist and be visible
//! 4. **Confirmation**: native dialog or terminal prompt
//! 5. **Submission**: one worklog POST, success only on `201 Created`
//!
//! Any failure stops the run with exit status 1. Declining the
//! confirmation is a clean exit.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jira_worklog::commands::Cli;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> std::process::ExitCode {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
