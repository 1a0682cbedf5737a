//! Issue tracker access.
//!
//! The run talks to Jira through the [`IssueTracker`] trait: one read to
//! confirm the issue is visible, one write to record the worklog. [`Jira`] is
//! the REST implementation; tests plug in scripted trackers instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jira_worklog::api::{IssueTracker, Jira};
//! use jira_worklog::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let jira = Jira::new(&config)?;
//! let summary = jira.issue_summary(&config.issue_key).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::WorklogError;

pub mod jira;

pub use jira::{Jira, WorklogEntry};

#[allow(async_fn_in_trait)]
pub trait IssueTracker {
    /// Fetches the summary of `issue_key`, failing when the issue is missing
    /// or not visible with the configured credentials.
    ///
    /// # Errors
    ///
    /// - [`IssueLookupError`](crate::libs::error::IssueLookupError) for 404, 401, 403 and other non-2xx statuses
    /// - [`WorklogError::Network`] when the request cannot be sent
    async fn issue_summary(&self, issue_key: &str) -> Result<String, WorklogError>;

    /// Records `entry` against `issue_key`.
    ///
    /// # Errors
    ///
    /// - [`WorklogError::Submission`] for any status other than 201
    /// - [`WorklogError::Network`] when the request cannot be sent
    async fn post_worklog(&self, issue_key: &str, entry: &WorklogEntry) -> Result<(), WorklogError>;
}
