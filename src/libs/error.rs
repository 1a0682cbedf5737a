//! Error taxonomy for a worklog run.
//!
//! Every failure that ends a run maps onto one [`WorklogError`] variant. The
//! variants follow the order of the run itself: configuration, time window,
//! issue lookup, transport, submission. User cancellation is not an error and
//! never appears here.

use thiserror::Error;

/// Problems detected while assembling [`Config`](crate::libs::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{var} must be an integer between {min} and {max}, got '{value}'")]
    OutOfRange {
        var: &'static str,
        value: String,
        min: u32,
        max: u32,
    },

    #[error("Invalid JIRA_URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unknown timezone '{name}': {reason}")]
    UnknownTimezone { name: String, reason: String },

    #[error("Cannot use CA bundle '{path}': {reason}")]
    CaBundle { path: String, reason: String },

    #[error("Cannot build HTTP client")]
    Client(#[source] reqwest::Error),
}

/// Issue lookup failures, one per interesting status code.
#[derive(Debug, Error)]
pub enum IssueLookupError {
    #[error("Issue '{0}' not found or not visible")]
    NotFound(String),

    #[error("Unauthorized: check JIRA_EMAIL and JIRA_API_TOKEN")]
    Unauthorized,

    #[error("Forbidden: missing permissions to browse the issue")]
    Forbidden,

    #[error("HTTP {status} while checking issue '{key}': {body}")]
    Http { key: String, status: u16, body: String },

    #[error("Unexpected response for issue '{key}': {reason}")]
    InvalidBody { key: String, reason: String },
}

#[derive(Debug, Error)]
pub enum WorklogError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    InvalidWindow(String),

    #[error(transparent)]
    IssueLookup(#[from] IssueLookupError),

    #[error("Network error while {action}")]
    Network {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error logging work: {status} {body}")]
    Submission { status: u16, body: String },
}

impl WorklogError {
    pub fn network(action: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| Self::Network { action, source }
    }
}
