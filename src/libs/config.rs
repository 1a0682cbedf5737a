//! Run configuration loaded from the environment.
//!
//! All settings come from environment variables, optionally seeded from a
//! `.env` file. The resulting [`Config`] is built once at startup and then
//! passed by reference to every step of the run.
//!
//! ## Variables
//!
//! | Variable             | Default                         |
//! |----------------------|---------------------------------|
//! | `JIRA_URL`           | `https://example.atlassian.net` |
//! | `ISSUE_KEY`          | `PROY-123`                      |
//! | `JIRA_EMAIL`         | `user@example.com`              |
//! | `JIRA_API_TOKEN`     | empty (required)                |
//! | `JIRA_VERIFY_SSL`    | `true`                          |
//! | `JIRA_CA_BUNDLE`     | empty                           |
//! | `WORKLOG_TZ`         | `Europe/Madrid`                 |
//! | `WORKLOG_START_HOUR` | `8`                             |
//! | `WORKLOG_START_MIN`  | `30`                            |
//! | `WORKLOG_END_HOUR`   | `15`                            |
//! | `WORKLOG_END_MIN`    | `30`                            |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jira_worklog::libs::config::Config;
//!
//! Config::load_env_file(None)?;
//! let config = Config::from_env()?;
//! println!("Logging to {}", config.issue_key);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::error::ConfigError;
use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::path::{Path, PathBuf};

pub const DEFAULT_JIRA_URL: &str = "https://example.atlassian.net";
pub const DEFAULT_ISSUE_KEY: &str = "PROY-123";
pub const DEFAULT_JIRA_EMAIL: &str = "user@example.com";
pub const DEFAULT_TIMEZONE: &str = "Europe/Madrid";

/// Values of `JIRA_VERIFY_SSL` that turn certificate validation off.
const VERIFY_OFF_VALUES: [&str; 3] = ["false", "0", "no"];

/// TLS certificate validation for outbound calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyMode {
    Enabled,
    Disabled,
    /// Trust only the certificates in this PEM bundle.
    CaBundle(PathBuf),
}

impl VerifyMode {
    /// A non-empty CA bundle path always wins over the verify flag.
    pub fn resolve(verify_flag: &str, ca_bundle: &str) -> Self {
        let ca_bundle = ca_bundle.trim();
        if !ca_bundle.is_empty() {
            return Self::CaBundle(PathBuf::from(ca_bundle));
        }
        let flag = verify_flag.trim().to_lowercase();
        if VERIFY_OFF_VALUES.contains(&flag.as_str()) {
            Self::Disabled
        } else {
            Self::Enabled
        }
    }
}

/// Daily work window as wall-clock hour/minute pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub start_hour: u32,
    pub start_min: u32,
    pub end_hour: u32,
    pub end_min: u32,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            start_hour: 8,
            start_min: 30,
            end_hour: 15,
            end_min: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL without a trailing slash.
    pub jira_url: String,
    pub issue_key: String,
    pub email: String,
    pub api_token: String,
    pub verify: VerifyMode,
    pub timezone: Tz,
    pub schedule: Schedule,
}

impl Config {
    /// Loads `.env` into the process environment without overriding
    /// variables that are already set.
    ///
    /// A missing default `.env` is fine; an explicitly requested file that
    /// cannot be read is an error.
    pub fn load_env_file(path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                dotenv::from_path(path).with_context(|| format!("Failed to load env file '{}'", path.display()))?;
                tracing::debug!(path = %path.display(), "loaded env file");
            }
            None => {
                if let Ok(path) = dotenv::dotenv() {
                    tracing::debug!(path = %path.display(), "loaded env file");
                }
            }
        }
        Ok(())
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string()).trim().to_string();

        let jira_url = var("JIRA_URL", DEFAULT_JIRA_URL).trim_end_matches('/').to_string();
        let issue_key = var("ISSUE_KEY", DEFAULT_ISSUE_KEY);
        let email = var("JIRA_EMAIL", DEFAULT_JIRA_EMAIL);
        let api_token = var("JIRA_API_TOKEN", "");

        if jira_url.is_empty() {
            return Err(ConfigError::Missing("JIRA_URL"));
        }
        if issue_key.is_empty() {
            return Err(ConfigError::Missing("ISSUE_KEY"));
        }
        if email.is_empty() {
            return Err(ConfigError::Missing("JIRA_EMAIL"));
        }
        if api_token.is_empty() {
            return Err(ConfigError::Missing("JIRA_API_TOKEN"));
        }

        let verify = VerifyMode::resolve(&var("JIRA_VERIFY_SSL", "true"), &var("JIRA_CA_BUNDLE", ""));

        let tz_name = var("WORKLOG_TZ", DEFAULT_TIMEZONE);
        let timezone = tz_name.parse::<Tz>().map_err(|e| ConfigError::UnknownTimezone {
            name: tz_name.clone(),
            reason: e.to_string(),
        })?;

        let defaults = Schedule::default();
        let schedule = Schedule {
            start_hour: parse_bounded("WORKLOG_START_HOUR", lookup("WORKLOG_START_HOUR"), defaults.start_hour, 23)?,
            start_min: parse_bounded("WORKLOG_START_MIN", lookup("WORKLOG_START_MIN"), defaults.start_min, 59)?,
            end_hour: parse_bounded("WORKLOG_END_HOUR", lookup("WORKLOG_END_HOUR"), defaults.end_hour, 23)?,
            end_min: parse_bounded("WORKLOG_END_MIN", lookup("WORKLOG_END_MIN"), defaults.end_min, 59)?,
        };

        Ok(Self {
            jira_url,
            issue_key,
            email,
            api_token,
            verify,
            timezone,
            schedule,
        })
    }

    /// Replaces the target issue, e.g. from a command-line flag.
    pub fn with_issue_key(mut self, issue_key: Option<&str>) -> Self {
        if let Some(key) = issue_key.map(str::trim).filter(|key| !key.is_empty()) {
            self.issue_key = key.to_string();
        }
        self
    }
}

fn parse_bounded(var: &'static str, raw: Option<String>, default: u32, max: u32) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value = raw.trim();
    value
        .parse::<u32>()
        .ok()
        .filter(|parsed| *parsed <= max)
        .ok_or_else(|| ConfigError::OutOfRange {
            var,
            value: value.to_string(),
            min: 0,
            max,
        })
}
