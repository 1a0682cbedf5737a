//! Jira Cloud REST client.
//!
//! Two endpoints are used: `GET /rest/api/3/issue/{key}?fields=summary` to
//! confirm the issue is visible, and `POST /rest/api/3/issue/{key}/worklog` to
//! record the entry. Both go through one [`Client`] carrying the JSON headers
//! and TLS mode; every request authenticates with HTTP Basic (email, API
//! token). Status codes are translated by [`issue_summary_from_response`] and
//! [`worklog_result_from_response`].

use super::IssueTracker;
use crate::libs::config::{Config, VerifyMode};
use crate::libs::error::{ConfigError, IssueLookupError, WorklogError};
use crate::libs::formatter::format_started;
use crate::libs::window::TimeWindow;
use crate::msg_debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Certificate, Client, StatusCode, Url,
};
use serde::{Deserialize, Serialize};
use std::fs;

const ISSUE_PATH: [&str; 4] = ["rest", "api", "3", "issue"];

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct JiraIssue {
    #[serde(default)]
    pub fields: Option<JiraIssueFields>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub summary: Option<String>,
}

/// Body of `POST /rest/api/3/issue/{key}/worklog`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorklogEntry {
    pub time_spent: String,
    pub started: String,
}

impl WorklogEntry {
    pub fn new(window: &TimeWindow) -> Self {
        Self {
            time_spent: format!("{}m", window.minutes),
            started: format_started(&window.start),
        }
    }
}

/// Jira Cloud REST client shared by the issue check and the worklog post.
#[derive(Debug)]
pub struct Jira {
    client: Client,
    api_url: Url,
    email: String,
    api_token: String,
}

impl Jira {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let api_url = Url::parse(&config.jira_url).map_err(|e| ConfigError::InvalidUrl {
            url: config.jira_url.clone(),
            reason: e.to_string(),
        })?;
        if api_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: config.jira_url.clone(),
                reason: "not a base URL".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        builder = match &config.verify {
            VerifyMode::Enabled => builder,
            VerifyMode::Disabled => builder.danger_accept_invalid_certs(true),
            VerifyMode::CaBundle(path) => {
                let ca_error = |reason: String| ConfigError::CaBundle {
                    path: path.display().to_string(),
                    reason,
                };
                let pem = fs::read(path).map_err(|e| ca_error(e.to_string()))?;
                let certs = Certificate::from_pem_bundle(&pem).map_err(|e| ca_error(e.to_string()))?;
                if certs.is_empty() {
                    return Err(ca_error("no certificates found".to_string()));
                }
                // The bundle replaces the system roots.
                certs.into_iter().fold(builder.tls_built_in_root_certs(false), |builder, cert| builder.add_root_certificate(cert))
            }
        };

        Ok(Self {
            client: builder.build().map_err(ConfigError::Client)?,
            api_url,
            email: config.email.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// `{base}/rest/api/3/issue/{key}[/{suffix}]` with each segment percent-encoded.
    fn issue_url(&self, issue_key: &str, suffix: Option<&str>) -> Url {
        let mut url = self.api_url.clone();
        // Base URLs were checked in `new`.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(ISSUE_PATH).push(issue_key).extend(suffix);
        }
        url
    }
}

impl IssueTracker for Jira {
    async fn issue_summary(&self, issue_key: &str) -> Result<String, WorklogError> {
        let mut url = self.issue_url(issue_key, None);
        url.query_pairs_mut().append_pair("fields", "summary");
        msg_debug!(format!("GET {}", url));

        let res = self
            .client
            .get(url)
            .basic_auth(&self.email, Some(&self.api_token))
            .send()
            .await
            .map_err(WorklogError::network("checking issue"))?;
        let status = res.status();
        let body = res.text().await.map_err(WorklogError::network("checking issue"))?;
        tracing::debug!(%status, "issue lookup finished");

        issue_summary_from_response(issue_key, status, &body)
    }

    async fn post_worklog(&self, issue_key: &str, entry: &WorklogEntry) -> Result<(), WorklogError> {
        let url = self.issue_url(issue_key, Some("worklog"));
        msg_debug!(format!("POST {} {:?}", url, entry));

        let res = self
            .client
            .post(url)
            .basic_auth(&self.email, Some(&self.api_token))
            .json(entry)
            .send()
            .await
            .map_err(WorklogError::network("posting worklog"))?;
        let status = res.status();
        let body = res.text().await.map_err(WorklogError::network("posting worklog"))?;
        tracing::debug!(%status, "worklog post finished");

        worklog_result_from_response(status, &body)
    }
}

/// Maps the issue lookup response onto the issue summary or a lookup error.
///
/// A missing or null summary yields an empty string.
pub fn issue_summary_from_response(issue_key: &str, status: StatusCode, body: &str) -> Result<String, WorklogError> {
    match status {
        StatusCode::NOT_FOUND => Err(IssueLookupError::NotFound(issue_key.to_string()).into()),
        StatusCode::UNAUTHORIZED => Err(IssueLookupError::Unauthorized.into()),
        StatusCode::FORBIDDEN => Err(IssueLookupError::Forbidden.into()),
        status if !status.is_success() => Err(IssueLookupError::Http {
            key: issue_key.to_string(),
            status: status.as_u16(),
            body: body.to_string(),
        }
        .into()),
        _ => {
            let issue = serde_json::from_str::<JiraIssue>(body).map_err(|e| IssueLookupError::InvalidBody {
                key: issue_key.to_string(),
                reason: e.to_string(),
            })?;
            Ok(issue.fields.and_then(|fields| fields.summary).unwrap_or_default())
        }
    }
}

/// Only `201 Created` counts as a logged worklog.
pub fn worklog_result_from_response(status: StatusCode, body: &str) -> Result<(), WorklogError> {
    if status == StatusCode::CREATED {
        Ok(())
    } else {
        Err(WorklogError::Submission {
            status: status.as_u16(),
            body: body.to_string(),
        })
    }
}
