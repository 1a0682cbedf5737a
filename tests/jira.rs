#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::Europe::Madrid;
    use jira_worklog::api::jira::{issue_summary_from_response, worklog_result_from_response};
    use jira_worklog::api::{IssueTracker, Jira, WorklogEntry};
    use jira_worklog::libs::config::{Config, VerifyMode};
    use jira_worklog::libs::error::{ConfigError, IssueLookupError, WorklogError};
    use jira_worklog::libs::window::TimeWindow;
    use reqwest::StatusCode;
    use std::io::Write;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn config(verify: VerifyMode) -> Config {
        let mut config = Config::from_lookup(|key| (key == "JIRA_API_TOKEN").then(|| "token123".to_string())).unwrap();
        config.verify = verify;
        config
    }

    fn wire_config(jira_url: &str) -> Config {
        Config::from_lookup(|key| match key {
            "JIRA_URL" => Some(jira_url.to_string()),
            "JIRA_EMAIL" => Some("dev@acme.test".to_string()),
            "JIRA_API_TOKEN" => Some("token123".to_string()),
            _ => None,
        })
        .unwrap()
    }

    /// A request as it arrived on the socket.
    #[derive(Debug)]
    struct RawRequest {
        line: String,
        headers: Vec<(String, String)>,
        body: String,
    }

    impl RawRequest {
        fn header(&self, name: &str) -> Option<&str> {
            self.headers.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
        }
    }

    /// Local HTTP/1.1 server answering each connection with the next scripted
    /// `(status line, body)` pair.
    async fn scripted_server(responses: Vec<(&'static str, &'static str)>) -> (SocketAddr, JoinHandle<Vec<RawRequest>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                requests.push(read_request(&mut stream).await);
                let reply = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(reply.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();
            }
            requests
        });
        (addr, handle)
    }

    async fn read_request(stream: &mut TcpStream) -> RawRequest {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let head_end = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos;
            }
        };

        let head = String::from_utf8(buf[..head_end].to_vec()).unwrap();
        let mut lines = head.split("\r\n");
        let line = lines.next().unwrap_or_default().to_string();
        let headers: Vec<(String, String)> = lines
            .filter_map(|l| l.split_once(':'))
            .map(|(name, value)| (name.trim().to_lowercase(), value.trim().to_string()))
            .collect();
        let length = headers
            .iter()
            .find(|(name, _)| name == "content-length")
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(0);

        let body_start = head_end + 4;
        while buf.len() < body_start + length {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body");
            buf.extend_from_slice(&chunk[..n]);
        }
        let body = String::from_utf8(buf[body_start..body_start + length].to_vec()).unwrap();

        RawRequest { line, headers, body }
    }

    #[tokio::test]
    async fn test_issue_check_and_worklog_post_on_the_wire() {
        let (addr, server) = scripted_server(vec![
            ("200 OK", r#"{"fields":{"summary":"Fix bug"}}"#),
            ("201 Created", "{}"),
        ])
        .await;
        let jira = Jira::new(&wire_config(&format!("http://{}/", addr))).unwrap();

        let summary = jira.issue_summary("PROY-123").await.unwrap();
        assert_eq!(summary, "Fix bug");

        let entry = WorklogEntry {
            time_spent: "420m".to_string(),
            started: "2026-10-18T08:30:00.000+0200".to_string(),
        };
        jira.post_worklog("PROY-123", &entry).await.unwrap();

        let requests = server.await.unwrap();
        assert_eq!(requests.len(), 2);

        let basic = "Basic ZGV2QGFjbWUudGVzdDp0b2tlbjEyMw==";
        let get = &requests[0];
        assert_eq!(get.line, "GET /rest/api/3/issue/PROY-123?fields=summary HTTP/1.1");
        assert_eq!(get.header("authorization"), Some(basic));
        assert_eq!(get.header("accept"), Some("application/json"));

        let post = &requests[1];
        assert_eq!(post.line, "POST /rest/api/3/issue/PROY-123/worklog HTTP/1.1");
        assert_eq!(post.header("authorization"), Some(basic));
        assert_eq!(post.header("accept"), Some("application/json"));
        assert_eq!(post.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(&post.body).unwrap();
        assert_eq!(body, serde_json::json!({"timeSpent": "420m", "started": "2026-10-18T08:30:00.000+0200"}));
    }

    #[tokio::test]
    async fn test_issue_key_is_a_single_encoded_segment() {
        let (addr, server) = scripted_server(vec![("404 Not Found", "{}"), ("400 Bad Request", "{}")]).await;
        let jira = Jira::new(&wire_config(&format!("http://{}/jira/", addr))).unwrap();

        let err = jira.issue_summary("OPS/7 x").await.unwrap_err();
        assert!(matches!(err, WorklogError::IssueLookup(IssueLookupError::NotFound(ref key)) if key == "OPS/7 x"));

        let entry = WorklogEntry {
            time_spent: "60m".to_string(),
            started: "2026-10-18T08:30:00.000+0200".to_string(),
        };
        let err = jira.post_worklog("OPS/7 x", &entry).await.unwrap_err();
        assert!(matches!(err, WorklogError::Submission { status: 400, .. }));

        let requests = server.await.unwrap();
        assert_eq!(requests[0].line, "GET /jira/rest/api/3/issue/OPS%2F7%20x?fields=summary HTTP/1.1");
        assert_eq!(requests[1].line, "POST /jira/rest/api/3/issue/OPS%2F7%20x/worklog HTTP/1.1");
    }

    #[test]
    fn test_unusable_jira_url() {
        for url in ["not a url", "mailto:jira@acme.test"] {
            let result = Jira::new(&wire_config(url));
            assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })), "{}", url);
        }
    }

    #[test]
    fn test_summary_extracted_from_ok_response() {
        let summary = issue_summary_from_response("PROY-123", StatusCode::OK, r#"{"fields":{"summary":"Fix bug"}}"#).unwrap();
        assert_eq!(summary, "Fix bug");
    }

    #[test]
    fn test_absent_summary_is_empty() {
        for body in [r#"{"fields":{}}"#, r#"{"fields":{"summary":null}}"#, r#"{"fields":null}"#, r#"{"key":"PROY-123"}"#] {
            let summary = issue_summary_from_response("PROY-123", StatusCode::OK, body).unwrap();
            assert_eq!(summary, "", "{}", body);
        }
    }

    #[test]
    fn test_lookup_status_errors() {
        let err = issue_summary_from_response("PROY-123", StatusCode::NOT_FOUND, "").unwrap_err();
        assert!(matches!(err, WorklogError::IssueLookup(IssueLookupError::NotFound(ref key)) if key == "PROY-123"));
        assert_eq!(err.to_string(), "Issue 'PROY-123' not found or not visible");

        let err = issue_summary_from_response("PROY-123", StatusCode::UNAUTHORIZED, "").unwrap_err();
        assert!(matches!(err, WorklogError::IssueLookup(IssueLookupError::Unauthorized)));
        assert_eq!(err.to_string(), "Unauthorized: check JIRA_EMAIL and JIRA_API_TOKEN");

        let err = issue_summary_from_response("PROY-123", StatusCode::FORBIDDEN, "").unwrap_err();
        assert!(matches!(err, WorklogError::IssueLookup(IssueLookupError::Forbidden)));
        assert_eq!(err.to_string(), "Forbidden: missing permissions to browse the issue");
    }

    #[test]
    fn test_other_lookup_failures_keep_status_and_body() {
        let err = issue_summary_from_response("PROY-123", StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();
        match err {
            WorklogError::IssueLookup(IssueLookupError::Http { status, body, .. }) => {
                assert_eq!(status, 502);
                assert_eq!(body, "upstream down");
            }
            other => panic!("expected Http, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_summary_response() {
        let err = issue_summary_from_response("PROY-123", StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, WorklogError::IssueLookup(IssueLookupError::InvalidBody { .. })));
    }

    #[test]
    fn test_worklog_created() {
        assert!(worklog_result_from_response(StatusCode::CREATED, "{}").is_ok());
    }

    #[test]
    fn test_worklog_rejected() {
        let body = r#"{"errorMessages":["bad"]}"#;
        let err = worklog_result_from_response(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert!(matches!(err, WorklogError::Submission { status: 400, .. }));
        assert_eq!(err.to_string(), r#"Error logging work: 400 {"errorMessages":["bad"]}"#);

        // Any success other than 201 still counts as a failure.
        assert!(worklog_result_from_response(StatusCode::OK, "").is_err());
    }

    #[test]
    fn test_worklog_entry_body() {
        let window = TimeWindow {
            start: Madrid.with_ymd_and_hms(2026, 10, 18, 8, 30, 0).unwrap(),
            end: Madrid.with_ymd_and_hms(2026, 10, 18, 15, 30, 0).unwrap(),
            minutes: 420,
        };
        let entry = WorklogEntry::new(&window);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"timeSpent": "420m", "started": "2026-10-18T08:30:00.000+0200"}));
    }

    #[test]
    fn test_client_builds_for_verify_modes() {
        assert!(Jira::new(&config(VerifyMode::Enabled)).is_ok());
        assert!(Jira::new(&config(VerifyMode::Disabled)).is_ok());
    }

    #[test]
    fn test_missing_ca_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let result = Jira::new(&config(VerifyMode::CaBundle(dir.path().join("missing.pem"))));
        assert!(matches!(result, Err(ConfigError::CaBundle { .. })));
    }

    #[test]
    fn test_ca_bundle_without_certificates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not a certificate").unwrap();
        let result = Jira::new(&config(VerifyMode::CaBundle(file.path().to_path_buf())));
        assert!(matches!(result, Err(ConfigError::CaBundle { .. })));
    }
}
