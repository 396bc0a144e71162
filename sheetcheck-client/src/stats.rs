//! The stats endpoint
//!
//! `action=getStats` is the one read-only action the deployed web app
//! exposes; it is cheap to serve and exercises the whole request path,
//! which makes it the natural smoke-test target.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::SheetClient;
use crate::error::Result;

/// Query string appended to the base URL for the stats action
const STATS_QUERY: &str = "?action=getStats";

/// Response envelope returned by the stats endpoint
///
/// `status` is the logical pass/fail indicator, `data` the opaque stats
/// payload. Every other field the server includes (error messages and the
/// like) is retained in `extra`, so diagnostics can reproduce the body
/// exactly as parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsEnvelope {
    /// Logical status indicator; `"success"` on the happy path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Opaque stats payload; printed, never validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Remaining body fields, kept for diagnostics
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatsEnvelope {
    /// Whether the envelope reports logical success
    ///
    /// A missing `status` field counts as failure.
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

impl fmt::Display for StatsEnvelope {
    /// Renders the full envelope back to compact JSON
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(body) => f.write_str(&body),
            Err(_) => f.write_str("<unrenderable response body>"),
        }
    }
}

impl SheetClient {
    /// Build the request URL for the stats action
    ///
    /// The query string is appended to the configured base by plain
    /// concatenation: no slash normalization, no query merging. The
    /// result is always `<base>?action=getStats`, byte for byte.
    pub fn stats_url(&self) -> String {
        format!("{}{}", self.base_url(), STATS_QUERY)
    }

    /// Fetch the stats envelope
    ///
    /// Issues the single GET. Transport failures, non-200 statuses and
    /// unparseable bodies surface as the matching
    /// [`ClientError`](crate::ClientError) variant; a logical failure
    /// (`status` other than `"success"`) is an `Ok` envelope the caller
    /// inspects.
    pub async fn get_stats(&self) -> Result<StatsEnvelope> {
        let url = self.stats_url();
        debug!(%url, "sending stats request");

        let response = self.client.get(&url).send().await?;
        debug!(status = %response.status(), "stats response received");

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn client_for(server: &MockServer) -> SheetClient {
        SheetClient::new(server.base_url()).unwrap()
    }

    #[test]
    fn stats_url_is_plain_concatenation() {
        let client = SheetClient::new("https://example.com/exec").unwrap();
        assert_eq!(
            client.stats_url(),
            "https://example.com/exec?action=getStats"
        );
    }

    #[test]
    fn stats_url_keeps_trailing_slash() {
        let client = SheetClient::new("https://example.com/exec/").unwrap();
        assert_eq!(
            client.stats_url(),
            "https://example.com/exec/?action=getStats"
        );
    }

    #[test]
    fn stats_url_does_not_merge_an_existing_query() {
        // Degenerate but documented: a base already carrying a query
        // string gets a second `?` appended verbatim.
        let client = SheetClient::new("https://example.com/exec?key=abc").unwrap();
        assert_eq!(
            client.stats_url(),
            "https://example.com/exec?key=abc?action=getStats"
        );
    }

    #[test]
    fn envelope_without_status_is_not_success() {
        let envelope: StatsEnvelope =
            serde_json::from_value(json!({ "data": { "rows": 1 } })).unwrap();
        assert!(!envelope.is_success());
    }

    #[tokio::test]
    async fn get_stats_parses_a_success_envelope() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).query_param("action", "getStats");
            then.status(200)
                .json_body(json!({ "status": "success", "data": { "rows": 5 } }));
        });

        let client = client_for(&server);
        let envelope = client.get_stats().await.unwrap();

        mock.assert();
        assert!(envelope.is_success());
        assert_eq!(envelope.data, Some(json!({ "rows": 5 })));
    }

    #[tokio::test]
    async fn get_stats_reports_http_status_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(500).body("Internal Server Error");
        });

        let client = client_for(&server);
        let err = client.get_stats().await.unwrap_err();

        assert!(err.is_server_error());
        assert!(err.to_string().contains("500"));
        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "Internal Server Error");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_stats_rejects_a_non_json_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(200).body("<html>maintenance page</html>");
        });

        let client = client_for(&server);
        let err = client.get_stats().await.unwrap_err();

        assert!(
            matches!(err, ClientError::Parse(_)),
            "expected parse error, got {:?}",
            err
        );
    }

    #[tokio::test]
    async fn get_stats_rejects_a_non_object_body() {
        // A bare array is valid JSON but not an envelope.
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!([1, 2, 3]));
        });

        let client = client_for(&server);
        let err = client.get_stats().await.unwrap_err();

        assert!(
            matches!(err, ClientError::Parse(_)),
            "expected parse error, got {:?}",
            err
        );
    }

    #[tokio::test]
    async fn logic_error_envelope_keeps_the_full_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(200)
                .json_body(json!({ "status": "error", "message": "bad request" }));
        });

        let client = client_for(&server);
        let envelope = client.get_stats().await.unwrap();

        assert!(!envelope.is_success());
        let body = envelope.to_string();
        assert!(body.contains(r#""status":"error""#));
        assert!(body.contains(r#""message":"bad request""#));
    }

    #[tokio::test]
    async fn get_stats_times_out_as_a_transport_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({ "status": "success" }));
        });

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let client = SheetClient::with_client(server.base_url(), http_client);

        let err = client.get_stats().await.unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {:?}", err);
    }
}
