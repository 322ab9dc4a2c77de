//! Mock chain probe endpoints for testing the HTTP probe
//!
//! This simulates a chain's /ping and /status routes without a real chain.

use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock HTTP server exposing a chain's probe endpoints
pub struct MockChainServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockChainServer {
    /// Create a new mock chain server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Mock a chain that answers ping with 200
    pub async fn mock_ping_ok(&self) {
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pong": true})))
            .mount(&self.server)
            .await;
    }

    /// Mock a chain that is up but answers ping with an error status
    pub async fn mock_ping_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mock a status document
    pub async fn mock_status(&self, response_time_ms: f64, error_rate: f64) {
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "operational",
                "response_time_ms": response_time_ms,
                "error_rate": error_rate,
                "error": null
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a status document that only carries the status string
    pub async fn mock_status_minimal(&self) {
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "starting"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a status route that returns garbage
    pub async fn mock_status_garbage(&self) {
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&self.server)
            .await;
    }
}
