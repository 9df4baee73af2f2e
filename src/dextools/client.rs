//! DEXTools HTTP client.
//!
//! Builds GET requests against the plan's base URL, injects the API key and
//! hands them to an [`HttpTransport`]. The transport is a trait so tests can
//! swap in a mock.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;

use crate::{
    config::Config,
    error::{AppError, Result},
};

/// Header carrying the DEXTools API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// A fully realized upstream request.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestEnvelope {
    /// HTTP method (always GET for DEXTools).
    pub method: reqwest::Method,
    /// Absolute URL, path parameters already substituted.
    pub url: String,
    /// Query parameters in declaration order.
    pub query: Vec<(String, String)>,
    /// Request headers, including the API key.
    pub headers: Vec<(String, String)>,
}

impl RequestEnvelope {
    /// Value of a header (case-insensitive name match).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }
}

impl std::fmt::Debug for RequestEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case(API_KEY_HEADER) {
                    (key.as_str(), "<redacted>")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("RequestEnvelope")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("query", &self.query)
            .field("headers", &headers)
            .finish()
    }
}

/// Raw upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Sends a realized request and returns the raw response.
///
/// Implementations only report transport-level failures as errors; any HTTP
/// status, successful or not, is returned as an [`HttpResponse`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &RequestEnvelope) -> Result<HttpResponse>;
}

/// Transport backed by `reqwest`.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &RequestEnvelope) -> Result<HttpResponse> {
        let mut builder =
            self.client.request(request.method.clone(), &request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

// ============================================================================
// Client
// ============================================================================

/// DEXTools API client.
#[derive(Clone)]
pub struct DexToolsClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    api_key: String,
}

impl DexToolsClient {
    /// Create a client using the reqwest transport.
    pub fn new(config: &Config) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client with a custom transport.
    pub fn with_transport(config: &Config, transport: Arc<dyn HttpTransport>) -> Self {
        tracing::info!(
            base_url = %config.base_url,
            plan = %config.plan,
            "DEXTools client created"
        );

        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request for `path` (which must start with `/`).
    pub fn build_request(&self, path: &str, query: Vec<(String, String)>) -> RequestEnvelope {
        RequestEnvelope {
            method: reqwest::Method::GET,
            url: format!("{}{}", self.base_url, path),
            query,
            headers: vec![
                (API_KEY_HEADER.to_string(), self.api_key.clone()),
                (ACCEPT.as_str().to_string(), "application/json".to_string()),
                (
                    USER_AGENT.as_str().to_string(),
                    concat!("dextools-mcp/", env!("CARGO_PKG_VERSION")).to_string(),
                ),
            ],
        }
    }

    /// Send a request and decode the JSON body.
    ///
    /// Non-2xx responses become [`AppError::Upstream`] with the status and
    /// body text. Returns the status alongside the decoded body.
    pub async fn execute(&self, request: &RequestEnvelope) -> Result<(u16, Value)> {
        tracing::debug!(url = %request.url, query = ?request.query, "Sending DEXTools request");

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            tracing::warn!(status = response.status, url = %request.url, "DEXTools request failed");
            return Err(AppError::Upstream { status: response.status, body: response.body });
        }

        if response.body.trim().is_empty() {
            return Ok((response.status, Value::Null));
        }

        let body = serde_json::from_str(&response.body).map_err(|e| {
            AppError::Parse(format!("Failed to parse DEXTools response: {}", e))
        })?;

        Ok((response.status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Plan;
    use std::sync::Mutex;

    struct CannedTransport {
        response: HttpResponse,
        seen: Mutex<Vec<RequestEnvelope>>,
    }

    #[async_trait]
    impl HttpTransport for CannedTransport {
        async fn send(&self, request: &RequestEnvelope) -> Result<HttpResponse> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.response.clone())
        }
    }

    fn client_with(status: u16, body: &str) -> (DexToolsClient, Arc<CannedTransport>) {
        let transport = Arc::new(CannedTransport {
            response: HttpResponse { status, body: body.to_string() },
            seen: Mutex::new(Vec::new()),
        });
        let config = Config::new("test-key", Plan::Trial);
        (DexToolsClient::with_transport(&config, transport.clone()), transport)
    }

    #[test]
    fn test_build_request_injects_api_key() {
        let (client, _) = client_with(200, "{}");
        let request = client.build_request("/blockchain/ether", Vec::new());

        assert_eq!(request.method, reqwest::Method::GET);
        assert_eq!(request.url, "https://public-api.dextools.io/trial/v2/blockchain/ether");
        assert_eq!(request.header("x-api-key"), Some("test-key"));
        assert_eq!(request.header("accept"), Some("application/json"));
    }

    #[test]
    fn test_request_debug_redacts_api_key() {
        let (client, _) = client_with(200, "{}");
        let request = client.build_request("/pool/ether", Vec::new());
        let debug = format!("{:?}", request);
        assert!(!debug.contains("test-key"));
    }

    #[tokio::test]
    async fn test_execute_success_decodes_json() {
        let (client, transport) = client_with(200, r#"{"statusCode":200,"data":{"id":"ether"}}"#);
        let request = client.build_request("/blockchain/ether", Vec::new());

        let (status, body) = client.execute(&request).await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body["data"]["id"], "ether");
        assert_eq!(transport.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_non_success_is_upstream_error() {
        let (client, _) = client_with(403, "Forbidden");
        let request = client.build_request("/blockchain/ether", Vec::new());

        let err = client.execute(&request).await.unwrap_err();
        match err {
            AppError::Upstream { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "Forbidden");
            }
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_invalid_json_is_parse_error() {
        let (client, _) = client_with(200, "<html>oops</html>");
        let request = client.build_request("/blockchain/ether", Vec::new());

        let err = client.execute(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[tokio::test]
    async fn test_execute_empty_body_is_null() {
        let (client, _) = client_with(204, "");
        let request = client.build_request("/blockchain/ether", Vec::new());

        let (status, body) = client.execute(&request).await.unwrap();
        assert_eq!(status, 204);
        assert!(body.is_null());
    }
}
