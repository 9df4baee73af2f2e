//! Common utilities for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dextools_mcp::{
    dextools::{DexToolsClient, HttpResponse, HttpTransport, RequestEnvelope},
    error::{AppError, Result},
    Config, DexToolsServer, Plan, ToolDispatcher,
};
use serde_json::{Map, Value};

pub const BASE_URL: &str = "http://dextools.test/v2";
pub const API_KEY: &str = "test-api-key";

pub const EVM_POOL: &str = "0xa29fe6ef9592b5d408cca961d0fb9b1faf497d6d";
pub const EVM_TOKEN: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const SOLANA_TOKEN: &str = "So11111111111111111111111111111111111111112";

/// Mock transport that records requests and answers from canned responses
/// keyed by URL path (relative to [`BASE_URL`]).
#[derive(Default)]
pub struct MockTransport {
    calls: Mutex<Vec<RequestEnvelope>>,
    responses: Mutex<HashMap<String, HttpResponse>>,
    fail_with: Mutex<Option<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set a response for a given path.
    pub fn with_response(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), HttpResponse { status, body: body.to_string() });
        self
    }

    /// Make every request fail at the transport level.
    pub fn failing(self, message: &str) -> Self {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<RequestEnvelope> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: &RequestEnvelope) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push(request.clone());

        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(AppError::Network(message));
        }

        let path = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url);
        let response = self.responses.lock().unwrap().get(path).cloned();

        Ok(response.unwrap_or_else(|| HttpResponse {
            status: 200,
            body: r#"{"statusCode":200,"data":{"mock":true}}"#.to_string(),
        }))
    }
}

pub fn test_config() -> Config {
    Config::new(API_KEY, Plan::Trial).with_base_url(BASE_URL)
}

/// Dispatcher backed by the given mock.
pub fn dispatcher_with(transport: Arc<MockTransport>) -> ToolDispatcher {
    ToolDispatcher::new(DexToolsClient::with_transport(&test_config(), transport))
}

/// Server backed by the given mock.
pub fn server_with(transport: Arc<MockTransport>) -> DexToolsServer {
    DexToolsServer::with_transport(test_config(), transport).expect("valid test config")
}

/// Build an argument map from a JSON object literal.
pub fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

/// Text of the first content block of a tool result, parsed as JSON.
pub fn result_json(result: &rmcp::model::CallToolResult) -> Value {
    let text = result
        .content
        .first()
        .and_then(|content| content.as_text())
        .map(|text| text.text.clone())
        .expect("tool result has text content");
    serde_json::from_str(&text).expect("tool result is JSON")
}
