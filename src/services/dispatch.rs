//! Tool dispatch.
//!
//! Looks up a tool, validates its arguments, builds the upstream request and
//! relays the response. Every call is independent.

use serde_json::{Map, Value};

use crate::{
    catalog::{self, Endpoint, LocalTool, ParamLocation, ToolDefinition},
    dextools::{chains::CHAINS, DexToolsClient, RequestEnvelope},
    error::{AppError, Result},
    services::{
        relay::{relay_error, relay_success},
        validation::{validate_args, ValidatedArgs},
    },
    types::ResponseEnvelope,
};

/// A validated call, ready to execute.
#[derive(Debug, Clone)]
pub enum PreparedCall {
    Remote { tool: &'static ToolDefinition, request: RequestEnvelope },
    Local { tool: &'static ToolDefinition, handler: LocalTool },
}

impl PreparedCall {
    pub fn tool(&self) -> &'static ToolDefinition {
        match self {
            PreparedCall::Remote { tool, .. } | PreparedCall::Local { tool, .. } => *tool,
        }
    }
}

/// Routes tool calls to the DEXTools API.
#[derive(Clone)]
pub struct ToolDispatcher {
    client: DexToolsClient,
}

impl ToolDispatcher {
    /// Create a new dispatcher.
    pub fn new(client: DexToolsClient) -> Self {
        Self { client }
    }

    /// Dispatch a call and always produce an envelope.
    ///
    /// Failures of any kind come back as an error envelope; nothing here is
    /// fatal to the server.
    pub async fn dispatch(&self, name: &str, args: &Map<String, Value>) -> ResponseEnvelope {
        match self.try_dispatch(name, args).await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(tool = %name, error = %e, "Tool call failed");
                relay_error(&e)
            }
        }
    }

    /// Dispatch a call, returning errors to the caller.
    pub async fn try_dispatch(
        &self,
        name: &str,
        args: &Map<String, Value>,
    ) -> Result<ResponseEnvelope> {
        match self.prepare(name, args)? {
            PreparedCall::Local { handler, .. } => Ok(run_local(handler)),
            PreparedCall::Remote { tool, request } => {
                let (status, body) = self.client.execute(&request).await?;
                tracing::info!(tool = %tool.name, status = status, "Tool call succeeded");
                Ok(relay_success(status, body, tool.hook))
            }
        }
    }

    /// Look up and validate a call without touching the network.
    pub fn prepare(&self, name: &str, args: &Map<String, Value>) -> Result<PreparedCall> {
        let tool = catalog::find_tool(name).ok_or_else(|| AppError::UnknownTool(name.to_string()))?;
        let validated = validate_args(tool, args)?;

        match tool.endpoint {
            Endpoint::Local(handler) => Ok(PreparedCall::Local { tool, handler }),
            Endpoint::Remote(template) => {
                let (path, query) = render_endpoint(template, &validated);
                let request = self.client.build_request(&path, query);
                tracing::debug!(tool = %tool.name, request = ?request, "Prepared request");
                Ok(PreparedCall::Remote { tool, request })
            }
        }
    }
}

/// Fill path placeholders and collect query parameters.
fn render_endpoint(template: &str, args: &ValidatedArgs) -> (String, Vec<(String, String)>) {
    let mut path = template.to_string();
    let mut query = Vec::new();

    for (spec, value) in &args.values {
        match spec.location {
            ParamLocation::Path => {
                path = path.replace(&format!("{{{}}}", spec.name), value);
            }
            ParamLocation::Query(key) => query.push((key.to_string(), value.clone())),
        }
    }

    (path, query)
}

fn run_local(handler: LocalTool) -> ResponseEnvelope {
    match handler {
        LocalTool::SupportedBlockchains => {
            let chains = serde_json::to_value(CHAINS).unwrap_or(Value::Array(Vec::new()));
            ResponseEnvelope::success(200, chains)
        }
    }
}
