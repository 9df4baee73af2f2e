//! MCP server implementation.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    config::Config,
    dextools::{DexToolsClient, HttpTransport},
    error::AppError,
    services::ToolDispatcher,
    types::ResponseEnvelope,
};

/// DEXTools MCP Server.
///
/// Exposes DEXTools market data (rankings, pools, tokens, DEXes) as MCP tools.
#[derive(Clone)]
pub struct DexToolsServer {
    dispatcher: ToolDispatcher,
    tool_router: ToolRouter<Self>,
}

impl DexToolsServer {
    /// Create a new DEXTools MCP Server.
    ///
    /// No network calls are made here; each tool call issues its own request.
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::check_config(&config)?;
        Ok(Self::with_client(DexToolsClient::new(&config)))
    }

    /// Create a server that sends requests through a custom transport.
    pub fn with_transport(
        config: Config,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, AppError> {
        Self::check_config(&config)?;
        Ok(Self::with_client(DexToolsClient::with_transport(&config, transport)))
    }

    fn with_client(client: DexToolsClient) -> Self {
        tracing::info!("DEXTools MCP Server initialized");
        Self { dispatcher: ToolDispatcher::new(client), tool_router: Self::tool_router() }
    }

    fn check_config(config: &Config) -> Result<(), AppError> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::Config("DEXTools API key is empty".into()));
        }
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(AppError::Config(format!("Invalid base URL: {}", config.base_url)));
        }
        Ok(())
    }

    /// The dispatcher behind the tools.
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    /// Run a catalog tool with serialized input and convert the envelope into
    /// a tool result.
    async fn run<T: Serialize>(&self, name: &str, input: &T) -> Result<CallToolResult, McpError> {
        let args = match serde_json::to_value(input).map_err(AppError::from)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        tracing::info!(tool = %name, "Tool called");

        let envelope = self.dispatcher.dispatch(name, &args).await;
        into_call_result(envelope)
    }
}

/// Error envelopes become results flagged `is_error`, not protocol errors.
fn into_call_result(envelope: ResponseEnvelope) -> Result<CallToolResult, McpError> {
    let is_error = envelope.is_error();
    let text = serde_json::to_string_pretty(&envelope).map_err(AppError::from)?;
    let content = vec![Content::text(text)];

    Ok(if is_error { CallToolResult::error(content) } else { CallToolResult::success(content) })
}

/// Integer argument as sent by the client.
///
/// Numbers and numeric strings both deserialize; range checks happen during
/// validation so that bad values come back as error results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum IntegerArg {
    Number(i64),
    Text(String),
}

impl From<i64> for IntegerArg {
    fn from(value: i64) -> Self {
        IntegerArg::Number(value)
    }
}

/// Input for tools that only need a chain.
///
/// Required fields are optional at the type level; missing values are
/// reported by validation as error results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ChainInput {
    /// Blockchain identifier (e.g., "ether", "bsc", "solana", "polygon"). Required.
    pub chain_id: Option<String>,
}

/// Input for pool tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PoolInput {
    /// Blockchain identifier (e.g., "ether", "bsc", "solana"). Required.
    pub chain_id: Option<String>,
    /// Contract address of the liquidity pool. Required.
    pub pool_address: Option<String>,
}

/// Input for token tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TokenInput {
    /// Blockchain identifier (e.g., "ether", "bsc", "solana"). Required.
    pub chain_id: Option<String>,
    /// Contract address of the token. Required.
    pub token_address: Option<String>,
}

/// Input for the get_all_pools_for_token tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TokenPoolsInput {
    /// Blockchain identifier. Required.
    pub chain_id: Option<String>,
    /// Contract address of the token. Required.
    pub token_address: Option<String>,
    /// Start of the range, ISO 8601 (e.g., "2024-01-01T00:00:00"). Defaults to the
    /// start of the current year.
    pub from_date: Option<String>,
    /// End of the range, ISO 8601. Defaults to the end of the current year.
    pub to_date: Option<String>,
    /// Sort order: "asc" or "desc". Default: "asc".
    pub order: Option<String>,
    /// Sort field. Default: "creationTime".
    pub sort: Option<String>,
    /// Page number. Default: 1.
    pub page: Option<IntegerArg>,
    /// Results per page. Default: 100.
    pub page_size: Option<IntegerArg>,
}

/// Input for the time-window discovery tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RangeInput {
    /// Blockchain identifier. Required.
    pub chain_id: Option<String>,
    /// Start of the range, ISO 8601 (e.g., "2024-01-01T00:00:00"). Defaults to the
    /// start of the current year.
    pub from_date: Option<String>,
    /// End of the range, ISO 8601. Defaults to the end of the current year.
    pub to_date: Option<String>,
    /// Sort order: "asc" or "desc". Default: "asc".
    pub order: Option<String>,
    /// Sort field (e.g., "creationTime", "socialsInfoUpdated").
    pub sort: Option<String>,
    /// Page number. Default: 1.
    pub page: Option<IntegerArg>,
    /// Results per page. Default: 100.
    pub page_size: Option<IntegerArg>,
}

/// Input for the get_dex_list_on_chain tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DexListInput {
    /// Blockchain identifier. Required.
    pub chain_id: Option<String>,
    /// Sort order: "asc" or "desc". Default: "asc".
    pub order: Option<String>,
    /// Sort field. Default: "name".
    pub sort: Option<String>,
    /// Page number. Default: 1.
    pub page: Option<IntegerArg>,
    /// Results per page. Default: 100.
    pub page_size: Option<IntegerArg>,
}

/// Input for the get_dex_factory_details tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FactoryInput {
    /// Blockchain identifier. Required.
    pub chain_id: Option<String>,
    /// Contract address of the DEX factory. Required.
    pub factory_address: Option<String>,
}

#[tool_router]
impl DexToolsServer {
    #[tool(
        description = "Retrieve the 'Hot Pairs' currently trending on a specific blockchain."
    )]
    pub async fn get_trending_pools(
        &self,
        Parameters(input): Parameters<ChainInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_trending_pools", &input).await
    }

    #[tool(
        description = "Fetch the tokens with the highest positive price change on a blockchain."
    )]
    pub async fn get_top_gainers(
        &self,
        Parameters(input): Parameters<ChainInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_top_gainers", &input).await
    }

    #[tool(
        description = "Fetch the tokens with the largest negative price change on a blockchain."
    )]
    pub async fn get_top_losers(
        &self,
        Parameters(input): Parameters<ChainInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_top_losers", &input).await
    }

    #[tool(description = "Retrieve comprehensive details for a specific liquidity pool.")]
    pub async fn get_pool_details(
        &self,
        Parameters(input): Parameters<PoolInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_pool_details", &input).await
    }

    #[tool(description = "Get real-time price information for a specific pool (token pair).")]
    pub async fn get_pool_price(
        &self,
        Parameters(input): Parameters<PoolInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_pool_price", &input).await
    }

    #[tool(description = "Fetch current liquidity data for a pool, including Total Value Locked.")]
    pub async fn get_pool_liquidity(
        &self,
        Parameters(input): Parameters<PoolInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_pool_liquidity", &input).await
    }

    #[tool(description = "Get the DEXTools score for a specific pool.")]
    pub async fn get_pool_score(
        &self,
        Parameters(input): Parameters<PoolInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_pool_score", &input).await
    }

    /// Most pools have no locks; an empty answer is reported as `hasLocks: false`.
    #[tool(
        description = "Retrieve locked liquidity for a trading pair. Locked liquidity cannot be \
                       pulled by developers, which helps spot potential rug pulls. Most pools \
                       have no locks."
    )]
    pub async fn get_pool_liquidity_locks(
        &self,
        Parameters(input): Parameters<PoolInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_pool_liquidity_locks", &input).await
    }

    #[tool(
        description = "Security audit of a token contract: honeypot checks, source code \
                       verification, buy/sell taxes."
    )]
    pub async fn get_token_security_audit(
        &self,
        Parameters(input): Parameters<TokenInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_token_security_audit", &input).await
    }

    #[tool(description = "Retrieve detailed information about a specific token.")]
    pub async fn get_token_details(
        &self,
        Parameters(input): Parameters<TokenInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_token_details", &input).await
    }

    #[tool(description = "Get the DEXTools score for a specific token.")]
    pub async fn get_token_score(
        &self,
        Parameters(input): Parameters<TokenInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_token_score", &input).await
    }

    #[tool(description = "Get current price information for a specific token.")]
    pub async fn get_token_price(
        &self,
        Parameters(input): Parameters<TokenInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_token_price", &input).await
    }

    #[tool(
        description = "Fetch locked token allocations (team, future rewards) for an asset, to \
                       assess the risk of a large dump. Most tokens have no locks."
    )]
    pub async fn get_token_locks(
        &self,
        Parameters(input): Parameters<TokenInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_token_locks", &input).await
    }

    #[tool(
        description = "Discover all liquidity pools (trading pairs) of a token. The date range \
                       defaults to the current year."
    )]
    pub async fn get_all_pools_for_token(
        &self,
        Parameters(input): Parameters<TokenPoolsInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_all_pools_for_token", &input).await
    }

    #[tool(description = "Get blockchain information for a specific chain.")]
    pub async fn get_blockchain_info(
        &self,
        Parameters(input): Parameters<ChainInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_blockchain_info", &input).await
    }

    /// Answered from the built-in chain table.
    #[tool(
        description = "List every supported blockchain identifier with its aliases and address \
                       format."
    )]
    pub async fn get_supported_blockchains(&self) -> Result<CallToolResult, McpError> {
        self.run("get_supported_blockchains", &Map::new()).await
    }

    #[tool(
        description = "Discover new liquidity pools created within a time window on a chain, \
                       with sorting and pagination."
    )]
    pub async fn find_new_pools_in_range(
        &self,
        Parameters(input): Parameters<RangeInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("find_new_pools_in_range", &input).await
    }

    #[tool(
        description = "Discover new tokens listed within a time window on a chain, with sorting \
                       and pagination."
    )]
    pub async fn find_new_tokens_in_range(
        &self,
        Parameters(input): Parameters<RangeInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("find_new_tokens_in_range", &input).await
    }

    #[tool(description = "List the decentralized exchanges available on a chain.")]
    pub async fn get_dex_list_on_chain(
        &self,
        Parameters(input): Parameters<DexListInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_dex_list_on_chain", &input).await
    }

    #[tool(
        description = "Low-level information about a DEX factory contract, the contract that \
                       creates new trading pairs on that exchange."
    )]
    pub async fn get_dex_factory_details(
        &self,
        Parameters(input): Parameters<FactoryInput>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_dex_factory_details", &input).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for DexToolsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "dextools-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "DEXTools MCP Server. Provides DeFi market data: trending pools, gainers and \
                 losers, pool and token details, prices, scores, security audits, liquidity \
                 and token locks, and DEX discovery. Use get_supported_blockchains for valid \
                 chain_id values."
                    .to_string(),
            ),
        }
    }
}
