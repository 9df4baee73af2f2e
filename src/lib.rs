//! DEXTools MCP Server Library
//!
//! A Model Context Protocol server exposing DEXTools DeFi market data.
//! Each tool validates its parameters and forwards a single GET request to
//! the DEXTools v2 API.
//!
//! # Features
//!
//! - **Rankings**: trending pools, top gainers and losers per chain
//! - **Pools and Tokens**: details, prices, liquidity, scores, audits, locks
//! - **Discovery**: new pools and tokens in a time window, DEX listings
//!
//! # Example
//!
//! ```rust,ignore
//! use dextools_mcp::{Config, DexToolsServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let server = DexToolsServer::new(config)?;
//!     // Run server...
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod dextools;
pub mod error;
pub mod mcp;
pub mod services;
pub mod types;

pub use config::{Config, Plan};
pub use error::{AppError, Result};
pub use mcp::DexToolsServer;
pub use services::ToolDispatcher;
pub use types::ResponseEnvelope;
