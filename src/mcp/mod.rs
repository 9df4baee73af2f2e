//! MCP server module.
//!
//! Contains the MCP server implementation with tool handlers.

pub mod server;

pub use server::DexToolsServer;
pub use server::{
    ChainInput, DexListInput, FactoryInput, IntegerArg, PoolInput, RangeInput, TokenInput,
    TokenPoolsInput,
};
