//! DEXTools API module.
//!
//! Contains the HTTP client, its transport abstraction and the chain table.

pub mod chains;
pub mod client;

pub use chains::{AddressFormat, Chain, CHAINS};
pub use client::{DexToolsClient, HttpResponse, HttpTransport, ReqwestTransport, RequestEnvelope};
