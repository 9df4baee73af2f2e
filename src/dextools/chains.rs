//! Supported blockchain identifiers.
//!
//! DEXTools addresses chains by short string ids. The table below lists every
//! canonical id the server accepts together with the common aliases users
//! tend to type instead.

use serde::Serialize;

/// Address encoding used by a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    /// `0x` followed by 40 hex characters.
    Evm,
    /// Base58, 32 to 44 characters (Solana, Tron).
    Base58,
}

impl AddressFormat {
    /// Check an address string against this format.
    pub fn matches(&self, address: &str) -> bool {
        match self {
            AddressFormat::Evm => is_evm_address(address),
            AddressFormat::Base58 => is_base58_address(address),
        }
    }
}

/// A supported chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// Canonical DEXTools chain id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Alternative ids that normalize to this chain.
    pub aliases: &'static [&'static str],
    /// Address encoding.
    pub address_format: AddressFormat,
}

// ============================================================================
// Chain Table
// ============================================================================

const fn evm(
    id: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
) -> Chain {
    Chain { id, name, aliases, address_format: AddressFormat::Evm }
}

const fn base58(
    id: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
) -> Chain {
    Chain { id, name, aliases, address_format: AddressFormat::Base58 }
}

/// All supported chains, in the order they are reported to clients.
pub const CHAINS: &[Chain] = &[
    evm("ether", "Ethereum", &["ethereum", "eth"]),
    evm("bsc", "BNB Smart Chain", &["binance-smart-chain", "binance"]),
    evm("polygon", "Polygon", &["matic"]),
    evm("arbitrum", "Arbitrum One", &["arbitrum-one"]),
    evm("optimism", "Optimism", &["op"]),
    evm("avalanche", "Avalanche C-Chain", &["avax"]),
    base58("solana", "Solana", &["sol"]),
    evm("base", "Base", &[]),
    evm("fantom", "Fantom", &["ftm"]),
    evm("cronos", "Cronos", &["cro"]),
    evm("moonbeam", "Moonbeam", &["glmr"]),
    evm("moonriver", "Moonriver", &["movr"]),
    evm("harmony", "Harmony", &["one"]),
    evm("celo", "Celo", &[]),
    evm("gnosis", "Gnosis", &["xdai"]),
    evm("linea", "Linea", &[]),
    evm("zksync", "zkSync Era", &[]),
    evm("blast", "Blast", &[]),
    evm("scroll", "Scroll", &[]),
    evm("mantle", "Mantle", &[]),
    evm("pulse", "PulseChain", &[]),
    base58("tron", "Tron", &[]),
    evm("kava", "Kava EVM", &[]),
    evm("metis", "Metis", &[]),
];

/// Look up a chain by canonical id or alias (case-insensitive).
pub fn find_chain(chain_id: &str) -> Option<&'static Chain> {
    let wanted = chain_id.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    CHAINS.iter().find(|chain| chain.id == wanted || chain.aliases.contains(&wanted.as_str()))
}

/// Normalize a chain id to its canonical DEXTools form.
pub fn normalize_chain_id(chain_id: &str) -> Option<&'static str> {
    find_chain(chain_id).map(|chain| chain.id)
}

/// Whether the chain id (or alias) is supported.
pub fn is_supported_chain(chain_id: &str) -> bool {
    find_chain(chain_id).is_some()
}

/// Every accepted identifier: canonical ids followed by their aliases.
pub fn accepted_chain_ids() -> Vec<&'static str> {
    CHAINS
        .iter()
        .flat_map(|chain| std::iter::once(chain.id).chain(chain.aliases.iter().copied()))
        .collect()
}

// ============================================================================
// Address Heuristics
// ============================================================================

/// `0x` + 40 hex digits.
pub fn is_evm_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")) else {
        return false;
    };
    hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Base58 string of 32 to 44 characters.
pub fn is_base58_address(address: &str) -> bool {
    (32..=44).contains(&address.len()) && bs58::decode(address).into_vec().is_ok()
}

/// Validate an address, using the chain's format when known and accepting
/// either format otherwise.
pub fn is_valid_address(address: &str, chain: Option<&Chain>) -> bool {
    match chain {
        Some(chain) => chain.address_format.matches(address),
        None => is_evm_address(address) || is_base58_address(address),
    }
}
