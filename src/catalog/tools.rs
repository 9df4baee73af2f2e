//! The tool table.

use super::{
    AddressRole, Endpoint, LocalTool, ParamDefault, ParamKind, ParamLocation, ParamSpec,
    ResponseHook, ToolDefinition,
};

/// Page requested when the caller does not pass one.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the caller does not pass one.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

// ============================================================================
// Parameter Specs
// ============================================================================

const CHAIN_ID: ParamSpec = ParamSpec {
    name: "chain_id",
    kind: ParamKind::ChainId,
    required: true,
    location: ParamLocation::Path,
    default: ParamDefault::None,
};

const fn address(name: &'static str, role: AddressRole) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Address(role),
        required: true,
        location: ParamLocation::Path,
        default: ParamDefault::None,
    }
}

const POOL_ADDRESS: ParamSpec = address("pool_address", AddressRole::Pool);
const TOKEN_ADDRESS: ParamSpec = address("token_address", AddressRole::Token);
const FACTORY_ADDRESS: ParamSpec = address("factory_address", AddressRole::Factory);

const FROM_DATE: ParamSpec = ParamSpec {
    name: "from_date",
    kind: ParamKind::Timestamp,
    required: false,
    location: ParamLocation::Query("from"),
    default: ParamDefault::YearStart,
};

const TO_DATE: ParamSpec = ParamSpec {
    name: "to_date",
    kind: ParamKind::Timestamp,
    required: false,
    location: ParamLocation::Query("to"),
    default: ParamDefault::YearEnd,
};

const ORDER: ParamSpec = ParamSpec {
    name: "order",
    kind: ParamKind::SortOrder,
    required: false,
    location: ParamLocation::Query("order"),
    default: ParamDefault::Text("asc"),
};

const fn sort(default: &'static str) -> ParamSpec {
    ParamSpec {
        name: "sort",
        kind: ParamKind::Text,
        required: false,
        location: ParamLocation::Query("sort"),
        default: ParamDefault::Text(default),
    }
}

const SORT_BY_CREATION: ParamSpec = sort("creationTime");
const SORT_BY_SOCIALS: ParamSpec = sort("socialsInfoUpdated");
const SORT_BY_NAME: ParamSpec = sort("name");

const PAGE: ParamSpec = ParamSpec {
    name: "page",
    kind: ParamKind::Integer { min: 0, max: u32::MAX as u64 },
    required: false,
    location: ParamLocation::Query("page"),
    default: ParamDefault::Integer(DEFAULT_PAGE),
};

const PAGE_SIZE: ParamSpec = ParamSpec {
    name: "page_size",
    kind: ParamKind::Integer { min: 1, max: u32::MAX as u64 },
    required: false,
    location: ParamLocation::Query("pageSize"),
    default: ParamDefault::Integer(DEFAULT_PAGE_SIZE),
};

// ============================================================================
// Tool Definitions
// ============================================================================

const fn remote(
    name: &'static str,
    params: &'static [ParamSpec],
    path: &'static str,
) -> ToolDefinition {
    ToolDefinition { name, params, endpoint: Endpoint::Remote(path), hook: ResponseHook::None }
}

/// Every tool the server exposes.
pub const TOOLS: &[ToolDefinition] = &[
    // Rankings
    remote("get_trending_pools", &[CHAIN_ID], "/ranking/{chain_id}/hotpools"),
    remote("get_top_gainers", &[CHAIN_ID], "/ranking/{chain_id}/gainers"),
    remote("get_top_losers", &[CHAIN_ID], "/ranking/{chain_id}/losers"),
    // Pools
    remote("get_pool_details", &[CHAIN_ID, POOL_ADDRESS], "/pool/{chain_id}/{pool_address}"),
    remote("get_pool_price", &[CHAIN_ID, POOL_ADDRESS], "/pool/{chain_id}/{pool_address}/price"),
    remote(
        "get_pool_liquidity",
        &[CHAIN_ID, POOL_ADDRESS],
        "/pool/{chain_id}/{pool_address}/liquidity",
    ),
    remote("get_pool_score", &[CHAIN_ID, POOL_ADDRESS], "/pool/{chain_id}/{pool_address}/score"),
    ToolDefinition {
        name: "get_pool_liquidity_locks",
        params: &[CHAIN_ID, POOL_ADDRESS],
        endpoint: Endpoint::Remote("/pool/{chain_id}/{pool_address}/locks"),
        hook: ResponseHook::EmptyLocks(AddressRole::Pool),
    },
    // Tokens
    remote(
        "get_token_security_audit",
        &[CHAIN_ID, TOKEN_ADDRESS],
        "/token/{chain_id}/{token_address}/audit",
    ),
    remote(
        "get_token_details",
        &[CHAIN_ID, TOKEN_ADDRESS],
        "/token/{chain_id}/{token_address}/info",
    ),
    remote(
        "get_token_score",
        &[CHAIN_ID, TOKEN_ADDRESS],
        "/token/{chain_id}/{token_address}/score",
    ),
    remote(
        "get_token_price",
        &[CHAIN_ID, TOKEN_ADDRESS],
        "/token/{chain_id}/{token_address}/price",
    ),
    ToolDefinition {
        name: "get_token_locks",
        params: &[CHAIN_ID, TOKEN_ADDRESS],
        endpoint: Endpoint::Remote("/token/{chain_id}/{token_address}/locks"),
        hook: ResponseHook::EmptyLocks(AddressRole::Token),
    },
    remote(
        "get_all_pools_for_token",
        &[CHAIN_ID, TOKEN_ADDRESS, FROM_DATE, TO_DATE, ORDER, SORT_BY_CREATION, PAGE, PAGE_SIZE],
        "/token/{chain_id}/{token_address}/pools",
    ),
    // Blockchains
    remote("get_blockchain_info", &[CHAIN_ID], "/blockchain/{chain_id}"),
    ToolDefinition {
        name: "get_supported_blockchains",
        params: &[],
        endpoint: Endpoint::Local(LocalTool::SupportedBlockchains),
        hook: ResponseHook::None,
    },
    // Discovery
    remote(
        "find_new_pools_in_range",
        &[CHAIN_ID, FROM_DATE, TO_DATE, ORDER, SORT_BY_CREATION, PAGE, PAGE_SIZE],
        "/pool/{chain_id}",
    ),
    remote(
        "find_new_tokens_in_range",
        &[CHAIN_ID, FROM_DATE, TO_DATE, ORDER, SORT_BY_SOCIALS, PAGE, PAGE_SIZE],
        "/token/{chain_id}",
    ),
    remote(
        "get_dex_list_on_chain",
        &[CHAIN_ID, ORDER, SORT_BY_NAME, PAGE, PAGE_SIZE],
        "/dex/{chain_id}",
    ),
    remote(
        "get_dex_factory_details",
        &[CHAIN_ID, FACTORY_ADDRESS],
        "/dex/{chain_id}/{factory_address}",
    ),
];
