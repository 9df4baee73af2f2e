//! Tool catalog module.
//!
//! Describes every tool the server exposes: its parameters, where each
//! parameter goes in the upstream request, and which endpoint it targets.

pub mod tools;

pub use tools::TOOLS;

/// Semantic type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Chain id from the supported set; normalized before use.
    ChainId,
    /// Contract address; the role names it in error messages.
    Address(AddressRole),
    /// ISO 8601 timestamp.
    Timestamp,
    /// Non-negative integer within `min..=max`.
    Integer { min: u64, max: u64 },
    /// `asc` or `desc`.
    SortOrder,
    /// Free-form string.
    Text,
}

/// What an address parameter refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRole {
    Pool,
    Token,
    Factory,
}

impl AddressRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressRole::Pool => "pool",
            AddressRole::Token => "token",
            AddressRole::Factory => "factory",
        }
    }
}

/// Where a validated parameter lands in the upstream request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into the `{name}` placeholder of the endpoint path.
    Path,
    /// Sent as a query parameter under the given upstream name.
    Query(&'static str),
}

/// Value used when an optional parameter is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDefault {
    None,
    Text(&'static str),
    Integer(u64),
    /// First second of the current UTC year.
    YearStart,
    /// Last second of the current UTC year.
    YearEnd,
}

/// A declared tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub location: ParamLocation,
    pub default: ParamDefault,
}

/// Request target of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Upstream GET; `{param}` placeholders are filled from path parameters.
    Remote(&'static str),
    /// Answered locally without network access.
    Local(LocalTool),
}

/// Tools that never leave the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalTool {
    SupportedBlockchains,
}

/// Post-processing applied to a successful upstream response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseHook {
    None,
    /// Explain empty lock data for the given address role.
    EmptyLocks(AddressRole),
}

/// A tool exposed to MCP clients.
///
/// Descriptions and input schemas live on the MCP server methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub params: &'static [ParamSpec],
    pub endpoint: Endpoint,
    pub hook: ResponseHook,
}

impl ToolDefinition {
    /// Look up a declared parameter by name.
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Names of the required parameters, in declaration order.
    pub fn required_params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter(|param| param.required).map(|param| param.name)
    }
}

/// Find a tool by name.
pub fn find_tool(name: &str) -> Option<&'static ToolDefinition> {
    TOOLS.iter().find(|tool| tool.name == name)
}

/// Names of all registered tools, in catalog order.
pub fn tool_names() -> Vec<&'static str> {
    TOOLS.iter().map(|tool| tool.name).collect()
}
