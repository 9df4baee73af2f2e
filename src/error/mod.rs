//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No tool with this name is registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required parameter was not supplied.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Chain identifier not in the supported set.
    #[error("Unsupported chain_id: {0}")]
    UnsupportedChain(String),

    /// Address does not match the chain's address format.
    #[error("Invalid {role} address format: {address}")]
    InvalidAddress { role: &'static str, address: String },

    /// Timestamp is not ISO 8601.
    #[error("Invalid date for {param}: '{value}' (expected ISO 8601, e.g. 2024-01-01T00:00:00)")]
    InvalidDate { param: String, value: String },

    /// Any other malformed parameter.
    #[error("Invalid parameter {param}: {reason}")]
    InvalidParameter { param: String, reason: String },

    /// Upstream API answered with a non-success status.
    #[error("DEXTools API returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Network / transport errors.
    #[error("Network error: {0}")]
    Network(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl AppError {
    /// HTTP status code carried by the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was raised before any network call was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::UnknownTool(_)
                | AppError::MissingParameter(_)
                | AppError::UnsupportedChain(_)
                | AppError::InvalidAddress { .. }
                | AppError::InvalidDate { .. }
                | AppError::InvalidParameter { .. }
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<AppError> for McpError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::UnknownTool(_)
            | AppError::MissingParameter(_)
            | AppError::UnsupportedChain(_)
            | AppError::InvalidAddress { .. }
            | AppError::InvalidDate { .. }
            | AppError::InvalidParameter { .. } => McpError::invalid_params(err.to_string(), None),
            AppError::Config(_) => McpError::invalid_request(err.to_string(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_app_error_config_display() {
        let err = AppError::Config("DEXTOOLS_API_KEY not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: DEXTOOLS_API_KEY not set");
    }

    #[test]
    fn test_app_error_unknown_tool_display() {
        let err = AppError::UnknownTool("get_everything".to_string());
        assert_eq!(err.to_string(), "Unknown tool: get_everything");
    }

    #[test]
    fn test_app_error_unsupported_chain_display() {
        let err = AppError::UnsupportedChain("dogechain".to_string());
        assert_eq!(err.to_string(), "Unsupported chain_id: dogechain");
    }

    #[test]
    fn test_app_error_invalid_address_display() {
        let err = AppError::InvalidAddress { role: "pool", address: "0xabc".to_string() };
        assert_eq!(err.to_string(), "Invalid pool address format: 0xabc");
    }

    #[test]
    fn test_app_error_invalid_date_display() {
        let err = AppError::InvalidDate {
            param: "from_date".to_string(),
            value: "yesterday".to_string(),
        };
        assert!(err.to_string().contains("from_date"));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_app_error_upstream_display() {
        let err = AppError::Upstream { status: 403, body: "Forbidden".to_string() };
        assert_eq!(err.to_string(), "DEXTools API returned status 403: Forbidden");
    }

    #[test]
    fn test_status_code_only_for_upstream() {
        let err = AppError::Upstream { status: 429, body: String::new() };
        assert_eq!(err.status_code(), Some(429));

        let err = AppError::Network("connection reset".to_string());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_is_validation() {
        assert!(AppError::MissingParameter("chain_id".to_string()).is_validation());
        assert!(AppError::UnknownTool("x".to_string()).is_validation());
        assert!(!AppError::Upstream { status: 500, body: String::new() }.is_validation());
        assert!(!AppError::Network("down".to_string()).is_validation());
    }

    #[test]
    fn test_app_error_to_mcp_error_invalid_params() {
        let err = AppError::InvalidAddress { role: "token", address: "bad".to_string() };
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_PARAMS);

        let err = AppError::MissingParameter("chain_id".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_PARAMS);

        let err = AppError::UnknownTool("nope".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_app_error_to_mcp_error_invalid_request() {
        let err = AppError::Config("config error".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_REQUEST);
    }

    #[test]
    fn test_app_error_to_mcp_error_internal_error() {
        let err = AppError::Upstream { status: 502, body: "Bad Gateway".to_string() };
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INTERNAL_ERROR);

        let err = AppError::Network("timed out".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err: AppError = parse_err.into();
        assert!(matches!(app_err, AppError::Parse(_)));
    }

    #[test]
    fn test_mcp_error_message_preserved() {
        let err = AppError::Network("Connection refused".to_string());
        let mcp_err: McpError = err.into();
        assert!(mcp_err.message.contains("Connection refused"));
        assert!(mcp_err.data.is_none());
    }
}
