//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Base URL template for the public DEXTools plans.
pub const PUBLIC_API_BASE: &str = "https://public-api.dextools.io";

/// Base URL for partner (enterprise) keys.
pub const PARTNER_API_BASE: &str = "https://api.dextools.io/v2";

/// DEXTools subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plan {
    Free,
    #[default]
    Trial,
    Standard,
    Advanced,
    Pro,
    /// Partner tier, also accepted as "enterprise".
    Partner,
}

impl Plan {
    /// Plan name as it appears in the public API path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Trial => "trial",
            Plan::Standard => "standard",
            Plan::Advanced => "advanced",
            Plan::Pro => "pro",
            Plan::Partner => "partner",
        }
    }

    /// Base URL for this plan, without a trailing slash.
    pub fn base_url(&self) -> String {
        match self {
            Plan::Partner => PARTNER_API_BASE.to_string(),
            plan => format!("{}/{}/v2", PUBLIC_API_BASE, plan.as_str()),
        }
    }
}

impl FromStr for Plan {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Plan::Free),
            "trial" => Ok(Plan::Trial),
            "standard" => Ok(Plan::Standard),
            "advanced" => Ok(Plan::Advanced),
            "pro" => Ok(Plan::Pro),
            "partner" | "enterprise" => Ok(Plan::Partner),
            other => Err(AppError::Config(format!("Unknown DEXTOOLS_PLAN: '{}'", other))),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// DEXTools API key sent as `X-API-KEY`.
    pub api_key: String,
    /// Subscription plan.
    pub plan: Plan,
    /// API base URL (derived from the plan unless overridden).
    pub base_url: String,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Build a configuration for the given key and plan, using the plan's base URL.
    pub fn new(api_key: impl Into<String>, plan: Plan) -> Self {
        Self {
            api_key: api_key.into(),
            plan,
            base_url: plan.base_url(),
            log_level: "info".to_string(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `DEXTOOLS_API_KEY`: DEXTools API key
    ///
    /// Optional environment variables:
    /// - `DEXTOOLS_PLAN`: subscription plan (default: trial)
    /// - `DEXTOOLS_BASE_URL`: override the plan's API base URL
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let api_key = env::var("DEXTOOLS_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config("DEXTOOLS_API_KEY environment variable not set".into())
            })?;

        let plan = match env::var("DEXTOOLS_PLAN") {
            Ok(value) if !value.trim().is_empty() => value.parse::<Plan>()?,
            _ => Plan::default(),
        };

        let mut config = Self::new(api_key.trim(), plan);

        if let Ok(base_url) = env::var("DEXTOOLS_BASE_URL") {
            if !base_url.trim().is_empty() {
                config = config.with_base_url(base_url.trim());
            }
        }

        config.log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("plan", &self.plan)
            .field("base_url", &self.base_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_parse() {
        assert_eq!("trial".parse::<Plan>().unwrap(), Plan::Trial);
        assert_eq!("PRO".parse::<Plan>().unwrap(), Plan::Pro);
        assert_eq!(" enterprise ".parse::<Plan>().unwrap(), Plan::Partner);
        assert!("platinum".parse::<Plan>().is_err());
    }

    #[test]
    fn test_plan_base_url() {
        assert_eq!(Plan::Trial.base_url(), "https://public-api.dextools.io/trial/v2");
        assert_eq!(Plan::Pro.base_url(), "https://public-api.dextools.io/pro/v2");
        assert_eq!(Plan::Partner.base_url(), "https://api.dextools.io/v2");
    }

    #[test]
    fn test_default_plan_is_trial() {
        assert_eq!(Plan::default(), Plan::Trial);
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = Config::new("key", Plan::Trial).with_base_url("http://127.0.0.1:1234/");
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("super-secret-key", Plan::Standard);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
