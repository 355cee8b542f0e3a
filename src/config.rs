//! # Configuration
//!
//! Application configuration loading and management.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `BNB_WALLET_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `BNB_WALLET_CONFIG_FILE` | Configuration file path | `config.toml` |
//! | `BNB_WALLET_LOG_LEVEL` | Log level | `info` |
//! | `BNB_WALLET_LOG_FORMAT` | Log format (json/pretty) | `json` |
//! | `BNB_WALLET_RPC_<CHAIN>` | RPC override, e.g. `BNB_WALLET_RPC_OPBNB` | catalog default |
//! | `BNB_WALLET_DELEGATION_FEE_WEI` | L2 withdrawal fee in wei | `2000000000000000` |
//! | `BNB_WALLET_MIN_GAS_LIMIT` | Bridge `minGasLimit` | `1` |
//!
//! The signing key is never read from the file; see `BNB_PRIVATE_KEY` in the
//! binary.
//!
//! # Examples
//!
//! ```ignore
//! use bnb_wallet::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! let overrides = config.rpc_overrides()?;
//! ```

use crate::domain::value_objects::SupportedChain;
use ethers::types::U256;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Environment variable referenced by `${VAR}` is not set.
    #[error("environment variable not set: {0}")]
    EnvVarNotSet(String),
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include target (module path) in logs.
    #[serde(default = "default_true")]
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
            include_target: true,
        }
    }
}

// ============================================================================
// Bridge Configuration
// ============================================================================

/// Bridge call parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Native fee added to L2 withdrawals, in wei.
    #[serde(default = "default_delegation_fee_wei")]
    pub delegation_fee_wei: u64,

    /// `minGasLimit` passed to every bridge call.
    #[serde(default = "default_min_gas_limit")]
    pub min_gas_limit: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            delegation_fee_wei: default_delegation_fee_wei(),
            min_gas_limit: default_min_gas_limit(),
        }
    }
}

impl BridgeConfig {
    /// Returns the delegation fee in wei.
    #[must_use]
    pub fn delegation_fee(&self) -> U256 {
        U256::from(self.delegation_fee_wei)
    }
}

// ============================================================================
// Client Configuration
// ============================================================================

/// JSON-RPC client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Polling interval while waiting for receipts, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ClientConfig {
    /// Returns the polling interval.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// RPC overrides by logical chain name. Values may contain `${VAR}`.
    #[serde(default)]
    pub chains: HashMap<String, String>,

    /// Bridge configuration.
    #[serde(default)]
    pub bridge: BridgeConfig,

    /// Client configuration.
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let config_path =
            std::env::var("BNB_WALLET_CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if Path::new(&config_path).exists() {
            config = Self::from_file(&config_path)?;
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize_chain_keys();
        Ok(config)
    }

    /// Rewrites catalog chain keys to their canonical spelling.
    ///
    /// When one chain appears under several spellings, the canonical key
    /// wins. Unknown names are kept for `validate` to reject.
    fn normalize_chain_keys(&mut self) {
        let mut normalized = HashMap::with_capacity(self.chains.len());
        for (name, url) in std::mem::take(&mut self.chains) {
            match SupportedChain::from_name(&name) {
                Some(chain) if chain.name() == name => {
                    normalized.insert(name, url);
                }
                Some(chain) => {
                    normalized.entry(chain.name().to_string()).or_insert(url);
                }
                None => {
                    normalized.insert(name, url);
                }
            }
        }
        self.chains = normalized;
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.normalize_chain_keys();

        // Logging configuration
        if let Some(level) = lookup("BNB_WALLET_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(format) = lookup("BNB_WALLET_LOG_FORMAT") {
            self.log.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Json,
            };
        }

        // Chain RPC overrides
        for chain in SupportedChain::all() {
            let key = format!("BNB_WALLET_RPC_{}", chain.name().to_uppercase());
            if let Some(url) = lookup(&key) {
                self.chains.insert(chain.name().to_string(), url);
            }
        }

        // Bridge configuration
        if let Some(fee) = lookup("BNB_WALLET_DELEGATION_FEE_WEI")
            && let Ok(fee) = fee.parse()
        {
            self.bridge.delegation_fee_wei = fee;
        }
        if let Some(limit) = lookup("BNB_WALLET_MIN_GAS_LIMIT")
            && let Ok(limit) = limit.parse()
        {
            self.bridge.min_gas_limit = limit;
        }
    }

    /// Returns RPC overrides with `${VAR}` references substituted.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvVarNotSet` if a referenced variable is unset.
    pub fn rpc_overrides(&self) -> Result<HashMap<String, String>, ConfigError> {
        self.chains
            .iter()
            .map(|(name, url)| Ok((name.clone(), substitute_env_vars(url)?)))
            .collect()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log.level".to_string(),
                message: format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, valid_levels
                ),
            });
        }

        // Overrides may only target catalog chains
        for (name, url) in &self.chains {
            if SupportedChain::from_name(name).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: format!("chains.{name}"),
                    message: "not a known chain".to_string(),
                });
            }
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("chains.{name}"),
                    message: "RPC URL cannot be empty".to_string(),
                });
            }
        }

        if self.client.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "client.poll_interval_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Replaces `${VAR_NAME}` patterns with the corresponding environment variable value.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set.
pub fn substitute_env_vars(input: &str) -> Result<String, ConfigError> {
    substitute_with(input, |name| std::env::var(name).ok())
}

fn substitute_with(
    input: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    let mut result = input.to_string();
    let mut start = 0;

    while let Some(var_start) = result[start..].find("${") {
        let abs_start = start + var_start;
        let Some(var_end) = result[abs_start..].find('}') else {
            break;
        };
        let abs_end = abs_start + var_end;
        let var_name = &result[abs_start + 2..abs_end];

        let var_value =
            lookup(var_name).ok_or_else(|| ConfigError::EnvVarNotSet(var_name.to_string()))?;

        result.replace_range(abs_start..=abs_end, &var_value);
        start = abs_start + var_value.len();
    }

    Ok(result)
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_delegation_fee_wei() -> u64 {
    2_000_000_000_000_000
}

fn default_min_gas_limit() -> u32 {
    1
}

fn default_poll_interval_ms() -> u64 {
    500
}
