/*
[INPUT]:  YAML configuration file and environment variables
[OUTPUT]: Parsed bot configuration
[POS]:    Configuration layer - credentials and network selection
[UPDATE]: When adding new configuration options
*/

use binance_futures_adapter::Network;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const API_KEY_ENV: &str = "BINANCE_API_KEY";
const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// Top-level configuration for the trading bot
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    /// Binance API key; overridden by BINANCE_API_KEY when set
    #[serde(default)]
    pub api_key: String,
    /// Binance API secret; overridden by BINANCE_API_SECRET when set
    #[serde(default)]
    pub api_secret: String,
    /// Network target; defaults to testnet
    #[serde(default = "default_network")]
    pub network: Network,
    /// Leverage offered as the prompt default in interactive mode
    #[serde(default = "default_leverage")]
    pub default_leverage: u32,
    /// Optional log file; stderr-only when absent
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            network: default_network(),
            default_leverage: default_leverage(),
            log_file: None,
        }
    }
}

fn default_network() -> Network {
    Network::Testnet
}

fn default_leverage() -> u32 {
    10
}

impl BotConfig {
    /// Load configuration from a YAML file, then apply env overrides
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yaml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Build configuration from environment variables alone
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            self.api_key = key;
        }
        if let Ok(secret) = std::env::var(API_SECRET_ENV) {
            self.api_secret = secret;
        }
    }

    /// Fail early when credentials are absent
    pub fn require_credentials(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() || self.api_secret.is_empty() {
            anyhow::bail!(
                "API credentials missing: set api_key/api_secret in the config file \
                 or export {API_KEY_ENV} and {API_SECRET_ENV}"
            );
        }
        Ok(())
    }
}
