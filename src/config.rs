//! Storefront configuration
//!
//! Settings are read from a TOML file. Every field has a default, so a
//! missing file or a partial file is fine.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "STOREFRONT_CONFIG";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storefront: ShopConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
}

impl StorefrontConfig {
    /// Loads the config from `STOREFRONT_CONFIG` or `./storefront.toml`,
    /// falling back to defaults when neither exists.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();
        if config_path.exists() {
            let raw = fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config file {}", config_path.display()))?;
            return Self::from_toml_str(&raw)
                .with_context(|| format!("failed to parse TOML from {}", config_path.display()));
        }

        Ok(StorefrontConfig::default())
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Path::new(&path).to_path_buf();
    }

    Path::new("storefront.toml").to_path_buf()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopConfig {
    /// Where "go to files" sends the visitor after payment.
    #[serde(default = "default_files_url")]
    pub files_url: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            files_url: default_files_url(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_files_url() -> String {
    "https://collapseloader.org/".to_string()
}

fn default_currency_symbol() -> String {
    "₽".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Sessions untouched for this long are dropped by the sweep.
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
    /// Upper bound on stored sessions; the least recently seen one makes room.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout_secs(),
            max_sessions: default_max_sessions(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_idle_timeout_secs() -> u64 {
    3600
}

fn default_max_sessions() -> usize {
    10_000
}

fn default_sweep_interval_secs() -> u64 {
    60
}
