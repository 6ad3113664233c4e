//! Configuration for the ticket booth

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Booth configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Proof value recorded when the purchase flow seals a block
    pub seal_proof: u64,

    /// Explorer display configuration
    pub explorer: ExplorerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "ticket-booth".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            seal_proof: 123,
            explorer: ExplorerConfig::default(),
        }
    }
}

/// Explorer display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Characters of a block hash shown in chain listings
    pub hash_preview_len: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            hash_preview_len: 12,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.as_ref().display()))?;
        let config = toml::from_str(&content).context("Failed to parse config")?;
        Ok(config)
    }

    /// Load defaults with environment overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(proof) = std::env::var("TICKET_BOOTH_SEAL_PROOF") {
            if let Ok(proof) = proof.parse() {
                config.seal_proof = proof;
            }
        }

        if let Ok(len) = std::env::var("TICKET_BOOTH_HASH_PREVIEW") {
            if let Ok(len) = len.parse() {
                config.explorer.hash_preview_len = len;
            }
        }

        config
    }
}
