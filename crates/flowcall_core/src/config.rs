use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Deployment configuration stored at `~/.flowcall/config.json`.
///
/// Every field has a default, so a partial (or empty) JSON object loads fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Directory holding the compiled `<Contract>.json` build artifacts.
    pub artifacts_dir: PathBuf,
    /// Sender account. When unset the node's first unlocked account is used.
    pub from_address: Option<String>,
    pub confirmation_timeout_secs: u64,
    pub poll_interval_ms: u64,
    /// Per-network RPC URL overrides, keyed by network name (`bsctestnet`, ...).
    pub rpc_overrides: BTreeMap<String, String>,
    /// Where deployment records are appended. Defaults to `~/.flowcall/deployments.json`.
    pub record_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("build/contracts"),
            from_address: None,
            confirmation_timeout_secs: 120,
            poll_interval_ms: 1_000,
            rpc_overrides: BTreeMap::new(),
            record_path: None,
            log_level: "info".into(),
        }
    }
}

impl DeployConfig {
    /// Returns the base config directory: `~/.flowcall/`
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".flowcall"))
    }

    /// Returns the config file path: `~/.flowcall/config.json`
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.json"))
    }

    /// Returns the logs directory: `~/.flowcall/logs/`
    pub fn logs_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("logs"))
    }

    /// Returns the default deployment log path: `~/.flowcall/deployments.json`
    pub fn deployments_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("deployments.json"))
    }

    /// The record path to use for this configuration.
    pub fn resolved_record_path(&self) -> Result<PathBuf> {
        match &self.record_path {
            Some(path) => Ok(path.clone()),
            None => Self::deployments_path(),
        }
    }

    /// Loads config from the default location, creating it if missing.
    pub fn load() -> Result<Self> {
        let base = Self::base_dir()?;
        std::fs::create_dir_all(&base)
            .with_context(|| format!("Failed to create directory: {}", base.display()))?;
        Self::load_from_path(&Self::config_path()?)
    }

    /// Load config from a specific file path, writing defaults when absent.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let config: Self = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?;
            config.validate()?;
            info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to_path(path)?;
            info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Save config to a specific file path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Reject values that would make confirmation polling meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.confirmation_timeout_secs == 0 {
            anyhow::bail!("config: confirmation_timeout_secs must be greater than zero");
        }
        if self.poll_interval_ms == 0 {
            anyhow::bail!("config: poll_interval_ms must be greater than zero");
        }
        Ok(())
    }

    /// RPC override configured for `network`, if any.
    pub fn rpc_override(&self, network: &str) -> Option<&str> {
        self.rpc_overrides.get(network).map(String::as_str)
    }
}
