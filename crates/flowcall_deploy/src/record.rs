use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::address::Address;
use crate::network::Network;

/// Addresses produced by one completed deploy-and-wire run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub network: Network,
    pub flow_call: Address,
    pub token_receiver: Address,
    pub deployed_at: DateTime<Utc>,
}

/// Append-only history of deployments, persisted as JSON.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeploymentLog {
    records: Vec<DeploymentRecord>,
}

impl DeploymentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DeploymentRecord) {
        info!(
            network = record.network.name(),
            flow_call = %record.flow_call,
            token_receiver = %record.token_receiver,
            "deployment recorded"
        );
        self.records.push(record);
    }

    /// Most recent record for `network`.
    pub fn latest(&self, network: Network) -> Option<&DeploymentRecord> {
        self.records.iter().rev().find(|r| r.network == network)
    }

    pub fn records(&self) -> &[DeploymentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Persist the log to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json =
            serde_json::to_string_pretty(self).context("failed to serialize deployment log")?;
        std::fs::write(path, json).context("failed to write deployment log file")?;

        // Owner-only on Unix (0o600 = rw-------).
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
                .context("failed to set deployment log file permissions")?;
        }

        info!(path = %path.display(), count = self.records.len(), "deployment log saved");
        Ok(())
    }

    /// Load a log from a JSON file. Returns an empty log if the file does not exist.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "deployment log not found, starting empty");
            return Ok(Self::new());
        }
        let json = std::fs::read_to_string(path).context("failed to read deployment log file")?;
        let log: Self =
            serde_json::from_str(&json).context("failed to deserialize deployment log")?;
        Ok(log)
    }
}
