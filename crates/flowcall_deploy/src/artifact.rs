use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DeployError;

/// The two contracts this migration deploys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractKind {
    FlowCall,
    TokenReceiver,
}

impl ContractKind {
    pub fn contract_name(&self) -> &'static str {
        match self {
            ContractKind::FlowCall => "FlowCall",
            ContractKind::TokenReceiver => "TokenReceiver",
        }
    }

    /// Setter the other contract's address is wired through.
    pub fn setter(&self) -> &'static str {
        match self {
            ContractKind::FlowCall => "setTokenReceiver",
            ContractKind::TokenReceiver => "setFlowCallAddress",
        }
    }

    /// File name of the compiled artifact inside the build directory.
    pub fn artifact_file(&self) -> String {
        format!("{}.json", self.contract_name())
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.contract_name())
    }
}

/// Compiled contract as written by the Solidity build step
/// (`build/contracts/<Name>.json`). Only the fields needed to deploy are read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractArtifact {
    #[serde(rename = "contractName")]
    pub contract_name: String,
    pub abi: serde_json::Value,
    pub bytecode: String,
}

impl ContractArtifact {
    /// Load and validate the artifact for `kind` from `dir`.
    pub fn load(dir: &Path, kind: ContractKind) -> Result<Self, DeployError> {
        let path = dir.join(kind.artifact_file());
        let json = std::fs::read_to_string(&path)
            .map_err(|e| DeployError::Artifact(format!("{}: {e}", path.display())))?;
        let artifact: Self = serde_json::from_str(&json)
            .map_err(|e| DeployError::Artifact(format!("{}: {e}", path.display())))?;
        artifact.validate(kind)?;
        debug!(contract = %kind, path = %path.display(), "artifact loaded");
        Ok(artifact)
    }

    fn validate(&self, kind: ContractKind) -> Result<(), DeployError> {
        if self.contract_name != kind.contract_name() {
            return Err(DeployError::Artifact(format!(
                "expected contract {kind}, artifact is for {}",
                self.contract_name
            )));
        }
        let digits = self
            .bytecode
            .strip_prefix("0x")
            .ok_or_else(|| DeployError::Artifact(format!("{kind} bytecode is not 0x-prefixed")))?;
        if digits.is_empty() {
            return Err(DeployError::Artifact(format!(
                "{kind} has empty bytecode (abstract contract or interface?)"
            )));
        }
        if digits.len() % 2 != 0 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DeployError::Artifact(format!(
                "{kind} bytecode is not valid hex (unlinked library placeholder?)"
            )));
        }
        if !self.has_function(kind.setter()) {
            return Err(DeployError::Artifact(format!(
                "{kind} ABI has no {} function",
                kind.setter()
            )));
        }
        Ok(())
    }

    fn has_function(&self, name: &str) -> bool {
        self.abi.as_array().is_some_and(|entries| {
            entries.iter().any(|e| {
                e.get("type").and_then(|t| t.as_str()) == Some("function")
                    && e.get("name").and_then(|n| n.as_str()) == Some(name)
            })
        })
    }
}

/// Both artifacts, loaded up front so a missing file fails before any
/// transaction is sent.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub flow_call: ContractArtifact,
    pub token_receiver: ContractArtifact,
}

impl ArtifactSet {
    pub fn load(dir: &Path) -> Result<Self, DeployError> {
        Ok(Self {
            flow_call: ContractArtifact::load(dir, ContractKind::FlowCall)?,
            token_receiver: ContractArtifact::load(dir, ContractKind::TokenReceiver)?,
        })
    }

    pub fn get(&self, kind: ContractKind) -> &ContractArtifact {
        match kind {
            ContractKind::FlowCall => &self.flow_call,
            ContractKind::TokenReceiver => &self.token_receiver,
        }
    }
}
