use flowcall_core::AppError;

use crate::artifact::ContractKind;

/// Errors raised by a [`Deployer`](crate::deployer::Deployer) or while
/// preparing one.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("{contract} deployment failed: {reason}")]
    Deployment {
        contract: ContractKind,
        reason: String,
    },

    #[error("{contract}.{method} failed: {reason}")]
    Transaction {
        contract: ContractKind,
        method: &'static str,
        reason: String,
    },

    #[error("{0} has not been deployed in this run")]
    NotDeployed(ContractKind),

    #[error("{method} is not a {actual} method (expected {expected})")]
    WrongContract {
        method: &'static str,
        expected: ContractKind,
        actual: ContractKind,
    },

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("transaction {tx_hash} not confirmed after {waited_secs}s")]
    Timeout { tx_hash: String, waited_secs: u64 },

    #[error("artifact error: {0}")]
    Artifact(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl DeployError {
    /// Contract creation failed or never confirmed.
    pub fn is_deployment(&self) -> bool {
        matches!(self, Self::Deployment { .. })
    }

    /// A setter call reverted or never confirmed.
    pub fn is_transaction(&self) -> bool {
        matches!(self, Self::Transaction { .. })
    }
}

impl From<DeployError> for AppError {
    fn from(err: DeployError) -> Self {
        let msg = err.to_string();
        match err {
            DeployError::Deployment { .. } => AppError::Deployment(msg),
            DeployError::Transaction { .. } => AppError::Transaction(msg),
            DeployError::Timeout { .. } => AppError::Timeout(msg),
            DeployError::Rpc(_) => AppError::Rpc(msg),
            DeployError::Artifact(_) => AppError::Artifact(msg),
            DeployError::InvalidAddress(_) => AppError::Config(msg),
            DeployError::NotDeployed(_) | DeployError::WrongContract { .. } => {
                AppError::Internal(msg)
            }
        }
    }
}
