use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error surfaced by the migration runner.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Deployment failed: {0}")]
    Deployment(String),

    #[error("Transaction failed: {0}")]
    Transaction(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Broad classification used for exit codes and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Bad config file, flags or build artifacts.
    ConfigError,
    /// Node unreachable, malformed responses, confirmation timeouts.
    NetworkError,
    /// A contract creation or setter transaction failed on-chain.
    ChainError,
    SystemError,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) | Self::Artifact(_) => ErrorCategory::ConfigError,
            Self::Rpc(_) | Self::Timeout(_) => ErrorCategory::NetworkError,
            Self::Deployment(_) | Self::Transaction(_) => ErrorCategory::ChainError,
            Self::Internal(_) => ErrorCategory::SystemError,
        }
    }

    /// Message shown on the console when a run aborts.
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(msg) => format!("Configuration issue: {msg}"),
            Self::Artifact(msg) => format!("Build artifact problem: {msg}. Recompile the contracts."),
            Self::Rpc(msg) => format!("Could not talk to the node: {msg}"),
            Self::Deployment(msg) => format!(
                "Deployment aborted: {msg}. Contracts deployed before this step remain on-chain."
            ),
            Self::Transaction(msg) => format!(
                "Wiring aborted: {msg}. Contracts are deployed but not fully wired."
            ),
            Self::Timeout(msg) => format!("Confirmation timed out: {msg}"),
            Self::Internal(_) => "An unexpected error occurred.".into(),
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::ConfigError => 2,
            ErrorCategory::NetworkError => 3,
            ErrorCategory::ChainError => 4,
            ErrorCategory::SystemError => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_mapping() {
        assert_eq!(
            AppError::Artifact("x".into()).category(),
            ErrorCategory::ConfigError
        );
        assert_eq!(
            AppError::Timeout("x".into()).category(),
            ErrorCategory::NetworkError
        );
        assert_eq!(
            AppError::Transaction("x".into()).category(),
            ErrorCategory::ChainError
        );
    }

    #[test]
    fn exit_codes_are_distinct_per_category() {
        let codes = [
            AppError::Config("a".into()).exit_code(),
            AppError::Rpc("b".into()).exit_code(),
            AppError::Deployment("c".into()).exit_code(),
            AppError::Internal("d".into()).exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(codes.iter().all(|c| *c != 0));
    }

    #[test]
    fn internal_message_hides_details() {
        let err = AppError::Internal("panic in worker 7".into());
        assert_eq!(err.user_message(), "An unexpected error occurred.");
    }

    #[test]
    fn deployment_message_mentions_partial_state() {
        let err = AppError::Deployment("TokenReceiver reverted".into());
        assert!(err.user_message().contains("remain on-chain"));
    }
}
