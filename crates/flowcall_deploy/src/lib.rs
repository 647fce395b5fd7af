// FlowCall / TokenReceiver deployment and wiring

pub mod abi;
pub mod address;
pub mod artifact;
pub mod chain;
pub mod deployer;
pub mod error;
pub mod memory;
pub mod migration;
pub mod network;
pub mod record;
pub mod rpc;
pub mod rpc_config;

// Re-export primary types for convenient access.
pub use address::Address;
pub use artifact::{ArtifactSet, ContractArtifact, ContractKind};
pub use chain::{ChainConfig, get_chain_configs};
pub use deployer::{ContractInstance, Deployer, TxReceipt, WiringCall};
pub use error::DeployError;
pub use memory::{DeployerCall, FailurePoint, MemoryDeployer};
pub use migration::{DeployOutcome, deploy_for};
pub use network::{DeployPlan, DeployTarget, Network, SkipReason};
pub use record::{DeploymentLog, DeploymentRecord};
pub use rpc::{JsonRpcDeployer, RpcDeployerSettings};
pub use rpc_config::{RpcConfig, RpcConfigStore, validate_url};
