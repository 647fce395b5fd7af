//! The deployment capability the migration runs against.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::abi;
use crate::address::Address;
use crate::artifact::ContractKind;
use crate::error::DeployError;

/// State-mutating setter calls used to wire the two contracts together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WiringCall {
    /// `FlowCall.setTokenReceiver(address)`
    SetTokenReceiver(Address),
    /// `TokenReceiver.setFlowCallAddress(address)`
    SetFlowCallAddress(Address),
}

impl WiringCall {
    pub fn method(&self) -> &'static str {
        self.target().setter()
    }

    pub fn signature(&self) -> &'static str {
        match self {
            WiringCall::SetTokenReceiver(_) => "setTokenReceiver(address)",
            WiringCall::SetFlowCallAddress(_) => "setFlowCallAddress(address)",
        }
    }

    /// The only contract kind that exposes this setter.
    pub fn target(&self) -> ContractKind {
        match self {
            WiringCall::SetTokenReceiver(_) => ContractKind::FlowCall,
            WiringCall::SetFlowCallAddress(_) => ContractKind::TokenReceiver,
        }
    }

    pub fn argument(&self) -> Address {
        match self {
            WiringCall::SetTokenReceiver(addr) | WiringCall::SetFlowCallAddress(addr) => *addr,
        }
    }

    pub fn calldata(&self) -> Vec<u8> {
        abi::encode_address_call(self.signature(), self.argument())
    }
}

/// Confirmation details for a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_hash: String,
    pub block_number: Option<u64>,
    pub gas_used: Option<u64>,
}

/// Capability to put contracts on a chain and send transactions to them.
///
/// Every method resolves only once the underlying transaction is confirmed
/// (or has definitively failed).
#[async_trait]
pub trait Deployer: Send + Sync {
    /// Deploy a new instance of `kind`.
    async fn deploy(&self, kind: ContractKind) -> Result<(), DeployError>;

    /// Handle to the most recently deployed instance of `kind`.
    async fn deployed(&self, kind: ContractKind) -> Result<ContractInstance, DeployError>;

    /// Send `call` to `instance` and wait for confirmation.
    async fn transact(
        &self,
        instance: &ContractInstance,
        call: WiringCall,
    ) -> Result<TxReceipt, DeployError>;
}

/// A deployed, addressable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInstance {
    kind: ContractKind,
    address: Address,
}

impl ContractInstance {
    pub fn new(kind: ContractKind, address: Address) -> Self {
        Self { kind, address }
    }

    pub fn kind(&self) -> ContractKind {
        self.kind
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// `FlowCall.setTokenReceiver(receiver)`
    pub async fn set_token_receiver<D>(
        &self,
        deployer: &D,
        receiver: Address,
    ) -> Result<TxReceipt, DeployError>
    where
        D: Deployer + ?Sized,
    {
        self.call(deployer, WiringCall::SetTokenReceiver(receiver))
            .await
    }

    /// `TokenReceiver.setFlowCallAddress(flow_call)`
    pub async fn set_flow_call_address<D>(
        &self,
        deployer: &D,
        flow_call: Address,
    ) -> Result<TxReceipt, DeployError>
    where
        D: Deployer + ?Sized,
    {
        self.call(deployer, WiringCall::SetFlowCallAddress(flow_call))
            .await
    }

    async fn call<D>(&self, deployer: &D, call: WiringCall) -> Result<TxReceipt, DeployError>
    where
        D: Deployer + ?Sized,
    {
        if call.target() != self.kind {
            return Err(DeployError::WrongContract {
                method: call.method(),
                expected: call.target(),
                actual: self.kind,
            });
        }
        deployer.transact(self, call).await
    }
}
