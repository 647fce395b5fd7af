//! In-process chain simulation used for dry runs and tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::address::Address;
use crate::artifact::ContractKind;
use crate::deployer::{ContractInstance, Deployer, TxReceipt, WiringCall};
use crate::error::DeployError;

/// A step that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailurePoint {
    Deploy(ContractKind),
    SetTokenReceiver,
    SetFlowCallAddress,
}

impl FailurePoint {
    fn for_call(call: &WiringCall) -> Self {
        match call {
            WiringCall::SetTokenReceiver(_) => FailurePoint::SetTokenReceiver,
            WiringCall::SetFlowCallAddress(_) => FailurePoint::SetFlowCallAddress,
        }
    }
}

/// Every request the deployer received, in order, including ones that then
/// failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeployerCall {
    Deploy(ContractKind),
    Deployed(ContractKind),
    Transact { contract: Address, call: WiringCall },
}

#[derive(Debug)]
struct SimContract {
    kind: ContractKind,
    token_receiver: Option<Address>,
    flow_call_address: Option<Address>,
}

#[derive(Debug, Default)]
struct State {
    nonce: u64,
    latest: HashMap<ContractKind, Address>,
    contracts: HashMap<Address, SimContract>,
    calls: Vec<DeployerCall>,
    failures: HashSet<FailurePoint>,
}

impl State {
    fn next_tx(&mut self) -> TxReceipt {
        self.nonce += 1;
        TxReceipt {
            tx_hash: format!("0x{:064x}", self.nonce),
            block_number: Some(self.nonce),
            gas_used: Some(21_000),
        }
    }
}

/// Simulated chain: deterministic addresses, per-contract storage for the two
/// wired addresses, and injectable failures.
#[derive(Debug, Default)]
pub struct MemoryDeployer {
    state: Mutex<State>,
}

impl MemoryDeployer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `point` fail every time it is reached.
    pub fn fail_on(self, point: FailurePoint) -> Self {
        self.state.lock().failures.insert(point);
        self
    }

    pub fn calls(&self) -> Vec<DeployerCall> {
        self.state.lock().calls.clone()
    }

    /// Number of successful deployments of `kind`.
    pub fn deploy_count(&self, kind: ContractKind) -> usize {
        self.state
            .lock()
            .contracts
            .values()
            .filter(|c| c.kind == kind)
            .count()
    }

    /// Address stored by `FlowCall.setTokenReceiver` on the contract at `flow_call`.
    pub fn token_receiver_of(&self, flow_call: Address) -> Option<Address> {
        self.state
            .lock()
            .contracts
            .get(&flow_call)
            .and_then(|c| c.token_receiver)
    }

    /// Address stored by `TokenReceiver.setFlowCallAddress` on the contract at `token_receiver`.
    pub fn flow_call_address_of(&self, token_receiver: Address) -> Option<Address> {
        self.state
            .lock()
            .contracts
            .get(&token_receiver)
            .and_then(|c| c.flow_call_address)
    }

    fn contract_address(nonce: u64) -> Address {
        let mut bytes = [0u8; 20];
        bytes[0] = 0xc0;
        bytes[12..].copy_from_slice(&nonce.to_be_bytes());
        Address::new(bytes)
    }
}

#[async_trait]
impl Deployer for MemoryDeployer {
    async fn deploy(&self, kind: ContractKind) -> Result<(), DeployError> {
        {
            let mut state = self.state.lock();
            state.calls.push(DeployerCall::Deploy(kind));
            if state.failures.contains(&FailurePoint::Deploy(kind)) {
                return Err(DeployError::Deployment {
                    contract: kind,
                    reason: "simulated deployment failure".into(),
                });
            }
            let receipt = state.next_tx();
            let address = Self::contract_address(state.nonce);
            state.contracts.insert(
                address,
                SimContract {
                    kind,
                    token_receiver: None,
                    flow_call_address: None,
                },
            );
            state.latest.insert(kind, address);
            debug!(contract = %kind, %address, tx_hash = %receipt.tx_hash, "simulated deploy");
        }
        tokio::task::yield_now().await;
        Ok(())
    }

    async fn deployed(&self, kind: ContractKind) -> Result<ContractInstance, DeployError> {
        let mut state = self.state.lock();
        state.calls.push(DeployerCall::Deployed(kind));
        state
            .latest
            .get(&kind)
            .map(|address| ContractInstance::new(kind, *address))
            .ok_or(DeployError::NotDeployed(kind))
    }

    async fn transact(
        &self,
        instance: &ContractInstance,
        call: WiringCall,
    ) -> Result<TxReceipt, DeployError> {
        let receipt = {
            let mut state = self.state.lock();
            state.calls.push(DeployerCall::Transact {
                contract: instance.address(),
                call,
            });
            let fail = |reason: &str| DeployError::Transaction {
                contract: instance.kind(),
                method: call.method(),
                reason: reason.to_string(),
            };
            if state.failures.contains(&FailurePoint::for_call(&call)) {
                return Err(fail("simulated revert"));
            }
            let receipt = state.next_tx();
            let contract = state
                .contracts
                .get_mut(&instance.address())
                .ok_or_else(|| fail("no contract at address"))?;
            if contract.kind != call.target() {
                return Err(fail("function selector not recognised"));
            }
            match call {
                WiringCall::SetTokenReceiver(addr) => contract.token_receiver = Some(addr),
                WiringCall::SetFlowCallAddress(addr) => contract.flow_call_address = Some(addr),
            }
            receipt
        };
        tokio::task::yield_now().await;
        Ok(receipt)
    }
}
