//! Network-conditional deployment of FlowCall and TokenReceiver.

use tracing::{info, instrument};

use crate::address::Address;
use crate::artifact::ContractKind;
use crate::deployer::Deployer;
use crate::error::DeployError;
use crate::network::{DeployPlan, DeployTarget, Network, SkipReason};

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// Both contracts deployed and pointing at each other.
    Wired {
        network: Network,
        flow_call: Address,
        token_receiver: Address,
    },
    /// Nothing was sent to the chain.
    Skipped {
        target: DeployTarget,
        reason: SkipReason,
    },
}

impl DeployOutcome {
    pub fn is_wired(&self) -> bool {
        matches!(self, DeployOutcome::Wired { .. })
    }
}

/// Deploy and cross-wire FlowCall and TokenReceiver for `network`.
///
/// `bsctestnet` and `hecomainnet` run the full sequence; `bscmainnet` and any
/// unrecognised name do nothing. Each step waits for the previous one to be
/// confirmed. The first failure is returned as-is and nothing already on
/// chain is undone.
#[instrument(skip(deployer))]
pub async fn deploy_for<D>(deployer: &D, network: &str) -> Result<DeployOutcome, DeployError>
where
    D: Deployer + ?Sized,
{
    let target = DeployTarget::parse(network);
    let network = match target.plan() {
        DeployPlan::DeployAndWire(network) => network,
        DeployPlan::Skip(reason) => {
            info!(%target, ?reason, "no deployment configured, skipping");
            return Ok(DeployOutcome::Skipped { target, reason });
        }
    };

    deployer.deploy(ContractKind::FlowCall).await?;
    let flow_call = deployer.deployed(ContractKind::FlowCall).await?;
    info!(address = %flow_call.address(), "FlowCall deployed");

    deployer.deploy(ContractKind::TokenReceiver).await?;
    let token_receiver = deployer.deployed(ContractKind::TokenReceiver).await?;
    info!(address = %token_receiver.address(), "TokenReceiver deployed");

    flow_call
        .set_token_receiver(deployer, token_receiver.address())
        .await?;
    token_receiver
        .set_flow_call_address(deployer, flow_call.address())
        .await?;
    info!(
        flow_call = %flow_call.address(),
        token_receiver = %token_receiver.address(),
        "contracts wired"
    );

    Ok(DeployOutcome::Wired {
        network,
        flow_call: flow_call.address(),
        token_receiver: token_receiver.address(),
    })
}
