use std::fmt;

use serde::{Deserialize, Serialize};

/// Networks this migration knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    BscTestnet,
    BscMainnet,
    HecoMainnet,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::BscTestnet, Network::BscMainnet, Network::HecoMainnet];

    /// The identifier the deployment tool passes in.
    pub fn name(&self) -> &'static str {
        match self {
            Network::BscTestnet => "bsctestnet",
            Network::BscMainnet => "bscmainnet",
            Network::HecoMainnet => "hecomainnet",
        }
    }

    /// Human-readable label for the network.
    pub fn label(&self) -> &'static str {
        match self {
            Network::BscTestnet => "BNB Smart Chain Testnet",
            Network::BscMainnet => "BNB Smart Chain Mainnet",
            Network::HecoMainnet => "Huobi ECO Chain Mainnet",
        }
    }

    /// EVM chain ID.
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::BscTestnet => 97,
            Network::BscMainnet => 56,
            Network::HecoMainnet => 128,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a network identifier resolves to. Any string is accepted; names that
/// are not an exact match end up in [`DeployTarget::Unconfigured`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployTarget {
    BscTestnet,
    BscMainnet,
    HecoMainnet,
    Unconfigured(String),
}

/// Work to perform for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployPlan {
    /// Deploy FlowCall and TokenReceiver, then wire them to each other.
    DeployAndWire(Network),
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Known network with no deployment configured yet (bscmainnet).
    Placeholder,
    /// Identifier not recognised.
    Unconfigured,
}

impl DeployTarget {
    pub fn parse(network: &str) -> Self {
        match network {
            "bsctestnet" => DeployTarget::BscTestnet,
            "bscmainnet" => DeployTarget::BscMainnet,
            "hecomainnet" => DeployTarget::HecoMainnet,
            other => DeployTarget::Unconfigured(other.to_string()),
        }
    }

    pub fn network(&self) -> Option<Network> {
        match self {
            DeployTarget::BscTestnet => Some(Network::BscTestnet),
            DeployTarget::BscMainnet => Some(Network::BscMainnet),
            DeployTarget::HecoMainnet => Some(Network::HecoMainnet),
            DeployTarget::Unconfigured(_) => None,
        }
    }

    pub fn plan(&self) -> DeployPlan {
        match self {
            DeployTarget::BscTestnet => DeployPlan::DeployAndWire(Network::BscTestnet),
            DeployTarget::HecoMainnet => DeployPlan::DeployAndWire(Network::HecoMainnet),
            // No mainnet deployment is defined; keep it a no-op.
            DeployTarget::BscMainnet => DeployPlan::Skip(SkipReason::Placeholder),
            DeployTarget::Unconfigured(_) => DeployPlan::Skip(SkipReason::Unconfigured),
        }
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployTarget::Unconfigured(name) => write!(f, "unconfigured network {name:?}"),
            known => match known.network() {
                Some(network) => f.write_str(network.name()),
                None => Ok(()),
            },
        }
    }
}
