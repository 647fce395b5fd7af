use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::network::Network;

/// Network-specific configuration for a blockchain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub explorer_url: String,
}

impl ChainConfig {
    /// Explorer link for an address on this chain.
    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{address}", self.explorer_url)
    }
}

/// Returns default chain configurations for all supported networks.
pub fn get_chain_configs() -> HashMap<Network, ChainConfig> {
    let mut configs = HashMap::new();

    configs.insert(
        Network::BscTestnet,
        ChainConfig {
            name: Network::BscTestnet.label().to_string(),
            chain_id: 97,
            rpc_url: "https://data-seed-prebsc-1-s1.binance.org:8545".to_string(),
            explorer_url: "https://testnet.bscscan.com".to_string(),
        },
    );

    configs.insert(
        Network::BscMainnet,
        ChainConfig {
            name: Network::BscMainnet.label().to_string(),
            chain_id: 56,
            rpc_url: "https://bsc-dataseed.binance.org".to_string(),
            explorer_url: "https://bscscan.com".to_string(),
        },
    );

    configs.insert(
        Network::HecoMainnet,
        ChainConfig {
            name: Network::HecoMainnet.label().to_string(),
            chain_id: 128,
            rpc_url: "https://http-mainnet.hecochain.com".to_string(),
            explorer_url: "https://hecoinfo.com".to_string(),
        },
    );

    configs
}
