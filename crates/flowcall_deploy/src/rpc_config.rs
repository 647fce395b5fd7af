use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::chain::get_chain_configs;
use crate::network::Network;

/// Configuration for a single RPC endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    pub network: Network,
    pub url: String,
    pub is_custom: bool,
    pub timeout_secs: u64,
}

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Per-network RPC endpoints with custom override support.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfigStore {
    configs: HashMap<Network, RpcConfig>,
}

impl RpcConfigStore {
    /// Create a store populated with default RPC URLs from [`get_chain_configs`].
    pub fn with_defaults() -> Self {
        let configs = get_chain_configs()
            .into_iter()
            .map(|(network, cc)| {
                let rpc = RpcConfig {
                    network,
                    url: cc.rpc_url,
                    is_custom: false,
                    timeout_secs: DEFAULT_TIMEOUT_SECS,
                };
                (network, rpc)
            })
            .collect();

        Self { configs }
    }

    pub fn get_rpc(&self, network: Network) -> Option<&RpcConfig> {
        self.configs.get(&network)
    }

    /// Override the RPC URL for a network with a custom endpoint.
    pub fn set_custom_rpc(&mut self, network: Network, url: String) -> anyhow::Result<()> {
        if !validate_url(&url) {
            anyhow::bail!("invalid RPC URL: {url}");
        }

        let entry = self.configs.entry(network).or_insert_with(|| RpcConfig {
            network,
            url: String::new(),
            is_custom: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        });
        entry.url = url;
        entry.is_custom = true;
        Ok(())
    }
}

/// Validate that a URL is well-formed and uses HTTP or HTTPS.
pub fn validate_url(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(parsed) => {
            let scheme = parsed.scheme();
            (scheme == "http" || scheme == "https") && parsed.host().is_some()
        }
        Err(_) => false,
    }
}
