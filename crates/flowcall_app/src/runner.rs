use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use flowcall_core::{AppError, DeployConfig};
use flowcall_deploy::{
    Address, ArtifactSet, DeployOutcome, DeployPlan, DeployTarget, Deployer, DeploymentLog,
    DeploymentRecord, JsonRpcDeployer, MemoryDeployer, Network, RpcConfigStore,
    RpcDeployerSettings, deploy_for, get_chain_configs,
};

/// Everything a single migration run needs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Passed through verbatim; unknown names are a no-op.
    pub network: String,
    pub config: DeployConfig,
    pub rpc_url: Option<String>,
    pub from: Option<String>,
    pub dry_run: bool,
    pub record_path: Option<PathBuf>,
}

pub async fn run(opts: &RunOptions) -> Result<DeployOutcome, AppError> {
    // Only a deploying network needs artifacts and a node.
    let deployer: Box<dyn Deployer> = match DeployTarget::parse(&opts.network).plan() {
        DeployPlan::DeployAndWire(network) => build_deployer(opts, network)?,
        DeployPlan::Skip(_) => Box::new(MemoryDeployer::new()),
    };

    let outcome = deploy_for(deployer.as_ref(), &opts.network).await?;

    if let DeployOutcome::Wired {
        network,
        flow_call,
        token_receiver,
    } = &outcome
    {
        if opts.dry_run {
            info!("dry run, deployment not recorded");
        } else {
            let path = match &opts.record_path {
                Some(path) => path.clone(),
                None => opts
                    .config
                    .resolved_record_path()
                    .map_err(|e| AppError::Config(format!("{e:#}")))?,
            };
            let record = DeploymentRecord {
                network: *network,
                flow_call: *flow_call,
                token_receiver: *token_receiver,
                deployed_at: Utc::now(),
            };
            if let Err(e) = append_record(&path, record) {
                warn!(path = %path.display(), "failed to record deployment: {e:#}");
            }
        }
    }

    Ok(outcome)
}

fn build_deployer(opts: &RunOptions, network: Network) -> Result<Box<dyn Deployer>, AppError> {
    if opts.dry_run {
        info!(network = network.name(), "dry run against in-memory chain");
        return Ok(Box::new(MemoryDeployer::new()));
    }

    let config = &opts.config;
    for name in config.rpc_overrides.keys() {
        if DeployTarget::parse(name).network().is_none() {
            warn!(network = %name, "ignoring RPC override for unknown network");
        }
    }
    let mut store = RpcConfigStore::with_defaults();
    // --rpc-url wins over the config file.
    if let Some(url) = opts
        .rpc_url
        .as_deref()
        .or_else(|| config.rpc_override(network.name()))
    {
        store
            .set_custom_rpc(network, url.to_string())
            .map_err(|e| AppError::Config(format!("{e:#}")))?;
    }
    let rpc = store
        .get_rpc(network)
        .ok_or_else(|| AppError::Config(format!("no RPC endpoint for {}", network.name())))?;

    let from = opts
        .from
        .as_deref()
        .or(config.from_address.as_deref())
        .map(str::parse::<Address>)
        .transpose()?;

    let artifacts = ArtifactSet::load(&config.artifacts_dir)?;

    let settings = RpcDeployerSettings {
        rpc_url: rpc.url.clone(),
        from,
        expected_chain_id: Some(network.chain_id()),
        request_timeout: Duration::from_secs(rpc.timeout_secs),
        confirmation_timeout: Duration::from_secs(config.confirmation_timeout_secs),
        poll_interval: Duration::from_millis(config.poll_interval_ms),
    };
    info!(network = network.name(), rpc_url = %settings.rpc_url, custom = rpc.is_custom, "connecting");
    Ok(Box::new(JsonRpcDeployer::new(settings, artifacts)?))
}

fn append_record(path: &std::path::Path, record: DeploymentRecord) -> anyhow::Result<()> {
    let mut log = DeploymentLog::load_from_file(path)?;
    log.push(record);
    log.save_to_file(path)
}

/// Console summary for a finished run.
pub fn summary(outcome: &DeployOutcome, dry_run: bool) -> String {
    match outcome {
        DeployOutcome::Wired {
            network,
            flow_call,
            token_receiver,
        } => {
            let configs = get_chain_configs();
            let link = |addr: &Address| {
                configs
                    .get(network)
                    .map(|c| format!(" ({})", c.address_url(&addr.to_string())))
                    .unwrap_or_default()
            };
            let prefix = if dry_run { "[dry run] " } else { "" };
            format!(
                "{prefix}Deployed on {network}\n  FlowCall:      {flow_call}{}\n  TokenReceiver: {token_receiver}{}\n  Wiring: FlowCall -> TokenReceiver, TokenReceiver -> FlowCall",
                if dry_run { String::new() } else { link(flow_call) },
                if dry_run { String::new() } else { link(token_receiver) },
            )
        }
        DeployOutcome::Skipped { target, .. } => {
            format!("Nothing to deploy for {target}")
        }
    }
}
