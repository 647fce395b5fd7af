mod runner;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use flowcall_core::{AppError, DeployConfig, logging};

use crate::runner::{RunOptions, run, summary};

/// Deploy FlowCall and TokenReceiver and point them at each other.
#[derive(Parser, Debug)]
#[command(name = "flowcall-migrate", version)]
struct Args {
    /// Target network: bsctestnet, bscmainnet or hecomainnet. Other names do nothing.
    #[arg(short, long)]
    network: String,

    /// Config file (defaults to ~/.flowcall/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with the compiled contract artifacts
    #[arg(long)]
    artifacts: Option<PathBuf>,

    /// RPC endpoint for this run, overriding the configured one
    #[arg(long)]
    rpc_url: Option<String>,

    /// Sender account (must be unlocked on the node)
    #[arg(long)]
    from: Option<String>,

    /// Simulate the run against an in-memory chain
    #[arg(long)]
    dry_run: bool,

    /// Deployment log file
    #[arg(long)]
    record: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<DeployConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => DeployConfig::load_from_path(path),
        None => DeployConfig::load(),
    }
    .map_err(|e| AppError::Config(format!("{e:#}")))?;
    if let Some(dir) = &args.artifacts {
        config.artifacts_dir = dir.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return ExitCode::from(e.exit_code());
        }
    };

    let _guard = match logging::init_logging(&config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {e:#}");
            None
        }
    };
    info!(network = %args.network, dry_run = args.dry_run, "starting migration");

    let opts = RunOptions {
        network: args.network,
        config,
        rpc_url: args.rpc_url,
        from: args.from,
        dry_run: args.dry_run,
        record_path: args.record,
    };

    // Returning lets `_guard` flush the file log.
    match run(&opts).await {
        Ok(outcome) => {
            println!("{}", summary(&outcome, opts.dry_run));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(category = ?e.category(), "migration failed: {e}");
            eprintln!("{}", e.user_message());
            ExitCode::from(e.exit_code())
        }
    }
}
