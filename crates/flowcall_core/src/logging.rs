use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::DeployConfig;

/// Filter used when neither `RUST_LOG` nor a level is supplied.
fn default_filter(level: &str) -> String {
    format!("{level},flowcall_app=debug,flowcall_deploy=debug,flowcall_core=debug")
}

/// Initializes file + console logging under `~/.flowcall/logs`.
/// The returned guard must stay alive until the process exits.
pub fn init_logging(level: &str) -> Result<WorkerGuard> {
    let logs_dir = DeployConfig::logs_dir()?;
    std::fs::create_dir_all(&logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "flowcall");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}
