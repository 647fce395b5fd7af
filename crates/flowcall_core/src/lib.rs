pub mod config;
pub mod error;
pub mod logging;

pub use config::DeployConfig;
pub use error::{AppError, ErrorCategory};
