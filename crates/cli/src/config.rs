//! Process configuration: command-line flags with environment fallbacks.

use clap::Parser;

use warehouse_observability::{LogConfig, LogFormat};

#[derive(Debug, Clone, Parser)]
#[command(name = "warehouse")]
#[command(about = "Interactive inventory register for a building-materials warehouse")]
#[command(version)]
pub struct Config {
    /// Insert the sample items before the menu starts
    #[arg(long, env = "WAREHOUSE_SEED")]
    pub seed: bool,

    /// Log output format (json or pretty)
    #[arg(long, env = "WAREHOUSE_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "WAREHOUSE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            format: self.log_format,
            default_level: self.log_level.clone(),
        }
    }
}
