//! Application configuration
//!
//! Resolved from command-line flags, then environment variables (a `.env`
//! file in the working directory is loaded first), then defaults.

use clap::Args;
use staff_client::ClientConfig;

#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Employee API base URL
    #[arg(long, env = "STAFF_API_URL", default_value = "http://localhost:3000")]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "STAFF_API_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, env = "STAFF_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "STAFF_LOG_JSON")]
    pub log_json: bool,
}

impl AppConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url).with_timeout(self.timeout)
    }
}
