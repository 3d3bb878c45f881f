// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::chain::constants::{default_connect_timeout, default_endpoint, default_request_timeout};
use crate::report::OutputFormat;

// Current module imports
use super::constants::{default_block_time, default_log_level, default_subnet};

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Rpc {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Report {
    /// Subnet inspected by the subnet-specific section
    #[serde(default = "default_subnet")]
    pub subnet: u16,
    #[serde(default = "default_block_time")]
    pub block_time_secs: u64,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub concurrent_global: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub rpc: Rpc,
    #[serde(default)]
    pub report: Report,
    /// Config file consulted while loading, logged once logging is up.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}
