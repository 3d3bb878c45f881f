// Project imports
use crate::catalog::constants::{DEFAULT_BLOCK_TIME_SECS, DEFAULT_SUBNET};

/// Overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "RLCHECK_CONFIG_PATH";

/// Prefix of environment overrides, e.g. `RLCHECK_RPC__ENDPOINT`.
pub const ENV_PREFIX: &str = "RLCHECK";
pub const ENV_SEPARATOR: &str = "__";

pub const CONFIG_DIR_NAME: &str = "rlcheck";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

pub fn default_log_level() -> String {
    "warn".to_string()
}

pub fn default_subnet() -> u16 {
    DEFAULT_SUBNET
}

pub fn default_block_time() -> u64 {
    DEFAULT_BLOCK_TIME_SECS
}
