// 3rd party crates
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("RPC endpoint must not be empty")]
    EmptyEndpoint,
    #[error("{0} must be greater than 0")]
    ZeroTimeout(&'static str),
    #[error("Block time must be greater than 0 seconds")]
    ZeroBlockTime,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}
