// 3rd party crates
use thiserror::Error;

// Project imports
use crate::chain::ConnectError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
