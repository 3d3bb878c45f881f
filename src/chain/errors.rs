// 3rd party crates
use thiserror::Error;

/// Failure to establish a session with the node. Fatal to the run.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("HTTP client error: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Endpoint '{endpoint}' is unreachable: {source}")]
    Unreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Timed out connecting to '{endpoint}'")]
    Timeout { endpoint: String },

    #[error("Handshake with '{endpoint}' failed: {message}")]
    Handshake { endpoint: String, message: String },

    #[error("Runtime metadata from '{endpoint}' is unusable: {source}")]
    Metadata {
        endpoint: String,
        #[source]
        source: MetadataError,
    },
}

/// Runtime metadata could not be turned into a storage index.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Failed to decode metadata: {0}")]
    Decode(#[from] parity_scale_codec::Error),

    #[error("Unsupported metadata version (only V14 and V15 are understood)")]
    UnsupportedVersion,
}

/// Failure to evaluate a single parameter. Never fatal.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Storage item {0} does not exist in the runtime metadata")]
    UnknownStorage(String),

    #[error("Storage item {item} takes {found} key(s), expected {expected}")]
    KeyShape {
        item: String,
        expected: usize,
        found: usize,
    },

    #[error("Key {value} does not fit the key type of {item}")]
    KeyOutOfRange { item: String, value: u64 },

    #[error("Storage item {0} does not hold an unsigned integer")]
    UnsupportedValue(String),

    #[error("Storage item is empty and has no default")]
    EmptyStorage,

    #[error("Malformed hex in response: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    #[error("Failed to decode value: {0}")]
    Decode(#[from] parity_scale_codec::Error),

    #[error("Value {0} does not fit in 64 bits")]
    Overflow(u128),
}

impl QueryError {
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            QueryError::Timeout
        } else {
            QueryError::Transport(error)
        }
    }
}
