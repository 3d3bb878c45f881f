/// Public Finney entrypoint.
pub const DEFAULT_ENDPOINT: &str = "wss://entrypoint-finney.opentensor.ai:443";

/// HTTP client settings
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const JSONRPC_VERSION: &str = "2.0";

/// RPC methods
pub const METHOD_SYSTEM_CHAIN: &str = "system_chain";
pub const METHOD_FINALIZED_HEAD: &str = "chain_getFinalizedHead";
pub const METHOD_GET_STORAGE: &str = "state_getStorage";
pub const METHOD_GET_METADATA: &str = "state_getMetadata";

pub fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

pub fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

pub fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}
