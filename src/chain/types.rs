// Standard library
use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::time::Duration;

// 3rd party crates
use frame_metadata::v14::StorageHasher;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A fully hashed runtime storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(pub Vec<u8>);

/// Unsigned integer encodings the reporter can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    U8,
    U16,
    U32,
    U64,
    U128,
    /// SCALE compact encoding of any unsigned integer.
    Compact,
}

/// One storage item as described by the runtime metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEntry {
    /// Pallet storage prefix.
    pub pallet: String,
    pub name: String,
    /// Empty for plain values, one hasher per key for maps.
    pub hashers: Vec<StorageHasher>,
    /// Key type of single-key maps, when it is an unsigned integer.
    pub key: Option<ScalarType>,
    /// Value type, when it is an unsigned integer.
    pub value: Option<ScalarType>,
    /// Encoded value returned for an empty key. `None` for optional items.
    pub default: Option<Vec<u8>>,
}

/// Storage items of a runtime, indexed by pallet prefix and item name.
#[derive(Debug, Clone, Default)]
pub struct RuntimeStorage {
    pub(super) pallets: HashMap<String, HashMap<String, StorageEntry>>,
}

/// Opens [`Connection`]s to a JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct RpcConnector {
    /// Endpoint as configured, e.g. `wss://...`.
    pub endpoint: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

/// One session with a node, pinned to the finalized block seen at open time.
#[derive(Debug)]
pub struct Connection {
    pub(super) client: Client,
    pub(super) url: Url,
    pub(super) endpoint: String,
    pub(super) chain: String,
    pub(super) block_hash: String,
    pub(super) storage: RuntimeStorage,
    pub(super) next_id: AtomicU64,
}

#[derive(Debug, Serialize)]
pub(super) struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

#[derive(Debug, Deserialize)]
pub(super) struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}
