// Standard library
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info, trace};

// Current module imports
use super::constants::{
    JSONRPC_VERSION, METHOD_FINALIZED_HEAD, METHOD_GET_METADATA, METHOD_GET_STORAGE,
    METHOD_SYSTEM_CHAIN,
};
use super::errors::{ConnectError, QueryError};
use super::functions::{decode_hex, normalize_endpoint};
use super::traits::{Connector, StateReader};
use super::types::{
    Connection, RpcConnector, RpcRequest, RpcResponse, RuntimeStorage, StorageEntry, StorageKey,
};

impl RpcConnector {
    pub fn new(endpoint: &str, request_timeout_secs: u64, connect_timeout_secs: u64) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            request_timeout: Duration::from_secs(request_timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        }
    }

    fn handshake_error(&self, error: QueryError) -> ConnectError {
        match error {
            QueryError::Timeout => ConnectError::Timeout {
                endpoint: self.endpoint.clone(),
            },
            QueryError::Transport(source) if source.is_connect() => ConnectError::Unreachable {
                endpoint: self.endpoint.clone(),
                source,
            },
            other => ConnectError::Handshake {
                endpoint: self.endpoint.clone(),
                message: other.to_string(),
            },
        }
    }
}

#[async_trait]
impl Connector for RpcConnector {
    type Session = Connection;

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Opens a session, pins it to the current finalized block and indexes
    /// the runtime storage of that block.
    async fn open(&self) -> Result<Connection, ConnectError> {
        let url = normalize_endpoint(&self.endpoint)?;
        debug!(endpoint = %self.endpoint, url = %url, "Opening RPC session");

        let client: Client = Client::builder()
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(ConnectError::ClientBuild)?;

        let mut connection = Connection {
            client,
            url,
            endpoint: self.endpoint.clone(),
            chain: String::new(),
            block_hash: String::new(),
            storage: RuntimeStorage::default(),
            next_id: AtomicU64::new(1),
        };

        connection.chain = connection
            .call::<String>(METHOD_SYSTEM_CHAIN, json!([]))
            .await
            .map_err(|e| self.handshake_error(e))?
            .ok_or_else(|| ConnectError::Handshake {
                endpoint: self.endpoint.clone(),
                message: "node returned no chain name".to_string(),
            })?;

        connection.block_hash = connection
            .call::<String>(METHOD_FINALIZED_HEAD, json!([]))
            .await
            .map_err(|e| self.handshake_error(e))?
            .ok_or_else(|| ConnectError::Handshake {
                endpoint: self.endpoint.clone(),
                message: "node returned no finalized head".to_string(),
            })?;

        let metadata = connection
            .call::<String>(METHOD_GET_METADATA, json!([connection.block_hash]))
            .await
            .map_err(|e| self.handshake_error(e))?
            .ok_or_else(|| ConnectError::Handshake {
                endpoint: self.endpoint.clone(),
                message: "node returned no runtime metadata".to_string(),
            })?;
        let metadata = decode_hex(&metadata).map_err(|e| self.handshake_error(e))?;

        connection.storage =
            RuntimeStorage::from_metadata(&metadata).map_err(|source| ConnectError::Metadata {
                endpoint: self.endpoint.clone(),
                source,
            })?;
        debug!(items = connection.storage.len(), "Indexed runtime storage");

        info!(
            endpoint = %self.endpoint,
            chain = %connection.chain,
            block = %connection.block_hash,
            "Connected"
        );

        Ok(connection)
    }
}

impl Connection {
    /// Issues one JSON-RPC call. `Ok(None)` is a `null` result.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<Option<T>, QueryError> {
        let request = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        trace!(method = %method, id = request.id, "RPC request");

        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(QueryError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::HttpStatus(status.as_u16()));
        }

        let body: RpcResponse<T> = response.json().await.map_err(QueryError::from_transport)?;

        if let Some(error) = body.error {
            return Err(QueryError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(body.result)
    }
}

#[async_trait]
impl StateReader for Connection {
    async fn read_storage(&self, key: &StorageKey) -> Result<Option<Vec<u8>>, QueryError> {
        let key_hex = format!("0x{}", hex::encode(&key.0));
        let value: Option<String> = self
            .call(METHOD_GET_STORAGE, json!([key_hex, self.block_hash]))
            .await?;

        value.as_deref().map(decode_hex).transpose()
    }

    fn storage_entry(&self, pallet: &str, item: &str) -> Option<&StorageEntry> {
        self.storage.get(pallet, item)
    }

    fn chain(&self) -> Option<&str> {
        Some(&self.chain)
    }

    fn block_hash(&self) -> Option<&str> {
        Some(&self.block_hash)
    }

    fn close(self) {
        debug!(endpoint = %self.endpoint, "Closing RPC session");
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // The HTTP client's pooled sockets are released with it.
        trace!(endpoint = %self.endpoint, "RPC session released");
    }
}
