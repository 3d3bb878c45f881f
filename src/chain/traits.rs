// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::{ConnectError, QueryError};
use super::types::{StorageEntry, StorageKey};

/// A live session able to read runtime storage.
#[async_trait]
pub trait StateReader: Send + Sync {
    /// Reads the raw SCALE bytes stored under `key`.
    ///
    /// `Ok(None)` means the node answered but holds nothing at that key.
    async fn read_storage(&self, key: &StorageKey) -> Result<Option<Vec<u8>>, QueryError>;

    /// Looks up a storage item in the runtime metadata of the session.
    fn storage_entry(&self, pallet: &str, item: &str) -> Option<&StorageEntry>;

    /// Name of the connected chain, if the session knows it.
    fn chain(&self) -> Option<&str> {
        None
    }

    /// Block hash every read is pinned to, if any.
    fn block_hash(&self) -> Option<&str> {
        None
    }

    /// Releases the session. Dropping it has the same effect.
    fn close(self)
    where
        Self: Sized,
    {
    }
}

/// Opens sessions against one endpoint.
#[async_trait]
pub trait Connector: Send + Sync {
    type Session: StateReader;

    /// Human-readable target, used in logs and reports.
    fn endpoint(&self) -> &str;

    async fn open(&self) -> Result<Self::Session, ConnectError>;
}
