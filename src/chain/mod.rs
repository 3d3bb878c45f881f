//! Chain Access
//!
//! Connection management and storage reads against a Substrate node over
//! JSON-RPC. A [`Connector`] opens exactly one [`StateReader`] session per
//! run; the session answers raw `state_getStorage` reads pinned to the
//! finalized block captured during the handshake, and knows the storage
//! layout and defaults from that block's runtime metadata.
//!
//! `ws://` and `wss://` endpoints are accepted and spoken to over plain
//! HTTP(S), which every public Substrate RPC node also serves.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod metadata;
pub mod traits;
pub mod types;


pub use errors::{ConnectError, QueryError};
pub use traits::{Connector, StateReader};
pub use types::RpcConnector;
