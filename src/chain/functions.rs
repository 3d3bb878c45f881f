// 3rd party crates
use frame_metadata::v14::StorageHasher;
use reqwest::Url;
use sp_crypto_hashing::{blake2_128, blake2_256, twox_128, twox_256, twox_64};

// Project imports
use crate::catalog::{ParameterSpec, Scope};

// Current module imports
use super::errors::{ConnectError, QueryError};
use super::traits::StateReader;
use super::types::{StorageEntry, StorageKey};

/// Hashes one encoded map key the way `hasher` lays it out in storage.
pub fn hash_key(hasher: &StorageHasher, encoded: &[u8]) -> Vec<u8> {
    match hasher {
        StorageHasher::Blake2_128 => blake2_128(encoded).to_vec(),
        StorageHasher::Blake2_256 => blake2_256(encoded).to_vec(),
        StorageHasher::Blake2_128Concat => [&blake2_128(encoded)[..], encoded].concat(),
        StorageHasher::Twox128 => twox_128(encoded).to_vec(),
        StorageHasher::Twox256 => twox_256(encoded).to_vec(),
        StorageHasher::Twox64Concat => [&twox_64(encoded)[..], encoded].concat(),
        StorageHasher::Identity => encoded.to_vec(),
    }
}

/// Builds the storage key of `entry`. Subnet-scoped items are single-key
/// maps keyed by the subnet id; global items are plain values.
pub fn storage_key(
    entry: &StorageEntry,
    scope: Scope,
    subnet: u16,
) -> Result<StorageKey, QueryError> {
    let expected = match scope {
        Scope::Global => 0,
        Scope::Subnet => 1,
    };
    if entry.hashers.len() != expected {
        return Err(QueryError::KeyShape {
            item: entry.name.clone(),
            expected,
            found: entry.hashers.len(),
        });
    }

    let mut key = Vec::with_capacity(48);
    key.extend_from_slice(&twox_128(entry.pallet.as_bytes()));
    key.extend_from_slice(&twox_128(entry.name.as_bytes()));

    if let Some(hasher) = entry.hashers.first() {
        let encoded = entry
            .key
            .and_then(|ty| ty.encode(u64::from(subnet)))
            .ok_or_else(|| QueryError::KeyOutOfRange {
                item: entry.name.clone(),
                value: u64::from(subnet),
            })?;
        key.extend_from_slice(&hash_key(hasher, &encoded));
    }

    Ok(StorageKey(key))
}

/// Reads and decodes one catalog parameter at the session's block.
///
/// An empty key yields the item's default from the runtime metadata, which
/// is what the runtime itself returns for a value that was never written.
pub async fn fetch_value<R>(reader: &R, spec: &ParameterSpec, subnet: u16) -> Result<u64, QueryError>
where
    R: StateReader + ?Sized,
{
    let selector = &spec.selector;
    let entry = reader
        .storage_entry(selector.pallet, selector.item)
        .ok_or_else(|| QueryError::UnknownStorage(selector.path()))?;
    let value_type = entry
        .value
        .ok_or_else(|| QueryError::UnsupportedValue(selector.path()))?;

    let key = storage_key(entry, spec.scope, subnet)?;
    let bytes = match reader.read_storage(&key).await? {
        Some(bytes) => bytes,
        None => entry.default.clone().ok_or(QueryError::EmptyStorage)?,
    };

    value_type.decode(&bytes)
}

/// Maps a configured endpoint to the HTTP(S) URL the JSON-RPC client talks to.
pub fn normalize_endpoint(endpoint: &str) -> Result<Url, ConnectError> {
    let invalid = |reason: String| ConnectError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let mut url: Url = endpoint.trim().parse().map_err(|e| invalid(format!("{}", e)))?;

    let scheme = match url.scheme() {
        "http" | "ws" => "http",
        "https" | "wss" => "https",
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    };

    url.set_scheme(scheme)
        .map_err(|_| invalid(format!("cannot switch scheme to '{}'", scheme)))?;

    Ok(url)
}

/// Decodes a `0x`-prefixed hex string.
pub fn decode_hex(value: &str) -> Result<Vec<u8>, QueryError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    Ok(hex::decode(digits)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::types::ScalarType;

    fn entry(name: &str, hashers: Vec<StorageHasher>, key: Option<ScalarType>) -> StorageEntry {
        StorageEntry {
            pallet: "SubtensorModule".into(),
            name: name.into(),
            hashers,
            key,
            value: Some(ScalarType::U64),
            default: Some(vec![0; 8]),
        }
    }

    #[test]
    fn plain_key_matches_well_known_prefixes() {
        let account = StorageEntry {
            pallet: "System".into(),
            ..entry("Account", vec![], None)
        };
        let key = storage_key(&account, Scope::Global, 1).unwrap();

        assert_eq!(
            hex::encode(&key.0),
            "26aa394eea5630e07c48ae0c9558cef7b99d880ec681799c0cf30e8886371da9"
        );
    }

    #[test]
    fn global_key_ignores_the_subnet_id() {
        let plain = entry("TxRateLimit", vec![], None);
        let key = storage_key(&plain, Scope::Global, 1).unwrap();

        assert_eq!(key.0.len(), 32);
        assert_eq!(storage_key(&plain, Scope::Global, 7).unwrap(), key);
    }

    #[test]
    fn identity_map_key_appends_raw_subnet_id() {
        let map = entry(
            "ServingRateLimit",
            vec![StorageHasher::Identity],
            Some(ScalarType::U16),
        );

        let key = storage_key(&map, Scope::Subnet, 1).unwrap();
        assert_eq!(key.0.len(), 34);
        assert_eq!(&key.0[32..], &[0x01, 0x00]);

        let key = storage_key(&map, Scope::Subnet, 258).unwrap();
        assert_eq!(&key.0[32..], &[0x02, 0x01]);
    }

    #[test]
    fn concat_hashers_prefix_the_hash() {
        let map = entry(
            "Example",
            vec![StorageHasher::Twox64Concat],
            Some(ScalarType::U16),
        );
        let key = storage_key(&map, Scope::Subnet, 3).unwrap();

        assert_eq!(key.0.len(), 32 + 8 + 2);
        assert_eq!(&key.0[32..40], &twox_64(&[0x03, 0x00]));
        assert_eq!(&key.0[40..], &[0x03, 0x00]);

        let hashed = hash_key(&StorageHasher::Blake2_128Concat, &[0x03, 0x00]);
        assert_eq!(hashed.len(), 16 + 2);
        assert_eq!(&hashed[16..], &[0x03, 0x00]);
    }

    #[test]
    fn key_type_width_follows_metadata() {
        let wide = entry(
            "Example",
            vec![StorageHasher::Identity],
            Some(ScalarType::U32),
        );
        let key = storage_key(&wide, Scope::Subnet, 3).unwrap();
        assert_eq!(&key.0[32..], &[0x03, 0x00, 0x00, 0x00]);

        let narrow = entry("Example", vec![StorageHasher::Identity], Some(ScalarType::U8));
        assert!(matches!(
            storage_key(&narrow, Scope::Subnet, 300),
            Err(QueryError::KeyOutOfRange { value: 300, .. })
        ));
    }

    #[test]
    fn scope_must_match_the_item_shape() {
        let plain = entry("TxRateLimit", vec![], None);
        assert!(matches!(
            storage_key(&plain, Scope::Subnet, 1),
            Err(QueryError::KeyShape { expected: 1, found: 0, .. })
        ));

        let double = entry(
            "Keys",
            vec![StorageHasher::Identity, StorageHasher::Blake2_128Concat],
            Some(ScalarType::U16),
        );
        assert!(matches!(
            storage_key(&double, Scope::Subnet, 1),
            Err(QueryError::KeyShape { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn scalar_values_decode_by_declared_type() {
        assert_eq!(ScalarType::U8.decode(&[0x2a]).unwrap(), 42);
        assert_eq!(ScalarType::U16.decode(&[0x68, 0x01]).unwrap(), 360);
        assert_eq!(ScalarType::U32.decode(&7200u32.to_le_bytes()).unwrap(), 7200);
        assert_eq!(ScalarType::U64.decode(&7200u64.to_le_bytes()).unwrap(), 7200);
        assert_eq!(ScalarType::U128.decode(&7200u128.to_le_bytes()).unwrap(), 7200);
        // compact 7200 is a two-byte mode value
        assert_eq!(ScalarType::Compact.decode(&[0x81, 0x70]).unwrap(), 7200);
    }

    #[test]
    fn scalar_values_reject_wrong_widths_and_overflow() {
        assert!(matches!(
            ScalarType::U64.decode(&[0x20, 0x1c]),
            Err(QueryError::Decode(_))
        ));
        assert!(matches!(
            ScalarType::U16.decode(&7200u64.to_le_bytes()),
            Err(QueryError::Decode(_))
        ));
        assert!(matches!(
            ScalarType::U128.decode(&u128::MAX.to_le_bytes()),
            Err(QueryError::Overflow(_))
        ));
    }

    #[test]
    fn websocket_endpoints_map_to_http() {
        let url = normalize_endpoint("wss://entrypoint-finney.opentensor.ai:443").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("entrypoint-finney.opentensor.ai"));

        let url = normalize_endpoint("ws://127.0.0.1:9944").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9944/");

        let url = normalize_endpoint("https://example.org/rpc").unwrap();
        assert_eq!(url.as_str(), "https://example.org/rpc");
    }

    #[test]
    fn unsupported_or_garbage_endpoints_are_rejected() {
        assert!(matches!(
            normalize_endpoint("ftp://example.org"),
            Err(ConnectError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            normalize_endpoint("not a url"),
            Err(ConnectError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn hex_prefix_is_optional() {
        assert_eq!(decode_hex("0x2001").unwrap(), vec![0x20, 0x01]);
        assert_eq!(decode_hex("2001").unwrap(), vec![0x20, 0x01]);
        assert!(matches!(decode_hex("0xzz"), Err(QueryError::MalformedHex(_))));
    }
}
