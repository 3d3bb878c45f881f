// Standard library
use std::collections::HashMap;

// 3rd party crates
use frame_metadata::v14::{
    PalletStorageMetadata, StorageEntryMetadata, StorageEntryModifier, StorageEntryType,
};
use frame_metadata::{RuntimeMetadata, RuntimeMetadataPrefixed};
use parity_scale_codec::{Compact, Decode, DecodeAll, Encode};
use scale_info::form::PortableForm;
use scale_info::{PortableRegistry, TypeDef, TypeDefPrimitive};
use tracing::trace;

// Current module imports
use super::errors::{MetadataError, QueryError};
use super::types::{RuntimeStorage, ScalarType, StorageEntry};

impl RuntimeStorage {
    /// Indexes every storage item of a SCALE-encoded `RuntimeMetadataPrefixed`.
    pub fn from_metadata(bytes: &[u8]) -> Result<Self, MetadataError> {
        let prefixed = RuntimeMetadataPrefixed::decode(&mut &bytes[..])?;

        let mut storage = RuntimeStorage::default();
        match &prefixed.1 {
            RuntimeMetadata::V14(metadata) => {
                for pallet in metadata.pallets.iter() {
                    if let Some(pallet_storage) = &pallet.storage {
                        storage.index_pallet(&metadata.types, pallet_storage);
                    }
                }
            }
            RuntimeMetadata::V15(metadata) => {
                for pallet in metadata.pallets.iter() {
                    if let Some(pallet_storage) = &pallet.storage {
                        storage.index_pallet(&metadata.types, pallet_storage);
                    }
                }
            }
            _ => return Err(MetadataError::UnsupportedVersion),
        }

        Ok(storage)
    }

    fn index_pallet(
        &mut self,
        types: &PortableRegistry,
        pallet_storage: &PalletStorageMetadata<PortableForm>,
    ) {
        for entry in pallet_storage.entries.iter() {
            self.insert(StorageEntry::from_metadata(
                &pallet_storage.prefix,
                entry,
                types,
            ));
        }
    }

    pub fn insert(&mut self, entry: StorageEntry) {
        self.pallets
            .entry(entry.pallet.clone())
            .or_default()
            .insert(entry.name.clone(), entry);
    }

    pub fn get(&self, pallet: &str, item: &str) -> Option<&StorageEntry> {
        self.pallets.get(pallet)?.get(item)
    }

    /// Number of indexed storage items across all pallets.
    pub fn len(&self) -> usize {
        self.pallets.values().map(HashMap::len).sum()
    }
}

impl StorageEntry {
    fn from_metadata(
        pallet: &str,
        entry: &StorageEntryMetadata<PortableForm>,
        types: &PortableRegistry,
    ) -> Self {
        let (hashers, key, value) = match &entry.ty {
            StorageEntryType::Plain(value) => (Vec::new(), None, scalar_type(types, value.id)),
            StorageEntryType::Map {
                hashers,
                key,
                value,
            } => (
                hashers.clone(),
                scalar_type(types, key.id),
                scalar_type(types, value.id),
            ),
        };

        let default = match entry.modifier {
            StorageEntryModifier::Default => Some(entry.default.clone()),
            StorageEntryModifier::Optional => None,
        };

        trace!(pallet, item = %entry.name, ?value, "Indexed storage item");

        StorageEntry {
            pallet: pallet.to_string(),
            name: entry.name.clone(),
            hashers,
            key,
            value,
            default,
        }
    }
}

/// Resolves a type id to an unsigned integer encoding, looking through
/// single-field wrappers such as `struct NetUid(u16)`.
fn scalar_type(types: &PortableRegistry, id: u32) -> Option<ScalarType> {
    let ty = types.resolve(id)?;
    match &ty.type_def {
        TypeDef::Primitive(primitive) => match primitive {
            TypeDefPrimitive::U8 => Some(ScalarType::U8),
            TypeDefPrimitive::U16 => Some(ScalarType::U16),
            TypeDefPrimitive::U32 => Some(ScalarType::U32),
            TypeDefPrimitive::U64 => Some(ScalarType::U64),
            TypeDefPrimitive::U128 => Some(ScalarType::U128),
            _ => None,
        },
        TypeDef::Compact(_) => Some(ScalarType::Compact),
        TypeDef::Composite(composite) if composite.fields.len() == 1 => {
            scalar_type(types, composite.fields[0].ty.id)
        }
        _ => None,
    }
}

impl ScalarType {
    /// Decodes a value of this type, consuming every byte.
    pub fn decode(&self, bytes: &[u8]) -> Result<u64, QueryError> {
        let input = &mut &bytes[..];
        let value = match self {
            ScalarType::U8 => u64::from(u8::decode_all(input)?),
            ScalarType::U16 => u64::from(u16::decode_all(input)?),
            ScalarType::U32 => u64::from(u32::decode_all(input)?),
            ScalarType::U64 => u64::decode_all(input)?,
            ScalarType::U128 => narrow(u128::decode_all(input)?)?,
            ScalarType::Compact => narrow(Compact::<u128>::decode_all(input)?.0)?,
        };
        Ok(value)
    }

    /// Encodes `value` as this type, or `None` when it does not fit.
    pub fn encode(&self, value: u64) -> Option<Vec<u8>> {
        let encoded = match self {
            ScalarType::U8 => u8::try_from(value).ok()?.encode(),
            ScalarType::U16 => u16::try_from(value).ok()?.encode(),
            ScalarType::U32 => u32::try_from(value).ok()?.encode(),
            ScalarType::U64 => value.encode(),
            ScalarType::U128 => u128::from(value).encode(),
            ScalarType::Compact => Compact(value).encode(),
        };
        Some(encoded)
    }
}

fn narrow(value: u128) -> Result<u64, QueryError> {
    u64::try_from(value).map_err(|_| QueryError::Overflow(value))
}
