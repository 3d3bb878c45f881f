// 3rd party crates
use serde::Serialize;

/// Whether a parameter is a plain storage value or a map indexed by subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Global,
    Subnet,
}

/// How the raw integer read from storage is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// A block count, shown together with an approximate duration in hours.
    Blocks,
    /// A count of tempos, shown as is.
    Tempos,
    /// A count of registrations, shown as is.
    Registrations,
}

/// Location of a value in the runtime storage.
///
/// Key hashers and value types come from the runtime metadata, not from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageSelector {
    pub pallet: &'static str,
    pub item: &'static str,
}

/// One queryable on-chain parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub scope: Scope,
    pub unit: Unit,
    pub selector: StorageSelector,
}
