// Current module imports
use super::types::{ParameterSpec, Scope, StorageSelector, Unit};

/// Pallet holding every parameter in the catalog.
pub const SUBTENSOR_PALLET: &str = "SubtensorModule";

/// Subnet inspected when none is configured.
pub const DEFAULT_SUBNET: u16 = 1;

/// Approximate Subtensor block period used for duration estimates.
pub const DEFAULT_BLOCK_TIME_SECS: u64 = 12;

const fn global(name: &'static str, unit: Unit) -> ParameterSpec {
    ParameterSpec {
        name,
        scope: Scope::Global,
        unit,
        selector: StorageSelector {
            pallet: SUBTENSOR_PALLET,
            item: name,
        },
    }
}

const fn per_subnet(name: &'static str, unit: Unit) -> ParameterSpec {
    ParameterSpec {
        name,
        scope: Scope::Subnet,
        unit,
        selector: StorageSelector {
            pallet: SUBTENSOR_PALLET,
            item: name,
        },
    }
}

/// Every parameter the reporter queries, in output order.
pub static CATALOG: [ParameterSpec; 13] = [
    // Global rate limits
    global("TxRateLimit", Unit::Blocks),
    global("TxDelegateTakeRateLimit", Unit::Blocks),
    global("TxChildkeyTakeRateLimit", Unit::Blocks),
    global("NetworkRateLimit", Unit::Blocks),
    global("OwnerHyperparamRateLimit", Unit::Tempos),
    global("WeightsVersionKeyRateLimit", Unit::Blocks),
    global("AdminFreezeWindow", Unit::Blocks),
    // Subnet-specific rate limits
    per_subnet("ServingRateLimit", Unit::Blocks),
    per_subnet("AdjustmentInterval", Unit::Blocks),
    per_subnet("ImmunityPeriod", Unit::Blocks),
    per_subnet("WeightsSetRateLimit", Unit::Blocks),
    per_subnet("MaxRegistrationsPerBlock", Unit::Registrations),
    per_subnet("TargetRegistrationsPerInterval", Unit::Registrations),
];
