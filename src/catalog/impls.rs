// Current module imports
use super::constants::CATALOG;
use super::types::{ParameterSpec, Scope, StorageSelector, Unit};

impl ParameterSpec {
    pub fn is_subnet_scoped(&self) -> bool {
        self.scope == Scope::Subnet
    }

    /// Catalog entries of the given scope, in catalog order.
    pub fn of_scope(scope: Scope) -> impl Iterator<Item = &'static ParameterSpec> {
        CATALOG.iter().filter(move |spec| spec.scope == scope)
    }
}

impl StorageSelector {
    /// `Pallet.Item`, as shown in logs and JSON output.
    pub fn path(&self) -> String {
        format!("{}.{}", self.pallet, self.item)
    }
}

impl Unit {
    /// Noun printed after a passthrough count.
    pub fn noun(&self) -> &'static str {
        match self {
            Unit::Blocks => "blocks",
            Unit::Tempos => "tempos",
            Unit::Registrations => "registrations",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_seven_global_then_six_subnet_entries() {
        let globals: Vec<_> = ParameterSpec::of_scope(Scope::Global).collect();
        let subnets: Vec<_> = ParameterSpec::of_scope(Scope::Subnet).collect();

        assert_eq!(globals.len(), 7);
        assert_eq!(subnets.len(), 6);

        // no global entry may follow a subnet entry
        let first_subnet = CATALOG.iter().position(|s| s.is_subnet_scoped()).unwrap();
        assert!(CATALOG[first_subnet..].iter().all(|s| s.is_subnet_scoped()));
    }

    #[test]
    fn catalog_order_is_fixed() {
        let names: Vec<&str> = CATALOG.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "TxRateLimit",
                "TxDelegateTakeRateLimit",
                "TxChildkeyTakeRateLimit",
                "NetworkRateLimit",
                "OwnerHyperparamRateLimit",
                "WeightsVersionKeyRateLimit",
                "AdminFreezeWindow",
                "ServingRateLimit",
                "AdjustmentInterval",
                "ImmunityPeriod",
                "WeightsSetRateLimit",
                "MaxRegistrationsPerBlock",
                "TargetRegistrationsPerInterval",
            ]
        );
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = CATALOG.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn selector_path_joins_pallet_and_item() {
        assert_eq!(CATALOG[0].selector.path(), "SubtensorModule.TxRateLimit");
    }
}
