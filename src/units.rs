//! The declarative deployment unit set for the Dibs protocol

use alloy_primitives::U256;

use crate::{
    constants::{
        BANANA_GENESIS_REWARD_POOL, DIBS, DIBS_REWARD_POOL, DIBS_REWARD_POOL_START,
        DIBS_WBNB_PAIR_ADDRESS, DSHARE, DSHARE_REWARD_POOL, GENESIS_TIMESTAMP, ORACLE,
        ORACLE_PERIOD_SECS, TAX_OFFICE_V2, TAX_ORACLE, WBNB_ADDRESS, ZAP,
    },
    types::{ConstructorArg, DeploymentUnit, NamedAccounts, UnitTag},
};

/// Build the full unit set, with the named-account addresses embedded as literals
pub fn protocol_units(accounts: &NamedAccounts) -> Vec<DeploymentUnit> {
    vec![
        DeploymentUnit {
            name: DSHARE,
            tags: vec![UnitTag::DShare],
            args: vec![
                ConstructorArg::Uint(U256::from(GENESIS_TIMESTAMP)),
                ConstructorArg::Address(accounts.dao),
                ConstructorArg::Address(accounts.dev),
            ],
        },
        DeploymentUnit {
            name: DSHARE_REWARD_POOL,
            tags: vec![UnitTag::DShareRewardPool],
            // the pool starts exactly at token genesis
            args: vec![
                ConstructorArg::Ref(DSHARE),
                ConstructorArg::Uint(U256::from(GENESIS_TIMESTAMP)),
            ],
        },
        DeploymentUnit {
            name: DIBS,
            tags: vec![UnitTag::Dibs],
            args: vec![
                ConstructorArg::Uint(U256::ZERO),
                ConstructorArg::Address(accounts.dev),
            ],
        },
        DeploymentUnit {
            name: BANANA_GENESIS_REWARD_POOL,
            tags: vec![UnitTag::DibsGenesisRewardPool],
            args: vec![
                ConstructorArg::Ref(DIBS),
                ConstructorArg::Uint(U256::from(GENESIS_TIMESTAMP)),
            ],
        },
        DeploymentUnit {
            name: DIBS_REWARD_POOL,
            tags: vec![UnitTag::DibsRewardPool],
            // starts one day after the genesis pool
            args: vec![
                ConstructorArg::Ref(DIBS),
                ConstructorArg::Uint(U256::from(DIBS_REWARD_POOL_START)),
            ],
        },
        DeploymentUnit {
            name: ORACLE,
            tags: vec![UnitTag::Oracle],
            args: vec![
                ConstructorArg::Address(DIBS_WBNB_PAIR_ADDRESS),
                ConstructorArg::Uint(U256::from(ORACLE_PERIOD_SECS)),
                ConstructorArg::Uint(U256::from(GENESIS_TIMESTAMP)),
            ],
        },
        DeploymentUnit {
            name: TAX_OFFICE_V2,
            tags: vec![UnitTag::TaxOfficeV2],
            args: vec![],
        },
        DeploymentUnit {
            name: TAX_ORACLE,
            tags: vec![UnitTag::TaxOracle],
            args: vec![
                ConstructorArg::Ref(DIBS),
                ConstructorArg::Address(WBNB_ADDRESS),
                ConstructorArg::Address(DIBS_WBNB_PAIR_ADDRESS),
            ],
        },
        DeploymentUnit {
            name: ZAP,
            tags: vec![UnitTag::Zap],
            args: vec![ConstructorArg::Address(WBNB_ADDRESS)],
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use alloy_primitives::Address;

    use super::protocol_units;
    use crate::{
        constants::{DIBS_REWARD_POOL_START, GENESIS_TIMESTAMP, SECONDS_PER_DAY},
        types::NamedAccounts,
    };

    /// Dummy named accounts for building the unit set
    fn accounts() -> NamedAccounts {
        NamedAccounts {
            dao: Address::with_last_byte(0xda),
            dev: Address::with_last_byte(0xde),
        }
    }

    #[test]
    fn unit_names_are_unique() {
        let units = protocol_units(&accounts());
        let names: BTreeSet<&str> = units.iter().map(|u| u.name).collect();
        assert_eq!(names.len(), units.len());
    }

    #[test]
    fn all_references_are_declared() {
        let units = protocol_units(&accounts());
        let names: BTreeSet<&str> = units.iter().map(|u| u.name).collect();
        for unit in &units {
            for dep in unit.dependencies() {
                assert!(names.contains(dep), "{} references undeclared {dep}", unit.name);
            }
        }
    }

    #[test]
    fn dibs_pool_starts_one_day_after_genesis() {
        assert_eq!(DIBS_REWARD_POOL_START, GENESIS_TIMESTAMP + SECONDS_PER_DAY);
        assert_eq!(DIBS_REWARD_POOL_START, 1641222000);
    }
}
