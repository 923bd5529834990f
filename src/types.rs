//! Type definitions used throughout the deploy scripts

use std::fmt::{self, Display};

use alloy_primitives::{Address, U256};
use clap::ValueEnum;

/// The tags by which deployment units can be selected
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnitTag {
    /// The DShare token
    DShare,
    /// The DShare reward pool
    DShareRewardPool,
    /// The Dibs token
    Dibs,
    /// The genesis reward pool
    DibsGenesisRewardPool,
    /// The Dibs reward pool
    DibsRewardPool,
    /// The TWAP price oracle
    Oracle,
    /// The tax office
    TaxOfficeV2,
    /// The tax oracle
    TaxOracle,
    /// The liquidity zap
    Zap,
}

impl Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitTag::DShare => write!(f, "DShare"),
            UnitTag::DShareRewardPool => write!(f, "DShareRewardPool"),
            UnitTag::Dibs => write!(f, "Dibs"),
            UnitTag::DibsGenesisRewardPool => write!(f, "DibsGenesisRewardPool"),
            UnitTag::DibsRewardPool => write!(f, "DibsRewardPool"),
            UnitTag::Oracle => write!(f, "Oracle"),
            UnitTag::TaxOfficeV2 => write!(f, "TaxOfficeV2"),
            UnitTag::TaxOracle => write!(f, "TaxOracle"),
            UnitTag::Zap => write!(f, "Zap"),
        }
    }
}

/// A single constructor argument descriptor
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstructorArg {
    /// An address literal, passed through verbatim
    Address(Address),
    /// A numeric literal (timestamps, periods), passed through verbatim
    Uint(U256),
    /// The address of another unit, resolved through the registry
    Ref(&'static str),
}

/// A constructor argument after reference resolution
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedArg {
    /// An address argument
    Address(Address),
    /// A numeric argument
    Uint(U256),
}

impl Display for ResolvedArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedArg::Address(addr) => write!(f, "{:#x}", addr),
            ResolvedArg::Uint(value) => write!(f, "{}", value),
        }
    }
}

/// One named contract instantiation request
#[derive(Clone, Debug)]
pub struct DeploymentUnit {
    /// The registry name, unique per network
    pub name: &'static str,
    /// The tags for selective invocation
    pub tags: Vec<UnitTag>,
    /// The ordered constructor argument descriptors
    pub args: Vec<ConstructorArg>,
}

impl DeploymentUnit {
    /// The names of the units this unit references
    pub fn dependencies(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.args.iter().filter_map(|arg| match arg {
            ConstructorArg::Ref(name) => Some(*name),
            _ => None,
        })
    }
}

/// The addresses of the named deployer-side accounts
#[derive(Copy, Clone, Debug)]
pub struct NamedAccounts {
    /// The DAO fund address
    pub dao: Address,
    /// The dev fund address
    pub dev: Address,
}

/// The result of deploying, or skipping, one unit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployOutcome {
    /// The unit name
    pub name: &'static str,
    /// The deployed address
    pub address: Address,
    /// Whether a new contract was constructed, as opposed to a registry cache hit
    pub fresh: bool,
}
