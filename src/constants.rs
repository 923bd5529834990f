//! Constants used in the deploy scripts

use alloy_primitives::{address, Address};

/// Genesis timestamp of the reward schedules, shared by the token
/// and the genesis pools
pub const GENESIS_TIMESTAMP: u64 = 1641135600;

/// One day, in seconds
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Start of the DibsRewardPool schedule, one day after the genesis pool starts
pub const DIBS_REWARD_POOL_START: u64 = GENESIS_TIMESTAMP + SECONDS_PER_DAY;

/// The TWAP window of the price oracle, in seconds (6 hours)
pub const ORACLE_PERIOD_SECS: u64 = 21_600;

/// The DIBS/WBNB PancakeSwap pair address.
///
/// Referenced by both the price oracle and the tax oracle.
pub const DIBS_WBNB_PAIR_ADDRESS: Address =
    address!("0x9bEBe118018d0De55b00787B5eeABB9EDa8A9e0A");

/// The wrapped-BNB token address
pub const WBNB_ADDRESS: Address = address!("0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c");

/// The number of confirmations to wait for a deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The file extension of creation bytecode artifacts
pub const BYTECODE_EXTENSION: &str = "bin";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The DShare token unit name
pub const DSHARE: &str = "DShare";

/// The DShare reward pool unit name
pub const DSHARE_REWARD_POOL: &str = "DShareRewardPool";

/// The Dibs token unit name
pub const DIBS: &str = "Dibs";

/// The genesis reward pool unit name
pub const BANANA_GENESIS_REWARD_POOL: &str = "BananaGenesisRewardPool";

/// The Dibs reward pool unit name
pub const DIBS_REWARD_POOL: &str = "DibsRewardPool";

/// The price oracle unit name
pub const ORACLE: &str = "Oracle";

/// The tax office unit name
pub const TAX_OFFICE_V2: &str = "TaxOfficeV2";

/// The tax oracle unit name
pub const TAX_ORACLE: &str = "TaxOracle";

/// The liquidity zap unit name
pub const ZAP: &str = "Zap";
