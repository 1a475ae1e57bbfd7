/// Number of base units in one coin
pub const COIN: i64 = 100_000_000;

/// Premined amount is 222,222,222 coins, the maximum possibly needed for the ICO.
/// Coins that end up not being needed are burnt later through an OP_RETURN output.
pub const PREMINE_AMOUNT: i64 = 222_222_222 * COIN;

pub const GENESIS_VERSION: i32 = 1;
pub const AUXPOW_CHAIN_ID: i32 = 1829;

pub const TIMESTAMP_TESTNET: &str = "Decentralised Autonomous Worlds";
pub const TIMESTAMP_MAINNET: &str = "HUC #2,351,800: 8730ea650d24cd01692a5adb943e7b8720b0ba8a4c64ffcdf5a95d9b3fb57b7f";

/// HASH160 of the 1-of-2 multisig redeem script receiving the regtest premine.
/// Multisig address is dHNvNaqcD7XPDnoRjAoyfcMpHRi5upJD7p
pub const PREMINE_ADDRESS_REGTEST: &str = "2b6defe41aa3aa47795b702c893c73e716d485ab";

/// HASH160 of the 2-of-4 multisig redeem script receiving the testnet and mainnet premine.
/// Multisig address is DHy2615XKevE23LVRVZVxGeqxadRGyiFW4
pub const PREMINE_ADDRESS_MAINNET: &str = "8cb1c236d34c74221fe4163bbba739b52e95f484";

/// Outpoint index of a null (coinbase) previous output
pub const NULL_INDEX: u32 = u32::MAX;
pub const SEQUENCE_FINAL: u32 = u32::MAX;

/// The miner reports its progress every this many nonces
pub const MINING_PROGRESS_INTERVAL: u64 = 1000;

pub const SETTINGS_FILENAME: &str = "chainparams.toml";

pub const LOG_TARGET_MAIN: &str = "chainparams::Main";
pub const LOG_TARGET_PARAMS: &str = "chainparams::Params";
pub const LOG_TARGET_MINER: &str = "chainparams::Miner";
