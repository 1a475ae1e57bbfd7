use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use serde::{Serialize, Serializer};

pub use options::{RegTestOptions, SigNetOptions, VersionBitsParameters};
pub use rules::{ConsensusRules, SpacingEpoch};
pub use spacing::{average_target_spacing, avg_target_spacing};

use crate::blockchain::{Block, GenesisParams, Hash256};
use crate::bytes::Bytes;
use crate::error::ParamsError;

pub mod networks;
pub mod options;
pub mod rules;
pub mod spacing;

/// The networks we know of
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Main,
    #[serde(rename = "test")]
    Testnet,
    Testnet4,
    Signet,
    Regtest,
}

impl ChainType {
    pub const ALL: [ChainType; 5] = [ChainType::Main, ChainType::Testnet, ChainType::Testnet4, ChainType::Signet, ChainType::Regtest];

    pub fn name(&self) -> &'static str {
        match self {
            ChainType::Main => "main",
            ChainType::Testnet => "test",
            ChainType::Testnet4 => "testnet4",
            ChainType::Signet => "signet",
            ChainType::Regtest => "regtest",
        }
    }
}

impl Display for ChainType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChainType {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainType::ALL
            .iter()
            .find(|chain| chain.name() == s)
            .copied()
            .ok_or_else(|| ParamsError::UnknownChain(s.to_owned()))
    }
}

/// Soft forks signalled through version bits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeploymentPos {
    TestDummy,
    Taproot,
}

impl DeploymentPos {
    pub const ALL: [DeploymentPos; 2] = [DeploymentPos::TestDummy, DeploymentPos::Taproot];

    pub fn name(&self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Taproot => "taproot",
        }
    }

    fn index(&self) -> usize {
        match self {
            DeploymentPos::TestDummy => 0,
            DeploymentPos::Taproot => 1,
        }
    }
}

impl FromStr for DeploymentPos {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeploymentPos::ALL
            .iter()
            .find(|pos| pos.name() == s)
            .copied()
            .ok_or_else(|| ParamsError::UnknownDeployment(s.to_owned()))
    }
}

/// Soft forks activated at a fixed height
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BuriedDeployment {
    P2sh,
    HeightInCb,
    Cltv,
    DerSig,
    Csv,
    Segwit,
}

impl BuriedDeployment {
    pub const ALL: [BuriedDeployment; 6] = [
        BuriedDeployment::P2sh,
        BuriedDeployment::HeightInCb,
        BuriedDeployment::Cltv,
        BuriedDeployment::DerSig,
        BuriedDeployment::Csv,
        BuriedDeployment::Segwit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuriedDeployment::P2sh => "bip16",
            BuriedDeployment::HeightInCb => "bip34",
            BuriedDeployment::Cltv => "bip65",
            BuriedDeployment::DerSig => "bip66",
            BuriedDeployment::Csv => "csv",
            BuriedDeployment::Segwit => "segwit",
        }
    }
}

impl FromStr for BuriedDeployment {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuriedDeployment::ALL
            .iter()
            .find(|dep| dep.name() == s)
            .copied()
            .ok_or_else(|| ParamsError::UnknownDeployment(s.to_owned()))
    }
}

/// BIP9 deployment parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Bip9Deployment {
    pub bit: u8,
    pub start_time: i64,
    pub timeout: i64,
    pub min_activation_height: i32,
}

impl Bip9Deployment {
    /// Special start time, the deployment is active from the start
    pub const ALWAYS_ACTIVE: i64 = -1;
    /// Special start time, the deployment never activates
    pub const NEVER_ACTIVE: i64 = -2;
    pub const NO_TIMEOUT: i64 = i64::MAX;

    pub const fn new(bit: u8, start_time: i64) -> Self {
        Bip9Deployment { bit, start_time, timeout: Self::NO_TIMEOUT, min_activation_height: 0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsensusParams {
    pub hash_genesis_block: Hash256,
    pub subsidy_halving_interval: u32,
    pub initial_subsidy: i64,
    pub bip16_height: i32,
    pub bip34_height: i32,
    pub bip65_height: i32,
    pub bip66_height: i32,
    pub csv_height: i32,
    pub segwit_height: i32,
    /// Don't warn about unknown BIP9 activations below this height
    pub min_bip9_warning_height: i32,
    pub pow_limit_neoscrypt: Hash256,
    pub enforce_bip94: bool,
    pub pow_no_retargeting: bool,
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: [Bip9Deployment; 2],
    /// The best chain should have at least this much work
    pub minimum_chain_work: Hash256,
    /// By default assume that the signatures in ancestors of this block are valid
    pub default_assume_valid: Hash256,
    pub auxpow_chain_id: i32,
    pub rules: ConsensusRules,
    pub signet_blocks: bool,
    pub signet_challenge: Bytes,
}

impl ConsensusParams {
    pub fn deployment(&self, pos: DeploymentPos) -> &Bip9Deployment {
        &self.deployments[pos.index()]
    }

    pub fn deployment_mut(&mut self, pos: DeploymentPos) -> &mut Bip9Deployment {
        &mut self.deployments[pos.index()]
    }

    pub fn buried_height(&self, dep: BuriedDeployment) -> i32 {
        match dep {
            BuriedDeployment::P2sh => self.bip16_height,
            BuriedDeployment::HeightInCb => self.bip34_height,
            BuriedDeployment::Cltv => self.bip65_height,
            BuriedDeployment::DerSig => self.bip66_height,
            BuriedDeployment::Csv => self.csv_height,
            BuriedDeployment::Segwit => self.segwit_height,
        }
    }

    pub fn set_buried_height(&mut self, dep: BuriedDeployment, height: i32) {
        let field = match dep {
            BuriedDeployment::P2sh => &mut self.bip16_height,
            BuriedDeployment::HeightInCb => &mut self.bip34_height,
            BuriedDeployment::Cltv => &mut self.bip65_height,
            BuriedDeployment::DerSig => &mut self.bip66_height,
            BuriedDeployment::Csv => &mut self.csv_height,
            BuriedDeployment::Segwit => &mut self.segwit_height,
        };
        *field = height;
    }

    pub fn avg_target_spacing(&self, height: u32) -> i64 {
        spacing::avg_target_spacing(&self.rules, height)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
}

impl Base58Prefixes {
    pub fn new(pubkey: u8, script: u8, secret: u8, ext_public_key: [u8; 4], ext_secret_key: [u8; 4]) -> Self {
        Base58Prefixes {
            pubkey_address: vec![pubkey],
            script_address: vec![script],
            secret_key: vec![secret],
            ext_public_key: ext_public_key.to_vec(),
            ext_secret_key: ext_secret_key.to_vec()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Checkpoint {
    pub height: u32,
    pub hash: Hash256,
}

/// Known good UTXO set snapshot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AssumeUtxoData {
    pub height: u32,
    pub hash_serialized: Hash256,
    pub chain_tx_count: u64,
    pub blockhash: Hash256,
}

/// Statistics used to estimate verification progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ChainTxData {
    pub time: i64,
    pub tx_count: u64,
    pub tx_rate: f64,
}

/// Everything that defines one network. Built once at startup and then only read.
#[derive(Clone, Debug, Serialize)]
pub struct ChainParams {
    pub chain_type: ChainType,
    pub consensus: ConsensusParams,
    #[serde(serialize_with = "serialize_hex")]
    pub message_start: [u8; 4],
    pub default_port: u16,
    pub prune_after_height: u64,
    /// Approximate sizes in GB
    pub assumed_blockchain_size: u64,
    pub assumed_chain_state_size: u64,
    pub genesis_params: GenesisParams,
    pub genesis: Block,
    pub seeds: Vec<String>,
    pub base58_prefixes: Base58Prefixes,
    pub bech32_hrp: String,
    pub checkpoints: Vec<Checkpoint>,
    pub assumeutxo: Vec<AssumeUtxoData>,
    pub chain_tx_data: ChainTxData,
    pub default_consistency_checks: bool,
    pub is_mockable_chain: bool,
    pub default_check_name_db: i32,
}

impl ChainParams {
    pub fn new(chain_type: ChainType, signet: &SigNetOptions, regtest: &RegTestOptions) -> Self {
        debug!(target: crate::LOG_TARGET_PARAMS, "Creating params for {} chain", chain_type);
        match chain_type {
            ChainType::Main => Self::main(),
            ChainType::Testnet => Self::testnet(),
            ChainType::Testnet4 => Self::testnet4(),
            ChainType::Signet => Self::signet(signet),
            ChainType::Regtest => Self::regtest(regtest),
        }
    }

    pub fn main() -> Self {
        networks::main_params()
    }

    pub fn testnet() -> Self {
        networks::testnet_params()
    }

    pub fn testnet4() -> Self {
        networks::testnet4_params()
    }

    pub fn signet(options: &SigNetOptions) -> Self {
        networks::signet_params(options)
    }

    pub fn regtest(options: &RegTestOptions) -> Self {
        networks::regtest_params(options)
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.consensus.hash_genesis_block
    }

    pub fn avg_target_spacing(&self, height: u32) -> i64 {
        self.consensus.avg_target_spacing(height)
    }

    pub fn is_test_chain(&self) -> bool {
        self.chain_type != ChainType::Main
    }

    pub fn checkpoint(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints.iter().find(|c| c.height == height).map(|c| &c.hash)
    }

    pub fn available_snapshot_heights(&self) -> Vec<u32> {
        self.assumeutxo.iter().map(|data| data.height).collect()
    }

    pub fn assumeutxo_for_height(&self, height: u32) -> Option<&AssumeUtxoData> {
        self.assumeutxo.iter().find(|data| data.height == height)
    }

    pub fn assumeutxo_for_blockhash(&self, hash: &Hash256) -> Option<&AssumeUtxoData> {
        self.assumeutxo.iter().find(|data| data.blockhash == *hash)
    }
}

/// Finds the network whose default parameters use this message start
pub fn network_for_magic(message: &[u8; 4]) -> Option<ChainType> {
    ChainType::ALL
        .iter()
        .find(|chain| ChainParams::new(**chain, &SigNetOptions::default(), &RegTestOptions::default()).message_start == *message)
        .copied()
}

fn serialize_hex<S>(data: &[u8; 4], serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
    serializer.serialize_str(&crate::to_hex(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_names_round_trip() {
        for chain in ChainType::ALL {
            assert_eq!(chain.name().parse::<ChainType>().unwrap(), chain);
            assert_eq!(chain.to_string(), chain.name());
        }
        assert_eq!("mainnet".parse::<ChainType>(), Err(ParamsError::UnknownChain("mainnet".to_owned())));
    }

    #[test]
    fn deployment_names() {
        assert_eq!("taproot".parse::<DeploymentPos>().unwrap(), DeploymentPos::Taproot);
        assert_eq!("segwit".parse::<BuriedDeployment>().unwrap(), BuriedDeployment::Segwit);
        assert!("bip9".parse::<BuriedDeployment>().is_err());
        assert!("segwit".parse::<DeploymentPos>().is_err());
    }

    #[test]
    fn buried_heights_by_name() {
        let mut consensus = ChainParams::main().consensus;
        for dep in BuriedDeployment::ALL {
            consensus.set_buried_height(dep, 77);
            assert_eq!(consensus.buried_height(dep), 77);
        }
        assert_eq!(consensus.segwit_height, 77);
    }

    #[test]
    fn magic_round_trips() {
        for chain in ChainType::ALL {
            let params = ChainParams::new(chain, &SigNetOptions::default(), &RegTestOptions::default());
            assert_eq!(network_for_magic(&params.message_start), Some(chain));
        }
        assert_eq!(network_for_magic(&[0, 0, 0, 0]), None);
    }

    #[test]
    fn json_dump_uses_hex() {
        let params = ChainParams::main();
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["message_start"], "ccbeb4fe");
        assert_eq!(json["chain_type"], "main");
        assert_eq!(json["consensus"]["hash_genesis_block"], "e5062d76e5f50c42f493826ac9920b63a8def2626fd70a5cec707ec47a4c4651");
        assert_eq!(json["genesis"]["pow"]["algo"], "neoscrypt");
    }
}
