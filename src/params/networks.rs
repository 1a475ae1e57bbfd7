//! Hard-coded parameters of every network

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::blockchain::hash_utils::sha256d;
use crate::blockchain::{ensure_genesis, GenesisParams, Hash160, Hash256};
use crate::bytes::Bytes;
use crate::commons::*;
use crate::params::*;
use crate::ser::write_var_bytes;

const POW_LIMIT: &str = "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";
const POW_LIMIT_REGTEST: &str = "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

const SIGNET_DEFAULT_CHALLENGE: &str = "512103ad5e0edad18cb1f0fc0d28a3d4f1f3e445640337489abb10404f2d1e086be430210359ef5021964fe22d6f8e05b2463c9540ce96883fe3b278760f048f5189f2e6c452ae";

const MAIN_PREFIXES: ([u8; 4], [u8; 4]) = ([0x04, 0x88, 0xB2, 0x1E], [0x04, 0x88, 0xAD, 0xE4]);
const TEST_PREFIXES: ([u8; 4], [u8; 4]) = ([0x04, 0x35, 0x87, 0xCF], [0x04, 0x35, 0x83, 0x94]);

fn hash(string: &str) -> Hash256 {
    string.parse().expect("hard-coded hash parses")
}

fn premine(string: &str) -> Hash160 {
    string.parse().expect("hard-coded hash parses")
}

fn checkpoint(height: u32, block: &str) -> Checkpoint {
    Checkpoint { height, hash: hash(block) }
}

fn snapshot(height: u32, hash_serialized: &str, chain_tx_count: u64, blockhash: &str) -> AssumeUtxoData {
    AssumeUtxoData { height, hash_serialized: hash(hash_serialized), chain_tx_count, blockhash: hash(blockhash) }
}

fn seeds(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Network magic of a signet: the first four bytes of the double SHA256 of the serialized challenge
pub fn signet_message_start(challenge: &[u8]) -> [u8; 4] {
    let mut data = Vec::with_capacity(challenge.len() + 9);
    write_var_bytes(&mut data, challenge).expect("writing to a Vec never fails");
    let hash = sha256d(&data);
    let mut magic = [0u8; 4];
    magic.copy_from_slice(&hash.as_bytes()[..4]);
    magic
}

pub fn main_params() -> ChainParams {
    let genesis_params = GenesisParams::new(1531470713, 482087, 0x1e0ffff0, TIMESTAMP_MAINNET, premine(PREMINE_ADDRESS_MAINNET));
    let genesis = ensure_genesis(
        &genesis_params,
        "e5062d76e5f50c42f493826ac9920b63a8def2626fd70a5cec707ec47a4c4651",
        "0827901b75ab43978c3cf20a78baf040faeb0e2eeff3a2c58ab6521a6d46f8fd"
    );

    let consensus = ConsensusParams {
        hash_genesis_block: genesis.hash(),
        subsidy_halving_interval: 4_200_000,
        initial_subsidy: 382_934_346,
        bip16_height: 0,
        bip34_height: 1,
        bip65_height: 0,
        bip66_height: 0,
        csv_height: 1,
        segwit_height: 0,
        // Segwit activation height plus miner confirmation window
        min_bip9_warning_height: 2016,
        pow_limit_neoscrypt: hash(POW_LIMIT),
        enforce_bip94: false,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1815, // 90% of 2016
        miner_confirmation_window: 2016,
        deployments: [
            Bip9Deployment::new(28, Bip9Deployment::NEVER_ACTIVE),
            Bip9Deployment::new(2, Bip9Deployment::NEVER_ACTIVE),
        ],
        minimum_chain_work: hash("0000000000000000000000000000000000000000087d01af5f5d07ac7504ad09"),
        default_assume_valid: hash("e7e2e42a07146e80bc64279daefbba6580f1fc40945cdb8defaafde349e9b8d8"), // 6'140'000
        auxpow_chain_id: AUXPOW_CHAIN_ID,
        rules: ConsensusRules::MainNet,
        signet_blocks: false,
        signet_challenge: Bytes::default(),
    };

    ChainParams {
        chain_type: ChainType::Main,
        consensus,
        message_start: [0xcc, 0xbe, 0xb4, 0xfe],
        default_port: 8394,
        prune_after_height: 100_000,
        assumed_blockchain_size: 6,
        assumed_chain_state_size: 1,
        genesis_params,
        genesis,
        seeds: seeds(&["seed.xaya.io.", "seed.xaya.domob.eu."]),
        base58_prefixes: Base58Prefixes::new(28, 30, 130, MAIN_PREFIXES.0, MAIN_PREFIXES.1),
        bech32_hrp: "chi".to_owned(),
        checkpoints: vec![
            checkpoint(0, "ce46f5f898b38e9c8c5e9ae4047ef5bccc42ec8eca0142202813a625e6dc2656"),
            checkpoint(340_000, "e685ccaa62025c5c5075cfee80e498589bd4788614dcbe397e12bf2b8e887e47"),
            checkpoint(1_234_000, "a853c0581c3637726a769b77cadf185e09666742757ef2df00058e876cf25897"),
        ],
        assumeutxo: vec![snapshot(
            840_000,
            "a2a5521b1b5ab65f67818e5e8eccabb7171a517f9e2382208f77687310768f96",
            991_032_194,
            "0000000000000000000320283a032748cef8227873ff4872689bf23f1cda83a5"
        )],
        chain_tx_data: ChainTxData { time: 1725025292, tx_count: 8594116, tx_rate: 0.03238473620992331 },
        default_consistency_checks: false,
        is_mockable_chain: false,
        default_check_name_db: -1,
    }
}

pub fn testnet_params() -> ChainParams {
    let genesis_params = GenesisParams::new(1530623291, 343829, 0x1e0ffff0, TIMESTAMP_TESTNET, premine(PREMINE_ADDRESS_MAINNET));
    let genesis = ensure_genesis(
        &genesis_params,
        "5195fc01d0e23d70d1f929f21ec55f47e1c6ea1e66fae98ee44cbbc994509bba",
        "59d1a23342282179e810dff9238a97d07bd8602e3a1ba0efb5f519008541f257"
    );

    let miner_confirmation_window = 2016;
    let segwit_height = 0;
    let consensus = ConsensusParams {
        hash_genesis_block: genesis.hash(),
        subsidy_halving_interval: 4_200_000,
        initial_subsidy: 10 * COIN,
        bip16_height: 0,
        bip34_height: 1,
        bip65_height: 0,
        bip66_height: 0,
        csv_height: 1,
        segwit_height,
        min_bip9_warning_height: segwit_height + miner_confirmation_window as i32,
        pow_limit_neoscrypt: hash(POW_LIMIT),
        enforce_bip94: false,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1512, // 75%
        miner_confirmation_window,
        deployments: [
            Bip9Deployment::new(28, Bip9Deployment::NEVER_ACTIVE),
            Bip9Deployment::new(2, Bip9Deployment::NEVER_ACTIVE),
        ],
        minimum_chain_work: hash("0000000000000000000000000000000000000000000000000000e59eda1191b9"),
        default_assume_valid: hash("01547d538737e01d81d207e7d2f4c8f2510c6b82f0ee5dd8cd6c26bed5a03d0f"), // 110'000
        auxpow_chain_id: AUXPOW_CHAIN_ID,
        rules: ConsensusRules::TestNet,
        signet_blocks: false,
        signet_challenge: Bytes::default(),
    };

    ChainParams {
        chain_type: ChainType::Testnet,
        consensus,
        message_start: [0xcc, 0xbf, 0xb5, 0xfe],
        default_port: 18394,
        prune_after_height: 1000,
        assumed_blockchain_size: 1,
        assumed_chain_state_size: 1,
        genesis_params,
        genesis,
        seeds: seeds(&["seed.testnet.xaya.io.", "seed.testnet.xaya.domob.eu."]),
        base58_prefixes: Base58Prefixes::new(88, 90, 230, TEST_PREFIXES.0, TEST_PREFIXES.1),
        bech32_hrp: "chitn".to_owned(),
        checkpoints: vec![
            checkpoint(0, "3bcc29e821e7fbd374c7460306eb893725d69dbee87c4774cdcd618059b6a578"),
            checkpoint(11_000, "57670b799b6645c7776e9fdbd6abff510aaed9790625dd28072d0e87a7fafcf4"),
            checkpoint(70_000, "e2c154dc8e223cef271b54174c9d66eaf718378b30977c3df115ded629f3edb1"),
        ],
        assumeutxo: vec![snapshot(
            2_500_000,
            "f841584909f68e47897952345234e37fcd9128cd818f41ee6c3ca68db8071be7",
            66_484_552,
            "0000000000000093bcb68c03a9a168ae252572d348a2eaeba2cdf9231d73206f"
        )],
        chain_tx_data: ChainTxData { time: 1586091497, tx_count: 113579, tx_rate: 0.002815363095612851 },
        default_consistency_checks: false,
        is_mockable_chain: false,
        default_check_name_db: -1,
    }
}

pub fn testnet4_params() -> ChainParams {
    // Shares the genesis block with testnet
    let genesis_params = GenesisParams::new(1530623291, 343829, 0x1e0ffff0, TIMESTAMP_TESTNET, premine(PREMINE_ADDRESS_MAINNET));
    let genesis = ensure_genesis(
        &genesis_params,
        "5195fc01d0e23d70d1f929f21ec55f47e1c6ea1e66fae98ee44cbbc994509bba",
        "59d1a23342282179e810dff9238a97d07bd8602e3a1ba0efb5f519008541f257"
    );

    let consensus = ConsensusParams {
        hash_genesis_block: genesis.hash(),
        subsidy_halving_interval: 210_000,
        initial_subsidy: 50 * COIN,
        bip16_height: 1,
        bip34_height: 1,
        bip65_height: 1,
        bip66_height: 1,
        csv_height: 1,
        segwit_height: 1,
        min_bip9_warning_height: 0,
        pow_limit_neoscrypt: hash(POW_LIMIT),
        enforce_bip94: true,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1512, // 75%
        miner_confirmation_window: 2016,
        deployments: [
            Bip9Deployment::new(28, Bip9Deployment::NEVER_ACTIVE),
            Bip9Deployment::new(2, Bip9Deployment::ALWAYS_ACTIVE),
        ],
        minimum_chain_work: hash("00000000000000000000000000000000000000000000005faa15d02e6202f3ba"),
        default_assume_valid: hash("000000005be348057db991fa5d89fe7c4695b667cfb311391a8db374b6f681fd"), // 39550
        auxpow_chain_id: AUXPOW_CHAIN_ID,
        rules: ConsensusRules::TestNet,
        signet_blocks: false,
        signet_challenge: Bytes::default(),
    };

    ChainParams {
        chain_type: ChainType::Testnet4,
        consensus,
        message_start: [0x1c, 0x16, 0x3f, 0x28],
        default_port: 48333,
        prune_after_height: 1000,
        assumed_blockchain_size: 1,
        assumed_chain_state_size: 0,
        genesis_params,
        genesis,
        seeds: seeds(&["seed.testnet4.bitcoin.sprovoost.nl.", "seed.testnet4.wiz.biz."]),
        base58_prefixes: Base58Prefixes::new(111, 196, 239, TEST_PREFIXES.0, TEST_PREFIXES.1),
        bech32_hrp: "tb".to_owned(),
        checkpoints: Vec::new(),
        assumeutxo: Vec::new(),
        chain_tx_data: ChainTxData { time: 1723651702, tx_count: 757229, tx_rate: 0.01570402633472492 },
        default_consistency_checks: false,
        is_mockable_chain: false,
        default_check_name_db: -1,
    }
}

pub fn signet_params(options: &SigNetOptions) -> ChainParams {
    let (challenge, minimum_chain_work, default_assume_valid, assumed_blockchain_size, chain_tx_data) = match &options.challenge {
        None => {
            let challenge = Bytes::from_hex(SIGNET_DEFAULT_CHALLENGE).expect("hard-coded challenge parses");
            (
                challenge,
                hash("0000000000000000000000000000000000000000000000000000025dbd66e58f"),
                hash("0000014aad1d58dddcb964dd749b073374c6306e716b22f573a2efe68d414539"), // 208800
                2,
                ChainTxData { time: 1723655233, tx_count: 5507045, tx_rate: 0.06271073277261494 }
            )
        }
        Some(challenge) => {
            info!(target: LOG_TARGET_PARAMS, "Signet with challenge {}", challenge.to_hex());
            (challenge.clone(), Hash256::zero(), Hash256::zero(), 0, ChainTxData::default())
        }
    };
    let message_start = signet_message_start(&challenge);

    let genesis_params = GenesisParams::new(1601286749, 534547, 0x1e0ffff0, TIMESTAMP_TESTNET, premine(PREMINE_ADDRESS_MAINNET));
    let genesis = ensure_genesis(
        &genesis_params,
        "8d5223e215a03970bb3d3bc511a0d9a003e03cbc973289611ca6e0e617f57ccf",
        "59d1a23342282179e810dff9238a97d07bd8602e3a1ba0efb5f519008541f257"
    );

    let consensus = ConsensusParams {
        hash_genesis_block: genesis.hash(),
        subsidy_halving_interval: 210_000,
        initial_subsidy: 50 * COIN,
        bip16_height: 1,
        bip34_height: 1,
        bip65_height: 1,
        bip66_height: 1,
        csv_height: 1,
        segwit_height: 1,
        min_bip9_warning_height: 0,
        pow_limit_neoscrypt: hash(POW_LIMIT),
        enforce_bip94: false,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1815, // 90% of 2016
        miner_confirmation_window: 2016,
        deployments: [
            Bip9Deployment::new(28, Bip9Deployment::NEVER_ACTIVE),
            Bip9Deployment::new(2, Bip9Deployment::ALWAYS_ACTIVE),
        ],
        minimum_chain_work,
        default_assume_valid,
        auxpow_chain_id: AUXPOW_CHAIN_ID,
        rules: ConsensusRules::TestNet,
        signet_blocks: true,
        signet_challenge: challenge,
    };

    ChainParams {
        chain_type: ChainType::Signet,
        consensus,
        message_start,
        default_port: 38394,
        prune_after_height: 1000,
        assumed_blockchain_size,
        assumed_chain_state_size: 0,
        genesis_params,
        genesis,
        seeds: options.seeds.clone().unwrap_or_default(),
        base58_prefixes: Base58Prefixes::new(88, 90, 230, TEST_PREFIXES.0, TEST_PREFIXES.1),
        bech32_hrp: "tb".to_owned(),
        checkpoints: Vec::new(),
        assumeutxo: vec![snapshot(
            160_000,
            "fe0a44309b74d6b5883d246cb419c6221bcccf0b308c9b59b7d70783dbdf928a",
            2_289_496,
            "0000003ca3c99aff040f2563c2ad8f8ec88bd0fd6b8f0895cfaf1ef90353a62c"
        )],
        chain_tx_data,
        default_consistency_checks: false,
        is_mockable_chain: false,
        default_check_name_db: -1,
    }
}

pub fn regtest_params(options: &RegTestOptions) -> ChainParams {
    let genesis_params = GenesisParams::new(1300000000, 0, 0x207fffff, TIMESTAMP_TESTNET, premine(PREMINE_ADDRESS_REGTEST));
    let genesis = ensure_genesis(
        &genesis_params,
        "6f750b36d22f1dc3d0a6e483af45301022646dfc3b3ba2187865f5a7d6d83ab1",
        "9f96a4c275320aaf6386652444be5baade11e2f9f40221a98b968ae5c32dd55a"
    );

    let mut consensus = ConsensusParams {
        hash_genesis_block: genesis.hash(),
        subsidy_halving_interval: 150,
        initial_subsidy: 50 * COIN,
        // Always active unless overridden
        bip16_height: 0,
        bip34_height: 1,
        bip65_height: 1,
        bip66_height: 1,
        csv_height: 1,
        segwit_height: 0,
        min_bip9_warning_height: 0,
        pow_limit_neoscrypt: hash(POW_LIMIT_REGTEST),
        enforce_bip94: true,
        pow_no_retargeting: true,
        rule_change_activation_threshold: 108, // 75% of 144
        miner_confirmation_window: 144,
        deployments: [
            Bip9Deployment::new(28, 0),
            Bip9Deployment::new(2, Bip9Deployment::ALWAYS_ACTIVE),
        ],
        minimum_chain_work: Hash256::zero(),
        default_assume_valid: Hash256::zero(),
        auxpow_chain_id: AUXPOW_CHAIN_ID,
        rules: ConsensusRules::RegTest,
        signet_blocks: false,
        signet_challenge: Bytes::default(),
    };

    for (dep, height) in &options.activation_heights {
        debug!(target: LOG_TARGET_PARAMS, "Activation height of {} set to {}", dep.name(), height);
        consensus.set_buried_height(*dep, *height);
    }
    for (pos, parameters) in &options.version_bits_parameters {
        debug!(target: LOG_TARGET_PARAMS, "Version bits parameters of {} set to {:?}", pos.name(), parameters);
        let deployment = consensus.deployment_mut(*pos);
        deployment.start_time = parameters.start_time;
        deployment.timeout = parameters.timeout;
        deployment.min_activation_height = parameters.min_activation_height;
    }

    ChainParams {
        chain_type: ChainType::Regtest,
        consensus,
        message_start: [0xcc, 0xbf, 0xb5, 0xda],
        default_port: 18495,
        prune_after_height: if options.fastprune { 100 } else { 1000 },
        assumed_blockchain_size: 0,
        assumed_chain_state_size: 0,
        genesis_params,
        genesis,
        seeds: seeds(&["dummySeed.invalid."]),
        base58_prefixes: Base58Prefixes::new(88, 90, 230, TEST_PREFIXES.0, TEST_PREFIXES.1),
        bech32_hrp: "chirt".to_owned(),
        checkpoints: vec![checkpoint(0, "18042820e8a9f538e77e93c500768e5be76720383cd17e9b419916d8f356c619")],
        assumeutxo: vec![
            snapshot(
                110,
                "c7b1cf5103d6dd47a4feddb01f0fc951d109ed88f9b406f720a8a7f9942689e4",
                111,
                "b5b31111b3ee8c91956ffb9b248950dd26a878eb72ab7d9e9286bb27603c1ba2"
            ),
            snapshot(
                200,
                "4f34d431c3e482f6b0d67b64609ece3964dc8d7976d02ac68dd7c9c1421738f2",
                201,
                "5e93653318f294fb5aa339d00bbf8cf1c3515488ad99412c37608b139ea63b27"
            ),
            snapshot(
                299,
                "bc222dd2a08a561ff47d77c06af1fe35127bf4840392a83475332f45ea5efa3e",
                334,
                "cb3e6696a6e1713994cf6daf8c0c874e51d04a9f7ef5a19595639f0293002f70"
            ),
        ],
        chain_tx_data: ChainTxData::default(),
        default_consistency_checks: true,
        is_mockable_chain: true,
        default_check_name_db: 0,
    }
}
