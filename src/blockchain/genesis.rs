#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use serde::Serialize;

use crate::blockchain::block::{Block, PureHeader};
use crate::blockchain::pow::PowData;
use crate::blockchain::script::{Script, OP_EQUAL, OP_HASH160};
use crate::blockchain::transaction::{Transaction, TxOut};
use crate::blockchain::{Hash160, Hash256, PowAlgo};
use crate::commons::{GENESIS_VERSION, LOG_TARGET_PARAMS, PREMINE_AMOUNT};
use crate::error::ParamsError;

/// Scalar inputs the genesis block of a network is built from
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenesisParams {
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub message: String,
    pub premine: Hash160,
    pub core_algo: PowAlgo,
    pub version: i32,
    pub reward: i64,
}

impl GenesisParams {
    pub fn new(time: u32, nonce: u32, bits: u32, message: &str, premine: Hash160) -> Self {
        GenesisParams {
            time,
            nonce,
            bits,
            message: message.to_owned(),
            premine,
            core_algo: PowAlgo::Neoscrypt,
            version: GENESIS_VERSION,
            reward: PREMINE_AMOUNT
        }
    }
}

/// Pay-to-script-hash output script for the premine.
/// The hash is kept in storage order, the script wants it the other way round.
pub fn premine_script(premine: &Hash160) -> Script {
    Script::new()
        .push_opcode(OP_HASH160)
        .push_slice(&premine.reversed())
        .push_opcode(OP_EQUAL)
}

/// Builds the genesis block. Its only output cannot be spent,
/// as the coinbase input refers to nothing that ever existed in the database.
pub fn build_genesis(params: &GenesisParams) -> Block {
    let script_sig = Script::new().push_slice(params.message.as_bytes());
    let output = TxOut { value: params.reward, script_pubkey: premine_script(&params.premine) };
    let tx = Transaction::coinbase(1, script_sig, vec![output]);

    let header = PureHeader {
        version: params.version,
        prev_block_hash: Hash256::zero(),
        // One transaction, so the root is the txid itself
        merkle_root: tx.txid(),
        time: params.time,
        bits: 0,
        nonce: 0
    };

    let fake_header = PureHeader { nonce: params.nonce, merkle_root: header.hash(), ..PureHeader::default() };
    let mut pow = PowData::new(params.core_algo, params.bits);
    pow.set_fake_header(fake_header);

    Block { header, pow, transactions: vec![tx] }
}

/// Compares the block against the hard-coded hash and merkle root of a network
pub fn verify_genesis(block: &Block, hash: &Hash256, merkle_root: &Hash256) -> Result<(), ParamsError> {
    if block.hash() != *hash {
        return Err(ParamsError::GenesisMismatch { field: "hash", expected: hash.to_hex(), actual: block.hash().to_hex() });
    }
    if block.merkle_root() != *merkle_root {
        return Err(ParamsError::GenesisMismatch { field: "merkle root", expected: merkle_root.to_hex(), actual: block.merkle_root().to_hex() });
    }
    Ok(())
}

/// Builds the genesis and checks it. Inconsistent network constants must never go unnoticed, so we panic.
pub fn ensure_genesis(params: &GenesisParams, hash: &str, merkle_root: &str) -> Block {
    let block = build_genesis(params);
    let hash = hash.parse::<Hash256>().expect("hard-coded hash parses");
    let merkle_root = merkle_root.parse::<Hash256>().expect("hard-coded hash parses");
    if let Err(e) = verify_genesis(&block, &hash, &merkle_root) {
        error!(target: LOG_TARGET_PARAMS, "{}", e);
        panic!("Inconsistent genesis block: {}", e);
    }
    debug!(target: LOG_TARGET_PARAMS, "Genesis block {} verified", hash);
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commons::{PREMINE_ADDRESS_MAINNET, PREMINE_ADDRESS_REGTEST, TIMESTAMP_MAINNET, TIMESTAMP_TESTNET};

    const MAINNET_HASH: &str = "e5062d76e5f50c42f493826ac9920b63a8def2626fd70a5cec707ec47a4c4651";
    const MAINNET_MERKLE: &str = "0827901b75ab43978c3cf20a78baf040faeb0e2eeff3a2c58ab6521a6d46f8fd";

    fn mainnet() -> GenesisParams {
        let premine = Hash160::from_hex(PREMINE_ADDRESS_MAINNET).unwrap();
        GenesisParams::new(1531470713, 482087, 0x1e0ffff0, TIMESTAMP_MAINNET, premine)
    }

    fn regtest() -> GenesisParams {
        let premine = Hash160::from_hex(PREMINE_ADDRESS_REGTEST).unwrap();
        GenesisParams::new(1300000000, 0, 0x207fffff, TIMESTAMP_TESTNET, premine)
    }

    #[test]
    fn mainnet_genesis_matches_constants() {
        let block = build_genesis(&mainnet());
        assert_eq!(block.hash().to_hex(), MAINNET_HASH);
        assert_eq!(block.merkle_root().to_hex(), MAINNET_MERKLE);
        assert!(block.is_genesis());
    }

    #[test]
    fn regtest_genesis_matches_constants() {
        let block = build_genesis(&regtest());
        assert_eq!(block.hash().to_hex(), "6f750b36d22f1dc3d0a6e483af45301022646dfc3b3ba2187865f5a7d6d83ab1");
        assert_eq!(block.merkle_root().to_hex(), "9f96a4c275320aaf6386652444be5baade11e2f9f40221a98b968ae5c32dd55a");
    }

    #[test]
    fn genesis_is_deterministic() {
        let first = build_genesis(&mainnet());
        let second = build_genesis(&mainnet());
        assert_eq!(first, second);
        assert_eq!(first.hash(), second.hash());
    }

    #[test]
    fn merkle_root_is_the_single_txid() {
        let block = build_genesis(&mainnet());
        assert_eq!(block.transactions.len(), 1);
        assert_eq!(block.merkle_root(), block.transactions[0].txid());
        assert_eq!(block.compute_merkle_root(), block.merkle_root());
    }

    #[test]
    fn block_layout() {
        let params = mainnet();
        let block = build_genesis(&params);
        assert!(block.header.prev_block_hash.is_null());
        assert_eq!(block.header.bits, 0);
        assert_eq!(block.header.nonce, 0);
        assert_eq!(block.pow.algo, PowAlgo::Neoscrypt);
        assert_eq!(block.pow.bits, 0x1e0ffff0);
        let fake = block.pow.fake_header.as_ref().unwrap();
        assert_eq!(fake.nonce, 482087);
        assert_eq!(fake.merkle_root, block.hash());

        let tx = &block.transactions[0];
        assert_eq!(tx.outputs[0].value, PREMINE_AMOUNT);
        // The message is pushed as is, 80 bytes need OP_PUSHDATA1
        let script_sig = tx.inputs[0].script_sig.as_bytes();
        assert_eq!(&script_sig[..2], &[0x4c, 80]);
        assert_eq!(&script_sig[2..], TIMESTAMP_MAINNET.as_bytes());
    }

    #[test]
    fn premine_script_uses_display_order() {
        let premine = Hash160::from_hex(PREMINE_ADDRESS_MAINNET).unwrap();
        let script = premine_script(&premine);
        let mut expected = vec![OP_HASH160, 20];
        expected.extend(crate::from_hex(PREMINE_ADDRESS_MAINNET).unwrap());
        expected.push(OP_EQUAL);
        assert_eq!(script.as_bytes(), expected.as_slice());
    }

    #[test]
    fn header_inputs_change_the_hash() {
        let base = build_genesis(&mainnet()).hash();

        let mut params = mainnet();
        params.time += 1;
        assert_ne!(build_genesis(&params).hash(), base);

        let mut params = mainnet();
        params.message.push('!');
        assert_ne!(build_genesis(&params).hash(), base);

        let mut params = mainnet();
        params.premine = Hash160::from_hex(PREMINE_ADDRESS_REGTEST).unwrap();
        assert_ne!(build_genesis(&params).hash(), base);
    }

    #[test]
    fn pow_inputs_change_the_block() {
        use crate::ser::Encodable;

        let base = build_genesis(&mainnet());

        let mut params = mainnet();
        params.nonce += 1;
        let other = build_genesis(&params);
        assert_eq!(other.hash(), base.hash());
        assert_ne!(other.to_bytes(), base.to_bytes());

        let mut params = mainnet();
        params.bits = 0x1d00ffff;
        let other = build_genesis(&params);
        assert_ne!(other.pow, base.pow);
        assert_ne!(other.to_bytes(), base.to_bytes());
    }

    #[test]
    fn verify_reports_mismatch() {
        let block = build_genesis(&regtest());
        let wrong = Hash256::from_hex(MAINNET_HASH).unwrap();
        let result = verify_genesis(&block, &wrong, &block.merkle_root());
        assert!(matches!(result, Err(ParamsError::GenesisMismatch { field: "hash", .. })));
        let result = verify_genesis(&block, &block.hash(), &wrong);
        assert!(matches!(result, Err(ParamsError::GenesisMismatch { field: "merkle root", .. })));
        assert!(verify_genesis(&block, &block.hash(), &block.merkle_root()).is_ok());
    }

    #[test]
    #[should_panic(expected = "Inconsistent genesis block")]
    fn ensure_panics_on_wrong_constants() {
        ensure_genesis(&regtest(), MAINNET_HASH, MAINNET_MERKLE);
    }
}
