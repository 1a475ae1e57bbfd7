use std::io;
use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use serde::Serialize;

use crate::blockchain::hash_utils::sha256d;
use crate::blockchain::pow::PowData;
use crate::blockchain::{Hash256, Transaction};
use crate::ser::Encodable;

/// The plain 80 byte header, without any proof-of-work attached
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PureHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl PureHeader {
    pub fn hash(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }
}

impl Encodable for PureHeader {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i32::<LittleEndian>(self.version)?;
        writer.write_all(self.prev_block_hash.as_bytes())?;
        writer.write_all(self.merkle_root.as_bytes())?;
        writer.write_u32::<LittleEndian>(self.time)?;
        writer.write_u32::<LittleEndian>(self.bits)?;
        writer.write_u32::<LittleEndian>(self.nonce)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Block {
    pub header: PureHeader,
    pub pow: PowData,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Block hash, it commits to the pure header only
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    pub fn merkle_root(&self) -> Hash256 {
        self.header.merkle_root
    }

    /// Merkle root recomputed from the transactions
    pub fn compute_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(|tx| tx.txid()).collect();
        merkle_root(&txids)
    }

    pub fn is_genesis(&self) -> bool {
        self.header.prev_block_hash.is_null() && self.transactions.len() == 1 && self.transactions[0].is_coinbase()
    }
}

impl Encodable for Block {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.header.encode(writer)?;
        self.pow.encode(writer)?;
        self.transactions.encode(writer)
    }
}

/// Computes the merkle root of the given leaves, duplicating the last one on odd levels.
/// A single leaf is its own root.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return Hash256::zero();
    }
    let mut level: Vec<Hash256> = leaves.to_vec();
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            if let Some(last) = level.last().copied() {
                level.push(last);
            }
        }
        level = level
            .chunks(2)
            .map(|pair| {
                let mut buf = [0u8; 64];
                buf[..32].copy_from_slice(pair[0].as_bytes());
                buf[32..].copy_from_slice(pair[1].as_bytes());
                sha256d(&buf)
            })
            .collect();
    }
    level[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(byte: u8) -> Hash256 {
        Hash256::new([byte; 32])
    }

    #[test]
    fn test_header_is_80_bytes() {
        assert_eq!(PureHeader::default().to_bytes().len(), 80);
    }

    #[test]
    fn test_single_leaf_is_root() {
        assert_eq!(merkle_root(&[leaf(3)]), leaf(3));
        assert_eq!(merkle_root(&[]), Hash256::zero());
    }

    #[test]
    fn test_odd_level_duplicates_last() {
        let three = merkle_root(&[leaf(1), leaf(2), leaf(3)]);
        let four = merkle_root(&[leaf(1), leaf(2), leaf(3), leaf(3)]);
        assert_eq!(three, four);
        assert_ne!(merkle_root(&[leaf(1), leaf(2)]), merkle_root(&[leaf(2), leaf(1)]));
    }
}
