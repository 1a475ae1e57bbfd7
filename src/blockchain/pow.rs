use std::io;
use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use serde::Serialize;

use crate::blockchain::block::PureHeader;
use crate::blockchain::hash_utils::hash_is_good;
use crate::blockchain::{Hash256, PowAlgo};
use crate::ser::Encodable;

/// Computes the proof-of-work hash of a header for one particular algorithm
pub trait PowHasher: Send + Sync {
    fn algo(&self) -> PowAlgo;

    fn pow_hash(&self, header: &PureHeader) -> Hash256;
}

/// Plain double SHA256 of the serialized header
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256dHasher;

impl PowHasher for Sha256dHasher {
    fn algo(&self) -> PowAlgo {
        PowAlgo::Sha256d
    }

    fn pow_hash(&self, header: &PureHeader) -> Hash256 {
        header.hash()
    }
}

/// Returns a bundled hasher for the algorithm, if there is one
pub fn bundled_hasher(algo: PowAlgo) -> Option<Box<dyn PowHasher>> {
    match algo {
        PowAlgo::Sha256d => Some(Box::new(Sha256dHasher)),
        PowAlgo::Neoscrypt => None
    }
}

/// Proof-of-work attached to a block. For standalone mining the work is done on
/// a fake header that commits to the real block through its merkle root field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PowData {
    pub algo: PowAlgo,
    pub bits: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fake_header: Option<PureHeader>,
}

impl PowData {
    pub fn new(algo: PowAlgo, bits: u32) -> Self {
        PowData { algo, bits, fake_header: None }
    }

    pub fn set_fake_header(&mut self, header: PureHeader) {
        self.fake_header = Some(header);
    }

    /// Replaces the fake header with an empty one committing to `block`
    pub fn init_fake_header(&mut self, block: &PureHeader) -> &mut PureHeader {
        let header = PureHeader { merkle_root: block.hash(), ..PureHeader::default() };
        self.fake_header.insert(header)
    }

    /// Checks the work against `block` with the given hasher
    pub fn check(&self, block: &PureHeader, hasher: &dyn PowHasher, pow_limit: &Hash256) -> bool {
        if hasher.algo() != self.algo {
            warn!("Wrong hasher {} for {} proof-of-work", hasher.algo(), self.algo);
            return false;
        }
        let fake_header = match &self.fake_header {
            None => return false,
            Some(header) => header
        };
        if fake_header.merkle_root != block.hash() {
            return false;
        }
        hash_is_good(&hasher.pow_hash(fake_header), self.bits, pow_limit)
    }
}

impl Encodable for PowData {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(self.algo.to_byte())?;
        writer.write_u32::<LittleEndian>(self.bits)?;
        match &self.fake_header {
            None => Ok(()),
            Some(header) => header.encode(writer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn easy_limit() -> Hash256 {
        Hash256::from_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff").unwrap()
    }

    #[test]
    fn test_init_fake_header() {
        let block = PureHeader { version: 1, time: 42, ..PureHeader::default() };
        let mut pow = PowData::new(PowAlgo::Sha256d, 0x207fffff);
        pow.init_fake_header(&block).nonce = 9;
        let fake = pow.fake_header.as_ref().unwrap();
        assert_eq!(fake.merkle_root, block.hash());
        assert_eq!(fake.nonce, 9);
        assert_eq!(fake.time, 0);
        assert_eq!(fake.version, 0);
    }

    #[test]
    fn test_check_requires_commitment_and_hasher() {
        let block = PureHeader { version: 1, time: 42, ..PureHeader::default() };
        let mut pow = PowData::new(PowAlgo::Sha256d, 0x207fffff);
        assert!(!pow.check(&block, &Sha256dHasher, &easy_limit()));

        pow.init_fake_header(&block);
        let mut passed = false;
        for nonce in 0..1000 {
            pow.fake_header.as_mut().unwrap().nonce = nonce;
            if pow.check(&block, &Sha256dHasher, &easy_limit()) {
                passed = true;
                break;
            }
        }
        assert!(passed);

        let other = PureHeader { version: 1, time: 43, ..PureHeader::default() };
        assert!(!pow.check(&other, &Sha256dHasher, &easy_limit()));

        let neoscrypt = PowData { algo: PowAlgo::Neoscrypt, ..pow.clone() };
        assert!(!neoscrypt.check(&block, &Sha256dHasher, &easy_limit()));
    }

    #[test]
    fn test_encode() {
        let mut pow = PowData::new(PowAlgo::Neoscrypt, 0x1e0ffff0);
        assert_eq!(pow.to_bytes(), vec![2, 0xf0, 0xff, 0x0f, 0x1e]);
        pow.set_fake_header(PureHeader::default());
        assert_eq!(pow.to_bytes().len(), 5 + 80);
    }

    #[test]
    fn test_bundled_hashers() {
        assert_eq!(bundled_hasher(PowAlgo::Sha256d).unwrap().algo(), PowAlgo::Sha256d);
        assert!(bundled_hasher(PowAlgo::Neoscrypt).is_none());
    }
}
