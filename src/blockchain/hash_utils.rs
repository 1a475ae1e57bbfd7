use num_bigint::BigUint;
use num_traits::Zero;
use digest::Digest;
use sha2::Sha256;

use crate::blockchain::Hash256;

/// Double SHA256, the hash used for transaction ids, block hashes and message starts
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&second);
    Hash256::new(buf)
}

/// Decodes compact difficulty bits into a target.
/// Returns None for negative or overflowing encodings.
pub fn compact_to_target(bits: u32) -> Option<BigUint> {
    let size = bits >> 24;
    let mut word = bits & 0x007f_ffff;
    let target = if size <= 3 {
        word >>= 8 * (3 - size);
        BigUint::from(word)
    } else {
        BigUint::from(word) << (8 * (size - 3))
    };
    let negative = word != 0 && (bits & 0x0080_0000) != 0;
    let overflow = word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
    if negative || overflow {
        return None;
    }
    Some(target)
}

/// Checks that a PoW hash satisfies the target encoded in `bits`, which itself must not exceed `pow_limit`
pub fn hash_is_good(hash: &Hash256, bits: u32, pow_limit: &Hash256) -> bool {
    let target = match compact_to_target(bits) {
        None => return false,
        Some(target) => target
    };
    if target.is_zero() || target > pow_limit.to_biguint() {
        return false;
    }
    hash.to_biguint() <= target
}
