use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{Error as DeError, Visitor};

use crate::error::ParamsError;

/// Fixed size hash, kept in internal (storage) byte order.
/// Its textual form is the reversed, human readable order used by block explorers and address encoders.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FixedHash<const N: usize> {
    bytes: [u8; N]
}

pub type Hash256 = FixedHash<32>;
pub type Hash160 = FixedHash<20>;

impl<const N: usize> FixedHash<N> {
    /// Size of a hash in bytes.
    pub const LEN: usize = N;

    pub const fn new(bytes: [u8; N]) -> Self {
        FixedHash { bytes }
    }

    pub const fn zero() -> Self {
        FixedHash { bytes: [0u8; N] }
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, ParamsError> {
        let bytes: [u8; N] = data
            .try_into()
            .map_err(|_| ParamsError::InvalidLength { expected: N, actual: data.len() })?;
        Ok(FixedHash { bytes })
    }

    /// Parses the human readable hex form, storing the bytes reversed
    pub fn from_hex(string: &str) -> Result<Self, ParamsError> {
        let mut data = crate::from_hex(string)?;
        data.reverse();
        Self::from_slice(&data)
    }

    pub fn is_null(&self) -> bool {
        self.bytes.iter().all(|b| *b == 0)
    }

    /// Returns a byte slice in storage order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the bytes in the human readable order
    pub fn reversed(&self) -> [u8; N] {
        let mut bytes = self.bytes;
        bytes.reverse();
        bytes
    }

    pub fn to_hex(&self) -> String {
        crate::commons::to_hex(&self.reversed())
    }

    /// Interprets the hash as a little-endian unsigned integer
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.bytes)
    }
}

impl<const N: usize> Default for FixedHash<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> AsRef<[u8]> for FixedHash<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> FromStr for FixedHash<N> {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<const N: usize> Display for FixedHash<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> fmt::Debug for FixedHash<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> Serialize for FixedHash<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_str(&self.to_hex())
    }
}

struct FixedHashVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for FixedHashVisitor<N> {
    type Value = FixedHash<N>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{} bytes in HEX format", N)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> where E: DeError {
        FixedHash::from_hex(value).map_err(E::custom)
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedHash<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_str(FixedHashVisitor::<N>)
    }
}

/// Proof-of-work algorithms that can produce blocks
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowAlgo {
    Sha256d,
    Neoscrypt,
}

impl PowAlgo {
    /// All supported algorithms, in the fixed order used for spacing computations
    pub const ALL: [PowAlgo; 2] = [PowAlgo::Sha256d, PowAlgo::Neoscrypt];

    /// Flag set on the algorithm byte when the block is merge-mined
    pub const FLAG_MERGE_MINED: u8 = 0x80;

    pub fn to_byte(self) -> u8 {
        match self {
            PowAlgo::Sha256d => 1,
            PowAlgo::Neoscrypt => 2,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte & !Self::FLAG_MERGE_MINED {
            1 => Some(PowAlgo::Sha256d),
            2 => Some(PowAlgo::Neoscrypt),
            _ => None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PowAlgo::Sha256d => "sha256d",
            PowAlgo::Neoscrypt => "neoscrypt",
        }
    }
}

impl Display for PowAlgo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PowAlgo {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PowAlgo::ALL
            .iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ParamsError::UnknownAlgo(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_reversed_storage() {
        let hash = Hash160::from_hex("8cb1c236d34c74221fe4163bbba739b52e95f484").unwrap();
        assert_eq!(hash.as_bytes()[0], 0x84);
        assert_eq!(hash.as_bytes()[19], 0x8c);
        assert_eq!(hash.reversed()[0], 0x8c);
        assert_eq!(hash.to_string(), "8cb1c236d34c74221fe4163bbba739b52e95f484");
    }

    #[test]
    fn reversal_round_trips() {
        let hash = Hash160::from_hex("2b6defe41aa3aa47795b702c893c73e716d485ab").unwrap();
        let twice = Hash160::new(Hash160::new(hash.reversed()).reversed());
        assert_eq!(twice, hash);
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        assert_eq!(Hash256::from_hex("abcd"), Err(ParamsError::InvalidLength { expected: 32, actual: 2 }));
        assert!(Hash160::from_hex("xyz0").is_err());
        assert!(Hash256::from_slice(&[0u8; 31]).is_err());
    }

    #[test]
    fn null_and_numeric_value() {
        assert!(Hash256::zero().is_null());
        let one = Hash256::from_hex("0000000000000000000000000000000000000000000000000000000000000001").unwrap();
        assert!(!one.is_null());
        assert_eq!(one.to_biguint(), BigUint::from(1u32));
    }

    #[test]
    fn serde_uses_display_hex() {
        let hash = Hash256::from_hex("e5062d76e5f50c42f493826ac9920b63a8def2626fd70a5cec707ec47a4c4651").unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"e5062d76e5f50c42f493826ac9920b63a8def2626fd70a5cec707ec47a4c4651\"");
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }

    #[test]
    fn algo_names_and_bytes() {
        assert_eq!("SHA256D".parse::<PowAlgo>().unwrap(), PowAlgo::Sha256d);
        assert_eq!("neoscrypt".parse::<PowAlgo>().unwrap(), PowAlgo::Neoscrypt);
        assert!("scrypt".parse::<PowAlgo>().is_err());
        assert_eq!(PowAlgo::from_byte(PowAlgo::Sha256d.to_byte() | PowAlgo::FLAG_MERGE_MINED), Some(PowAlgo::Sha256d));
        assert_eq!(PowAlgo::from_byte(7), None);
    }
}
