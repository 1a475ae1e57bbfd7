use std::fmt;
use std::fmt::{Error, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
// For deserialization
use serde::de::{Error as DeError, Visitor};

/// Arbitrary length byte string, serialized as HEX
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes {
    data: Vec<u8>
}

impl Bytes {
    pub fn new(data: Vec<u8>) -> Self {
        Bytes { data }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Bytes { data: Vec::from(data) }
    }

    pub fn from_hex(string: &str) -> Result<Self, crate::ParamsError> {
        crate::from_hex(string).map(Bytes::new)
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| *x == 0)
    }

    /// Returns a byte slice of the contents.
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn to_hex(&self) -> String {
        crate::commons::to_hex(&self.data)
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(data: Vec<u8>) -> Self {
        Bytes::new(data)
    }
}

impl Deref for Bytes {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&self.to_hex())
    }
}

impl Serialize for Bytes {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error> where
        S: Serializer {
        serializer.serialize_str(&self.to_hex())
    }
}

struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Bytes;

    fn expecting(&self, formatter: &mut Formatter) -> Result<(), Error> {
        formatter.write_str("bytes in HEX format")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> where E: DeError, {
        Bytes::from_hex(value).map_err(|_| E::custom("Expected bytes in HEX format!"))
    }

    fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E> where E: DeError, {
        Ok(Bytes::from_bytes(value))
    }
}

impl<'dd> Deserialize<'dd> for Bytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'dd>>::Error> where D: Deserializer<'dd> {
        deserializer.deserialize_str(BytesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::bytes::Bytes;

    #[test]
    pub fn test_hex_serde() {
        let bytes = Bytes::new(vec![0x51, 0x00, 0xae]);
        let json = serde_json::to_string(&bytes).unwrap();
        assert_eq!(json, "\"5100ae\"");
        let back: Bytes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bytes);
        assert!(serde_json::from_str::<Bytes>("\"51a\"").is_err());
    }

    #[test]
    pub fn test_is_zero() {
        assert!(Bytes::default().is_zero());
        assert!(Bytes::new(vec![0, 0]).is_zero());
        assert!(!Bytes::new(vec![0, 1]).is_zero());
    }
}
