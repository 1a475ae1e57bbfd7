use std::fmt;
use std::io;
use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use serde::{Serialize, Serializer};

use crate::ser::{write_var_bytes, Encodable};

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_EQUAL: u8 = 0x87;
pub const OP_HASH160: u8 = 0xa9;

/// Raw script, built by pushing opcodes and data
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Script {
    data: Vec<u8>
}

impl Script {
    pub fn new() -> Self {
        Script { data: Vec::new() }
    }

    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.data.push(opcode);
        self
    }

    /// Pushes data with the smallest push opcode that fits it
    pub fn push_slice(mut self, bytes: &[u8]) -> Self {
        let len = bytes.len();
        if len == 0 {
            self.data.push(OP_0);
            return self;
        }
        if len < OP_PUSHDATA1 as usize {
            self.data.push(len as u8);
        } else if len <= 0xff {
            self.data.push(OP_PUSHDATA1);
            self.data.push(len as u8);
        } else if len <= 0xffff {
            self.data.push(OP_PUSHDATA2);
            let _ = self.data.write_u16::<LittleEndian>(len as u16);
        } else {
            self.data.push(OP_PUSHDATA4);
            let _ = self.data.write_u32::<LittleEndian>(len as u32);
        }
        self.data.extend_from_slice(bytes);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Encodable for Script {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_var_bytes(writer, &self.data)
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_hex(&self.data))
    }
}

impl Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_str(&crate::to_hex(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_sizes() {
        assert_eq!(Script::new().push_slice(&[]).as_bytes(), &[OP_0]);
        assert_eq!(Script::new().push_slice(&[7u8; 3]).as_bytes(), &[3, 7, 7, 7]);

        let script = Script::new().push_slice(&[1u8; 80]);
        assert_eq!(&script.as_bytes()[..2], &[OP_PUSHDATA1, 80]);
        assert_eq!(script.len(), 82);

        let script = Script::new().push_slice(&[1u8; 300]);
        assert_eq!(&script.as_bytes()[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
        assert_eq!(script.len(), 303);
    }

    #[test]
    fn test_encode_prefixes_length() {
        let script = Script::new().push_opcode(OP_HASH160).push_slice(&[0xab; 20]).push_opcode(OP_EQUAL);
        let bytes = script.to_bytes();
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[..3], &[23, OP_HASH160, 20]);
        assert_eq!(bytes[23], OP_EQUAL);
    }
}
