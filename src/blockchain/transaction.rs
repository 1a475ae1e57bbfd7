use std::io;
use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use serde::Serialize;

use crate::blockchain::hash_utils::sha256d;
use crate::blockchain::script::Script;
use crate::blockchain::Hash256;
use crate::commons::{NULL_INDEX, SEQUENCE_FINAL};
use crate::ser::Encodable;

/// Reference to an output of a previous transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OutPoint {
    pub txid: Hash256,
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint spent by coinbase inputs, it refers to nothing
    pub fn null() -> Self {
        OutPoint { txid: Hash256::zero(), vout: NULL_INDEX }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_null() && self.vout == NULL_INDEX
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TxOut {
    pub value: i64,
    pub script_pubkey: Script,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Builds a transaction with a single input spending nothing
    pub fn coinbase(version: i32, script_sig: Script, outputs: Vec<TxOut>) -> Self {
        let input = TxIn { prevout: OutPoint::null(), script_sig, sequence: SEQUENCE_FINAL };
        Transaction { version, inputs: vec![input], outputs, lock_time: 0 }
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    /// Hash of the serialization without witness data
    pub fn txid(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }

    pub fn total_out(&self) -> i64 {
        self.outputs.iter().map(|out| out.value).sum()
    }
}

impl Encodable for OutPoint {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.txid.as_bytes())?;
        writer.write_u32::<LittleEndian>(self.vout)
    }
}

impl Encodable for TxIn {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.prevout.encode(writer)?;
        self.script_sig.encode(writer)?;
        writer.write_u32::<LittleEndian>(self.sequence)
    }
}

impl Encodable for TxOut {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i64::<LittleEndian>(self.value)?;
        self.script_pubkey.encode(writer)
    }
}

impl Encodable for Transaction {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i32::<LittleEndian>(self.version)?;
        self.inputs.encode(writer)?;
        self.outputs.encode(writer)?;
        writer.write_u32::<LittleEndian>(self.lock_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coinbase_layout() {
        let out = TxOut { value: 5, script_pubkey: Script::new().push_opcode(0x51) };
        let tx = Transaction::coinbase(1, Script::new().push_slice(b"hi"), vec![out]);
        assert!(tx.is_coinbase());
        assert_eq!(tx.total_out(), 5);

        let bytes = tx.to_bytes();
        // version + count + outpoint + script + sequence + count + value + script + locktime
        assert_eq!(bytes.len(), 4 + 1 + 36 + 4 + 4 + 1 + 8 + 2 + 4);
        assert_eq!(&bytes[..5], &[1, 0, 0, 0, 1]);
        assert_eq!(&bytes[37..41], &[0xff; 4]);
        assert_eq!(&bytes[41..45], &[3, 2, b'h', b'i']);
    }

    #[test]
    fn test_txid_changes_with_content() {
        let make = |value| Transaction::coinbase(1, Script::new(), vec![TxOut { value, script_pubkey: Script::new() }]);
        assert_eq!(make(1).txid(), make(1).txid());
        assert_ne!(make(1).txid(), make(2).txid());
    }
}
