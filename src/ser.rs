use std::io;
use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

/// Bitcoin style consensus serialization, used for everything that gets hashed
pub trait Encodable {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode(&mut buf).expect("Writing to a Vec never fails");
        buf
    }
}

/// Writes a variable length integer as used for vector sizes
pub fn write_compact_size<W: Write>(writer: &mut W, size: u64) -> io::Result<()> {
    match size {
        0..=0xfc => writer.write_u8(size as u8),
        0xfd..=0xffff => {
            writer.write_u8(0xfd)?;
            writer.write_u16::<LittleEndian>(size as u16)
        }
        0x1_0000..=0xffff_ffff => {
            writer.write_u8(0xfe)?;
            writer.write_u32::<LittleEndian>(size as u32)
        }
        _ => {
            writer.write_u8(0xff)?;
            writer.write_u64::<LittleEndian>(size)
        }
    }
}

/// Writes a length prefixed byte vector
pub fn write_var_bytes<W: Write>(writer: &mut W, data: &[u8]) -> io::Result<()> {
    write_compact_size(writer, data.len() as u64)?;
    writer.write_all(data)
}

impl<T: Encodable> Encodable for Vec<T> {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_compact_size(writer, self.len() as u64)?;
        for item in self.iter() {
            item.encode(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact(size: u64) -> Vec<u8> {
        let mut buf = Vec::new();
        write_compact_size(&mut buf, size).unwrap();
        buf
    }

    #[test]
    fn test_compact_size() {
        assert_eq!(compact(0), vec![0x00]);
        assert_eq!(compact(0xfc), vec![0xfc]);
        assert_eq!(compact(0xfd), vec![0xfd, 0xfd, 0x00]);
        assert_eq!(compact(0x1_0000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(compact(0x1_0000_0000), vec![0xff, 0, 0, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_var_bytes() {
        let mut buf = Vec::new();
        write_var_bytes(&mut buf, &[0xaa, 0xbb]).unwrap();
        assert_eq!(buf, vec![0x02, 0xaa, 0xbb]);
    }
}
