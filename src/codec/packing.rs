//! Byte layouts for an LZW code sequence.
//!
//! The reported LZW compressed size is the length of this output, so each
//! layout is fixed and little-endian:
//!
//! - `Bincode`: bincode 1.x default options. `u64` element count, then every
//!   code as a fixed `u32`. Length `8 + 4n`.
//! - `Fixed`: `u8` width tag (2 or 4), `u32` element count, then every code
//!   in the narrowest of `u16`/`u32` holding the largest code. Length `5 + w*n`.
//! - `Varint`: unsigned LEB128 per code, no header.

use crate::config::CodeEncoding;
use crate::error::{BenchError, Result};
use byteorder::{LittleEndian, WriteBytesExt};

pub fn pack(codes: &[u32], encoding: CodeEncoding) -> Result<Vec<u8>> {
    match encoding {
        CodeEncoding::Bincode => pack_bincode(codes),
        CodeEncoding::Fixed => pack_fixed(codes),
        CodeEncoding::Varint => Ok(pack_varint(codes)),
    }
}

fn pack_bincode(codes: &[u32]) -> Result<Vec<u8>> {
    bincode::serialize(codes).map_err(|e| BenchError::Serialization(e.to_string()))
}

fn pack_fixed(codes: &[u32]) -> Result<Vec<u8>> {
    let count = u32::try_from(codes.len())
        .map_err(|_| BenchError::Serialization(format!("{} codes exceed u32 count", codes.len())))?;
    let max = codes.iter().copied().max().unwrap_or(0);
    let width: u8 = if max <= u16::MAX as u32 { 2 } else { 4 };

    let mut out = Vec::with_capacity(5 + width as usize * codes.len());
    out.write_u8(width)?;
    out.write_u32::<LittleEndian>(count)?;
    for &code in codes {
        if width == 2 {
            out.write_u16::<LittleEndian>(code as u16)?;
        } else {
            out.write_u32::<LittleEndian>(code)?;
        }
    }
    Ok(out)
}

fn pack_varint(codes: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * 2);
    for &code in codes {
        let mut value = code;
        loop {
            let byte = (value & 0x7F) as u8;
            value >>= 7;
            if value == 0 {
                out.push(byte);
                break;
            }
            out.push(byte | 0x80);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bincode_layout() {
        let packed = pack(&[65, 256], CodeEncoding::Bincode).unwrap();
        assert_eq!(packed, vec![2, 0, 0, 0, 0, 0, 0, 0, 65, 0, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_bincode_empty() {
        let packed = pack(&[], CodeEncoding::Bincode).unwrap();
        assert_eq!(packed.len(), 8);
    }

    #[test]
    fn test_fixed_narrow_width() {
        let packed = pack(&[65, 256, 65535], CodeEncoding::Fixed).unwrap();
        assert_eq!(packed, vec![2, 3, 0, 0, 0, 65, 0, 0, 1, 0xFF, 0xFF]);
    }

    #[test]
    fn test_fixed_wide_width() {
        let packed = pack(&[1, 70000], CodeEncoding::Fixed).unwrap();
        assert_eq!(packed[0], 4);
        assert_eq!(packed.len(), 5 + 4 * 2);
        assert_eq!(&packed[9..], &70000u32.to_le_bytes());
    }

    #[test]
    fn test_varint_layout() {
        let packed = pack(&[0, 127, 128, 300, 16384], CodeEncoding::Varint).unwrap();
        assert_eq!(packed, vec![0x00, 0x7F, 0x80, 0x01, 0xAC, 0x02, 0x80, 0x80, 0x01]);
    }

    #[test]
    fn test_varint_empty() {
        assert!(pack(&[], CodeEncoding::Varint).unwrap().is_empty());
    }

    #[test]
    fn test_sizes_are_reproducible() {
        let codes: Vec<u32> = (0..1000).map(|i| (i * 7) % 4096).collect();
        for encoding in [CodeEncoding::Bincode, CodeEncoding::Fixed, CodeEncoding::Varint] {
            let a = pack(&codes, encoding).unwrap();
            let b = pack(&codes, encoding).unwrap();
            assert_eq!(a, b);
        }
        assert_eq!(pack(&codes, CodeEncoding::Bincode).unwrap().len(), 8 + 4 * 1000);
        assert_eq!(pack(&codes, CodeEncoding::Fixed).unwrap().len(), 5 + 2 * 1000);
    }
}
