use crate::error::BenchError;

/// Compress `data` into a single Zstandard frame at `level`.
///
/// zstd clamps levels outside its range, so they are rejected here to keep
/// the reported level the one actually used.
pub fn compress(data: &[u8], level: i32) -> Result<Vec<u8>, BenchError> {
    check_level(level)?;
    zstd::encode_all(data, level)
        .map_err(|e| BenchError::Compressor(e.to_string()))
}

pub fn check_level(level: i32) -> Result<(), BenchError> {
    let range = zstd::compression_level_range();
    if !range.contains(&level) {
        return Err(BenchError::Config(format!(
            "zstd level {} outside supported range {}..={}",
            level,
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_magic() {
        let frame = compress(b"a,b,c\n1,2,3\n", 5).unwrap();
        assert_eq!(&frame[..4], &[0x28, 0xB5, 0x2F, 0xFD]);
    }

    #[test]
    fn test_deterministic_at_fixed_level() {
        let data = "col1,col2\nfoo,bar\n".repeat(500);
        let a = compress(data.as_bytes(), 5).unwrap();
        let b = compress(data.as_bytes(), 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_repetitive_input_shrinks() {
        let data = vec![b'x'; 10_000];
        let frame = compress(&data, 5).unwrap();
        assert!(frame.len() < data.len() / 10);
    }

    #[test]
    fn test_out_of_range_level_rejected() {
        let max = *zstd::compression_level_range().end();
        assert!(matches!(compress(b"a,b\n", max + 1), Err(BenchError::Config(_))));
        assert!(matches!(compress(b"a,b\n", 1000), Err(BenchError::Config(_))));
        assert!(compress(b"a,b\n", max).is_ok());
    }

    #[test]
    fn test_frame_decodes_back() {
        let data = b"name,score\nann,10\nben,12\n";
        let frame = compress(data, 5).unwrap();
        assert_eq!(zstd::decode_all(&frame[..]).unwrap(), data.to_vec());
    }
}
