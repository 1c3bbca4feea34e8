//! Zlib decompression for `0x21000000` entries
//!
//! Entries are single zlib streams (header + deflate + adler32) inflated in
//! one shot with a `Finish` flush; the stream has to end inside that call.

use flate2::{Decompress, FlushDecompress, Status};

use super::{Codec, check_len};
use crate::error::CodecError;

/// Inflate a zlib stream into exactly `expected_len` bytes.
///
/// # Errors
/// Returns an error if the stream is corrupt, does not end within
/// `expected_len` bytes of output, or ends short of it.
pub fn decompress(compressed: &[u8], expected_len: usize) -> Result<Vec<u8>, CodecError> {
    let mut inflater = Decompress::new(true);
    // One spare byte so an over-long stream shows up as a size mismatch
    let mut output = Vec::with_capacity(expected_len + 1);

    let status = inflater
        .decompress_vec(compressed, &mut output, FlushDecompress::Finish)
        .map_err(|e| CodecError::Zlib { message: e.to_string() })?;

    if status != Status::StreamEnd {
        return Err(CodecError::Zlib {
            message: format!(
                "stream did not end after {} of {} input bytes ({status:?})",
                inflater.total_in(),
                compressed.len()
            ),
        });
    }

    check_len(Codec::Zlib, expected_len, output.len())?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::ZlibEncoder;
    use std::io::Write;

    fn zlib(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_decompress_exact_size() {
        let data = b"Public/Shared/meta.lsx Public/Shared/meta.lsx";
        let compressed = zlib(data);
        assert_eq!(decompress(&compressed, data.len()).unwrap(), data);
    }

    #[test]
    fn test_empty_stream() {
        let compressed = zlib(b"");
        assert!(decompress(&compressed, 0).unwrap().is_empty());
    }

    #[test]
    fn test_declared_size_too_large() {
        let data = b"twelve bytes";
        let compressed = zlib(data);
        let err = decompress(&compressed, 20).unwrap_err();
        assert!(matches!(
            err,
            CodecError::SizeMismatch { expected: 20, actual: 12, .. }
        ));
    }

    #[test]
    fn test_declared_size_too_small() {
        let data = vec![b'x'; 4096];
        let compressed = zlib(&data);
        assert!(decompress(&compressed, 1024).is_err());
    }

    #[test]
    fn test_truncated_stream_fails() {
        let data: Vec<u8> = (0..4096u32).map(|i| (i * 31 % 251) as u8).collect();
        let compressed = zlib(&data);
        let truncated = &compressed[..compressed.len() - 8];
        assert!(decompress(truncated, data.len()).is_err());
    }

    #[test]
    fn test_garbage_fails() {
        assert!(decompress(&[0xde, 0xad, 0xbe, 0xef], 4).is_err());
    }
}
