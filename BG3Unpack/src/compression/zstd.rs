//! Zstd decompression for `0x23000000` entries (Patch 6 and later)

use ::zstd::bulk::Decompressor;

use super::{Codec, check_len};
use crate::error::CodecError;

/// Decompress a zstd frame into exactly `expected_len` bytes.
///
/// Uses a fresh one-shot decompression context per call; the capacity bound
/// makes frames that expand past `expected_len` fail.
///
/// # Errors
/// Returns an error if the frame is corrupt or decodes to a different length.
pub fn decompress(compressed: &[u8], expected_len: usize) -> Result<Vec<u8>, CodecError> {
    let mut context = Decompressor::new().map_err(|e| CodecError::Zstd { message: e.to_string() })?;
    let output = context
        .decompress(compressed, expected_len)
        .map_err(|e| CodecError::Zstd { message: e.to_string() })?;
    check_len(Codec::Zstd, expected_len, output.len())?;
    Ok(output)
}
