//! LZ4 block decompression
//!
//! Both the file table and `0x42000000` entries are raw LZ4 blocks with no
//! size prefix and no frame header.

use super::{Codec, check_len};
use crate::error::CodecError;

/// Decompress an LZ4 block into exactly `expected_len` bytes.
///
/// Decoding is bounded by the output buffer, so a stream that would produce
/// more than `expected_len` bytes fails instead of growing the buffer.
///
/// # Errors
/// Returns an error if the block is corrupt or decodes to a different length.
pub fn decompress(compressed: &[u8], expected_len: usize) -> Result<Vec<u8>, CodecError> {
    let mut output = vec![0u8; expected_len];
    let written = lz4_flex::block::decompress_into(compressed, &mut output)
        .map_err(|e| CodecError::Lz4 { message: e.to_string() })?;
    check_len(Codec::Lz4, expected_len, written)?;
    Ok(output)
}
