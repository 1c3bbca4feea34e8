//! Compression utilities
//!
//! Decompression only. Every codec takes the stored bytes plus the size the
//! file table promises and either returns exactly that many bytes or a
//! [`CodecError`]. Calls share no state.

use std::fmt;

use crate::error::CodecError;

pub mod lz4;
pub mod zlib;
pub mod zstd;

/// A decompression algorithm that can be applied to an entry or the file table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    Zlib,
    Lz4,
    Zstd,
}

impl Codec {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Codec::Zlib => "zlib",
            Codec::Lz4 => "lz4",
            Codec::Zstd => "zstd",
        }
    }

    /// Decompress `compressed` into exactly `expected_len` bytes.
    ///
    /// # Errors
    /// Returns [`CodecError`] if the stream is corrupt or truncated, or if it
    /// decodes to a length other than `expected_len`.
    pub fn decompress(self, compressed: &[u8], expected_len: usize) -> Result<Vec<u8>, CodecError> {
        match self {
            Codec::Zlib => zlib::decompress(compressed, expected_len),
            Codec::Lz4 => lz4::decompress(compressed, expected_len),
            Codec::Zstd => self::zstd::decompress(compressed, expected_len),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decompress data with the given codec
///
/// # Errors
/// Returns an error if decompression fails or the output length differs from `expected_len`.
pub fn decompress(codec: Codec, compressed: &[u8], expected_len: usize) -> Result<Vec<u8>, CodecError> {
    codec.decompress(compressed, expected_len)
}

/// Fail with [`CodecError::SizeMismatch`] unless `actual == expected`.
pub(crate) fn check_len(codec: Codec, expected: usize, actual: usize) -> Result<(), CodecError> {
    if actual == expected {
        Ok(())
    } else {
        Err(CodecError::SizeMismatch {
            codec,
            expected,
            actual,
        })
    }
}
