//! Types for LSPK PAK file handling
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`, 2015 Norbyte (`LSLib`, MIT), 2023 saghm (xiba, Apache-2.0)
//!
//! SPDX-License-Identifier: MIT AND Apache-2.0

use crate::compression::Codec;

/// Compression tag for entries stored without compression
pub const COMPRESSION_NONE: u32 = 0x0000_0000;
/// Compression tag for zlib entries (pre-Patch 6)
pub const COMPRESSION_ZLIB: u32 = 0x2100_0000;
/// Compression tag for LZ4 entries
pub const COMPRESSION_LZ4: u32 = 0x4200_0000;
/// Compression tag for zstd entries (Patch 6 and later)
pub const COMPRESSION_ZSTD: u32 = 0x2300_0000;

/// Compression method as selected by a table record's 32-bit tag.
///
/// The tag is opaque: only the four exact values above are recognized, there
/// is no masking of flag bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    None,
    Compressed(Codec),
    Unknown(u32),
}

impl CompressionMethod {
    /// Parse compression method from the raw tag
    #[must_use]
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            COMPRESSION_NONE => CompressionMethod::None,
            COMPRESSION_ZLIB => CompressionMethod::Compressed(Codec::Zlib),
            COMPRESSION_LZ4 => CompressionMethod::Compressed(Codec::Lz4),
            COMPRESSION_ZSTD => CompressionMethod::Compressed(Codec::Zstd),
            other => CompressionMethod::Unknown(other),
        }
    }

    /// Convert back to the raw tag
    #[must_use]
    pub fn to_tag(self) -> u32 {
        match self {
            CompressionMethod::None => COMPRESSION_NONE,
            CompressionMethod::Compressed(Codec::Zlib) => COMPRESSION_ZLIB,
            CompressionMethod::Compressed(Codec::Lz4) => COMPRESSION_LZ4,
            CompressionMethod::Compressed(Codec::Zstd) => COMPRESSION_ZSTD,
            CompressionMethod::Unknown(tag) => tag,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionMethod::None => "none",
            CompressionMethod::Compressed(codec) => codec.as_str(),
            CompressionMethod::Unknown(_) => "unknown",
        }
    }
}

/// Header of an LSPK PAK file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LspkHeader {
    /// Version number (always 18 once validated)
    pub version: u32,
    /// Absolute offset of the table region
    pub table_offset: u64,
}

/// Table region metadata read at the header's table offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRegion {
    /// Number of files in the archive
    pub num_files: u32,
    /// Size of the compressed file table
    pub table_size_compressed: u32,
}

impl TableRegion {
    /// Size the table must decompress to, or `None` if it overflows the
    /// format's 32-bit bound.
    #[must_use]
    pub fn table_size_decompressed(&self) -> Option<u32> {
        self.num_files.checked_mul(super::TABLE_ENTRY_SIZE as u32)
    }
}

/// Sizes of an entry's payload, decoded according to its compression tag.
///
/// Stored entries have no compressed-size field: their single size lives in
/// the slot compressed entries use for the compressed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPayload {
    /// Raw bytes, copied verbatim
    Stored {
        size: u32,
    },
    /// Bytes to run through `codec`
    Compressed {
        codec: Codec,
        size_compressed: u32,
        size_decompressed: u32,
    },
    /// Tag not recognized; fields kept as read for the listing
    Unsupported {
        tag: u32,
        size_compressed: u32,
        size_decompressed: u32,
    },
}

/// Entry in the file table describing a file in the PAK
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Logical path of the file within the archive (`/` separated)
    pub path: String,
    /// Absolute offset of the payload in the archive
    pub offset: u32,
    /// Raw compression tag
    pub compression_tag: u32,
    /// Payload sizes
    pub payload: EntryPayload,
}

impl FileEntry {
    #[must_use]
    pub fn compression(&self) -> CompressionMethod {
        CompressionMethod::from_tag(self.compression_tag)
    }

    /// Bytes occupied in the archive
    #[must_use]
    pub fn size_compressed(&self) -> u32 {
        match self.payload {
            EntryPayload::Stored { size } => size,
            EntryPayload::Compressed { size_compressed, .. }
            | EntryPayload::Unsupported { size_compressed, .. } => size_compressed,
        }
    }

    /// Bytes the extracted file will hold
    #[must_use]
    pub fn size_decompressed(&self) -> u32 {
        match self.payload {
            EntryPayload::Stored { size } => size,
            EntryPayload::Compressed { size_decompressed, .. }
            | EntryPayload::Unsupported { size_decompressed, .. } => size_decompressed,
        }
    }

    /// Last path component, for progress display
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Progress information during PAK operations
#[derive(Debug, Clone)]
pub struct PakProgress {
    /// Current operation phase
    pub phase: PakPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Current file being processed (if applicable)
    pub current_file: Option<String>,
}

impl PakProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: PakPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file/item name
    #[must_use]
    pub fn with_file(
        phase: PakPhase,
        current: usize,
        total: usize,
        file: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }
}

/// Phase of PAK operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PakPhase {
    /// Reading PAK header
    ReadingHeader,
    /// Reading and decompressing file table
    ReadingTable,
    /// Writing the `_files.log` listing
    WritingListing,
    /// Decompressing and writing individual files
    DecompressingFiles,
    /// Operation complete
    Complete,
}

impl PakPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadingHeader => "Reading header",
            Self::ReadingTable => "Reading file table",
            Self::WritingListing => "Writing file listing",
            Self::DecompressingFiles => "Decompressing files",
            Self::Complete => "Complete",
        }
    }
}
