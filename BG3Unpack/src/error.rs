//! Error types for `BG3Unpack`
//!
//! Failures come in two severities. [`Error`] aborts the whole run (bad
//! header, unreadable table, listing cannot be created). [`EntryError`] is
//! scoped to a single table entry: it is reported and the entry skipped while
//! extraction carries on. Codec failures are [`CodecError`] and can surface
//! through either.

use std::path::PathBuf;

use thiserror::Error;

use crate::compression::Codec;

/// The fatal error type for `BG3Unpack` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file does not carry a `.pak` or `.lsv` extension.
    #[error("invalid file extension for {path}: supported extensions are .pak and .lsv")]
    InvalidExtension {
        /// The rejected input path.
        path: PathBuf,
    },

    /// The side-channel file listing could not be created.
    #[error("failed to create file listing {path}: {source}")]
    ListingCreateFailed {
        /// Where the listing was to be written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The output root directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDirFailed {
        /// The output root.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== PAK Archive Errors ====================
    /// The file is not a valid PAK archive (missing LSPK magic).
    #[error("invalid PAK magic: expected LSPK, found {found:?}")]
    InvalidPakMagic {
        /// The four bytes found at the start of the file.
        found: [u8; 4],
    },

    /// The PAK version is not the one this reader understands.
    #[error("unsupported PAK version: {version} (supported: 18)")]
    UnsupportedPakVersion {
        /// The version number found in the header.
        version: u32,
    },

    /// PAK header has not been read yet (internal state error).
    #[error("PAK header not read")]
    PakHeaderNotRead,

    /// The decompressed file table would not fit the format's 32-bit size fields.
    #[error("PAK file table too large: {entries} entries")]
    PakFileTableTooLarge {
        /// Entry count declared by the table region.
        entries: u32,
    },

    /// The archive ended before the compressed file table did.
    #[error("PAK file table truncated: expected {expected} bytes, read {actual}")]
    PakFileTableTruncated {
        /// Declared compressed table size.
        expected: u32,
        /// Bytes actually available.
        actual: usize,
    },

    /// The file table could not be decompressed to exactly `entries * 272` bytes.
    #[error("failed to decompress file table: {0}")]
    TableDecompressionFailed(#[source] CodecError),

    /// A table record was shorter than the fields it must hold.
    #[error("file table record {index} truncated: need {needed} bytes, have {available}")]
    RecordTruncated {
        /// Zero-based record index.
        index: usize,
        /// End offset of the field being read.
        needed: usize,
        /// Length of the record slice.
        available: usize,
    },

    /// The requested file was not found in the PAK archive.
    #[error("file not found in PAK: {0}")]
    FileNotFoundInPak(String),

    /// A single requested entry could not be read.
    #[error("failed to read {path}: {source}")]
    Entry {
        /// The entry's logical path.
        path: String,
        /// What went wrong with it.
        source: EntryError,
    },
}

/// A failure confined to one table entry.
///
/// These never abort a run; the driver records them next to the entry path
/// and moves on to the next entry.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EntryError {
    /// Fewer payload bytes were available than the table declares.
    #[error("short read at offset {offset:#x}: expected {expected} bytes, read {actual}")]
    ShortRead {
        /// Payload offset from the table.
        offset: u32,
        /// Declared byte count.
        expected: u32,
        /// Bytes actually read.
        actual: usize,
    },

    /// Seeking to or reading the payload failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The codec rejected the payload.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The compression tag is not one the format defines.
    #[error("unsupported compression type {tag:#010x} (possibly a 4GB+ entry)")]
    UnsupportedCompression {
        /// Raw 32-bit tag.
        tag: u32,
    },

    /// The logical path would land outside the output root.
    #[error("refusing to write outside the output root: {path}")]
    UnsafePath {
        /// The logical path as stored in the table.
        path: String,
    },

    /// Creating the parent directories failed.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Writing the output file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

/// Decompression failure reported by the codec layer.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CodecError {
    /// LZ4 decompression failed.
    #[error("LZ4 decompression failed: {message}")]
    Lz4 {
        /// The error message.
        message: String,
    },

    /// Zlib decompression failed.
    #[error("Zlib decompression failed: {message}")]
    Zlib {
        /// The error message.
        message: String,
    },

    /// Zstd decompression failed.
    #[error("Zstd decompression failed: {message}")]
    Zstd {
        /// The error message.
        message: String,
    },

    /// The codec produced a different number of bytes than the table declares.
    #[error("{codec} produced {actual} bytes, expected {expected}")]
    SizeMismatch {
        /// Codec that ran.
        codec: Codec,
        /// Declared decompressed size.
        expected: usize,
        /// Bytes the codec produced.
        actual: usize,
    },
}

/// A specialized Result type for `BG3Unpack` operations.
pub type Result<T> = std::result::Result<T, Error>;
