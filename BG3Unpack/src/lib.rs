//! # BG3Unpack
//!
//! Extracts LSPK version 18 archives, the `.pak` packages and `.lsv` save
//! games used by Baldur's Gate 3.
//!
//! An archive is a 16-byte header, a run of payloads, and an LZ4-compressed
//! file table of 272-byte records. Each payload is stored raw or compressed
//! with zlib, LZ4 or Zstandard.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bg3unpack::pak::{ExtractionOptions, PakOperations};
//!
//! // List the file table
//! let files = PakOperations::list("Shared.pak")?;
//! println!("Found {} files", files.len());
//!
//! // Extract into ./Shared/ and write Shared_files.log next to the archive
//! let options = ExtractionOptions::for_archive("Shared.pak");
//! let report = PakOperations::extract("Shared.pak", &options, &|_| {})?;
//! for failure in &report.failures {
//!     eprintln!("skipped {}: {}", failure.path, failure.error);
//! }
//!
//! // Read a specific file without extracting
//! let data = PakOperations::read_file("Shared.pak", "Public/Shared/meta.lsx")?;
//! # Ok::<(), bg3unpack::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `bg3unpack` command-line binary

pub mod compression;
pub mod error;
pub mod pak;

// Re-exports for convenience
pub use error::{CodecError, EntryError, Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::compression::Codec;
    pub use crate::error::{CodecError, EntryError, Error, Result};

    // PAK operations
    pub use crate::pak::{
        CompressionMethod, DirectorySink, ExtractionOptions, ExtractionReport, ExtractionSink,
        FileEntry, MemorySink, PakOperations, PakPhase, PakProgress,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
