//! PAK archive operations module

mod extraction_options;
mod listing;
pub mod lspk;
pub mod pak_tools;
pub mod sink;

// Primary public API
pub use extraction_options::ExtractionOptions;
pub use pak_tools::{
    EntryFailure, EntryOutcome, ExtractionReport, PakOperations, ProgressCallback,
    default_output_dir, listing_path_for, validate_archive_path,
};

// Re-export public LSPK types
pub use lspk::{CompressionMethod, EntryPayload, FileEntry, PakPhase, PakProgress};

pub use listing::{write_listing, write_listing_file};
pub use sink::{DirectorySink, ExtractionSink, MemorySink};
