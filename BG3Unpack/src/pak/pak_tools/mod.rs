//! PAK archive operations

mod helpers;
mod operations;
mod report;

pub use helpers::{default_output_dir, listing_path_for, validate_archive_path};
pub use operations::PakOperations;
pub use report::{EntryFailure, EntryOutcome, ExtractionReport};

use super::lspk::PakProgress;

/// Progress callback for PAK operations.
///
/// Receives a [`PakProgress`] struct with phase, current/total counts, and optional filename.
/// Must be `Sync + Send` to support parallel extraction.
///
/// # Example
/// ```ignore
/// use bg3unpack::pak::{ExtractionOptions, PakOperations, PakPhase};
///
/// let options = ExtractionOptions::for_archive("Shared.pak");
/// PakOperations::extract("Shared.pak", &options, &|progress| {
///     match progress.phase {
///         PakPhase::ReadingTable => println!("Reading file table..."),
///         PakPhase::DecompressingFiles => {
///             println!("{}/{}: {:?}", progress.current, progress.total, progress.current_file);
///         }
///         _ => {}
///     }
/// })?;
/// ```
pub type ProgressCallback<'a> = &'a (dyn Fn(&PakProgress) + Sync + Send);
