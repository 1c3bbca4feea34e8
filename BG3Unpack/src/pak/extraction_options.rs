//! Extraction options
//!
//! Run configuration for [`PakOperations::extract`](super::PakOperations::extract).

use std::path::{Path, PathBuf};

use super::pak_tools::{default_output_dir, listing_path_for};

/// Options for a PAK extraction run.
///
/// # Example
///
/// ```no_run
/// use bg3unpack::pak::ExtractionOptions;
///
/// // Defaults: ./Shared/ as output root, Shared_files.log next to the archive
/// let options = ExtractionOptions::for_archive("Data/Shared.pak");
///
/// // Or configure individually
/// let options = ExtractionOptions::for_archive("Data/Shared.pak")
///     .with_output_dir("unpacked/Shared")
///     .with_listing(None)
///     .with_parallel(true);
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionOptions {
    /// Root directory entries are written below
    pub output_dir: PathBuf,

    /// Where to write the `_files.log` listing; `None` skips it
    pub listing_path: Option<PathBuf>,

    /// Decompress entries on a rayon pool, one archive handle per worker
    /// Default: false (sequential, table order)
    pub parallel: bool,
}

impl ExtractionOptions {
    /// Default options for `pak_path`: output root named after the archive
    /// stem in the current directory, listing next to the archive.
    #[must_use]
    pub fn for_archive(pak_path: impl AsRef<Path>) -> Self {
        let pak_path = pak_path.as_ref();
        Self {
            output_dir: default_output_dir(pak_path),
            listing_path: Some(listing_path_for(pak_path)),
            parallel: false,
        }
    }

    /// Set the output root.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the listing path, or `None` to skip writing one.
    #[must_use]
    pub fn with_listing(mut self, path: Option<PathBuf>) -> Self {
        self.listing_path = path;
        self
    }

    /// Set whether to extract in parallel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
