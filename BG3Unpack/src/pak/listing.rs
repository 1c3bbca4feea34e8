//! The `<stem>_files.log` side-channel listing
//!
//! One block per table entry, separated by blank lines:
//!
//! ```text
//! Name: Public/Shared/meta.lsx
//! Offset: 0x1a2b
//! Compression Type: 0x42000000
//! Compressed Size: 311 bytes.
//! Decompressed Size: 964 bytes.
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use super::lspk::FileEntry;

/// Write the listing block for each entry to `out`.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_listing<W: Write>(out: &mut W, entries: &[FileEntry]) -> std::io::Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Name: {}", entry.path)?;
        writeln!(out, "Offset: {:#x}", entry.offset)?;
        writeln!(out, "Compression Type: {:#x}", entry.compression_tag)?;
        writeln!(out, "Compressed Size: {} bytes.", entry.size_compressed())?;
        writeln!(out, "Decompressed Size: {} bytes.", entry.size_decompressed())?;
    }
    Ok(())
}

/// Create `path` and write the listing for `entries` into it.
///
/// # Errors
/// Returns [`Error::ListingCreateFailed`] if the file cannot be created, or
/// an IO error if writing fails.
pub fn write_listing_file(path: &Path, entries: &[FileEntry]) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::ListingCreateFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = BufWriter::new(file);
    write_listing(&mut out, entries)?;
    out.flush()?;

    tracing::info!("Wrote listing of {} entries to {}", entries.len(), path.display());
    Ok(())
}
