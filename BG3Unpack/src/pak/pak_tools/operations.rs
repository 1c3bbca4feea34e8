//! Core PAK archive operations

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use super::super::extraction_options::ExtractionOptions;
use super::super::listing::write_listing_file;
use super::super::lspk::{FileEntry, LspkReader, PakPhase, PakProgress};
use super::super::sink::{DirectorySink, ExtractionSink};
use super::ProgressCallback;
use super::report::{EntryOutcome, ExtractionReport};
use crate::error::{EntryError, Error, Result};

/// High-level PAK archive operations.
pub struct PakOperations;

impl PakOperations {
    /// Extract a PAK file to disk
    ///
    /// Validates the header, decodes the file table, writes the listing (if
    /// `options.listing_path` is set) and then extracts every entry below
    /// `options.output_dir`. Entries that fail are recorded in the returned
    /// report; they do not stop the run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the PAK file cannot be opened.
    /// Returns [`Error::InvalidPakMagic`] or [`Error::UnsupportedPakVersion`] for a bad header.
    /// Returns [`Error::TableDecompressionFailed`] if the file table cannot be decompressed.
    /// Returns [`Error::OutputDirFailed`] or [`Error::ListingCreateFailed`] if outputs cannot be created.
    ///
    /// [`Error::Io`]: crate::Error::Io
    /// [`Error::InvalidPakMagic`]: crate::Error::InvalidPakMagic
    /// [`Error::UnsupportedPakVersion`]: crate::Error::UnsupportedPakVersion
    /// [`Error::TableDecompressionFailed`]: crate::Error::TableDecompressionFailed
    /// [`Error::OutputDirFailed`]: crate::Error::OutputDirFailed
    /// [`Error::ListingCreateFailed`]: crate::Error::ListingCreateFailed
    pub fn extract<P: AsRef<Path>>(
        pak_path: P,
        options: &ExtractionOptions,
        progress: ProgressCallback,
    ) -> Result<ExtractionReport> {
        let pak_path = pak_path.as_ref();
        let (mut reader, entries) = Self::open(pak_path, progress)?;

        std::fs::create_dir_all(&options.output_dir).map_err(|source| Error::OutputDirFailed {
            path: options.output_dir.clone(),
            source,
        })?;

        if let Some(listing_path) = &options.listing_path {
            progress(&PakProgress::new(PakPhase::WritingListing, 1, 1));
            write_listing_file(listing_path, &entries)?;
        }

        let sink = DirectorySink::new(&options.output_dir);
        let report = if options.parallel {
            Self::extract_entries_parallel(pak_path, &entries, &sink, progress)
        } else {
            Self::extract_entries(&mut reader, &entries, &sink, progress)
        };

        tracing::info!(
            "Extracted {} of {} files to {} ({} empty, {} failed)",
            report.extracted.len(),
            report.total,
            options.output_dir.display(),
            report.skipped_empty.len(),
            report.failures.len()
        );
        Ok(report)
    }

    /// Extract every entry of a PAK into an arbitrary sink
    ///
    /// No listing is written and no directories are created up front.
    ///
    /// # Errors
    ///
    /// Returns an error if the PAK cannot be opened, its header is invalid,
    /// or its file table cannot be read.
    pub fn extract_to_sink<P: AsRef<Path>, S: ExtractionSink>(
        pak_path: P,
        sink: &S,
        parallel: bool,
        progress: ProgressCallback,
    ) -> Result<ExtractionReport> {
        let pak_path = pak_path.as_ref();
        let (mut reader, entries) = Self::open(pak_path, progress)?;

        Ok(if parallel {
            Self::extract_entries_parallel(pak_path, &entries, sink, progress)
        } else {
            Self::extract_entries(&mut reader, &entries, sink, progress)
        })
    }

    /// List the file table of a PAK
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the PAK file cannot be opened.
    /// Returns [`Error::InvalidPakMagic`] if the file is not a valid PAK archive.
    ///
    /// [`Error::Io`]: crate::Error::Io
    /// [`Error::InvalidPakMagic`]: crate::Error::InvalidPakMagic
    pub fn list<P: AsRef<Path>>(pak_path: P) -> Result<Vec<FileEntry>> {
        let (_, entries) = Self::open(pak_path.as_ref(), &|_| {})?;
        Ok(entries)
    }

    /// Write the `_files.log` listing for a PAK without extracting anything
    ///
    /// Returns the number of entries listed.
    ///
    /// # Errors
    ///
    /// Returns an error if the PAK cannot be read or the listing cannot be written.
    pub fn write_listing<P: AsRef<Path>, L: AsRef<Path>>(pak_path: P, listing_path: L) -> Result<usize> {
        let entries = Self::list(pak_path)?;
        write_listing_file(listing_path.as_ref(), &entries)?;
        Ok(entries.len())
    }

    /// Read a single file from a PAK into memory
    ///
    /// `file_path` must match the entry path exactly as stored in the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFoundInPak`] if no entry has that path, or
    /// [`Error::Entry`] if the entry cannot be read or decompressed.
    ///
    /// [`Error::FileNotFoundInPak`]: crate::Error::FileNotFoundInPak
    /// [`Error::Entry`]: crate::Error::Entry
    pub fn read_file<P: AsRef<Path>>(pak_path: P, file_path: &str) -> Result<Vec<u8>> {
        let (mut reader, entries) = Self::open(pak_path.as_ref(), &|_| {})?;

        let entry = entries
            .iter()
            .find(|e| e.path == file_path)
            .ok_or_else(|| Error::FileNotFoundInPak(file_path.to_string()))?;

        match reader.read_entry(entry) {
            Ok(data) => Ok(data.unwrap_or_default()),
            Err(source) => Err(Error::Entry {
                path: entry.path.clone(),
                source,
            }),
        }
    }

    /// Open a PAK, validate its header and decode its file table
    fn open(pak_path: &Path, progress: ProgressCallback) -> Result<(LspkReader<File>, Vec<FileEntry>)> {
        let mut reader = LspkReader::new(File::open(pak_path)?);

        progress(&PakProgress::new(PakPhase::ReadingHeader, 1, 1));
        let header = reader.read_header()?;
        tracing::info!("Package Version: {}", header.version);

        progress(&PakProgress::new(PakPhase::ReadingTable, 1, 1));
        let entries = reader.read_file_table()?;
        tracing::info!("{} files in {}", entries.len(), pak_path.display());

        Ok((reader, entries))
    }

    /// Extract entries one at a time, in table order, through one reader
    fn extract_entries<R: Read + Seek, S: ExtractionSink>(
        reader: &mut LspkReader<R>,
        entries: &[FileEntry],
        sink: &S,
        progress: ProgressCallback,
    ) -> ExtractionReport {
        let total = entries.len();
        let mut report = ExtractionReport::new(total);

        for (i, entry) in entries.iter().enumerate() {
            progress(&PakProgress::with_file(
                PakPhase::DecompressingFiles,
                i + 1,
                total,
                entry.file_name(),
            ));
            report.record(&entry.path, extract_entry(reader, entry, sink));
        }

        progress(&PakProgress::new(PakPhase::Complete, total, total));
        report
    }

    /// Extract entries on the rayon pool
    ///
    /// Each worker opens its own handle to the archive, so no stream is shared.
    /// Outcomes are recorded in table order.
    fn extract_entries_parallel<S: ExtractionSink>(
        pak_path: &Path,
        entries: &[FileEntry],
        sink: &S,
        progress: ProgressCallback,
    ) -> ExtractionReport {
        let total = entries.len();
        let processed = AtomicUsize::new(0);

        let outcomes: Vec<std::result::Result<EntryOutcome, EntryError>> = entries
            .par_iter()
            .map_init(
                || File::open(pak_path).map(LspkReader::new),
                |reader, entry| {
                    let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
                    progress(&PakProgress::with_file(
                        PakPhase::DecompressingFiles,
                        current,
                        total,
                        entry.file_name(),
                    ));

                    match reader {
                        Ok(reader) => extract_entry(reader, entry, sink),
                        Err(e) => Err(EntryError::Io(std::io::Error::new(e.kind(), e.to_string()))),
                    }
                },
            )
            .collect();

        let mut report = ExtractionReport::new(total);
        for (entry, outcome) in entries.iter().zip(outcomes) {
            report.record(&entry.path, outcome);
        }

        progress(&PakProgress::new(PakPhase::Complete, total, total));
        report
    }
}

/// Read, decompress and write one entry
fn extract_entry<R: Read + Seek, S: ExtractionSink>(
    reader: &mut LspkReader<R>,
    entry: &FileEntry,
    sink: &S,
) -> std::result::Result<EntryOutcome, EntryError> {
    tracing::debug!(
        "{}: offset {:#x}, compression {:#x}, {} -> {} bytes",
        entry.path,
        entry.offset,
        entry.compression_tag,
        entry.size_compressed(),
        entry.size_decompressed()
    );

    match reader.read_entry(entry)? {
        Some(data) => {
            sink.write_file(&entry.path, &data)?;
            Ok(EntryOutcome::Written)
        }
        None => Ok(EntryOutcome::SkippedEmpty),
    }
}
