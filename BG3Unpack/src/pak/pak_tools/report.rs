//! Outcome of an extraction run

use crate::error::EntryError;

/// What happened to an entry that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Decompressed and handed to the sink
    Written,
    /// Stored entry of size zero; nothing to write
    SkippedEmpty,
}

/// An entry that could not be extracted
#[derive(Debug)]
pub struct EntryFailure {
    /// Logical path from the file table
    pub path: String,
    /// Why it was skipped
    pub error: EntryError,
}

/// Result of extracting a PAK, with support for partial success
#[derive(Debug, Default)]
pub struct ExtractionReport {
    /// Number of entries in the file table
    pub total: usize,
    /// Entries written to the sink, in table order
    pub extracted: Vec<String>,
    /// Stored entries of size zero, skipped without error
    pub skipped_empty: Vec<String>,
    /// Entries that failed to extract
    pub failures: Vec<EntryFailure>,
}

impl ExtractionReport {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Returns true if no entry failed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Record the outcome of one entry, logging skips and failures
    pub fn record(&mut self, path: &str, outcome: Result<EntryOutcome, EntryError>) {
        match outcome {
            Ok(EntryOutcome::Written) => self.extracted.push(path.to_string()),
            Ok(EntryOutcome::SkippedEmpty) => {
                tracing::warn!("Skipping entry with size 0: {path}");
                self.skipped_empty.push(path.to_string());
            }
            Err(error) => {
                tracing::warn!("Failed to extract {path}: {error}");
                self.failures.push(EntryFailure {
                    path: path.to_string(),
                    error,
                });
            }
        }
    }

    /// Entries accounted for so far (extracted, skipped or failed)
    #[must_use]
    pub fn processed(&self) -> usize {
        self.extracted.len() + self.skipped_empty.len() + self.failures.len()
    }
}
