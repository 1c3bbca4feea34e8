//! SPDX-FileCopyrightText: 2025 CyberDeco, 2015 Norbyte (LSLib, MIT)
//!
//! SPDX-License-Identifier: MIT
//!
//! File table record decoding
//!
//! A v18 record is 272 bytes:
//!
//! ```text
//! [0, 256)    path, NUL padded
//! [256, 260)  payload offset
//! [260, 264)  compression tag
//! [264, 268)  compressed size, or the file size when the tag is 0
//! [268, 272)  decompressed size, unused when the tag is 0
//! ```

use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian};

use super::{CompressionMethod, EntryPayload, FileEntry, PATH_LENGTH, TABLE_ENTRY_SIZE};
use crate::error::{Error, Result};

const OFFSET_FIELD: usize = 256;
const TAG_FIELD: usize = 260;
const FIRST_SIZE_FIELD: usize = 264;
const SECOND_SIZE_FIELD: usize = 268;

/// Bounds-checked field access into one record
struct Record<'a> {
    index: usize,
    bytes: &'a [u8],
}

impl Record<'_> {
    fn field(&self, range: Range<usize>) -> Result<&[u8]> {
        let needed = range.end;
        self.bytes.get(range).ok_or(Error::RecordTruncated {
            index: self.index,
            needed,
            available: self.bytes.len(),
        })
    }

    fn u32_at(&self, start: usize) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.field(start..start + 4)?))
    }

    fn path(&self) -> Result<String> {
        let raw = self.field(0..PATH_LENGTH)?;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(PATH_LENGTH);
        Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
    }
}

/// Decode record `index` from its bytes.
///
/// The tag is read first; the two size slots are interpreted according to it.
///
/// # Errors
/// Returns [`Error::RecordTruncated`] if `bytes` is too short for a field.
pub fn decode_record(index: usize, bytes: &[u8]) -> Result<FileEntry> {
    let record = Record { index, bytes };

    let path = record.path()?;
    let offset = record.u32_at(OFFSET_FIELD)?;
    let compression_tag = record.u32_at(TAG_FIELD)?;

    let payload = match CompressionMethod::from_tag(compression_tag) {
        CompressionMethod::None => EntryPayload::Stored {
            size: record.u32_at(FIRST_SIZE_FIELD)?,
        },
        CompressionMethod::Compressed(codec) => EntryPayload::Compressed {
            codec,
            size_compressed: record.u32_at(FIRST_SIZE_FIELD)?,
            size_decompressed: record.u32_at(SECOND_SIZE_FIELD)?,
        },
        CompressionMethod::Unknown(tag) => EntryPayload::Unsupported {
            tag,
            size_compressed: record.u32_at(FIRST_SIZE_FIELD)?,
            size_decompressed: record.u32_at(SECOND_SIZE_FIELD)?,
        },
    };

    Ok(FileEntry {
        path,
        offset,
        compression_tag,
        payload,
    })
}

/// Decode a decompressed file table into its entries, in table order.
///
/// # Errors
/// Returns an error if a record is truncated.
pub fn decode_table(table: &[u8], num_files: usize) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(num_files);

    for index in 0..num_files {
        let start = index * TABLE_ENTRY_SIZE;
        let end = (start + TABLE_ENTRY_SIZE).min(table.len());
        let bytes = table.get(start..end).unwrap_or_default();
        entries.push(decode_record(index, bytes)?);
    }

    Ok(entries)
}
