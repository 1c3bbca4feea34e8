//! SPDX-FileCopyrightText: 2025 CyberDeco, 2015 Norbyte (LSLib, MIT), 2023 saghm (xiba, Apache-2.0)
//!
//! SPDX-License-Identifier: MIT AND Apache-2.0
//!
//! LSPK PAK file reader

use std::io::{BufReader, Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use super::{
    EntryPayload, FileEntry, LspkHeader, TableRegion, MAGIC, VERSION, decode_table,
};
use crate::compression::lz4;
use crate::error::{EntryError, Error, Result};

/// LSPK PAK file reader
///
/// Reads the header and file table once, then serves entry payloads by
/// seeking to their absolute offsets. Entries can be read in any order.
pub struct LspkReader<R: Read + Seek> {
    reader: BufReader<R>,
    header: Option<LspkHeader>,
    table: Option<TableRegion>,
}

impl<R: Read + Seek> LspkReader<R> {
    /// Create a new reader from a Read + Seek source
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            header: None,
            table: None,
        }
    }

    /// Read and validate the PAK file header
    ///
    /// # Errors
    /// Returns [`Error::InvalidPakMagic`] if the file does not start with `LSPK`,
    /// [`Error::UnsupportedPakVersion`] unless the version is 18, or an IO error.
    pub fn read_header(&mut self) -> Result<LspkHeader> {
        self.reader.seek(SeekFrom::Start(0))?;

        let mut magic = [0u8; 4];
        self.reader.read_exact(&mut magic)?;

        if magic != MAGIC {
            return Err(Error::InvalidPakMagic { found: magic });
        }

        let version = self.reader.read_u32::<LittleEndian>()?;
        if version != VERSION {
            return Err(Error::UnsupportedPakVersion { version });
        }

        let table_offset = self.reader.read_u64::<LittleEndian>()?;

        let header = LspkHeader {
            version,
            table_offset,
        };
        tracing::debug!("LSPK v{version}, file table at {table_offset:#x}");

        self.header = Some(header);
        Ok(header)
    }

    /// Read the entry count and compressed table size at the table offset
    ///
    /// # Errors
    /// Returns an error if the header hasn't been read or reading fails.
    pub fn read_table_region(&mut self) -> Result<TableRegion> {
        let header = self.header.ok_or(Error::PakHeaderNotRead)?;

        self.reader.seek(SeekFrom::Start(header.table_offset))?;

        let num_files = self.reader.read_u32::<LittleEndian>()?;
        let table_size_compressed = self.reader.read_u32::<LittleEndian>()?;

        let region = TableRegion {
            num_files,
            table_size_compressed,
        };
        self.table = Some(region);
        Ok(region)
    }

    /// Read, decompress and decode the file table
    ///
    /// The table is always LZ4 and must decompress to exactly
    /// `num_files * 272` bytes.
    ///
    /// # Errors
    /// Returns an error if the table is truncated, too large, fails to
    /// decompress, or decompresses to the wrong size.
    pub fn read_file_table(&mut self) -> Result<Vec<FileEntry>> {
        let region = match self.table {
            Some(region) => region,
            None => self.read_table_region()?,
        };
        let header = self.header.ok_or(Error::PakHeaderNotRead)?;

        let table_size_decompressed = region
            .table_size_decompressed()
            .ok_or(Error::PakFileTableTooLarge { entries: region.num_files })?;

        self.reader.seek(SeekFrom::Start(header.table_offset + 8))?;
        let mut compressed_table = Vec::new();
        (&mut self.reader)
            .take(u64::from(region.table_size_compressed))
            .read_to_end(&mut compressed_table)?;

        if compressed_table.len() != region.table_size_compressed as usize {
            return Err(Error::PakFileTableTruncated {
                expected: region.table_size_compressed,
                actual: compressed_table.len(),
            });
        }

        let table = lz4::decompress(&compressed_table, table_size_decompressed as usize)
            .map_err(Error::TableDecompressionFailed)?;

        decode_table(&table, region.num_files as usize)
    }

    /// Read the header and file table
    ///
    /// # Errors
    /// Returns an error if the header is invalid or the table cannot be read.
    pub fn list_files(&mut self) -> Result<Vec<FileEntry>> {
        if self.header.is_none() {
            self.read_header()?;
        }
        self.read_file_table()
    }

    /// Read and decompress one entry's payload
    ///
    /// Returns `Ok(None)` for stored entries of size zero, which have nothing
    /// to extract. Offsets are absolute, so this does not depend on the header
    /// having been read through this reader.
    ///
    /// # Errors
    /// Returns an [`EntryError`] on short reads, codec failures, size
    /// mismatches or unsupported compression tags.
    pub fn read_entry(&mut self, entry: &FileEntry) -> std::result::Result<Option<Vec<u8>>, EntryError> {
        match entry.payload {
            EntryPayload::Stored { size: 0 } => Ok(None),
            EntryPayload::Stored { size } => self.read_payload(entry.offset, size).map(Some),
            EntryPayload::Compressed {
                codec,
                size_compressed,
                size_decompressed,
            } => {
                let compressed = self.read_payload(entry.offset, size_compressed)?;
                let data = codec.decompress(&compressed, size_decompressed as usize)?;
                Ok(Some(data))
            }
            EntryPayload::Unsupported { tag, .. } => Err(EntryError::UnsupportedCompression { tag }),
        }
    }

    /// Read exactly `len` bytes at `offset`
    fn read_payload(&mut self, offset: u32, len: u32) -> std::result::Result<Vec<u8>, EntryError> {
        self.reader.seek(SeekFrom::Start(u64::from(offset)))?;

        let mut data = Vec::with_capacity(len as usize);
        (&mut self.reader).take(u64::from(len)).read_to_end(&mut data)?;

        if data.len() != len as usize {
            return Err(EntryError::ShortRead {
                offset,
                expected: len,
                actual: data.len(),
            });
        }

        Ok(data)
    }

    /// Get the PAK header, if it has been read
    pub fn header(&self) -> Option<LspkHeader> {
        self.header
    }

    /// Get the number of files in the PAK
    pub fn file_count(&self) -> Option<u32> {
        self.table.map(|t| t.num_files)
    }
}
