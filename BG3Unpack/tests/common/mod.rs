//! Synthetic LSPK v18 archives for integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::ZlibEncoder;

pub const TAG_NONE: u32 = 0;
pub const TAG_ZLIB: u32 = 0x21000000;
pub const TAG_LZ4: u32 = 0x42000000;
pub const TAG_ZSTD: u32 = 0x23000000;

struct TestEntry {
    path: String,
    tag: u32,
    payload: Vec<u8>,
    size_compressed: u32,
    size_decompressed: u32,
    offset: Option<u32>,
}

/// Builds `header | payloads | padding | table region`
pub struct ArchiveBuilder {
    magic: [u8; 4],
    version: u32,
    entries: Vec<TestEntry>,
    padding: usize,
    declared_count: Option<u32>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            magic: *b"LSPK",
            version: 18,
            entries: Vec::new(),
            padding: 0,
            declared_count: None,
        }
    }

    pub fn magic(mut self, magic: [u8; 4]) -> Self {
        self.magic = magic;
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Zero bytes between the last payload and the table region
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Entry count written to the table region, regardless of the records present
    pub fn declared_count(mut self, count: u32) -> Self {
        self.declared_count = Some(count);
        self
    }

    pub fn stored(self, path: &str, data: &[u8]) -> Self {
        // Decompressed size of stored entries is ignored by readers
        self.raw(path, TAG_NONE, data.to_vec(), data.len() as u32, 0xdead_beef)
    }

    pub fn lz4(self, path: &str, data: &[u8]) -> Self {
        let compressed = lz4_flex::block::compress(data);
        let len = compressed.len() as u32;
        self.raw(path, TAG_LZ4, compressed, len, data.len() as u32)
    }

    pub fn zlib(self, path: &str, data: &[u8]) -> Self {
        let compressed = zlib_compress(data);
        let len = compressed.len() as u32;
        self.raw(path, TAG_ZLIB, compressed, len, data.len() as u32)
    }

    pub fn zstd(self, path: &str, data: &[u8]) -> Self {
        let compressed = zstd::bulk::compress(data, 3).unwrap();
        let len = compressed.len() as u32;
        self.raw(path, TAG_ZSTD, compressed, len, data.len() as u32)
    }

    /// Entry with every record field chosen by the caller
    pub fn raw(
        mut self,
        path: &str,
        tag: u32,
        payload: Vec<u8>,
        size_compressed: u32,
        size_decompressed: u32,
    ) -> Self {
        self.entries.push(TestEntry {
            path: path.to_string(),
            tag,
            payload,
            size_compressed,
            size_decompressed,
            offset: None,
        });
        self
    }

    /// Point the most recently added entry at `offset` instead of its payload
    pub fn at_offset(mut self, offset: u32) -> Self {
        if let Some(entry) = self.entries.last_mut() {
            entry.offset = Some(offset);
        }
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.magic);
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&[0u8; 8]);

        let mut table = Vec::new();
        for entry in &self.entries {
            let offset = entry.offset.unwrap_or(out.len() as u32);
            out.extend_from_slice(&entry.payload);

            let mut record = [0u8; 272];
            record[..entry.path.len()].copy_from_slice(entry.path.as_bytes());
            record[256..260].copy_from_slice(&offset.to_le_bytes());
            record[260..264].copy_from_slice(&entry.tag.to_le_bytes());
            record[264..268].copy_from_slice(&entry.size_compressed.to_le_bytes());
            record[268..272].copy_from_slice(&entry.size_decompressed.to_le_bytes());
            table.extend_from_slice(&record);
        }

        out.extend(std::iter::repeat_n(0u8, self.padding));

        let table_offset = out.len() as u64;
        out[8..16].copy_from_slice(&table_offset.to_le_bytes());

        let count = self.declared_count.unwrap_or(self.entries.len() as u32);
        let compressed_table = lz4_flex::block::compress(&table);
        out.extend_from_slice(&count.to_le_bytes());
        out.extend_from_slice(&(compressed_table.len() as u32).to_le_bytes());
        out.extend_from_slice(&compressed_table);
        out
    }

    /// Write the archive to `dir/name` and return its path
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

pub fn zlib_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Plaintext that compresses well under every codec
pub fn sample_text(lines: usize) -> Vec<u8> {
    (0..lines)
        .map(|i| format!("<node id=\"Entry{i}\"><attribute id=\"UUID\" value=\"{i:08x}\"/></node>\n"))
        .collect::<String>()
        .into_bytes()
}
