//! SPDX-FileCopyrightText: 2025 CyberDeco, 2015 Norbyte (LSLib, MIT), 2023 saghm (xiba, Apache-2.0)
//!
//! SPDX-License-Identifier: MIT AND Apache-2.0
//!
//! LSPK v18 PAK file format reader
//!
//! Layout (little-endian):
//!
//! ```text
//! 0               "LSPK"
//! 4               u32 version (18)
//! 8               u64 table offset
//! table offset    u32 entry count
//! table offset+4  u32 compressed table size
//! table offset+8  LZ4 block, entry count * 272 bytes once decompressed
//! ```

mod reader;
mod table;
mod types;

pub use reader::LspkReader;
pub use table::{decode_record, decode_table};
pub use types::*;

/// LSPK magic bytes
pub const MAGIC: [u8; 4] = [b'L', b'S', b'P', b'K'];

/// The only supported PAK version
pub const VERSION: u32 = 18;

/// Length of file path in table entry
pub const PATH_LENGTH: usize = 256;

/// Size of a decompressed table entry
pub const TABLE_ENTRY_SIZE: usize = 272;
