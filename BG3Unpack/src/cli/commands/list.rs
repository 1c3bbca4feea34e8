//! CLI command for listing PAK contents

use std::path::Path;

use crate::pak::{CompressionMethod, PakOperations, listing_path_for, write_listing_file};

/// Format byte size for human-readable output
fn format_size(bytes: u32) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1}M", f64::from(bytes) / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1}K", f64::from(bytes) / 1024.0)
    } else {
        format!("{bytes}")
    }
}

pub fn execute(source: &Path, listing: bool, quiet: bool) -> anyhow::Result<()> {
    let entries = PakOperations::list(source)?;

    if listing {
        write_listing_file(&listing_path_for(source), &entries)?;
    }

    if quiet {
        return Ok(());
    }

    println!("{:>10} {:>10} {:<6} Path", "Size", "Packed", "Codec");
    for entry in &entries {
        let codec = match entry.compression() {
            CompressionMethod::None => "none".to_string(),
            CompressionMethod::Compressed(codec) => codec.as_str().to_string(),
            CompressionMethod::Unknown(tag) => format!("{tag:#x}"),
        };
        println!(
            "{:>10} {:>10} {:<6} {}",
            format_size(entry.size_decompressed()),
            format_size(entry.size_compressed()),
            codec,
            entry.path
        );
    }
    println!("{} files", entries.len());

    Ok(())
}
