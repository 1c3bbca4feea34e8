//! CLI command dispatch

pub mod extract;
pub mod list;

use super::Cli;
use crate::pak::{default_output_dir, validate_archive_path};

/// Run the action selected by the flags
pub fn execute(cli: &Cli) -> anyhow::Result<()> {
    let source = cli.input_path();
    validate_archive_path(&source)?;

    if cli.list {
        return list::execute(&source, !cli.no_listing, cli.quiet);
    }

    let destination = match &cli.output {
        Some(dir) => dir.join(default_output_dir(&source)),
        None => default_output_dir(&source),
    };

    extract::execute(
        &source,
        &destination,
        !cli.no_listing,
        cli.parallel,
        !cli.quiet,
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use tempfile::tempdir;

    use super::*;
    use crate::error::Error;

    /// Write an archive of `(path, tag, payload)` entries, payloads stored verbatim
    fn write_archive(path: &Path, magic: &[u8; 4], entries: &[(&str, u32, &[u8])]) {
        let mut out = magic.to_vec();
        out.extend_from_slice(&18u32.to_le_bytes());
        out.extend_from_slice(&[0u8; 8]);

        let mut table = Vec::new();
        for (name, tag, payload) in entries {
            let mut record = [0u8; 272];
            record[..name.len()].copy_from_slice(name.as_bytes());
            record[256..260].copy_from_slice(&(out.len() as u32).to_le_bytes());
            record[260..264].copy_from_slice(&tag.to_le_bytes());
            record[264..268].copy_from_slice(&(payload.len() as u32).to_le_bytes());
            record[268..272].copy_from_slice(&(payload.len() as u32).to_le_bytes());
            table.extend_from_slice(&record);
            out.extend_from_slice(payload);
        }

        let table_offset = out.len() as u64;
        out[8..16].copy_from_slice(&table_offset.to_le_bytes());
        let compressed = lz4_flex::block::compress(&table);
        out.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        out.extend_from_slice(&(compressed.len() as u32).to_le_bytes());
        out.extend_from_slice(&compressed);

        std::fs::write(path, out).unwrap();
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("bg3unpack").chain(args.iter().copied()))
    }

    #[test]
    fn test_wrong_extension_rejected_before_open() {
        let dir = tempdir().unwrap();
        // Does not exist: an open attempt would surface as an IO error instead
        let missing = dir.path().join("archive.zip");

        let err = execute(&cli(&["-q", missing.to_str().unwrap()])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidExtension { .. })
        ));
    }

    #[test]
    fn test_output_lands_in_dir_named_after_stem() {
        let dir = tempdir().unwrap();
        let pak = dir.path().join("My Mod.pak");
        write_archive(&pak, b"LSPK", &[("Public/a.txt", 0, b"Hello")]);
        let out = dir.path().join("out");

        // Unquoted path split across two tokens
        let first = dir.path().join("My");
        execute(&cli(&[
            "-q",
            "-o",
            out.to_str().unwrap(),
            first.to_str().unwrap(),
            "Mod.pak",
        ]))
        .unwrap();

        assert_eq!(
            std::fs::read(out.join("My Mod").join("Public").join("a.txt")).unwrap(),
            b"Hello"
        );
        assert!(dir.path().join("My Mod_files.log").exists());
    }

    #[test]
    fn test_bad_archive_is_an_error() {
        let dir = tempdir().unwrap();
        let pak = dir.path().join("Bad.pak");
        write_archive(&pak, b"XXXX", &[("a.txt", 0, b"Hello")]);
        let out = dir.path().join("out");

        let err = execute(&cli(&["-q", "-o", out.to_str().unwrap(), pak.to_str().unwrap()])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidPakMagic { .. })
        ));
        assert!(!out.join("Bad").exists());
        assert!(!dir.path().join("Bad_files.log").exists());
    }

    #[test]
    fn test_skipped_entries_still_succeed() {
        let dir = tempdir().unwrap();
        let pak = dir.path().join("Partial.pak");
        write_archive(
            &pak,
            b"LSPK",
            &[("odd.bin", 0x12345678, b"????"), ("ok.txt", 0, b"fine")],
        );
        let out = dir.path().join("out");

        execute(&cli(&["-q", "-o", out.to_str().unwrap(), pak.to_str().unwrap()])).unwrap();

        assert_eq!(std::fs::read(out.join("Partial").join("ok.txt")).unwrap(), b"fine");
        assert!(!out.join("Partial").join("odd.bin").exists());
    }

    #[test]
    fn test_list_mode_writes_listing_only() {
        let dir = tempdir().unwrap();
        let pak = dir.path().join("Listed.pak");
        write_archive(&pak, b"LSPK", &[("a.txt", 0, b"Hello")]);
        let out = dir.path().join("out");

        execute(&cli(&["-q", "-l", "-o", out.to_str().unwrap(), pak.to_str().unwrap()])).unwrap();

        let listing = std::fs::read_to_string(dir.path().join("Listed_files.log")).unwrap();
        assert!(listing.starts_with("Name: a.txt\n"));
        assert!(!out.exists());
    }
}
