//! Helper utilities for PAK operations

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extensions accepted as LSPK archives (`.lsv` are save games)
const ARCHIVE_EXTENSIONS: [&str; 2] = ["pak", "lsv"];

/// Reject paths without a `.pak` or `.lsv` extension
///
/// # Errors
/// Returns [`Error::InvalidExtension`] for any other extension.
pub fn validate_archive_path(path: &Path) -> Result<()> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ARCHIVE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        });

    if supported {
        Ok(())
    } else {
        Err(Error::InvalidExtension {
            path: path.to_path_buf(),
        })
    }
}

/// Output root for an archive: its file stem, relative to the working directory
///
/// e.g. `Data/Shared.pak` -> `Shared`
pub fn default_output_dir(pak_path: &Path) -> PathBuf {
    pak_path
        .file_stem()
        .map_or_else(|| PathBuf::from("extracted"), PathBuf::from)
}

/// Listing file for an archive: `{stem}_files.log` beside it
///
/// e.g. `Data/Shared.pak` -> `Data/Shared_files.log`
pub fn listing_path_for(pak_path: &Path) -> PathBuf {
    let stem = pak_path
        .file_stem()
        .map_or_else(|| "archive".into(), |s| s.to_string_lossy());
    pak_path.with_file_name(format!("{stem}_files.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_archive_path() {
        assert!(validate_archive_path(Path::new("Shared.pak")).is_ok());
        assert!(validate_archive_path(Path::new("saves/QuickSave_1.lsv")).is_ok());
        assert!(validate_archive_path(Path::new("My Mods/Gustav.PAK")).is_ok());

        assert!(matches!(
            validate_archive_path(Path::new("archive.zip")),
            Err(Error::InvalidExtension { .. })
        ));
        assert!(validate_archive_path(Path::new("Shared")).is_err());
        assert!(validate_archive_path(Path::new("Shared.pak.bak")).is_err());
    }

    #[test]
    fn test_default_output_dir() {
        assert_eq!(default_output_dir(Path::new("Data/Shared.pak")), PathBuf::from("Shared"));
        assert_eq!(
            default_output_dir(Path::new("My Mods/Cool Mod.pak")),
            PathBuf::from("Cool Mod")
        );
    }

    #[test]
    fn test_listing_path_for() {
        assert_eq!(
            listing_path_for(Path::new("Data/Shared.pak")),
            PathBuf::from("Data/Shared_files.log")
        );
        assert_eq!(
            listing_path_for(Path::new("Gustav.lsv")),
            PathBuf::from("Gustav_files.log")
        );
    }
}
