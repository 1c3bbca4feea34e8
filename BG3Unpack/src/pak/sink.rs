//! Destinations for extracted entries
//!
//! A sink receives an entry's logical path and its decompressed bytes.
//! Logical paths come straight from the archive, so both sinks resolve them
//! with [`safe_relative_path`] and refuse anything that would climb out of
//! the output root.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use crate::error::EntryError;

/// Something extracted entries can be written to.
///
/// Sinks take `&self` and must be `Sync` so parallel extraction can share one.
pub trait ExtractionSink: Sync {
    /// Store `data` under the logical `path`, replacing any previous content.
    ///
    /// # Errors
    /// Returns an [`EntryError`] if the path is unsafe or the write fails.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<(), EntryError>;
}

/// Resolve a logical archive path to a relative filesystem path.
///
/// Returns `None` for paths that are empty, absolute, carry a drive prefix,
/// or contain a `..` component. `.` components are dropped.
#[must_use]
pub fn safe_relative_path(path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();

    for component in Path::new(path).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}

/// Writes entries below a root directory, creating parents as needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Where `path` would be written, if it is safe
    #[must_use]
    pub fn output_path(&self, path: &str) -> Option<PathBuf> {
        safe_relative_path(path).map(|relative| self.root.join(relative))
    }
}

impl ExtractionSink for DirectorySink {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<(), EntryError> {
        let output_path = self.output_path(path).ok_or_else(|| EntryError::UnsafePath {
            path: path.to_string(),
        })?;

        // Create parent directories (idempotent)
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| EntryError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&output_path, data).map_err(|source| EntryError::Write {
            path: output_path,
            source,
        })
    }
}

/// Keeps extracted entries in memory, keyed by their normalized path.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the collected files out of the sink
    #[must_use]
    pub fn into_files(self) -> BTreeMap<PathBuf, Vec<u8>> {
        self.files.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ExtractionSink for MemorySink {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<(), EntryError> {
        let relative = safe_relative_path(path).ok_or_else(|| EntryError::UnsafePath {
            path: path.to_string(),
        })?;

        self.files
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(relative, data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_safe_relative_path() {
        assert_eq!(
            safe_relative_path("Public/Shared/meta.lsx"),
            Some(PathBuf::from("Public/Shared/meta.lsx"))
        );
        assert_eq!(safe_relative_path("./a/./b.txt"), Some(PathBuf::from("a/b.txt")));
        assert_eq!(safe_relative_path("a//b"), Some(PathBuf::from("a/b")));
    }

    #[test]
    fn test_escaping_paths_rejected() {
        assert_eq!(safe_relative_path("../evil.txt"), None);
        assert_eq!(safe_relative_path("a/../../evil.txt"), None);
        assert_eq!(safe_relative_path("a/../b.txt"), None);
        assert_eq!(safe_relative_path("/etc/passwd"), None);
        assert_eq!(safe_relative_path(""), None);
        assert_eq!(safe_relative_path("."), None);
    }

    #[test]
    fn test_directory_sink_creates_parents() {
        let dir = tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        sink.write_file("dir/sub/b.bin", b"bytes").unwrap();

        let written = std::fs::read(dir.path().join("dir/sub/b.bin")).unwrap();
        assert_eq!(written, b"bytes");
    }

    #[test]
    fn test_directory_sink_overwrites() {
        let dir = tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        sink.write_file("a.txt", b"first version").unwrap();
        sink.write_file("a.txt", b"second").unwrap();

        assert_eq!(std::fs::read(dir.path().join("a.txt")).unwrap(), b"second");
    }

    #[test]
    fn test_directory_sink_rejects_traversal() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("out");
        let sink = DirectorySink::new(&root);

        let err = sink.write_file("../escaped.txt", b"x").unwrap_err();
        assert!(matches!(err, EntryError::UnsafePath { .. }));
        assert!(!dir.path().join("escaped.txt").exists());
    }

    #[test]
    fn test_directory_sink_write_failure() {
        let dir = tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        // A file where a directory is needed
        std::fs::write(dir.path().join("blocker"), b"").unwrap();
        let err = sink.write_file("blocker/inner.txt", b"x").unwrap_err();
        assert!(matches!(err, EntryError::CreateDir { .. }));
    }

    #[test]
    fn test_memory_sink() {
        let sink = MemorySink::new();
        sink.write_file("./x/y.txt", b"1").unwrap();
        sink.write_file("x/y.txt", b"2").unwrap();
        assert!(sink.write_file("../z", b"3").is_err());

        let files = sink.into_files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[&PathBuf::from("x/y.txt")], b"2");
    }
}
