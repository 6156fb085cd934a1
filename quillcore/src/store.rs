//! File store — path-based read/write of plain-text documents.
//!
//! The session controller only ever touches disk through the [`FileStore`]
//! trait, so tests can substitute an in-memory or failing store.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a file: {0}")]
    NotAFile(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Path-based read/write of document contents.
///
/// Reads and writes are blocking and expected to complete immediately;
/// documents are small local text files.
pub trait FileStore {
    fn read(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// The real store: plain text on the local filesystem.
///
/// No header, no metadata, no transformation — content read is written
/// back byte-identical absent user edits. Non-UTF-8 files surface as an
/// `InvalidData` IO error from `read`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read(&self, path: &Path) -> Result<String> {
        if path.is_dir() {
            return Err(StoreError::NotAFile(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        log::info!("read {} ({} bytes)", path.display(), contents.len());
        Ok(contents)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents)?;
        log::info!("wrote {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let store = DiskStore;

        store.write(&path, "hello\nworld\n").unwrap();
        assert_eq!(store.read(&path).unwrap(), "hello\nworld\n");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStore;
        assert!(store.read(&dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn test_read_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStore;
        assert!(matches!(
            store.read(dir.path()),
            Err(StoreError::NotAFile(_))
        ));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStore;
        let bad = dir.path().join("no-such-dir").join("note.txt");
        assert!(store.write(&bad, "x").is_err());
    }
}
