//! Session controller — the document's association with a path on disk.
//!
//! The session owns the `Option<PathBuf>` that save writes to without
//! prompting, the transitions triggered by new/open/save/save-as, and the
//! derived display state (window title, status line). It does not own the
//! text buffer; it reads and replaces buffer contents through [`Buffer`].
//!
//! Store failures never escape a session operation: each failed call
//! records exactly one [`Notice`] for the app to show, and leaves session
//! and buffer state exactly as before.

use crate::store::FileStore;
use std::path::{Path, PathBuf};

/// What the session needs from the externally-owned text buffer.
pub trait Buffer {
    fn contents(&self) -> String;
    fn replace_contents(&mut self, text: String);
    fn word_count(&self) -> usize;
    fn char_count(&self) -> usize;
}

/// A user-visible failure report: the action that failed and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub action: &'static str,
    pub message: String,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to {}: {}", self.action, self.message)
    }
}

/// Result of a save command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to the associated path.
    Saved,
    /// No associated path yet — caller must prompt and call `save_as`.
    NeedsPath,
    /// Store write failed; a notice is pending.
    Failed,
}

pub struct Session {
    path: Option<PathBuf>,
    notice: Option<Notice>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            path: None,
            notice: None,
        }
    }

    /// The path save will write to without prompting, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Clear the buffer and drop the path association.
    ///
    /// Any unsaved edits are gone after this; the app is responsible for
    /// confirming with the user first.
    pub fn new_document(&mut self, buffer: &mut dyn Buffer) {
        buffer.replace_contents(String::new());
        self.path = None;
    }

    /// Read `path` and make it the current document.
    ///
    /// On store failure nothing changes — not the buffer, not the path —
    /// and one notice is recorded. Returns whether the open succeeded.
    pub fn open(&mut self, path: PathBuf, buffer: &mut dyn Buffer, store: &dyn FileStore) -> bool {
        match store.read(&path) {
            Ok(text) => {
                buffer.replace_contents(text);
                self.path = Some(path);
                true
            }
            Err(e) => {
                log::warn!("open {} failed: {}", path.display(), e);
                self.notice = Some(Notice {
                    action: "open file",
                    message: e.to_string(),
                });
                false
            }
        }
    }

    /// Write the buffer to the associated path.
    ///
    /// The buffer is the source of this operation, never its target: it is
    /// untouched regardless of outcome. With no path yet, this is save-as
    /// territory and the caller must prompt.
    pub fn save(&mut self, buffer: &dyn Buffer, store: &dyn FileStore) -> SaveOutcome {
        let Some(path) = self.path.clone() else {
            return SaveOutcome::NeedsPath;
        };
        match store.write(&path, &buffer.contents()) {
            Ok(()) => SaveOutcome::Saved,
            Err(e) => {
                log::warn!("save {} failed: {}", path.display(), e);
                self.notice = Some(Notice {
                    action: "save file",
                    message: e.to_string(),
                });
                SaveOutcome::Failed
            }
        }
    }

    /// Write the buffer to `path` and make it the associated path.
    ///
    /// The path only changes on a successful write. Returns whether the
    /// save succeeded.
    pub fn save_as(
        &mut self,
        path: PathBuf,
        buffer: &dyn Buffer,
        store: &dyn FileStore,
    ) -> bool {
        match store.write(&path, &buffer.contents()) {
            Ok(()) => {
                self.path = Some(path);
                true
            }
            Err(e) => {
                log::warn!("save as {} failed: {}", path.display(), e);
                self.notice = Some(Notice {
                    action: "save file",
                    message: e.to_string(),
                });
                false
            }
        }
    }

    /// Window title: the associated path's base name, or the untitled
    /// marker when the document has never been saved.
    pub fn title(&self) -> String {
        match &self.path {
            Some(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "untitled".to_string()),
            None => "untitled".to_string(),
        }
    }

    /// Status line, recomputed after any buffer mutation.
    ///
    /// Character count is the exact logical content length — no
    /// compensation for trailing newlines the buffer may or may not carry.
    pub fn status_line(&self, buffer: &dyn Buffer) -> String {
        format!(
            "Words: {} | Characters: {}",
            buffer.word_count(),
            buffer.char_count()
        )
    }

    /// Pop the pending failure report, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::store::{Result, StoreError};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory file store.
    #[derive(Default)]
    struct MemStore {
        files: RefCell<HashMap<PathBuf, String>>,
    }

    impl FileStore for MemStore {
        fn read(&self, path: &Path) -> Result<String> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such file",
                ))
            })
        }

        fn write(&self, path: &Path, contents: &str) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }
    }

    /// A store where every operation fails.
    struct BrokenStore;

    impl FileStore for BrokenStore {
        fn read(&self, _path: &Path) -> Result<String> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            )))
        }

        fn write(&self, _path: &Path, _contents: &str) -> Result<()> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            )))
        }
    }

    #[test]
    fn test_starts_untitled() {
        let session = Session::new();
        assert_eq!(session.path(), None);
        assert_eq!(session.title(), "untitled");
    }

    #[test]
    fn test_path_tracks_last_open_or_save_as() {
        let store = MemStore::default();
        store.write(Path::new("/docs/a.txt"), "aaa").unwrap();
        let mut session = Session::new();
        let mut doc = Document::new();

        assert!(session.open(PathBuf::from("/docs/a.txt"), &mut doc, &store));
        assert_eq!(session.path(), Some(Path::new("/docs/a.txt")));
        assert_eq!(session.title(), "a.txt");

        assert!(session.save_as(PathBuf::from("/docs/b.txt"), &doc, &store));
        assert_eq!(session.path(), Some(Path::new("/docs/b.txt")));
        assert_eq!(session.title(), "b.txt");

        session.new_document(&mut doc);
        assert_eq!(session.path(), None);
        assert_eq!(session.title(), "untitled");
        assert_eq!(doc.contents(), "");
    }

    #[test]
    fn test_open_then_save_is_byte_identical() {
        let store = MemStore::default();
        let original = "line one\nline two\n";
        store.write(Path::new("/docs/keep.txt"), original).unwrap();

        let mut session = Session::new();
        let mut doc = Document::new();
        assert!(session.open(PathBuf::from("/docs/keep.txt"), &mut doc, &store));
        assert_eq!(session.save(&doc, &store), SaveOutcome::Saved);

        assert_eq!(store.read(Path::new("/docs/keep.txt")).unwrap(), original);
    }

    #[test]
    fn test_save_as_then_new_then_open_round_trips() {
        let store = MemStore::default();
        let mut session = Session::new();
        let mut doc = Document::new();

        doc.replace_contents("draft text".to_string());
        assert!(session.save_as(PathBuf::from("/docs/draft.txt"), &doc, &store));

        session.new_document(&mut doc);
        assert_eq!(doc.contents(), "");

        assert!(session.open(PathBuf::from("/docs/draft.txt"), &mut doc, &store));
        assert_eq!(doc.contents(), "draft text");
    }

    #[test]
    fn test_save_without_path_needs_prompt() {
        let store = MemStore::default();
        let mut session = Session::new();
        let doc = Document::new();

        assert_eq!(session.save(&doc, &store), SaveOutcome::NeedsPath);
        // Not a failure: no notice pending.
        assert_eq!(session.take_notice(), None);
    }

    #[test]
    fn test_failed_open_leaves_state_unchanged() {
        let mut session = Session::new();
        let mut doc = Document::new();
        doc.replace_contents("existing edits".to_string());

        assert!(!session.open(PathBuf::from("/docs/x.txt"), &mut doc, &BrokenStore));
        assert_eq!(session.path(), None);
        assert_eq!(doc.contents(), "existing edits");

        let notice = session.take_notice().unwrap();
        assert_eq!(notice.action, "open file");
        // Exactly one notice per failure.
        assert_eq!(session.take_notice(), None);
    }

    #[test]
    fn test_failed_save_leaves_state_unchanged() {
        let store = MemStore::default();
        store.write(Path::new("/docs/a.txt"), "v1").unwrap();
        let mut session = Session::new();
        let mut doc = Document::new();
        assert!(session.open(PathBuf::from("/docs/a.txt"), &mut doc, &store));

        doc.replace_contents("v2".to_string());
        assert_eq!(session.save(&doc, &BrokenStore), SaveOutcome::Failed);

        assert_eq!(session.path(), Some(Path::new("/docs/a.txt")));
        assert_eq!(doc.contents(), "v2");
        assert!(session.take_notice().is_some());
        assert_eq!(session.take_notice(), None);
    }

    #[test]
    fn test_failed_save_as_keeps_old_path() {
        let store = MemStore::default();
        store.write(Path::new("/docs/a.txt"), "text").unwrap();
        let mut session = Session::new();
        let mut doc = Document::new();
        assert!(session.open(PathBuf::from("/docs/a.txt"), &mut doc, &store));

        assert!(!session.save_as(PathBuf::from("/docs/b.txt"), &doc, &BrokenStore));
        assert_eq!(session.path(), Some(Path::new("/docs/a.txt")));
        assert_eq!(session.title(), "a.txt");
    }

    #[test]
    fn test_status_line_empty_buffer() {
        let session = Session::new();
        let doc = Document::new();
        assert_eq!(session.status_line(&doc), "Words: 0 | Characters: 0");
    }

    #[test]
    fn test_status_line_counts_words_and_chars() {
        let session = Session::new();
        let mut doc = Document::new();
        doc.replace_contents("hello world".to_string());
        assert_eq!(session.status_line(&doc), "Words: 2 | Characters: 11");
    }

    #[test]
    fn test_status_line_no_trailing_newline_offset() {
        let session = Session::new();
        let mut doc = Document::new();
        doc.replace_contents("hi\n".to_string());
        // Exact length, newline included — no minus-one compensation.
        assert_eq!(session.status_line(&doc), "Words: 1 | Characters: 3");
    }
}
