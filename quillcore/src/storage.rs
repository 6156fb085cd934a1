//! App-state storage: recent files and the prompt-backing directory
//! browser.
//!
//! quillpad draws its own open/save prompts, so the browsing state lives
//! here where it can be tested without a window.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Recently opened or saved documents, persisted as JSON in the config
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentFiles {
    pub files: Vec<PathBuf>,
    pub max_entries: usize,
}

impl Default for RecentFiles {
    fn default() -> Self {
        Self::new(10)
    }
}

impl RecentFiles {
    pub fn new(max_entries: usize) -> Self {
        Self {
            files: Vec::new(),
            max_entries,
        }
    }

    /// Move `path` to the front, dropping any older occurrence.
    pub fn add(&mut self, path: PathBuf) {
        self.files.retain(|p| p != &path);
        self.files.insert(0, path);
        self.files.truncate(self.max_entries);
    }

    pub fn load(config_path: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(config_path)?;
        serde_json::from_str(&contents).map_err(std::io::Error::from)
    }

    pub fn save(&self, config_path: &Path) -> std::io::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        std::fs::write(config_path, contents)
    }
}

/// One row in the prompt dialog.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
}

/// Listing state behind the open/save prompts: one directory at a time,
/// directories sorted before files, hidden entries skipped.
#[derive(Debug, Clone)]
pub struct DirBrowser {
    pub current_dir: PathBuf,
    pub entries: Vec<DirEntry>,
    pub selected_index: Option<usize>,
    filter_extensions: Vec<String>,
}

impl DirBrowser {
    pub fn new(start_dir: PathBuf) -> Self {
        let mut browser = Self {
            current_dir: start_dir,
            entries: Vec::new(),
            selected_index: None,
            filter_extensions: Vec::new(),
        };
        browser.refresh();
        browser
    }

    /// Only show files with one of these extensions (directories always
    /// show, so navigation still works).
    pub fn with_filter(mut self, extensions: Vec<String>) -> Self {
        self.filter_extensions = extensions;
        self.refresh();
        self
    }

    fn passes_filter(&self, path: &Path) -> bool {
        if self.filter_extensions.is_empty() {
            return true;
        }
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        self.filter_extensions.iter().any(|f| f.to_lowercase() == ext)
    }

    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected_index = None;

        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(DirEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_directory: true,
            });
        }

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        if let Ok(read_dir) = std::fs::read_dir(&self.current_dir) {
            for entry in read_dir.flatten() {
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().to_string();
                if name.starts_with('.') {
                    continue;
                }
                let is_directory = path.is_dir();
                if !is_directory && !self.passes_filter(&path) {
                    continue;
                }
                let item = DirEntry {
                    name,
                    path,
                    is_directory,
                };
                if is_directory {
                    dirs.push(item);
                } else {
                    files.push(item);
                }
            }
        }

        dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        self.entries.extend(dirs);
        self.entries.extend(files);
    }

    pub fn navigate_to(&mut self, path: PathBuf) {
        if path.is_dir() {
            self.current_dir = path;
            self.refresh();
        }
    }

    pub fn selected_entry(&self) -> Option<&DirEntry> {
        self.selected_index.and_then(|i| self.entries.get(i))
    }
}

/// Config directory for quillpad state (recent files, font config).
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Where open/save prompts start browsing.
pub fn documents_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_files_dedupe_and_order() {
        let mut recent = RecentFiles::new(3);
        recent.add(PathBuf::from("/a"));
        recent.add(PathBuf::from("/b"));
        recent.add(PathBuf::from("/a"));
        assert_eq!(recent.files, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn test_recent_files_truncates_to_max() {
        let mut recent = RecentFiles::new(2);
        recent.add(PathBuf::from("/a"));
        recent.add(PathBuf::from("/b"));
        recent.add(PathBuf::from("/c"));
        assert_eq!(recent.files, vec![PathBuf::from("/c"), PathBuf::from("/b")]);
    }

    #[test]
    fn test_recent_files_persist_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("state").join("recent.json");

        let mut recent = RecentFiles::new(5);
        recent.add(PathBuf::from("/docs/a.txt"));
        recent.save(&config_path).unwrap();

        let loaded = RecentFiles::load(&config_path).unwrap();
        assert_eq!(loaded.files, recent.files);
        assert_eq!(loaded.max_entries, 5);
    }

    #[test]
    fn test_browser_lists_directories_before_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("zz.txt"), "z").unwrap();
        std::fs::create_dir(dir.path().join("aa")).unwrap();
        std::fs::write(dir.path().join(".hidden"), "h").unwrap();

        let browser = DirBrowser::new(dir.path().to_path_buf());
        let names: Vec<&str> = browser.entries.iter().map(|e| e.name.as_str()).collect();
        // Parent entry first, then dirs, then files; hidden skipped.
        assert_eq!(names, vec!["..", "aa", "zz.txt"]);
    }

    #[test]
    fn test_browser_extension_filter_keeps_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("doc.txt"), "t").unwrap();
        std::fs::write(dir.path().join("pic.png"), "p").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let browser =
            DirBrowser::new(dir.path().to_path_buf()).with_filter(vec!["txt".to_string()]);
        let names: Vec<&str> = browser.entries.iter().map(|e| e.name.as_str()).collect();
        assert!(names.contains(&"doc.txt"));
        assert!(names.contains(&"sub"));
        assert!(!names.contains(&"pic.png"));
    }

    #[test]
    fn test_browser_navigation() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("inner.txt"), "i").unwrap();

        let mut browser = DirBrowser::new(dir.path().to_path_buf());
        browser.navigate_to(sub.clone());
        assert_eq!(browser.current_dir, sub);
        assert!(browser.entries.iter().any(|e| e.name == "inner.txt"));

        // Navigating to a file is a no-op.
        browser.navigate_to(sub.join("inner.txt"));
        assert_eq!(browser.current_dir, sub);
    }
}
