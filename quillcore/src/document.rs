//! Document model for quillpad.
//!
//! Plain `String` content, edited in place by `egui::TextEdit`. The
//! session controller reaches it through the [`Buffer`] trait.

use crate::session::Buffer;

/// The single open document: its text and whether it has unsaved edits.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The text content. `TextEdit::multiline` mutates this directly.
    pub text: String,
    /// Whether the content differs from what was last loaded or saved.
    pub modified: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the document in sync with disk (after open/save/new).
    pub fn mark_clean(&mut self) {
        self.modified = false;
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

impl Buffer for Document {
    fn contents(&self) -> String {
        self.text.clone()
    }

    fn replace_contents(&mut self, text: String) {
        self.text = text;
        self.modified = false;
    }

    /// Maximal whitespace-separated runs.
    fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Exact logical content length, in characters.
    fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_empty_and_clean() {
        let doc = Document::new();
        assert_eq!(doc.char_count(), 0);
        assert_eq!(doc.word_count(), 0);
        assert!(!doc.modified);
    }

    #[test]
    fn test_counts() {
        let mut doc = Document::new();
        doc.replace_contents("  hello   world \n again".to_string());
        assert_eq!(doc.word_count(), 3);
        assert_eq!(doc.char_count(), 23);
        assert_eq!(doc.line_count(), 2);
    }

    #[test]
    fn test_char_count_is_chars_not_bytes() {
        let mut doc = Document::new();
        doc.replace_contents("héllo".to_string());
        assert_eq!(doc.char_count(), 5);
    }

    #[test]
    fn test_replace_contents_clears_modified() {
        let mut doc = Document::new();
        doc.text.push_str("typing");
        doc.modified = true;
        doc.replace_contents("loaded".to_string());
        assert_eq!(doc.text, "loaded");
        assert!(!doc.modified);
    }
}
