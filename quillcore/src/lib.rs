//! quillcore — shared library for the quillpad word processor.

pub mod document;
pub mod fonts;
pub mod session;
pub mod storage;
pub mod store;
pub mod theme;
pub mod widgets;

pub use document::Document;
pub use fonts::FontConfig;
pub use session::{Buffer, Notice, SaveOutcome, Session};
pub use store::{DiskStore, FileStore, StoreError};
pub use theme::QuillTheme;
