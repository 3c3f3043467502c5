//! quill - a text-buffer and cursor engine for code-editing surfaces.
//!
//! The engine owns the mutable multi-line buffer, cursor and selection state,
//! UTF-8-aware coordinate math between visual columns and byte offsets,
//! word-boundary navigation, and literal find/replace. Rendering, input
//! capture, clipboard hardware, and file I/O live in the embedding
//! application and talk to the engine through logical commands and read-only
//! snapshots.
//!
//! The typical wiring: build a [`Workspace`] (the open-document registry),
//! open documents into it, translate input events into
//! [`Command`](quill_core::Command)s for the focused [`Editor`], and read the
//! cursor, selection, and match ranges back each frame.
//!
//! ```
//! use quill::{Cursor, Editor, EditorConfig, LocalClipboard, SelectionMode};
//!
//! let mut editor = Editor::from_text("hello world", EditorConfig::default());
//! editor.set_selection(Cursor::at(0, 8), Cursor::at(0, 8), SelectionMode::Word);
//! assert_eq!(editor.selected_text().as_deref(), Some("world"));
//!
//! let mut clipboard = LocalClipboard::new();
//! editor.cut(&mut clipboard);
//! assert_eq!(editor.text(), "hello ");
//! ```

mod workspace;

pub use workspace::{Document, DocumentId, Workspace};

pub use quill_buffer::{
    layout, utf8, word, Cursor, Line, MatchRange, SearchState, Selection, SelectionMode,
    TextBuffer,
};
pub use quill_clipboard::SystemClipboard;
pub use quill_config::Config;
pub use quill_core::{Clipboard, Command, Direction, LocalClipboard};
pub use quill_editor::{Editor, EditorConfig};
