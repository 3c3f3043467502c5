//! Selection, cursor, and edit-operation state machine for quill.
//!
//! The [`Editor`] type ties the byte-level buffer to the logical command
//! surface: navigation, selection gestures, edit operations, and literal
//! find/replace. One instance per open document, driven from a single thread.

mod config;
mod core;
mod cursor;
mod editing;
mod search;
mod selection;

pub use config::EditorConfig;
pub use core::Editor;
pub use search::find_all;
