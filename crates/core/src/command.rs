//! Logical editing commands.
//!
//! The input layer decodes keys and mouse gestures into these discrete
//! intents; the editor consumes them without ever seeing device events.
//! Amounts are in lines or codepoints; page-sized moves take their page size
//! from the adapter, since only the rendering layer knows the viewport.

use quill_buffer::{Cursor, SelectionMode};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A discrete editing intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move the cursor `amount` steps, optionally extending the selection
    /// (`extend`) or jumping word-wise (`word`, horizontal only).
    MoveCursor {
        direction: Direction,
        amount: usize,
        extend: bool,
        word: bool,
    },
    /// Move to the first non-whitespace column of the current line.
    MoveHome { extend: bool },
    /// Move past the last column of the current line.
    MoveEnd { extend: bool },
    /// Move to the start of the buffer.
    MoveTop { extend: bool },
    /// Move to the first column of the last line.
    MoveBottom { extend: bool },
    /// Replace the committed selection.
    SetSelection {
        start: Cursor,
        end: Cursor,
        mode: SelectionMode,
    },
    /// Insert one codepoint. `shift` flips a tab insertion into an outdent
    /// when a selection is active.
    InsertChar { ch: char, shift: bool },
    /// Insert a text block at the cursor.
    InsertText(String),
    Backspace,
    /// Forward delete.
    Delete,
    DeleteSelection,
    Cut,
    Copy,
    Paste,
    SelectAll,
    /// Toggle overwrite mode.
    SetOverwrite(bool),
    /// Replace the whole buffer content.
    SetText(String),
    /// Compute match ranges for highlighting without moving the cursor.
    SetSearchQuery(String),
    /// Jump to the next occurrence of the query, recomputing matches when the
    /// query changed.
    FindNext(String),
    FindPrev(String),
    ReplaceAll { query: String, replacement: String },
}
