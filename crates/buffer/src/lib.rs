//! Byte-indexed text buffer and coordinate engine for quill.
//!
//! Storage is a vector of lines, each a vector of raw UTF-8 bytes; every
//! codepoint-boundary and tab-expansion computation is centralized here so
//! higher layers never re-implement UTF-8 length logic. No I/O, no rendering,
//! no editing policy - those live in the editor crate and the embedding
//! application.

mod buffer;
mod cursor;
mod search;

pub mod layout;
pub mod utf8;
pub mod word;

pub use buffer::{Line, TextBuffer};
pub use cursor::{Cursor, MatchRange, Selection, SelectionMode};
pub use search::SearchState;
