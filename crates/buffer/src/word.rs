//! Word-boundary scanning.
//!
//! Bytes fall into three classes: whitespace, word (ASCII alphanumeric or
//! `_`), and everything else. Scans skip one contiguous run per class in a
//! fixed order - whitespace, then punctuation, then word characters - and the
//! first class that causes movement terminates the scan, so a punctuation-only
//! or whitespace-only stretch never falls through into word skipping.
//!
//! Classification is per byte: multi-byte codepoints classify as punctuation
//! (their lead and continuation bytes are neither ASCII alphanumeric nor
//! whitespace), so a run of non-ASCII text is skipped as one punctuation run
//! without ever splitting a codepoint across a landing position.

use crate::buffer::TextBuffer;
use crate::cursor::Cursor;
use crate::layout::{byte_offset_for_column, column_for_byte_offset};
use crate::utf8;

/// Byte classification used by every scan in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Whitespace,
    Word,
    Other,
}

fn classify(byte: u8) -> CharClass {
    if byte.is_ascii_whitespace() {
        CharClass::Whitespace
    } else if byte.is_ascii_alphanumeric() || byte == b'_' {
        CharClass::Word
    } else {
        CharClass::Other
    }
}

/// Start of the word-ish run ending at `from`, scanning backward.
///
/// Skips the whitespace run before `from` if there is one; otherwise the
/// punctuation run; otherwise the word run. A cursor inside `bar_baz` lands
/// on the `b` of `bar` (`_` is a word character).
pub fn find_word_start(buffer: &TextBuffer, from: Cursor, tab_size: usize) -> Cursor {
    if from.line >= buffer.line_count() {
        return from;
    }
    let bytes = buffer.line(from.line).bytes();
    let mut index = byte_offset_for_column(bytes, from.column, tab_size);
    if index >= bytes.len() {
        return from;
    }

    let mut moved = false;
    while index > 0 && classify(bytes[index - 1]) == CharClass::Whitespace {
        index -= 1;
        moved = true;
    }
    if moved {
        return Cursor::at(from.line, column_for_byte_offset(bytes, index, tab_size));
    }

    moved = false;
    while index > 0 && classify(bytes[index - 1]) == CharClass::Other {
        index -= 1;
        moved = true;
    }
    if moved {
        return Cursor::at(from.line, column_for_byte_offset(bytes, index, tab_size));
    }

    while index > 0 && classify(bytes[index - 1]) == CharClass::Word {
        index -= 1;
    }
    Cursor::at(from.line, column_for_byte_offset(bytes, index, tab_size))
}

/// End of the contiguous same-class run starting at `from`.
///
/// Paired with [`find_word_start`] to snap a word-mode selection outward:
/// from a word start this yields the position just past the word.
pub fn find_word_end(buffer: &TextBuffer, from: Cursor, tab_size: usize) -> Cursor {
    if from.line >= buffer.line_count() {
        return from;
    }
    let bytes = buffer.line(from.line).bytes();
    let mut index = byte_offset_for_column(bytes, from.column, tab_size);
    if index >= bytes.len() {
        return from;
    }

    let class = classify(bytes[index]);
    while index < bytes.len() && classify(bytes[index]) == class {
        index += utf8::sequence_length(bytes[index]);
    }
    Cursor::at(from.line, column_for_byte_offset(bytes, index, tab_size))
}

/// Next word-ish landing position after `from`, scanning forward within the
/// line.
///
/// Mirrors [`find_word_start`]: skips the whitespace run, else the
/// punctuation run, else the word run - and after a word run consumes one
/// trailing whitespace byte, which is what makes repeated word-steps land on
/// successive word starts.
pub fn find_next_word(buffer: &TextBuffer, from: Cursor, tab_size: usize) -> Cursor {
    if from.line >= buffer.line_count() {
        return from;
    }
    let bytes = buffer.line(from.line).bytes();
    let mut index = byte_offset_for_column(bytes, from.column, tab_size);

    let mut moved = false;
    while index < bytes.len() && classify(bytes[index]) == CharClass::Whitespace {
        index += 1;
        moved = true;
    }
    if moved {
        return Cursor::at(from.line, column_for_byte_offset(bytes, index, tab_size));
    }

    moved = false;
    while index < bytes.len() && classify(bytes[index]) == CharClass::Other {
        index += utf8::sequence_length(bytes[index]);
        moved = true;
    }
    if moved {
        return Cursor::at(from.line, column_for_byte_offset(bytes, index, tab_size));
    }

    loop {
        if index >= bytes.len() {
            break;
        }
        match classify(bytes[index]) {
            CharClass::Word => index += 1,
            CharClass::Whitespace => {
                index += 1;
                break;
            }
            CharClass::Other => break,
        }
    }
    Cursor::at(from.line, column_for_byte_offset(bytes, index, tab_size))
}

/// True at column 0, at or past end of line, or where the whitespace
/// classification flips between the byte before `at` and the byte at `at`.
pub fn is_on_word_boundary(buffer: &TextBuffer, at: Cursor, tab_size: usize) -> bool {
    if at.line >= buffer.line_count() || at.column == 0 {
        return true;
    }
    let bytes = buffer.line(at.line).bytes();
    let index = byte_offset_for_column(bytes, at.column, tab_size);
    if index >= bytes.len() {
        return true;
    }
    bytes[index].is_ascii_whitespace() != bytes[index - 1].is_ascii_whitespace()
}
