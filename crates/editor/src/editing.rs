//! Text editing primitives.
//!
//! Free functions that mutate a [`TextBuffer`] at already-sanitized
//! coordinates and report where the cursor lands. Policy - selections,
//! read-only mode, change flags - stays in [`crate::Editor`]; these functions
//! only move bytes, always whole codepoints at a time.

use quill_buffer::layout::{byte_offset_for_column, column_for_byte_offset, visual_width};
use quill_buffer::{utf8, Cursor, TextBuffer};

/// Split the line at `pos` into two, carrying the tail after the cursor onto
/// the new line. Returns the cursor at the start of the new line.
pub fn insert_newline_at(buffer: &mut TextBuffer, pos: Cursor, tab_size: usize) -> Cursor {
    let offset = byte_offset_for_column(buffer.line(pos.line).bytes(), pos.column, tab_size);
    let tail = buffer.line_mut(pos.line).split_off(offset);
    *buffer.insert_line(pos.line + 1) = tail;
    Cursor::at(pos.line + 1, 0)
}

/// Splice one codepoint into the line at `pos`.
///
/// In overwrite mode the codepoint under the cursor is erased first, by its
/// full byte length. Returns the cursor just past the inserted character.
pub fn insert_char_at(
    buffer: &mut TextBuffer,
    pos: Cursor,
    ch: char,
    overwrite: bool,
    tab_size: usize,
) -> Cursor {
    let mut encoded = [0u8; 4];
    let len = utf8::encode_codepoint(ch, &mut encoded);
    debug_assert!(len > 0, "char always encodes into four bytes");

    let line = buffer.line(pos.line);
    let mut offset = byte_offset_for_column(line.bytes(), pos.column, tab_size);

    if overwrite && offset < line.len() {
        let old_len = utf8::sequence_length(line.byte(offset)).min(line.len() - offset);
        buffer.erase_bytes(pos.line, offset, offset + old_len);
    }

    buffer.insert_bytes(pos.line, offset, &encoded[..len]);
    offset += len;
    let column = column_for_byte_offset(buffer.line(pos.line).bytes(), offset, tab_size);
    Cursor::at(pos.line, column)
}

/// Stream a block of text in at `pos`.
///
/// `\r` bytes are dropped, `\n` splits the current line (carrying the tail
/// only when the cursor sits mid-line), and everything else is spliced in one
/// codepoint at a time. Returns the final cursor and the number of line
/// breaks introduced.
pub fn insert_text_at(
    buffer: &mut TextBuffer,
    pos: Cursor,
    text: &str,
    tab_size: usize,
) -> (Cursor, usize) {
    let mut line = pos.line;
    let mut offset = byte_offset_for_column(buffer.line(line).bytes(), pos.column, tab_size);
    let mut breaks = 0;

    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => i += 1,
            b'\n' => {
                if offset < buffer.line(line).len() {
                    let tail = buffer.line_mut(line).split_off(offset);
                    *buffer.insert_line(line + 1) = tail;
                } else {
                    buffer.insert_line(line + 1);
                }
                line += 1;
                offset = 0;
                breaks += 1;
                i += 1;
            }
            byte => {
                let len = utf8::sequence_length(byte).min(bytes.len() - i);
                buffer.insert_bytes(line, offset, &bytes[i..i + len]);
                offset += len;
                i += len;
            }
        }
    }

    let column = column_for_byte_offset(buffer.line(line).bytes(), offset, tab_size);
    (Cursor::at(line, column), breaks)
}

/// Erase the span `[from, to)`. Both coordinates must be sanitized and
/// ordered; `from == to` is a no-op.
pub fn delete_range(buffer: &mut TextBuffer, from: Cursor, to: Cursor, tab_size: usize) {
    if from == to {
        return;
    }
    debug_assert!(from <= to);

    let start = byte_offset_for_column(buffer.line(from.line).bytes(), from.column, tab_size);

    if from.line == to.line {
        let end = byte_offset_for_column(buffer.line(to.line).bytes(), to.column, tab_size);
        buffer.erase_bytes(from.line, start, end);
        return;
    }

    let end = byte_offset_for_column(buffer.line(to.line).bytes(), to.column, tab_size);
    let first_len = buffer.line(from.line).len();
    buffer.erase_bytes(from.line, start, first_len);
    buffer.erase_bytes(to.line, 0, end);

    let remainder = buffer.line(to.line).clone();
    buffer.line_mut(from.line).append(&remainder);
    buffer.erase_lines(from.line + 1, to.line + 1);
}

/// Delete one codepoint before `pos`, or merge onto the previous line when
/// the cursor sits at column 0. Returns the new cursor, or `None` at the very
/// start of the buffer.
pub fn backspace_at(buffer: &mut TextBuffer, pos: Cursor, tab_size: usize) -> Option<Cursor> {
    if pos.column == 0 {
        if pos.line == 0 {
            return None;
        }
        let join_column = visual_width(buffer.line(pos.line - 1).bytes(), tab_size);
        let current = buffer.line(pos.line).clone();
        buffer.line_mut(pos.line - 1).append(&current);
        buffer.erase_line(pos.line);
        return Some(Cursor::at(pos.line - 1, join_column));
    }

    let bytes = buffer.line(pos.line).bytes();
    let end = byte_offset_for_column(bytes, pos.column, tab_size);
    let mut start = end - 1;
    while start > 0 && utf8::is_continuation(bytes[start]) {
        start -= 1;
    }
    let column = column_for_byte_offset(bytes, start, tab_size);
    buffer.erase_bytes(pos.line, start, end);
    Some(Cursor::at(pos.line, column))
}

/// Forward-delete one codepoint at `pos`, or merge the next line onto this
/// one when the cursor sits at end of line. Returns false when nothing could
/// be deleted (end of buffer).
pub fn delete_at(buffer: &mut TextBuffer, pos: Cursor, tab_size: usize) -> bool {
    let width = visual_width(buffer.line(pos.line).bytes(), tab_size);
    if pos.column >= width {
        if pos.line + 1 >= buffer.line_count() {
            return false;
        }
        let next = buffer.line(pos.line + 1).clone();
        buffer.line_mut(pos.line).append(&next);
        buffer.erase_line(pos.line + 1);
        return true;
    }

    let bytes = buffer.line(pos.line).bytes();
    let offset = byte_offset_for_column(bytes, pos.column, tab_size);
    let len = utf8::sequence_length(bytes[offset]).min(bytes.len() - offset);
    buffer.erase_bytes(pos.line, offset, offset + len);
    true
}

/// Insert a tab at the start of every line in `[start_line, end_line]`.
pub fn indent_lines(buffer: &mut TextBuffer, start_line: usize, end_line: usize) {
    for index in start_line..=end_line {
        buffer.insert_bytes(index, 0, b"\t");
    }
}

/// Remove one leading tab - or up to `tab_size` leading spaces - from every
/// line in `[start_line, end_line]`. Returns true when anything changed.
pub fn outdent_lines(
    buffer: &mut TextBuffer,
    start_line: usize,
    end_line: usize,
    tab_size: usize,
) -> bool {
    let mut modified = false;
    for index in start_line..=end_line {
        let line = buffer.line(index);
        if line.is_empty() {
            continue;
        }
        if line.byte(0) == b'\t' {
            buffer.erase_bytes(index, 0, 1);
            modified = true;
        } else {
            let spaces = line
                .bytes()
                .iter()
                .take(tab_size)
                .take_while(|&&b| b == b' ')
                .count();
            if spaces > 0 {
                buffer.erase_bytes(index, 0, spaces);
                modified = true;
            }
        }
    }
    modified
}
