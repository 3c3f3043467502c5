//! Horizontal cursor stepping.
//!
//! Steps are byte-offset walks that never stop mid-codepoint: moving left
//! backs over continuation bytes to the sequence start, moving right advances
//! by the full sequence length. Crossing column 0 lands at the end of the
//! previous line; crossing end-of-line lands at the start of the next.
//! Word-mode steps jump via the word-boundary scans instead of one codepoint
//! at a time. Vertical movement is plain line arithmetic and lives with the
//! editor itself.

use quill_buffer::layout::{byte_offset_for_column, column_for_byte_offset};
use quill_buffer::{utf8, word, Cursor, TextBuffer};

/// Move `amount` steps left from a sanitized position.
pub fn move_left(
    buffer: &TextBuffer,
    from: Cursor,
    amount: usize,
    word_mode: bool,
    tab_size: usize,
) -> Cursor {
    let mut line = from.line;
    let mut offset = byte_offset_for_column(buffer.line(line).bytes(), from.column, tab_size);

    for _ in 0..amount {
        if offset == 0 {
            if line == 0 {
                break;
            }
            line -= 1;
            offset = buffer.line(line).len();
        } else {
            offset -= 1;
            let bytes = buffer.line(line).bytes();
            while offset > 0 && utf8::is_continuation(bytes[offset]) {
                offset -= 1;
            }
        }

        if word_mode {
            let bytes = buffer.line(line).bytes();
            let at = Cursor::at(line, column_for_byte_offset(bytes, offset, tab_size));
            let snapped = word::find_word_start(buffer, at, tab_size);
            offset = byte_offset_for_column(buffer.line(line).bytes(), snapped.column, tab_size);
        }
    }

    let column = column_for_byte_offset(buffer.line(line).bytes(), offset, tab_size);
    Cursor::at(line, column)
}

/// Move `amount` steps right from a sanitized position.
pub fn move_right(
    buffer: &TextBuffer,
    from: Cursor,
    amount: usize,
    word_mode: bool,
    tab_size: usize,
) -> Cursor {
    let mut line = from.line;
    let mut offset = byte_offset_for_column(buffer.line(line).bytes(), from.column, tab_size);

    for _ in 0..amount {
        let len = buffer.line(line).len();
        if offset >= len {
            if line + 1 >= buffer.line_count() {
                break;
            }
            line += 1;
            offset = 0;
        } else if word_mode {
            let bytes = buffer.line(line).bytes();
            let at = Cursor::at(line, column_for_byte_offset(bytes, offset, tab_size));
            let next = word::find_next_word(buffer, at, tab_size);
            offset = byte_offset_for_column(buffer.line(line).bytes(), next.column, tab_size);
        } else {
            let bytes = buffer.line(line).bytes();
            offset += utf8::sequence_length(bytes[offset]).min(len - offset);
        }
    }

    let column = column_for_byte_offset(buffer.line(line).bytes(), offset, tab_size);
    Cursor::at(line, column)
}

/// Column of the first non-whitespace byte on `line` - the smart-home target.
pub fn home_column(buffer: &TextBuffer, line: usize, tab_size: usize) -> usize {
    let bytes = buffer.line(line).bytes();
    let mut offset = 0;
    while offset < bytes.len() && bytes[offset].is_ascii_whitespace() {
        offset += 1;
    }
    column_for_byte_offset(bytes, offset, tab_size)
}
