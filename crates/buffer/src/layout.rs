//! Visual-column arithmetic: the conversion layer between `(line, column)`
//! coordinates and raw byte offsets.
//!
//! Columns are tab-expanded: a tab advances the running column to the next
//! multiple of the tab size, any other codepoint advances it by one no matter
//! how many bytes encode it. All three walks below share that rule, which is
//! what makes [`byte_offset_for_column`] and [`column_for_byte_offset`]
//! inverses of each other on codepoint boundaries.

use crate::buffer::TextBuffer;
use crate::cursor::Cursor;
use crate::utf8;

/// Visual width of a line's bytes under the given tab size.
pub fn visual_width(bytes: &[u8], tab_size: usize) -> usize {
    let mut column = 0;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if byte == b'\t' {
            column = (column / tab_size) * tab_size + tab_size;
        } else {
            column += 1;
        }
        i += utf8::sequence_length(byte);
    }
    column
}

/// Byte offset of the first codepoint at or past `column`.
///
/// Walks codepoints accumulating visual columns; a `column` beyond the line's
/// width clamps to the line's byte length. A column inside a tab's expansion
/// resolves to the offset just past the tab.
pub fn byte_offset_for_column(bytes: &[u8], column: usize, tab_size: usize) -> usize {
    let mut col = 0;
    let mut i = 0;
    while i < bytes.len() && col < column {
        let byte = bytes[i];
        if byte == b'\t' {
            col = (col / tab_size) * tab_size + tab_size;
        } else {
            col += 1;
        }
        i += utf8::sequence_length(byte);
    }
    i.min(bytes.len())
}

/// Visual column of the codepoint starting at byte `offset`; the inverse of
/// [`byte_offset_for_column`].
pub fn column_for_byte_offset(bytes: &[u8], offset: usize, tab_size: usize) -> usize {
    let mut col = 0;
    let mut i = 0;
    while i < offset && i < bytes.len() {
        let byte = bytes[i];
        i += utf8::sequence_length(byte);
        if byte == b'\t' {
            col = (col / tab_size) * tab_size + tab_size;
        } else {
            col += 1;
        }
    }
    col
}

/// Clamp a coordinate into the buffer.
///
/// A line index past the end resolves to end-of-buffer (last line, full
/// width), not merely the last line at the same column. Within a valid line
/// the column clamps to `[0, visual_width]`. Idempotent.
pub fn sanitize(buffer: &TextBuffer, value: Cursor, tab_size: usize) -> Cursor {
    if buffer.line_count() == 0 {
        return Cursor::ZERO;
    }
    if value.line >= buffer.line_count() {
        let line = buffer.line_count() - 1;
        let width = visual_width(buffer.line(line).bytes(), tab_size);
        return Cursor::at(line, width);
    }
    let width = visual_width(buffer.line(value.line).bytes(), tab_size);
    Cursor::at(value.line, value.column.min(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAB: usize = 4;

    #[test]
    fn test_visual_width_plain() {
        assert_eq!(visual_width(b"hello", TAB), 5);
        assert_eq!(visual_width(b"", TAB), 0);
    }

    #[test]
    fn test_visual_width_tab_stops() {
        // 'a' -> 1, tab advances to 4, 'b' -> 5.
        assert_eq!(visual_width(b"a\tb", TAB), 5);
        // Tab at column 0 advances straight to 4.
        assert_eq!(visual_width(b"\t", TAB), 4);
        // Tab exactly on a stop advances a full stop.
        assert_eq!(visual_width(b"abcd\tx", TAB), 9);
    }

    #[test]
    fn test_visual_width_counts_codepoints_not_bytes() {
        assert_eq!(visual_width("héllo".as_bytes(), TAB), 5);
        assert_eq!(visual_width("日本".as_bytes(), TAB), 2);
    }

    #[test]
    fn test_byte_offset_for_column() {
        let bytes = "a\tb".as_bytes();
        assert_eq!(byte_offset_for_column(bytes, 0, TAB), 0);
        assert_eq!(byte_offset_for_column(bytes, 1, TAB), 1);
        // Columns 2..=4 sit inside the tab's expansion.
        assert_eq!(byte_offset_for_column(bytes, 4, TAB), 2);
        assert_eq!(byte_offset_for_column(bytes, 5, TAB), 3);
        // Past the end clamps to the byte length.
        assert_eq!(byte_offset_for_column(bytes, 100, TAB), 3);
    }

    #[test]
    fn test_byte_offset_multibyte() {
        let bytes = "é€x".as_bytes(); // 2 + 3 + 1 bytes
        assert_eq!(byte_offset_for_column(bytes, 1, TAB), 2);
        assert_eq!(byte_offset_for_column(bytes, 2, TAB), 5);
        assert_eq!(byte_offset_for_column(bytes, 3, TAB), 6);
    }

    #[test]
    fn test_column_for_byte_offset() {
        let bytes = "é\tx".as_bytes();
        assert_eq!(column_for_byte_offset(bytes, 0, TAB), 0);
        assert_eq!(column_for_byte_offset(bytes, 2, TAB), 1);
        assert_eq!(column_for_byte_offset(bytes, 3, TAB), 4);
        assert_eq!(column_for_byte_offset(bytes, 4, TAB), 5);
    }

    #[test]
    fn test_column_byte_inverse_on_boundaries() {
        let bytes = "a\té€\tz".as_bytes();
        let mut i = 0;
        while i <= bytes.len() {
            let col = column_for_byte_offset(bytes, i, TAB);
            assert_eq!(byte_offset_for_column(bytes, col, TAB), i);
            if i == bytes.len() {
                break;
            }
            i += crate::utf8::sequence_length(bytes[i]);
        }
    }

    #[test]
    fn test_sanitize_clamps_column() {
        let buffer = TextBuffer::from_text("abc\nde");
        assert_eq!(
            sanitize(&buffer, Cursor::at(0, 99), TAB),
            Cursor::at(0, 3)
        );
        assert_eq!(sanitize(&buffer, Cursor::at(1, 1), TAB), Cursor::at(1, 1));
    }

    #[test]
    fn test_sanitize_past_end_goes_to_end_of_buffer() {
        let buffer = TextBuffer::from_text("abc\nde");
        assert_eq!(
            sanitize(&buffer, Cursor::at(7, 0), TAB),
            Cursor::at(1, 2)
        );
    }

    #[test]
    fn test_sanitize_idempotent() {
        let buffer = TextBuffer::from_text("a\tb\nxyz\n");
        for cursor in [
            Cursor::at(0, 0),
            Cursor::at(0, 42),
            Cursor::at(1, 2),
            Cursor::at(9, 9),
        ] {
            let once = sanitize(&buffer, cursor, TAB);
            assert_eq!(sanitize(&buffer, once, TAB), once);
            assert!(once.line < buffer.line_count());
            assert!(once.column <= visual_width(buffer.line(once.line).bytes(), TAB));
        }
    }
}
