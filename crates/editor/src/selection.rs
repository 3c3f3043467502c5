//! Selection snapping and extraction helpers.

use quill_buffer::layout::{byte_offset_for_column, visual_width};
use quill_buffer::{word, Cursor, Selection, SelectionMode, TextBuffer};

/// Snap already-sanitized, ordered endpoints according to the selection mode.
///
/// Word mode pulls the start back to its word start and - unless the end
/// already sits on a word boundary - pushes the end out to the end of its
/// word. Line mode snaps the start to column 0 and the end to its line's full
/// width.
pub fn snap(
    buffer: &TextBuffer,
    mut start: Cursor,
    mut end: Cursor,
    mode: SelectionMode,
    tab_size: usize,
) -> (Cursor, Cursor) {
    match mode {
        SelectionMode::Normal => {}
        SelectionMode::Word => {
            start = word::find_word_start(buffer, start, tab_size);
            if !word::is_on_word_boundary(buffer, end, tab_size) {
                let end_word = word::find_word_start(buffer, end, tab_size);
                end = word::find_word_end(buffer, end_word, tab_size);
            }
        }
        SelectionMode::Line => {
            start = Cursor::at(start.line, 0);
            let width = visual_width(buffer.line(end.line).bytes(), tab_size);
            end = Cursor::at(end.line, width);
        }
    }
    (start, end)
}

/// The selection span covering the whole buffer.
pub fn select_all_span(buffer: &TextBuffer, tab_size: usize) -> (Cursor, Cursor) {
    let last = buffer.line_count() - 1;
    let width = visual_width(buffer.line(last).bytes(), tab_size);
    (Cursor::ZERO, Cursor::at(last, width))
}

/// Text covered by a non-empty selection, lines joined with `\n`.
pub fn selected_text(
    buffer: &TextBuffer,
    selection: &Selection,
    tab_size: usize,
) -> Option<String> {
    if selection.is_empty() {
        return None;
    }
    let start = selection.start();
    let end = selection.end();
    let from = (
        start.line,
        byte_offset_for_column(buffer.line(start.line).bytes(), start.column, tab_size),
    );
    let to = (
        end.line,
        byte_offset_for_column(buffer.line(end.line).bytes(), end.column, tab_size),
    );
    Some(buffer.range_text(from, to))
}
