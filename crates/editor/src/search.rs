//! Buffer scanning for the search engine.
//!
//! Literal, case-sensitive substring search, one line at a time. Matches are
//! reported as visual-column ranges so the rendering layer can highlight them
//! without redoing byte math. Replacement applies matches in reverse buffer
//! order, so edits that change line lengths never invalidate the coordinates
//! of matches still to be processed.

use quill_buffer::layout::column_for_byte_offset;
use quill_buffer::{Cursor, MatchRange, TextBuffer};

use crate::editing;

/// Every non-overlapping occurrence of `query`, top-to-bottom and
/// left-to-right. An empty query matches nothing.
pub fn find_all(buffer: &TextBuffer, query: &str, tab_size: usize) -> Vec<MatchRange> {
    let mut matches = Vec::new();
    if query.is_empty() {
        return matches;
    }

    for line_index in 0..buffer.line_count() {
        let line = buffer.line(line_index);
        let text = line.text();
        let mut from = 0;
        while let Some(found) = text[from..].find(query) {
            let start = from + found;
            let end = start + query.len();
            matches.push(MatchRange {
                start: Cursor::at(
                    line_index,
                    column_for_byte_offset(line.bytes(), start, tab_size),
                ),
                end: Cursor::at(
                    line_index,
                    column_for_byte_offset(line.bytes(), end, tab_size),
                ),
            });
            from = end;
        }
    }
    matches
}

/// Replace every match with `replacement`, processing matches last-to-first.
/// Returns the number of replacements.
pub fn replace_matches(
    buffer: &mut TextBuffer,
    matches: &[MatchRange],
    replacement: &str,
    tab_size: usize,
) -> usize {
    for range in matches.iter().rev() {
        editing::delete_range(buffer, range.start, range.end, tab_size);
        editing::insert_text_at(buffer, range.start, replacement, tab_size);
    }
    matches.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAB: usize = 4;

    fn range(line: usize, start: usize, end: usize) -> MatchRange {
        MatchRange {
            start: Cursor::at(line, start),
            end: Cursor::at(line, end),
        }
    }

    #[test]
    fn test_find_all_in_buffer_order() {
        let buffer = TextBuffer::from_text("ab ab\nab");
        assert_eq!(
            find_all(&buffer, "ab", TAB),
            vec![range(0, 0, 2), range(0, 3, 5), range(1, 0, 2)]
        );
    }

    #[test]
    fn test_find_all_non_overlapping() {
        let buffer = TextBuffer::from_text("aaa");
        assert_eq!(find_all(&buffer, "aa", TAB), vec![range(0, 0, 2)]);
    }

    #[test]
    fn test_find_all_empty_query() {
        let buffer = TextBuffer::from_text("abc");
        assert!(find_all(&buffer, "", TAB).is_empty());
    }

    #[test]
    fn test_find_all_case_sensitive() {
        let buffer = TextBuffer::from_text("Ab ab");
        assert_eq!(find_all(&buffer, "ab", TAB), vec![range(0, 3, 5)]);
    }

    #[test]
    fn test_find_all_columns_account_for_tabs() {
        let buffer = TextBuffer::from_text("\tab");
        assert_eq!(find_all(&buffer, "ab", TAB), vec![range(0, 4, 6)]);
    }

    #[test]
    fn test_replace_matches_growing_replacement() {
        let mut buffer = TextBuffer::from_text("aaa");
        let matches = find_all(&buffer, "a", TAB);
        assert_eq!(replace_matches(&mut buffer, &matches, "bb", TAB), 3);
        assert_eq!(buffer.text(), "bbbbbb");
    }

    #[test]
    fn test_replace_matches_shrinking_replacement() {
        let mut buffer = TextBuffer::from_text("xx one xx two xx");
        let matches = find_all(&buffer, "xx", TAB);
        assert_eq!(replace_matches(&mut buffer, &matches, "y", TAB), 3);
        assert_eq!(buffer.text(), "y one y two y");
    }

    #[test]
    fn test_replace_matches_multi_line_replacement() {
        let mut buffer = TextBuffer::from_text("a-b");
        let matches = find_all(&buffer, "-", TAB);
        assert_eq!(replace_matches(&mut buffer, &matches, "\n", TAB), 1);
        assert_eq!(buffer.text(), "a\nb");
    }
}
