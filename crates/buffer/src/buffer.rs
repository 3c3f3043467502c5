//! Byte-indexed line storage.
//!
//! A [`Line`] is an ordered sequence of raw bytes - one entry per byte, not
//! per codepoint - and a [`TextBuffer`] is an ordered sequence of lines. The
//! representation gives O(1) random byte access and cheap splicing; every
//! codepoint-boundary computation stays in [`crate::layout`] and
//! [`crate::utf8`] so no caller re-implements UTF-8 length logic.
//!
//! Index arguments are caller-validated. Passing an out-of-range line index
//! or byte offset is a programming error and panics; recoverable conditions
//! (out-of-range *coordinates*) are resolved by `layout::sanitize` before the
//! byte level is ever reached.

use std::borrow::Cow;

/// One line of text as raw bytes.
///
/// Valid UTF-8 whenever an editing operation returns: codepoints are inserted
/// and erased atomically, and line breaks only ever fall between whole
/// characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Length in bytes, not codepoints or columns.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The byte at `offset`. Panics when out of range.
    pub fn byte(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    /// Splice `bytes` in at `offset`, shifting the tail right.
    pub fn insert_bytes(&mut self, offset: usize, bytes: &[u8]) {
        debug_assert!(offset <= self.bytes.len());
        self.bytes.splice(offset..offset, bytes.iter().copied());
    }

    /// Remove the byte span `[start, end)`.
    pub fn erase_bytes(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.bytes.len());
        self.bytes.drain(start..end);
    }

    /// Append every byte of `other`.
    pub fn append(&mut self, other: &Line) {
        self.bytes.extend_from_slice(&other.bytes);
    }

    /// Split off the tail starting at `offset`, leaving `[0, offset)` here.
    pub fn split_off(&mut self, offset: usize) -> Line {
        Line {
            bytes: self.bytes.split_off(offset),
        }
    }

    /// The line's text. Lossy only if the validity invariant was broken by a
    /// caller bypassing the editing layer.
    pub fn text(&self) -> Cow<'_, str> {
        debug_assert!(std::str::from_utf8(&self.bytes).is_ok());
        String::from_utf8_lossy(&self.bytes)
    }
}

/// An ordered sequence of lines; the document content of one editor.
///
/// Always holds at least one line - an empty document is a single empty line.
/// Multi-line deletions may erase intermediate lines, but only within one
/// atomic operation; the invariant holds again when it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<Line>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// An empty buffer: one empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(text);
        buffer
    }

    /// Reset the buffer to `text`, one line per `\n`-delimited segment.
    ///
    /// Carriage returns are dropped; no other normalization happens. A
    /// trailing `\n` produces a final empty line, so serialization round-trips
    /// exactly.
    pub fn set_text(&mut self, text: &str) {
        self.lines.clear();
        self.lines.push(Line::new());
        for &byte in text.as_bytes() {
            match byte {
                b'\r' => {}
                b'\n' => self.lines.push(Line::new()),
                _ => {
                    let last = self.lines.len() - 1;
                    self.lines[last].bytes.push(byte);
                }
            }
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line at `index`. Panics when out of range.
    pub fn line(&self, index: usize) -> &Line {
        &self.lines[index]
    }

    pub fn line_mut(&mut self, index: usize) -> &mut Line {
        &mut self.lines[index]
    }

    /// The line at `index`, or `None` past the end. Query-surface variant of
    /// [`TextBuffer::line`] for callers that have not sanitized.
    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Insert an empty line at `index`, shifting subsequent lines down, and
    /// return it for immediate population.
    pub fn insert_line(&mut self, index: usize) -> &mut Line {
        debug_assert!(index <= self.lines.len());
        self.lines.insert(index, Line::new());
        &mut self.lines[index]
    }

    /// Remove the line at `index`, shifting subsequent lines up.
    pub fn erase_line(&mut self, index: usize) {
        self.lines.remove(index);
    }

    /// Remove the line span `[start, end)`.
    pub fn erase_lines(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.lines.len());
        self.lines.drain(start..end);
    }

    /// Splice `bytes` into the line at `line_index`.
    pub fn insert_bytes(&mut self, line_index: usize, offset: usize, bytes: &[u8]) {
        self.lines[line_index].insert_bytes(offset, bytes);
    }

    /// Remove the byte span `[start, end)` from the line at `line_index`.
    pub fn erase_bytes(&mut self, line_index: usize, start: usize, end: usize) {
        self.lines[line_index].erase_bytes(start, end);
    }

    /// Serialize the whole buffer, lines joined with `\n`.
    pub fn text(&self) -> String {
        let total: usize = self.lines.iter().map(Line::len).sum();
        let mut result = String::with_capacity(total + self.lines.len());
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                result.push('\n');
            }
            result.push_str(&line.text());
        }
        result
    }

    /// Text between two byte positions, lines joined with `\n`.
    ///
    /// Both positions are `(line_index, byte_offset)` pairs with
    /// `from <= to`; offsets must lie on codepoint boundaries.
    pub fn range_text(&self, from: (usize, usize), to: (usize, usize)) -> String {
        let (from_line, from_offset) = from;
        let (to_line, to_offset) = to;
        debug_assert!(from_line <= to_line);

        if from_line == to_line {
            let line = &self.lines[from_line];
            return String::from_utf8_lossy(&line.bytes[from_offset..to_offset]).into_owned();
        }

        let mut result = String::new();
        result.push_str(&String::from_utf8_lossy(
            &self.lines[from_line].bytes[from_offset..],
        ));
        for line in &self.lines[from_line + 1..to_line] {
            result.push('\n');
            result.push_str(&line.text());
        }
        result.push('\n');
        result.push_str(&String::from_utf8_lossy(
            &self.lines[to_line].bytes[..to_offset],
        ));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_has_one_empty_line() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert!(buffer.line(0).is_empty());
    }

    #[test]
    fn test_set_text_splits_lines() {
        let buffer = TextBuffer::from_text("ab\ncd\nef");
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.line(0).text(), "ab");
        assert_eq!(buffer.line(1).text(), "cd");
        assert_eq!(buffer.line(2).text(), "ef");
    }

    #[test]
    fn test_set_text_drops_carriage_returns() {
        let buffer = TextBuffer::from_text("ab\r\ncd\r");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line(0).text(), "ab");
        assert_eq!(buffer.line(1).text(), "cd");
    }

    #[test]
    fn test_trailing_newline_keeps_empty_line() {
        let buffer = TextBuffer::from_text("ab\n");
        assert_eq!(buffer.line_count(), 2);
        assert!(buffer.line(1).is_empty());
    }

    #[test]
    fn test_round_trip() {
        for text in ["", "a", "ab\ncd", "ab\n", "\n\n", "héllo\nwörld"] {
            assert_eq!(TextBuffer::from_text(text).text(), text);
        }
    }

    #[test]
    fn test_round_trip_strips_cr() {
        assert_eq!(TextBuffer::from_text("a\r\nb").text(), "a\nb");
    }

    #[test]
    fn test_insert_line_shifts_down() {
        let mut buffer = TextBuffer::from_text("a\nb");
        buffer.insert_line(1).insert_bytes(0, b"new");
        assert_eq!(buffer.text(), "a\nnew\nb");
    }

    #[test]
    fn test_erase_lines() {
        let mut buffer = TextBuffer::from_text("a\nb\nc\nd");
        buffer.erase_lines(1, 3);
        assert_eq!(buffer.text(), "a\nd");
    }

    #[test]
    fn test_byte_splicing() {
        let mut buffer = TextBuffer::from_text("hello");
        buffer.insert_bytes(0, 5, b" world");
        assert_eq!(buffer.line(0).text(), "hello world");
        buffer.erase_bytes(0, 0, 6);
        assert_eq!(buffer.line(0).text(), "world");
    }

    #[test]
    fn test_line_split_off() {
        let mut line = Line::from_bytes(b"abcdef".to_vec());
        let tail = line.split_off(2);
        assert_eq!(line.text(), "ab");
        assert_eq!(tail.text(), "cdef");
    }

    #[test]
    fn test_range_text_single_line() {
        let buffer = TextBuffer::from_text("hello world");
        assert_eq!(buffer.range_text((0, 6), (0, 11)), "world");
    }

    #[test]
    fn test_range_text_multi_line() {
        let buffer = TextBuffer::from_text("one\ntwo\nthree");
        assert_eq!(buffer.range_text((0, 1), (2, 3)), "ne\ntwo\nthr");
        assert_eq!(buffer.range_text((0, 3), (1, 0)), "\n");
    }
}
