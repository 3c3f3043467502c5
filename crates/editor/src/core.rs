//! The editor state machine.
//!
//! One [`Editor`] owns the buffer, cursor, selection, and search state of a
//! single open document. The input adapter drives it through
//! [`Editor::handle_command`] (or the individual methods); the rendering
//! adapter reads the query surface once per frame and takes the change flags.
//!
//! All coordinate inputs are sanitized before any byte math, so callers may
//! pass stale or out-of-range positions without error. Mutating operations on
//! a read-only editor are silent no-ops, as is every operation that has
//! nothing to act on.

use quill_buffer::layout::{sanitize, visual_width};
use quill_buffer::{Cursor, MatchRange, SearchState, Selection, SelectionMode, TextBuffer};
use quill_core::{Clipboard, Command, Direction};

use crate::config::EditorConfig;
use crate::{cursor, editing, search, selection};

/// Editing core for one open document.
pub struct Editor {
    config: EditorConfig,
    buffer: TextBuffer,
    /// May hold an out-of-range column between a vertical move and the next
    /// sanitize; never dereferenced raw.
    cursor: Cursor,
    /// Committed selection, kept ordered by `set_selection`.
    selection: Selection,
    /// Raw gesture endpoints the committed selection is derived from.
    interactive_start: Cursor,
    interactive_end: Cursor,
    /// Snapping rule applied while a gesture is in progress.
    mode: SelectionMode,
    overwrite: bool,
    search: Option<SearchState>,
    text_changed: bool,
    selection_changed: bool,
    scroll_request: Option<Cursor>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Empty editor with default configuration.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            buffer: TextBuffer::new(),
            cursor: Cursor::ZERO,
            selection: Selection::default(),
            interactive_start: Cursor::ZERO,
            interactive_end: Cursor::ZERO,
            mode: SelectionMode::Normal,
            overwrite: false,
            search: None,
            text_changed: false,
            selection_changed: false,
            scroll_request: None,
        }
    }

    pub fn from_text(text: &str, config: EditorConfig) -> Self {
        let mut editor = Self::with_config(config);
        editor.set_text(text);
        editor
    }

    // === Query surface =====================================================

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Text of one line, or `None` past the end.
    pub fn line_text(&self, index: usize) -> Option<String> {
        self.buffer.get(index).map(|line| line.text().into_owned())
    }

    /// Serialize the whole document.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// The raw cursor; may sit past the end of its line until sanitized.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The cursor clamped into the buffer, as the rendering layer draws it.
    pub fn sanitized_cursor(&self) -> Cursor {
        sanitize(&self.buffer, self.cursor, self.config.tab_size)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Text covered by the selection, or `None` without one.
    pub fn selected_text(&self) -> Option<String> {
        selection::selected_text(&self.buffer, &self.selection, self.config.tab_size)
    }

    /// Match ranges of the active search, in buffer order.
    pub fn search_matches(&self) -> &[MatchRange] {
        self.search.as_ref().map_or(&[], |s| &s.matches)
    }

    /// True once the document differs from the last loaded/saved state.
    /// Sticky until [`Editor::clear_modified`].
    pub fn is_modified(&self) -> bool {
        self.text_changed
    }

    /// Reset the modified flag, typically after the host persists the text.
    pub fn clear_modified(&mut self) {
        self.text_changed = false;
    }

    /// True when the cursor or selection changed since the last take; drives
    /// the cursor-blink reset in the rendering layer.
    pub fn take_selection_changed(&mut self) -> bool {
        std::mem::take(&mut self.selection_changed)
    }

    /// Position the viewport should scroll to, recorded by the last
    /// navigation or edit.
    pub fn take_scroll_request(&mut self) -> Option<Cursor> {
        self.scroll_request.take()
    }

    pub fn is_overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.overwrite = overwrite;
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.config.read_only = read_only;
    }

    // === Document loading ==================================================

    /// Replace the whole document, resetting cursor, selection, and search.
    /// The result counts as unmodified until the next edit.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.cursor = Cursor::ZERO;
        self.interactive_start = Cursor::ZERO;
        self.interactive_end = Cursor::ZERO;
        self.selection = Selection::default();
        self.mode = SelectionMode::Normal;
        self.search = None;
        self.text_changed = false;
        self.selection_changed = true;
        self.scroll_request = None;
    }

    // === Cursor & selection ================================================

    /// Move the cursor without touching the selection. The position is kept
    /// raw; sanitization happens on use.
    pub fn set_cursor(&mut self, pos: Cursor) {
        if pos != self.cursor {
            self.cursor = pos;
            self.selection_changed = true;
            self.request_scroll();
        }
    }

    /// Commit a selection: sanitize, order, snap by mode. Flags a selection
    /// change only when the committed span actually differs.
    pub fn set_selection(&mut self, start: Cursor, end: Cursor, mode: SelectionMode) {
        let tab_size = self.config.tab_size;
        let mut start = sanitize(&self.buffer, start, tab_size);
        let mut end = sanitize(&self.buffer, end, tab_size);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }
        let (start, end) = selection::snap(&self.buffer, start, end, mode, tab_size);
        let committed = Selection::ordered(start, end);
        if committed != self.selection {
            self.selection = committed;
            self.selection_changed = true;
        }
    }

    /// Start a selection gesture at `pos` (mouse press, double- or
    /// triple-click). Both anchors collapse onto the position; `mode` governs
    /// snapping for the rest of the gesture.
    pub fn begin_selection(&mut self, pos: Cursor, mode: SelectionMode) {
        let pos = sanitize(&self.buffer, pos, self.config.tab_size);
        self.set_cursor(pos);
        self.interactive_start = pos;
        self.interactive_end = pos;
        self.mode = mode;
        self.set_selection(pos, pos, mode);
    }

    /// Continue a selection gesture: drag the moving endpoint to `pos`.
    pub fn drag_selection(&mut self, pos: Cursor) {
        let pos = sanitize(&self.buffer, pos, self.config.tab_size);
        self.set_cursor(pos);
        self.interactive_end = pos;
        self.set_selection(self.interactive_start, self.interactive_end, self.mode);
    }

    pub fn select_all(&mut self) {
        let (start, end) = selection::select_all_span(&self.buffer, self.config.tab_size);
        self.interactive_start = start;
        self.interactive_end = end;
        self.set_cursor(end);
        self.set_selection(start, end, SelectionMode::Normal);
    }

    /// Reconcile the anchor pair after a cursor move and commit the result.
    ///
    /// When extending, the anchor equal to the pre-move cursor follows it;
    /// with neither matching, the anchors span old-to-new. Without extension
    /// both collapse onto the new position.
    fn commit_move(&mut self, old: Cursor, new: Cursor, extend: bool) {
        self.cursor = new;
        if extend {
            if old == self.interactive_start {
                self.interactive_start = new;
            } else if old == self.interactive_end {
                self.interactive_end = new;
            } else if new < old {
                self.interactive_start = new;
                self.interactive_end = old;
            } else {
                self.interactive_start = old;
                self.interactive_end = new;
            }
        } else {
            self.interactive_start = new;
            self.interactive_end = new;
        }
        if new != old {
            self.selection_changed = true;
        }
        self.set_selection(self.interactive_start, self.interactive_end, SelectionMode::Normal);
        self.request_scroll();
    }

    // === Navigation ========================================================

    /// Move up `amount` lines. The column is preserved raw and re-clamped by
    /// the next sanitize, so a long-line column survives hops over short
    /// lines.
    pub fn move_up(&mut self, amount: usize, extend: bool) {
        let old = self.cursor;
        let new = Cursor::at(old.line.saturating_sub(amount), old.column);
        if new != old {
            self.commit_move(old, new, extend);
        }
    }

    pub fn move_down(&mut self, amount: usize, extend: bool) {
        let old = self.cursor;
        let last = self.buffer.line_count() - 1;
        let new = Cursor::at((old.line + amount).min(last), old.column);
        if new != old {
            self.commit_move(old, new, extend);
        }
    }

    pub fn move_left(&mut self, amount: usize, extend: bool, word: bool) {
        let old = self.cursor;
        let from = self.sanitized_cursor();
        let new = cursor::move_left(&self.buffer, from, amount, word, self.config.tab_size);
        self.commit_move(old, new, extend);
    }

    pub fn move_right(&mut self, amount: usize, extend: bool, word: bool) {
        let old = self.cursor;
        let from = self.sanitized_cursor();
        let new = cursor::move_right(&self.buffer, from, amount, word, self.config.tab_size);
        self.commit_move(old, new, extend);
    }

    /// Move to the first non-whitespace column of the current line.
    pub fn move_home(&mut self, extend: bool) {
        let old = self.cursor;
        let from = self.sanitized_cursor();
        let column = cursor::home_column(&self.buffer, from.line, self.config.tab_size);
        self.commit_move(old, Cursor::at(from.line, column), extend);
    }

    /// Move past the last column of the current line.
    pub fn move_end(&mut self, extend: bool) {
        let old = self.cursor;
        let from = self.sanitized_cursor();
        let width = visual_width(self.buffer.line(from.line).bytes(), self.config.tab_size);
        self.commit_move(old, Cursor::at(from.line, width), extend);
    }

    pub fn move_top(&mut self, extend: bool) {
        let old = self.cursor;
        self.commit_move(old, Cursor::ZERO, extend);
    }

    pub fn move_bottom(&mut self, extend: bool) {
        let old = self.cursor;
        let last = self.buffer.line_count() - 1;
        self.commit_move(old, Cursor::at(last, 0), extend);
    }

    // === Editing ===========================================================

    /// Insert one codepoint at the cursor.
    ///
    /// A tab while a selection is active block-indents the selected lines
    /// (outdents with `shift`); any other character replaces the selection.
    /// In overwrite mode the codepoint under the cursor is replaced.
    pub fn insert_char(&mut self, ch: char, shift: bool) {
        if self.config.read_only {
            return;
        }
        if self.has_selection() {
            if ch == '\t' {
                self.indent_selection(shift);
                return;
            }
            self.delete_selection();
        }

        let pos = self.sanitized_cursor();
        let new_cursor = if ch == '\n' {
            editing::insert_newline_at(&mut self.buffer, pos, self.config.tab_size)
        } else {
            editing::insert_char_at(&mut self.buffer, pos, ch, self.overwrite, self.config.tab_size)
        };
        self.after_edit(new_cursor);
    }

    /// Insert a raw scalar value; anything `char` cannot carry is discarded
    /// without touching the buffer.
    pub fn insert_scalar(&mut self, scalar: u32, shift: bool) {
        match char::from_u32(scalar) {
            Some(ch) => self.insert_char(ch, shift),
            None => log::debug!("discarded unencodable codepoint {scalar:#x}"),
        }
    }

    /// Insert a block of text at the cursor. Returns the number of line
    /// breaks introduced.
    pub fn insert_text(&mut self, text: &str) -> usize {
        if self.config.read_only || text.is_empty() {
            return 0;
        }
        let pos = self.sanitized_cursor();
        let (new_cursor, breaks) =
            editing::insert_text_at(&mut self.buffer, pos, text, self.config.tab_size);
        self.after_edit(new_cursor);
        breaks
    }

    /// Delete the selected span, if any, and collapse onto its start.
    pub fn delete_selection(&mut self) {
        if self.config.read_only || self.selection.is_empty() {
            return;
        }
        let start = self.selection.start();
        let end = self.selection.end();
        editing::delete_range(&mut self.buffer, start, end, self.config.tab_size);
        self.after_edit(start);
    }

    /// Delete backward: the selection if one exists, else one codepoint, else
    /// join onto the previous line at column 0.
    pub fn backspace(&mut self) {
        if self.config.read_only {
            return;
        }
        if self.has_selection() {
            self.delete_selection();
            return;
        }
        let pos = self.sanitized_cursor();
        if let Some(new_cursor) =
            editing::backspace_at(&mut self.buffer, pos, self.config.tab_size)
        {
            self.after_edit(new_cursor);
        }
    }

    /// Delete forward: the selection if one exists, else one codepoint, else
    /// join the next line at end of line.
    ///
    /// Returns after clearing a selection rather than also deleting at the
    /// collapsed cursor, mirroring `backspace`.
    pub fn delete(&mut self) {
        if self.config.read_only {
            return;
        }
        if self.has_selection() {
            self.delete_selection();
            return;
        }
        let pos = self.sanitized_cursor();
        if editing::delete_at(&mut self.buffer, pos, self.config.tab_size) {
            self.after_edit(pos);
        }
    }

    /// Copy the selection - or the whole current line without one - to the
    /// clipboard.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) {
        let text = self.copy_payload();
        if let Err(err) = clipboard.set_text(&text) {
            log::warn!("clipboard copy failed: {err:#}");
        }
    }

    /// Copy like [`Editor::copy`], then delete the selection - or the whole
    /// current line without one. Nothing is deleted when the clipboard write
    /// fails.
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) {
        if self.config.read_only {
            return;
        }
        let text = self.copy_payload();
        if let Err(err) = clipboard.set_text(&text) {
            log::warn!("clipboard cut failed: {err:#}");
            return;
        }
        if self.has_selection() {
            self.delete_selection();
            return;
        }

        let line = self.sanitized_cursor().line;
        let was_last = line == self.buffer.line_count() - 1;
        self.buffer.erase_line(line);
        let new_cursor = if was_last {
            self.buffer.insert_line(line);
            Cursor::at(line, 0)
        } else {
            sanitize(
                &self.buffer,
                Cursor::at(line, self.cursor.column),
                self.config.tab_size,
            )
        };
        self.after_edit(new_cursor);
    }

    /// Insert the clipboard text, replacing any selection. Empty or
    /// inaccessible clipboard contents are a no-op.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) {
        if self.config.read_only {
            return;
        }
        let Some(text) = clipboard.text() else {
            return;
        };
        if text.is_empty() {
            return;
        }
        self.delete_selection();
        self.insert_text(&text);
    }

    fn copy_payload(&self) -> String {
        self.selected_text()
            .unwrap_or_else(|| self.buffer.line(self.sanitized_cursor().line).text().into_owned())
    }

    /// Block indent (or outdent) every line touched by the selection.
    fn indent_selection(&mut self, outdent: bool) {
        let tab_size = self.config.tab_size;
        let start_line = self.selection.start().line;
        let mut end_line = self.selection.end().line;
        // A selection ending at column 0 does not include that line.
        if self.selection.end().column == 0 && end_line > start_line {
            end_line -= 1;
        }
        let end_line = end_line.min(self.buffer.line_count() - 1);

        let modified = if outdent {
            editing::outdent_lines(&mut self.buffer, start_line, end_line, tab_size)
        } else {
            editing::indent_lines(&mut self.buffer, start_line, end_line);
            true
        };
        if !modified {
            return;
        }

        self.mark_text_changed();
        self.cursor = self.sanitized_cursor();
        self.interactive_start = Cursor::at(start_line, 0);
        let width = visual_width(self.buffer.line(end_line).bytes(), tab_size);
        self.interactive_end = Cursor::at(end_line, width);
        self.set_selection(self.interactive_start, self.interactive_end, SelectionMode::Normal);
        self.request_scroll();
    }

    // === Search ============================================================

    /// Compute the match list for `query` without moving the cursor, so the
    /// rendering layer can highlight hits while the query is being typed.
    pub fn set_search_query(&mut self, query: &str) {
        if query.is_empty() {
            self.search = None;
            return;
        }
        self.refresh_matches(query);
    }

    /// Jump to the next occurrence of `query`, recomputing matches when the
    /// query changed and wrapping from the last match to the first.
    ///
    /// On a fresh query the jump goes to the first match at or after the
    /// cursor; only subsequent calls advance the cycle.
    pub fn find_next(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        self.refresh_matches(query);
        let cursor = self.sanitized_cursor();
        if let Some(state) = self.search.as_mut() {
            if state.current.is_none() {
                state.seek_closest(cursor);
            } else {
                state.advance();
            }
        }
        self.goto_current_match();
    }

    /// Jump to the previous occurrence, wrapping from the first match to the
    /// last.
    pub fn find_prev(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        self.refresh_matches(query);
        let cursor = self.sanitized_cursor();
        if let Some(state) = self.search.as_mut() {
            if state.current.is_none() {
                state.seek_closest(cursor);
            } else {
                state.retreat();
            }
        }
        self.goto_current_match();
    }

    /// Replace every occurrence of `query` with `replacement`, restoring the
    /// cursor afterwards. Returns the number of replacements.
    ///
    /// Matches are applied in reverse buffer order so earlier replacements
    /// never shift the coordinates of later ones, even when the replacement
    /// changes the line length.
    pub fn replace_all(&mut self, query: &str, replacement: &str) -> usize {
        if self.config.read_only || query.is_empty() {
            return 0;
        }
        let matches = search::find_all(&self.buffer, query, self.config.tab_size);
        if matches.is_empty() {
            return 0;
        }

        let saved = self.cursor;
        let count =
            search::replace_matches(&mut self.buffer, &matches, replacement, self.config.tab_size);

        self.mark_text_changed();
        let restored = sanitize(&self.buffer, saved, self.config.tab_size);
        self.cursor = restored;
        self.interactive_start = restored;
        self.interactive_end = restored;
        self.set_selection(restored, restored, SelectionMode::Normal);
        self.selection_changed = true;
        count
    }

    /// Recompute the match list when `query` differs from the active search.
    /// A rebuilt cycle has no current match until a find seeks or advances it.
    fn refresh_matches(&mut self, query: &str) {
        let stale = self.search.as_ref().map_or(true, |s| s.query != query);
        if !stale {
            return;
        }
        let mut state = SearchState::new(query.to_string());
        state.matches = search::find_all(&self.buffer, query, self.config.tab_size);
        self.search = Some(state);
    }

    fn goto_current_match(&mut self) {
        let Some(range) = self.search.as_ref().and_then(SearchState::current_match) else {
            return;
        };
        self.set_cursor(range.start);
        self.interactive_start = range.start;
        self.interactive_end = range.start;
        self.set_selection(range.start, range.start, SelectionMode::Normal);
        self.request_scroll();
    }

    // === Command dispatch ==================================================

    /// Apply one logical input command.
    pub fn handle_command(&mut self, command: Command, clipboard: &mut dyn Clipboard) {
        match command {
            Command::MoveCursor {
                direction,
                amount,
                extend,
                word,
            } => match direction {
                Direction::Up => self.move_up(amount, extend),
                Direction::Down => self.move_down(amount, extend),
                Direction::Left => self.move_left(amount, extend, word),
                Direction::Right => self.move_right(amount, extend, word),
            },
            Command::MoveHome { extend } => self.move_home(extend),
            Command::MoveEnd { extend } => self.move_end(extend),
            Command::MoveTop { extend } => self.move_top(extend),
            Command::MoveBottom { extend } => self.move_bottom(extend),
            Command::SetSelection { start, end, mode } => self.set_selection(start, end, mode),
            Command::InsertChar { ch, shift } => self.insert_char(ch, shift),
            Command::InsertText(text) => {
                self.insert_text(&text);
            }
            Command::Backspace => self.backspace(),
            Command::Delete => self.delete(),
            Command::DeleteSelection => self.delete_selection(),
            Command::Cut => self.cut(clipboard),
            Command::Copy => self.copy(clipboard),
            Command::Paste => self.paste(clipboard),
            Command::SelectAll => self.select_all(),
            Command::SetOverwrite(overwrite) => self.set_overwrite(overwrite),
            Command::SetText(text) => self.set_text(&text),
            Command::SetSearchQuery(query) => self.set_search_query(&query),
            Command::FindNext(query) => self.find_next(&query),
            Command::FindPrev(query) => self.find_prev(&query),
            Command::ReplaceAll { query, replacement } => {
                self.replace_all(&query, &replacement);
            }
        }
    }

    // === Internal ==========================================================

    /// Common tail of every successful mutation: place the cursor, collapse
    /// the selection onto it, flag the change, keep the cursor visible.
    fn after_edit(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.interactive_start = cursor;
        self.interactive_end = cursor;
        self.set_selection(cursor, cursor, SelectionMode::Normal);
        self.mark_text_changed();
        self.selection_changed = true;
        self.request_scroll();
    }

    fn mark_text_changed(&mut self) {
        self.text_changed = true;
        // Match coordinates are stale the moment the text shifts.
        self.search = None;
    }

    fn request_scroll(&mut self) {
        self.scroll_request = Some(self.sanitized_cursor());
    }
}
