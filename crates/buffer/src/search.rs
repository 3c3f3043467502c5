//! Search-match state.
//!
//! Holds the match list for the active query and the current position in the
//! cycle. The scan that populates it lives in the editor crate; this state is
//! invalidated whenever the buffer text or the query changes.

use crate::cursor::{Cursor, MatchRange};

/// Matches for one search query, in buffer order.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub matches: Vec<MatchRange>,
    /// Index into `matches` of the match the cursor last visited.
    pub current: Option<usize>,
}

impl SearchState {
    pub fn new(query: String) -> Self {
        Self {
            query,
            matches: Vec::new(),
            current: None,
        }
    }

    /// The match the cycle currently points at.
    pub fn current_match(&self) -> Option<MatchRange> {
        self.current.and_then(|i| self.matches.get(i).copied())
    }

    /// Advance the cycle, wrapping from the last match to the first. Starts
    /// at the first match when no match has been visited yet.
    pub fn advance(&mut self) {
        if self.matches.is_empty() {
            self.current = None;
            return;
        }
        self.current = Some(match self.current {
            Some(i) => (i + 1) % self.matches.len(),
            None => 0,
        });
    }

    /// Retreat the cycle, wrapping from the first match to the last.
    pub fn retreat(&mut self) {
        if self.matches.is_empty() {
            self.current = None;
            return;
        }
        self.current = Some(match self.current {
            Some(0) | None => self.matches.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// Point the cycle at the first match at or after `cursor`, wrapping to
    /// the first match when the cursor sits past every match.
    pub fn seek_closest(&mut self, cursor: Cursor) {
        if self.matches.is_empty() {
            self.current = None;
            return;
        }
        let index = self
            .matches
            .iter()
            .position(|m| m.start >= cursor)
            .unwrap_or(0);
        self.current = Some(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(line: usize, start: usize, end: usize) -> MatchRange {
        MatchRange {
            start: Cursor::at(line, start),
            end: Cursor::at(line, end),
        }
    }

    fn state_with(matches: Vec<MatchRange>) -> SearchState {
        SearchState {
            query: "ab".into(),
            matches,
            current: None,
        }
    }

    #[test]
    fn test_advance_cycles_and_wraps() {
        let mut state = state_with(vec![range(0, 0, 2), range(0, 3, 5), range(1, 0, 2)]);
        state.advance();
        assert_eq!(state.current, Some(0));
        state.advance();
        state.advance();
        assert_eq!(state.current, Some(2));
        state.advance();
        assert_eq!(state.current, Some(0));
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let mut state = state_with(vec![range(0, 0, 2), range(1, 0, 2)]);
        state.retreat();
        assert_eq!(state.current, Some(1));
        state.retreat();
        assert_eq!(state.current, Some(0));
        state.retreat();
        assert_eq!(state.current, Some(1));
    }

    #[test]
    fn test_empty_matches_have_no_current() {
        let mut state = state_with(Vec::new());
        state.advance();
        assert_eq!(state.current, None);
        state.retreat();
        assert_eq!(state.current, None);
    }

    #[test]
    fn test_seek_closest() {
        let mut state = state_with(vec![range(0, 0, 2), range(2, 1, 3), range(4, 0, 2)]);
        state.seek_closest(Cursor::at(1, 0));
        assert_eq!(state.current, Some(1));
        state.seek_closest(Cursor::at(9, 0));
        assert_eq!(state.current, Some(0));
    }
}
