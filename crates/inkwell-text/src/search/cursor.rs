// Current-match navigation over a match list

/// Tracks which match is "current" while stepping through search results.
///
/// Starts on the first match (or on none when the list is empty); `next_match`
/// and `prev_match` wrap around at either end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCursor {
    matches: Vec<usize>,
    current: Option<usize>,
}

impl MatchCursor {
    /// Create a cursor over the given match offsets.
    pub fn new(matches: Vec<usize>) -> Self {
        let current = if matches.is_empty() { None } else { Some(0) };
        Self { matches, current }
    }

    /// Replace the match list (after the text or pattern changed) and
    /// rewind to the first match.
    pub fn reset(&mut self, matches: Vec<usize>) {
        *self = Self::new(matches);
    }

    /// Advance to the following match, wrapping to the first.
    pub fn next_match(&mut self) -> Option<usize> {
        let n = self.matches.len();
        self.current = self.current.map(|c| (c + 1) % n);
        self.current_offset()
    }

    /// Step back to the preceding match, wrapping to the last.
    pub fn prev_match(&mut self) -> Option<usize> {
        let n = self.matches.len();
        self.current = self.current.map(|c| (c + n - 1) % n);
        self.current_offset()
    }

    /// Index of the current match in the list.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Text offset of the current match.
    pub fn current_offset(&self) -> Option<usize> {
        self.current.map(|c| self.matches[c])
    }

    /// 1-based position of the current match, for "3/7" style displays.
    pub fn position(&self) -> Option<usize> {
        self.current.map(|c| c + 1)
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether there are no matches.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// All match offsets.
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }
}
