// InkwellHandle: top-level integration point for editing assistance.
//
// Owns the dictionary trie, the corrector and the handle options, and
// exposes completion, search, correction and the typing helpers through
// one API.
//
// Design notes:
// - The trie is the corrector's lexicon; membership is OR-ed with the
//   built-in common-word list inside the corrector.
// - Options live in the handle and are applied per call, so setters never
//   rebuild anything.

use std::path::Path;

use inkwell_core::Lexicon;
use inkwell_core::character::fold_lowercase;
use inkwell_trie::{Trie, WordListError};

use crate::corrector::{Corrector, CorrectorOptions};
use crate::editing::{self, AutocorrectEdit};
use crate::search::{self, MatchCursor};
use crate::speller::common::is_common;

/// Error type for InkwellHandle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum InkwellError {
    /// The word list could not be read.
    #[error(transparent)]
    WordList(#[from] WordListError),
}

/// Handle-level options.
#[derive(Debug, Clone, Copy)]
pub struct HandleOptions {
    /// Completions returned by [`InkwellHandle::suggest_completions`].
    /// Default: 3.
    pub completion_limit: usize,
    /// Suggestions returned by [`InkwellHandle::suggest`]. Default: 5.
    pub max_suggestions: usize,
    /// Whether [`InkwellHandle::contains`] also accepts common words.
    /// Default: true.
    pub use_common_words_for_membership: bool,
}

impl Default for HandleOptions {
    fn default() -> Self {
        Self {
            completion_limit: 3,
            max_suggestions: 5,
            use_common_words_for_membership: true,
        }
    }
}

/// Top-level handle owning the dictionary and the corrector.
pub struct InkwellHandle {
    trie: Trie,
    corrector: Corrector,
    options: HandleOptions,
}

impl Default for InkwellHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl InkwellHandle {
    /// Create a handle with an empty dictionary. Only the common-word list
    /// is known.
    pub fn new() -> Self {
        Self::from_trie(Trie::new())
    }

    pub fn from_trie(trie: Trie) -> Self {
        Self {
            trie,
            corrector: Corrector::new(),
            options: HandleOptions::default(),
        }
    }

    /// Create a handle whose dictionary holds `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_trie(words.into_iter().collect())
    }

    /// Create a handle from newline-separated word-list text.
    pub fn from_word_list(data: &str) -> Self {
        let mut trie = Trie::new();
        let added = trie.load_word_list(data);
        log::debug!("loaded {added} words");
        Self::from_trie(trie)
    }

    /// Create a handle from a word-list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InkwellError> {
        let trie = Trie::from_path(path)?;
        Ok(Self::from_trie(trie))
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn corrector(&self) -> &Corrector {
        &self.corrector
    }

    // =========================================================================
    // Dictionary
    // =========================================================================

    /// Add a word to the dictionary. Returns `true` if it was new.
    pub fn insert(&mut self, word: &str) -> bool {
        self.trie.insert(word)
    }

    /// Whether `word` is known (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        if self.trie.contains(word) {
            return true;
        }
        self.options.use_common_words_for_membership
            && !word.is_empty()
            && is_common(&fold_lowercase(word))
    }

    /// Completions of `prefix`, up to the configured limit.
    pub fn suggest_completions(&self, prefix: &str) -> Vec<String> {
        self.suggest_completions_with_limit(prefix, self.options.completion_limit)
    }

    pub fn suggest_completions_with_limit(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.trie.suggest_completions(prefix, limit)
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Byte offsets of every occurrence of `pattern` in `text`.
    ///
    /// A pattern that is empty or only whitespace finds nothing.
    pub fn search(&self, text: &str, pattern: &str) -> Vec<usize> {
        if pattern.trim().is_empty() {
            return Vec::new();
        }
        search::search(text, pattern)
    }

    /// A cursor over the matches of `pattern`, positioned on the first.
    pub fn match_cursor(&self, text: &str, pattern: &str) -> MatchCursor {
        MatchCursor::new(self.search(text, pattern))
    }

    // =========================================================================
    // Correction
    // =========================================================================

    /// Correct a single token against the dictionary.
    pub fn correct(&self, token: &str) -> String {
        self.corrector.correct(token, &self.trie)
    }

    /// Ranked repairs for a token, best first, up to `max_suggestions`.
    pub fn suggest(&self, token: &str) -> Vec<String> {
        self.corrector
            .rank(token, &self.trie)
            .into_iter()
            .take(self.options.max_suggestions)
            .map(|s| s.word)
            .collect()
    }

    /// Autocorrect the word just finished in `text`.
    pub fn autocorrect(&self, text: &str, selection: (usize, usize)) -> Option<AutocorrectEdit> {
        editing::autocorrect_at_boundary(text, selection, &self.corrector, &self.trie)
    }

    /// Completions for the token being typed at the end of `text`.
    pub fn completions_for_text(&self, text: &str) -> Vec<String> {
        match editing::completion_prefix(text) {
            Some(prefix) => self.suggest_completions(prefix),
            None => Vec::new(),
        }
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the number of completions returned by `suggest_completions`.
    pub fn set_completion_limit(&mut self, value: usize) {
        self.options.completion_limit = value;
    }

    /// Set the maximum number of suggestions to return.
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.options.max_suggestions = value;
    }

    /// Set whether `contains` also accepts common words.
    pub fn set_common_words_for_membership(&mut self, value: bool) {
        self.options.use_common_words_for_membership = value;
    }

    /// Set whether the corrector consults the common-word list.
    pub fn set_use_common_words(&mut self, value: bool) {
        self.corrector.options_mut().use_common_words = value;
    }

    /// Set the largest distance accepted by the common-word fallback.
    pub fn set_max_fallback_distance(&mut self, value: usize) {
        self.corrector.options_mut().max_fallback_distance = value;
    }

    pub fn set_corrector_options(&mut self, options: CorrectorOptions) {
        *self.corrector.options_mut() = options;
    }

    pub fn options(&self) -> &HandleOptions {
        &self.options
    }
}

impl Lexicon for InkwellHandle {
    fn contains(&self, word: &str) -> bool {
        InkwellHandle::contains(self, word)
    }
}
