// Per-call candidate set: deduplicated repair strings

use std::collections::HashSet;

/// The repair candidates generated for one token.
///
/// Set semantics: a string produced by several generators is stored once.
/// Empty strings (e.g. deleting the only character of a one-letter token)
/// are never stored. Iteration order is unspecified; callers that need a
/// stable choice must order the survivors themselves.
#[derive(Debug, Default)]
pub struct CandidateSet {
    seen: HashSet<String>,
}

impl CandidateSet {
    /// Create an empty candidate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set sized for a token of `word_len` characters.
    ///
    /// Insertion and substitution dominate: roughly
    /// `(2 * word_len + 1) * alphabet_len` candidates.
    pub fn with_capacity_for(word_len: usize, alphabet_len: usize) -> Self {
        Self {
            seen: HashSet::with_capacity((2 * word_len + 1) * alphabet_len + word_len),
        }
    }

    /// Add a candidate spelled by `chars`. Returns `true` if it was new.
    pub fn insert_chars(&mut self, chars: &[char]) -> bool {
        if chars.is_empty() {
            return false;
        }
        self.seen.insert(chars.iter().collect())
    }

    /// Add a candidate string. Returns `true` if it was new.
    pub fn insert(&mut self, candidate: String) -> bool {
        if candidate.is_empty() {
            return false;
        }
        self.seen.insert(candidate)
    }

    /// Whether `candidate` has been generated.
    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no candidate has been generated.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Iterate over the candidates in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.seen.iter().map(String::as_str)
    }
}

impl IntoIterator for CandidateSet {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.seen.into_iter()
    }
}
