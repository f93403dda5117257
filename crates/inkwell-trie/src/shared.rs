// Lock-guarded dictionary for concurrent readers with a writer

use inkwell_core::Lexicon;
use parking_lot::RwLock;

use crate::trie::Trie;

/// A [`Trie`] behind a read-write lock.
///
/// The trie itself does no locking. Use this wrapper when insertions may
/// interleave with `contains` / `suggest_completions` calls from other
/// threads; queries take the shared lock, insertions the exclusive one.
#[derive(Debug, Default)]
pub struct SharedDictionary {
    inner: RwLock<Trie>,
}

impl SharedDictionary {
    /// Create an empty shared dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already built trie.
    pub fn from_trie(trie: Trie) -> Self {
        Self {
            inner: RwLock::new(trie),
        }
    }

    /// Insert a word under the write lock.
    pub fn insert(&self, word: &str) -> bool {
        self.inner.write().insert(word)
    }

    /// Insert many words while holding the write lock once.
    pub fn extend<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().extend(words);
    }

    /// Membership test under the read lock.
    pub fn contains(&self, word: &str) -> bool {
        self.inner.read().contains(word)
    }

    /// Completion query under the read lock.
    pub fn suggest_completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.inner.read().suggest_completions(prefix, limit)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Unwrap the inner trie.
    pub fn into_inner(self) -> Trie {
        self.inner.into_inner()
    }
}

impl From<Trie> for SharedDictionary {
    fn from(trie: Trie) -> Self {
        Self::from_trie(trie)
    }
}

impl Lexicon for SharedDictionary {
    fn contains(&self, word: &str) -> bool {
        SharedDictionary::contains(self, word)
    }
}
