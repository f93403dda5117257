// Dictionary index: a lowercase prefix tree with completion enumeration

use inkwell_core::Lexicon;
use inkwell_core::character::fold_lowercase;

use crate::node::TrieNode;

/// A prefix tree over lowercase words.
///
/// Every inserted word corresponds to exactly one path from the root to a
/// terminal node. Intermediate nodes without the terminal mark are valid
/// prefixes but not words. All operations lowercase their input first and
/// treat every other character (digits, apostrophes, spaces) as an ordinary
/// path segment.
///
/// The tree only grows: there is no removal. The intended life cycle is a
/// build phase (bulk insertion) followed by read-only queries; `&Trie` is
/// `Sync`, so queries may run from several threads once insertion is done.
/// See [`SharedDictionary`](crate::SharedDictionary) when a writer has to
/// coexist with readers.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node (the empty prefix).
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Insert a word, lowercasing it first.
    ///
    /// Inserting the empty string marks the root as terminal; `contains("")`
    /// still answers `false`, but an empty-prefix completion will list `""`.
    ///
    /// Returns `true` if the word was not present before.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = fold_lowercase(word);
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }
        let added = node.mark_terminal();
        if added {
            self.len += 1;
        }
        added
    }

    /// Exact membership test, case-insensitive.
    ///
    /// The empty string is never a member.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.find_node(word).is_some_and(TrieNode::is_terminal)
    }

    /// Whether any inserted word starts with `prefix` (case-insensitive).
    ///
    /// Every word starts with the empty prefix, so `""` matches exactly
    /// when the trie is non-empty.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }
        self.find_node(prefix).is_some()
    }

    /// Collect up to `limit` words starting with `prefix`.
    ///
    /// The prefix is lowercased, so every result is an inserted word. Words
    /// are produced by a depth-first walk below the prefix node; a word
    /// equal to the prefix comes first, and sibling order follows the
    /// node's child map. The walk stops as soon as `limit` words have been
    /// found. An unknown prefix yields an empty vector.
    pub fn suggest_completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }
        let results: Vec<String> = self.completions(prefix).take(limit).collect();
        log::trace!(
            "completions for {prefix:?}: {} (limit {limit})",
            results.len()
        );
        results
    }

    /// Lazily enumerate every word starting with `prefix`.
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        let prefix = fold_lowercase(prefix);
        let stack = match self.root.descend(prefix.chars()) {
            Some(node) => vec![(node, prefix)],
            None => Vec::new(),
        };
        Completions { stack }
    }

    /// Enumerate every word in the trie.
    pub fn words(&self) -> Completions<'_> {
        Completions {
            stack: vec![(&self.root, String::new())],
        }
    }

    fn find_node(&self, word: &str) -> Option<&TrieNode> {
        let word = fold_lowercase(word);
        self.root.descend(word.chars())
    }
}

impl Lexicon for Trie {
    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

/// Depth-first, pre-order iterator over the words below one node.
///
/// Holds an explicit stack of `(node, spelled prefix)` pairs so that the
/// walk can be abandoned at any point without visiting the rest of the
/// subtree.
pub struct Completions<'a> {
    stack: Vec<(&'a TrieNode, String)>,
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, path)) = self.stack.pop() {
            for (ch, child) in node.children() {
                let mut child_path = String::with_capacity(path.len() + ch.len_utf8());
                child_path.push_str(&path);
                child_path.push(ch);
                self.stack.push((child, child_path));
            }
            if node.is_terminal() {
                return Some(path);
            }
        }
        None
    }
}
