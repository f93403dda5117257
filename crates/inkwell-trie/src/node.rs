// Trie node: one level of the prefix tree

use hashbrown::HashMap;

/// A node of the prefix tree.
///
/// Each edge is one character; the path from the root spells a prefix.
/// Children are owned directly by their parent, so the tree has no back
/// references and no cycles.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Create an empty, non-terminal node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a complete word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Mark this node as the end of a word. Returns `true` if it was not
    /// already marked.
    #[inline]
    pub(crate) fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.terminal, true)
    }

    /// Child reached through `ch`, if any.
    #[inline]
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Child reached through `ch`, created on first use.
    #[inline]
    pub(crate) fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        self.children.entry(ch).or_default()
    }

    /// Iterate over `(edge, child)` pairs. The order is unspecified but
    /// stable as long as the node is not modified.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Follow `path` character by character from this node.
    pub fn descend<I>(&self, path: I) -> Option<&TrieNode>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self;
        for ch in path {
            node = node.child(ch)?;
        }
        Some(node)
    }
}
