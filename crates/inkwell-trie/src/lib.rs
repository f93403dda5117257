//! Prefix-tree dictionary index for inkwell.
//!
//! # Architecture
//!
//! - [`node`] -- trie node: character-keyed owned children plus a terminal mark
//! - [`trie`] -- insertion, membership and bounded completion enumeration
//! - [`wordlist`] -- loading a plain-text word list into a trie
//! - [`shared`] -- `RwLock` wrapper for a writer coexisting with readers

use std::path::PathBuf;

pub mod node;
pub mod shared;
pub mod trie;
pub mod wordlist;

pub use node::TrieNode;
pub use shared::SharedDictionary;
pub use trie::{Completions, Trie};
pub use wordlist::{parse_word_list, read_word_list};

/// Error type for word-list loading.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to open word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read word list: {0}")]
    Read(#[from] std::io::Error),
}
