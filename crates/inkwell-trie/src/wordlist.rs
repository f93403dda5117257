// Word-list source: plain text, one word per line

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::WordListError;
use crate::trie::Trie;

/// Marks a comment line in a word list.
const COMMENT_PREFIX: char = '#';

/// Split a word list into entries.
///
/// Entries are separated by line breaks (`\n` or `\r\n`) and trimmed;
/// blank lines and lines starting with `#` are skipped. The trie treats
/// every character literally, so stripping has to happen here.
pub fn parse_word_list(data: &str) -> impl Iterator<Item = &str> {
    data.lines().filter_map(parse_entry)
}

fn parse_entry(line: &str) -> Option<&str> {
    let entry = line.trim();
    if entry.is_empty() || entry.starts_with(COMMENT_PREFIX) {
        None
    } else {
        Some(entry)
    }
}

/// Build a trie from a buffered reader over a word list.
pub fn read_word_list<R: BufRead>(reader: R) -> Result<Trie, WordListError> {
    let mut trie = Trie::new();
    let mut entries = 0usize;
    for line in reader.lines() {
        let line = line?;
        if let Some(entry) = parse_entry(&line) {
            trie.insert(entry);
            entries += 1;
        }
    }
    log::debug!("read {entries} word-list entries ({} distinct)", trie.len());
    Ok(trie)
}

impl Trie {
    /// Insert every entry of an in-memory word list.
    ///
    /// Returns the number of entries read (duplicates included).
    pub fn load_word_list(&mut self, data: &str) -> usize {
        let mut entries = 0;
        for entry in parse_word_list(data) {
            self.insert(entry);
            entries += 1;
        }
        entries
    }

    /// Build a trie from a word-list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Trie, WordListError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading word list from {}", path.display());
        read_word_list(BufReader::new(file))
    }
}
