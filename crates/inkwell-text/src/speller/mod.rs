// Word membership for the corrector
//
// The corrector never depends on a concrete dictionary: it is handed a
// `Lexicon` (normally the trie) and ORs it with the built-in common-word
// list.

pub mod common;

pub use common::{COMMON_WORDS, CommonWords, WithCommonWords, is_common};
pub use inkwell_core::lexicon::{EmptyLexicon, FnLexicon, Lexicon};
