//! Shared building blocks for inkwell editing assistance.
//!
//! - [`case`] -- case pattern detection and case-style restoration
//! - [`character`] -- simple case mapping, lowercase folding, word boundaries
//! - [`distance`] -- Levenshtein edit distance
//! - [`lexicon`] -- the `Lexicon` membership predicate

pub mod case;
pub mod character;
pub mod distance;
pub mod lexicon;

pub use lexicon::{EmptyLexicon, FnLexicon, Lexicon};
