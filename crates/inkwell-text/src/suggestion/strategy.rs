// Correction strategy: composes generators into one candidate pass

use inkwell_core::character::ALPHABET;

use super::candidates::CandidateSet;
use super::generators::{
    CandidateGenerator, Deletion, Insertion, RepeatedRuns, Substitution, Transposition,
};

/// An ordered list of generators that together build the candidate set
/// for a token.
pub struct CorrectionStrategy {
    generators: Vec<Box<dyn CandidateGenerator + Send + Sync>>,
    /// Largest character set used by any generator, for capacity estimates.
    alphabet_len: usize,
}

impl CorrectionStrategy {
    /// Create a strategy from explicit generators.
    pub fn new(generators: Vec<Box<dyn CandidateGenerator + Send + Sync>>) -> Self {
        Self {
            generators,
            alphabet_len: ALPHABET.len(),
        }
    }

    /// Number of generators in the strategy.
    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    /// Run every generator over `word` and return the union of their output.
    pub fn candidates(&self, word: &[char]) -> CandidateSet {
        let mut set = CandidateSet::with_capacity_for(word.len(), self.alphabet_len);
        for generator in &self.generators {
            generator.generate(word, &mut set);
        }
        set
    }
}

impl Default for CorrectionStrategy {
    fn default() -> Self {
        default_strategy()
    }
}

/// Repeated-letter collapse, single deletion, insertion and substitution
/// over `a..=z`, and adjacent transposition.
pub fn default_strategy() -> CorrectionStrategy {
    CorrectionStrategy::new(vec![
        Box::new(RepeatedRuns),
        Box::new(Deletion),
        Box::new(Insertion::default()),
        Box::new(Substitution::default()),
        Box::new(Transposition),
    ])
}

/// The four classic single-edit generators: repeated-letter collapse,
/// deletion, insertion and substitution. Without transposition a swapped
/// pair such as "ie" / "ei" is two edits away and is not generated.
pub fn single_edit_strategy() -> CorrectionStrategy {
    CorrectionStrategy::new(vec![
        Box::new(RepeatedRuns),
        Box::new(Deletion),
        Box::new(Insertion::default()),
        Box::new(Substitution::default()),
    ])
}
