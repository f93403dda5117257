// Scoring and ranking of candidate hits

use std::cmp::Ordering;

use inkwell_core::distance::levenshtein_chars;

/// Priority units per edit. Scores are kept in quarter units so that the
/// 0.25 penalty for words outside the common list stays exact.
pub const UNITS_PER_EDIT: u32 = 4;

/// Penalty (one quarter edit) for a hit not on the common-word list.
pub const UNCOMMON_PENALTY: u32 = 1;

/// A scored repair for a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The suggested word (lowercase until case is restored).
    pub word: String,
    /// Edit distance from the lowercased token.
    pub distance: usize,
    /// Ranking priority in quarter edits; lower is better.
    pub priority: u32,
}

impl Suggestion {
    /// Score `hit` against the lowercased `token`.
    pub fn score(token: &[char], hit: String, common: bool) -> Self {
        let hit_chars: Vec<char> = hit.chars().collect();
        let distance = levenshtein_chars(token, &hit_chars);
        let penalty = if common { 0 } else { UNCOMMON_PENALTY };
        let priority = (distance as u32)
            .saturating_mul(UNITS_PER_EDIT)
            .saturating_add(penalty);
        Self {
            word: hit,
            distance,
            priority,
        }
    }

    /// The score as a fractional number of edits (distance + 0.25 penalty).
    pub fn score_value(&self) -> f32 {
        self.priority as f32 / UNITS_PER_EDIT as f32
    }
}

/// Best-first ordering: lower priority, then shorter word, then
/// lexicographically smaller word.
///
/// The tie-breaks only matter between equal scores. They make the choice
/// independent of candidate-set iteration order, which is randomized per
/// process.
pub fn rank_order(a: &Suggestion, b: &Suggestion) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.word.chars().count().cmp(&b.word.chars().count()))
        .then_with(|| a.word.cmp(&b.word))
}

/// Sort suggestions best first.
pub fn sort_suggestions(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(rank_order);
}
