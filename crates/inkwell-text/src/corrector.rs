// Approximate spelling correction for a single token
//
// One call runs: lowercase -> membership short-circuit -> candidate
// generation -> lexicon filter -> scoring -> (fallback scan of the common
// list) -> case restoration. Nothing is kept between calls.

use inkwell_core::Lexicon;
use inkwell_core::case::restore_case;
use inkwell_core::character::fold_lowercase;
use inkwell_core::distance::levenshtein_chars;

use crate::speller::common::{COMMON_WORDS, is_common};
use crate::suggestion::scoring::{Suggestion, rank_order, sort_suggestions};
use crate::suggestion::strategy::{CorrectionStrategy, default_strategy};

/// Corrector options.
#[derive(Debug, Clone, Copy)]
pub struct CorrectorOptions {
    /// Largest edit distance accepted by the common-word fallback scan.
    /// Default: 2.
    pub max_fallback_distance: usize,
    /// Consult the built-in common-word list (membership, scoring bias and
    /// fallback scan). Default: true.
    pub use_common_words: bool,
    /// Tokens longer than this many characters are still corrected, but a
    /// warning is logged: the candidate count grows with
    /// `length * alphabet` and each candidate costs a distance computation.
    /// Default: 24.
    pub long_token_warning: usize,
}

impl Default for CorrectorOptions {
    fn default() -> Self {
        Self {
            max_fallback_distance: 2,
            use_common_words: true,
            long_token_warning: 24,
        }
    }
}

/// Proposes the most plausible known word for a token.
///
/// Membership is answered by a caller-supplied [`Lexicon`] OR-ed with the
/// built-in common-word list, so the corrector works against any
/// dictionary (or none). It never fails: an empty, known or hopeless token
/// comes back unchanged.
pub struct Corrector {
    strategy: CorrectionStrategy,
    options: CorrectorOptions,
}

impl Default for Corrector {
    fn default() -> Self {
        Self::new()
    }
}

impl Corrector {
    /// Create a corrector with the default strategy and options.
    pub fn new() -> Self {
        Self::with_options(CorrectorOptions::default())
    }

    /// Create a corrector with the default strategy and the given options.
    pub fn with_options(options: CorrectorOptions) -> Self {
        Self {
            strategy: default_strategy(),
            options,
        }
    }

    /// Create a corrector with a custom candidate strategy.
    pub fn with_strategy(strategy: CorrectionStrategy, options: CorrectorOptions) -> Self {
        Self { strategy, options }
    }

    pub fn options(&self) -> &CorrectorOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut CorrectorOptions {
        &mut self.options
    }

    fn is_common(&self, word: &str) -> bool {
        self.options.use_common_words && is_common(word)
    }

    fn is_known(&self, word: &str, lexicon: &dyn Lexicon) -> bool {
        lexicon.contains(word) || self.is_common(word)
    }

    /// Whether `token` (any case) is already a known word.
    pub fn is_known_word(&self, token: &str, lexicon: &dyn Lexicon) -> bool {
        !token.is_empty() && self.is_known(&fold_lowercase(token), lexicon)
    }

    /// Correct `token`, returning it unchanged when it is already known or
    /// nothing plausible is found.
    ///
    /// The replacement takes over the token's capitalization style
    /// ("FREEE" -> "FREE", "Recieve" -> "Receive").
    pub fn correct(&self, token: &str, lexicon: &dyn Lexicon) -> String {
        if token.is_empty() {
            return String::new();
        }
        let lower = fold_lowercase(token);
        if self.is_known(&lower, lexicon) {
            return token.to_string();
        }

        let word: Vec<char> = lower.chars().collect();
        let replacement = match self.best_hit(&word, lexicon) {
            Some(hit) => {
                log::debug!(
                    "correcting {token:?} -> {:?} (distance {}, priority {})",
                    hit.word,
                    hit.distance,
                    hit.priority
                );
                hit.word
            }
            None => match self.fallback(&word) {
                Some(common) => {
                    log::debug!("correcting {token:?} -> {common:?} (common-word fallback)");
                    common.to_string()
                }
                None => {
                    log::debug!("no correction for {token:?}");
                    return token.to_string();
                }
            },
        };

        restore_case(token, &replacement)
    }

    /// Correct `token` against the common-word list alone.
    pub fn correct_common(&self, token: &str) -> String {
        self.correct(token, &inkwell_core::EmptyLexicon)
    }

    /// Every single-edit (or run-collapse) repair of `token` that is a
    /// known word, best first, with the token's case style applied.
    ///
    /// Empty and known tokens have no repairs. The common-word fallback
    /// scan is not part of the ranking.
    pub fn rank(&self, token: &str, lexicon: &dyn Lexicon) -> Vec<Suggestion> {
        if token.is_empty() {
            return Vec::new();
        }
        let lower = fold_lowercase(token);
        if self.is_known(&lower, lexicon) {
            return Vec::new();
        }
        let word: Vec<char> = lower.chars().collect();
        let mut hits = self.scored_hits(&word, lexicon);
        sort_suggestions(&mut hits);
        for hit in &mut hits {
            hit.word = restore_case(token, &hit.word);
        }
        hits
    }

    /// Generate, filter and score the repairs of a lowercased token.
    fn scored_hits(&self, word: &[char], lexicon: &dyn Lexicon) -> Vec<Suggestion> {
        if word.len() > self.options.long_token_warning {
            log::warn!(
                "correcting a {}-character token; candidate generation grows with token length",
                word.len()
            );
        }
        let candidates = self.strategy.candidates(word);
        let hits: Vec<Suggestion> = candidates
            .into_iter()
            .filter(|c| self.is_known(c, lexicon))
            .map(|c| {
                let common = self.is_common(&c);
                Suggestion::score(word, c, common)
            })
            .collect();
        log::trace!("{} known repairs", hits.len());
        hits
    }

    fn best_hit(&self, word: &[char], lexicon: &dyn Lexicon) -> Option<Suggestion> {
        self.scored_hits(word, lexicon)
            .into_iter()
            .min_by(rank_order)
    }

    /// Scan the common-word list in order for the closest word; the first
    /// word at the minimum distance wins. Accepts it only within
    /// `max_fallback_distance`.
    fn fallback(&self, word: &[char]) -> Option<&'static str> {
        if !self.options.use_common_words {
            return None;
        }
        let mut best: Option<(&'static str, usize)> = None;
        for &common in COMMON_WORDS {
            let candidate: Vec<char> = common.chars().collect();
            let d = levenshtein_chars(word, &candidate);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((common, d));
            }
        }
        best.filter(|&(_, d)| d <= self.options.max_fallback_distance)
            .map(|(w, _)| w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkwell_core::{EmptyLexicon, FnLexicon};
    use crate::suggestion::strategy::single_edit_strategy;
    use inkwell_trie::Trie;

    fn trie(words: &[&str]) -> Trie {
        words.iter().collect()
    }

    // -- short-circuit --

    #[test]
    fn empty_token_is_returned_unchanged() {
        assert_eq!(Corrector::new().correct("", &EmptyLexicon), "");
    }

    #[test]
    fn known_words_are_returned_exactly() {
        let c = Corrector::new();
        let dict = trie(&["banana", "receive"]);
        for w in ["banana", "Banana", "BANANA", "bAnAnA", "hello", "HELLO", "Rhythm"] {
            assert_eq!(c.correct(w, &dict), w);
        }
    }

    // -- candidate hits --

    #[test]
    fn transposed_letters_reach_receive() {
        let c = Corrector::new();
        let dict = trie(&["receive"]);
        assert_eq!(c.correct("recieve", &dict), "receive");
        assert_eq!(c.correct("Recieve", &dict), "Receive");
    }

    #[test]
    fn triple_run_collapses_and_keeps_all_caps() {
        let c = Corrector::new();
        let dict = trie(&["free"]);
        assert_eq!(c.correct("FREEE", &dict), "FREE");
        assert_eq!(c.correct("freeee", &dict), "free");
    }

    #[test]
    fn all_caps_correction_expands_sharp_s() {
        let c = Corrector::new();
        let dict = trie(&["stra\u{00DF}e"]);
        assert_eq!(c.correct("STRA\u{1E9E}EE", &dict), "STRASSE");
    }

    #[test]
    fn lexicon_hit_by_deletion() {
        let c = Corrector::new();
        let dict = trie(&["banana"]);
        assert_eq!(c.correct("bananna", &dict), "banana");
    }

    #[test]
    fn lexicon_hit_by_insertion_and_substitution() {
        let c = Corrector::new();
        let dict = trie(&["planet", "orange"]);
        assert_eq!(c.correct("plnet", &dict), "planet");
        assert_eq!(c.correct("orangw", &dict), "orange");
    }

    #[test]
    fn common_word_preferred_at_equal_distance() {
        let c = Corrector::new();
        let dict = trie(&["lover"]);
        // "love" (common) and "lover" (lexicon only) are both one edit away.
        assert_eq!(c.correct("lovr", &dict), "love");
    }

    #[test]
    fn equal_scores_resolve_deterministically() {
        let c = Corrector::new();
        let dict = trie(&["cat", "bat"]);
        for _ in 0..5 {
            assert_eq!(c.correct("bct", &dict), "bat");
        }
    }

    #[test]
    fn closure_lexicon_backs_the_corrector() {
        let c = Corrector::new();
        let lex = FnLexicon(|w: &str| w == "world");
        assert_eq!(c.correct("wrld", &lex), "world");
        assert_eq!(c.correct("wrold", &lex), "world");
    }

    // -- fallback --

    #[test]
    fn fallback_finds_common_word_within_two() {
        let c = Corrector::new();
        // two substitutions away from "hello": no single repair reaches it
        assert_eq!(c.correct_common("hallp"), "hello");
        assert_eq!(c.correct_common("Hallp"), "Hello");
    }

    #[test]
    fn fallback_keeps_first_word_at_minimum_distance() {
        let c = Corrector::new();
        // "amazing" and "amazed" are both two edits from "amazi"; the
        // earlier entry wins.
        assert_eq!(c.correct_common("amazi"), "amazing");
    }

    #[test]
    fn fallback_rejects_distant_tokens() {
        let c = Corrector::new();
        assert_eq!(c.correct_common("xyzzy"), "xyzzy");
        assert_eq!(c.correct_common("1234"), "1234");
    }

    #[test]
    fn fallback_distance_is_configurable() {
        let c = Corrector::with_options(CorrectorOptions {
            max_fallback_distance: 1,
            ..CorrectorOptions::default()
        });
        assert_eq!(c.correct_common("hallp"), "hallp");
    }

    #[test]
    fn disabling_common_words() {
        let c = Corrector::with_options(CorrectorOptions {
            use_common_words: false,
            ..CorrectorOptions::default()
        });
        assert_eq!(c.correct("recieve", &EmptyLexicon), "recieve");
        assert!(!c.is_known_word("hello", &EmptyLexicon));
    }

    #[test]
    fn single_edit_strategy_misses_swapped_letters() {
        let options = CorrectorOptions {
            use_common_words: false,
            ..CorrectorOptions::default()
        };
        let dict = trie(&["receive", "banana"]);
        let c = Corrector::with_strategy(single_edit_strategy(), options);
        assert_eq!(c.correct("recieve", &dict), "recieve");
        assert_eq!(c.correct("bananna", &dict), "banana");
        assert_eq!(Corrector::with_options(options).correct("recieve", &dict), "receive");
    }

    // -- rank --

    #[test]
    fn rank_lists_hits_best_first() {
        let c = Corrector::new();
        let dict = trie(&["cat", "bat", "bet", "bc"]);
        let words: Vec<String> = c.rank("Bct", &dict).into_iter().map(|s| s.word).collect();
        // "cat" is two edits away and never generated
        assert_eq!(words, vec!["Bc", "Bat", "Bet"]);
    }

    #[test]
    fn rank_is_empty_for_known_tokens() {
        let c = Corrector::new();
        assert!(c.rank("hello", &EmptyLexicon).is_empty());
        assert!(c.rank("", &EmptyLexicon).is_empty());
    }

    #[test]
    fn long_tokens_are_still_corrected() {
        let c = Corrector::with_options(CorrectorOptions {
            long_token_warning: 10,
            ..CorrectorOptions::default()
        });
        let dict = trie(&["internationalization"]);
        assert_eq!(
            c.correct("internationalizatoin", &dict),
            "internationalization"
        );
        assert_eq!(
            c.correct("internationalizaton", &dict),
            "internationalization"
        );
    }
}
