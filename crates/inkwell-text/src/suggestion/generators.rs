// Individual candidate generators: each applies one class of edit
// operation to a lowercased token and records the resulting strings.

use inkwell_core::character::ALPHABET;

use super::candidates::CandidateSet;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for individual candidate generators.
///
/// Generators only produce strings; filtering against a lexicon and scoring
/// happen afterwards on the whole set.
pub trait CandidateGenerator {
    /// Add every variant of `word` this generator knows about to `out`.
    fn generate(&self, word: &[char], out: &mut CandidateSet);
}

// =========================================================================
// Individual generators
// =========================================================================

// ---------------------------------------------------------------------------
// RepeatedRuns
// ---------------------------------------------------------------------------

/// A maximal run of one repeated character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub ch: char,
    pub len: usize,
}

/// Split `word` into maximal runs of a repeated character.
pub fn runs(word: &[char]) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::new();
    for &ch in word {
        match out.last_mut() {
            Some(run) if run.ch == ch => run.len += 1,
            _ => out.push(Run { ch, len: 1 }),
        }
    }
    out
}

/// Collapse repeated runs to one or two occurrences.
///
/// Every run longer than one branches between a single and a double
/// letter; runs of one are kept as they are. All combinations across runs
/// are produced, so "fooolll" yields "fol", "foll", "fool" and "fooll".
/// The enumeration is bounded by `2^r` for `r` repeated runs, which stays
/// small for real words. Targets stuck keys ("freee") without losing
/// legitimate doubles ("committee").
pub struct RepeatedRuns;

impl RepeatedRuns {
    fn expand(runs: &[Run], acc: &mut Vec<char>, out: &mut CandidateSet) {
        let Some((run, rest)) = runs.split_first() else {
            out.insert_chars(acc);
            return;
        };
        let mark = acc.len();
        acc.push(run.ch);
        Self::expand(rest, acc, out);
        if run.len > 1 {
            acc.push(run.ch);
            Self::expand(rest, acc, out);
        }
        acc.truncate(mark);
    }
}

impl CandidateGenerator for RepeatedRuns {
    fn generate(&self, word: &[char], out: &mut CandidateSet) {
        let runs = runs(word);
        let mut acc = Vec::with_capacity(word.len());
        Self::expand(&runs, &mut acc, out);
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Remove exactly one character, at every position.
///
/// Repairs an extra keystroke.
pub struct Deletion;

impl CandidateGenerator for Deletion {
    fn generate(&self, word: &[char], out: &mut CandidateSet) {
        let mut buffer = Vec::with_capacity(word.len());
        for i in 0..word.len() {
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            out.insert_chars(&buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert each character from a set at every position, both ends included.
///
/// Repairs a missed keystroke.
pub struct Insertion {
    /// Characters to try inserting.
    pub characters: Vec<char>,
}

impl Default for Insertion {
    fn default() -> Self {
        Self {
            characters: ALPHABET.to_vec(),
        }
    }
}

impl CandidateGenerator for Insertion {
    fn generate(&self, word: &[char], out: &mut CandidateSet) {
        let mut buffer = Vec::with_capacity(word.len() + 1);
        for pos in 0..=word.len() {
            for &ins in &self.characters {
                buffer.clear();
                buffer.extend_from_slice(&word[..pos]);
                buffer.push(ins);
                buffer.extend_from_slice(&word[pos..]);
                out.insert_chars(&buffer);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace each character with every different character from a set.
///
/// Repairs a wrong keystroke.
pub struct Substitution {
    /// Characters to substitute in.
    pub characters: Vec<char>,
}

impl Default for Substitution {
    fn default() -> Self {
        Self {
            characters: ALPHABET.to_vec(),
        }
    }
}

impl CandidateGenerator for Substitution {
    fn generate(&self, word: &[char], out: &mut CandidateSet) {
        let mut buffer = word.to_vec();
        for i in 0..word.len() {
            for &rep in &self.characters {
                if rep == word[i] {
                    continue;
                }
                buffer[i] = rep;
                out.insert_chars(&buffer);
            }
            buffer[i] = word[i];
        }
    }
}

// ---------------------------------------------------------------------------
// Transposition
// ---------------------------------------------------------------------------

/// Swap each pair of adjacent, differing characters.
///
/// Repairs two keys hit in the wrong order ("recieve"). Such a repair is
/// two edits away under Levenshtein distance, so it only wins when no
/// single-edit repair is known.
pub struct Transposition;

impl CandidateGenerator for Transposition {
    fn generate(&self, word: &[char], out: &mut CandidateSet) {
        let mut buffer = word.to_vec();
        for i in 1..word.len() {
            if word[i - 1] == word[i] {
                continue;
            }
            buffer.swap(i - 1, i);
            out.insert_chars(&buffer);
            buffer.swap(i - 1, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn generate(generator: &dyn CandidateGenerator, word: &str) -> Vec<String> {
        let mut set = CandidateSet::new();
        generator.generate(&chars(word), &mut set);
        let mut out: Vec<String> = set.into_iter().collect();
        out.sort();
        out
    }

    // -- runs --

    #[test]
    fn runs_split_maximal_segments() {
        let r = runs(&chars("freee"));
        assert_eq!(
            r,
            vec![
                Run { ch: 'f', len: 1 },
                Run { ch: 'r', len: 1 },
                Run { ch: 'e', len: 3 },
            ]
        );
        assert!(runs(&[]).is_empty());
    }

    // -- RepeatedRuns --

    #[test]
    fn repeated_runs_collapse_to_one_or_two() {
        assert_eq!(generate(&RepeatedRuns, "freee"), vec!["fre", "free"]);
    }

    #[test]
    fn repeated_runs_enumerate_all_combinations() {
        assert_eq!(
            generate(&RepeatedRuns, "fooolll"),
            vec!["fol", "foll", "fool", "fooll"]
        );
    }

    #[test]
    fn single_runs_do_not_branch() {
        assert_eq!(generate(&RepeatedRuns, "word"), vec!["word"]);
    }

    #[test]
    fn legitimate_doubles_survive() {
        let out = generate(&RepeatedRuns, "committee");
        assert!(out.contains(&"committee".to_string()));
        assert!(out.contains(&"comite".to_string()));
        assert_eq!(out.len(), 8);
    }

    // -- Deletion --

    #[test]
    fn deletion_removes_each_position() {
        assert_eq!(generate(&Deletion, "abc"), vec!["ab", "ac", "bc"]);
    }

    #[test]
    fn deletion_of_single_char_is_dropped() {
        assert!(generate(&Deletion, "a").is_empty());
    }

    // -- Insertion --

    #[test]
    fn insertion_covers_every_position_and_letter() {
        let out = generate(&Insertion::default(), "ab");
        assert!(out.contains(&"xab".to_string()));
        assert!(out.contains(&"axb".to_string()));
        assert!(out.contains(&"abx".to_string()));
        // 3 positions * 26 letters, minus duplicates such as "aab" (pos 0 or 1)
        // and "abb" (pos 1 or 2).
        assert_eq!(out.len(), 3 * 26 - 2);
    }

    #[test]
    fn insertion_into_empty_word() {
        assert_eq!(generate(&Insertion::default(), "").len(), 26);
    }

    // -- Substitution --

    #[test]
    fn substitution_skips_the_original_letter() {
        let out = generate(&Substitution::default(), "ab");
        assert_eq!(out.len(), 2 * 25);
        assert!(!out.contains(&"ab".to_string()));
        assert!(out.contains(&"zb".to_string()));
        assert!(out.contains(&"az".to_string()));
    }

    #[test]
    fn substitution_with_custom_characters() {
        let sub = Substitution {
            characters: vec!['x', 'y'],
        };
        assert_eq!(generate(&sub, "ax"), vec!["ay", "xx", "yx"]);
    }

    // -- Transposition --

    #[test]
    fn transposition_swaps_adjacent_pairs() {
        assert_eq!(generate(&Transposition, "abc"), vec!["acb", "bac"]);
        let out = generate(&Transposition, "recieve");
        assert!(out.contains(&"receive".to_string()));
    }

    #[test]
    fn transposition_skips_equal_neighbours() {
        assert_eq!(generate(&Transposition, "aab"), vec!["aba"]);
        assert!(generate(&Transposition, "a").is_empty());
    }
}
