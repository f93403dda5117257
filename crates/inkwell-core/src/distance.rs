// Levenshtein edit distance

/// Edit distance between two character slices.
///
/// Insertion, deletion and substitution each cost 1; transposition is not
/// an operation (a swapped pair costs 2). Uses the row-by-row dynamic
/// programming table, keeping only the previous row.
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Edit distance between two strings, counted in characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: &[(&str, &str, usize)] = &[
        ("", "", 0),
        ("", "abc", 3),
        ("kitten", "sitting", 3),
        ("recieve", "receive", 2),
        ("freee", "free", 1),
        ("flaw", "lawn", 2),
        ("hello", "helol", 2),
        ("\u{00E4}iti", "aiti", 1),
    ];

    #[test]
    fn known_distances() {
        for &(a, b, d) in PAIRS {
            assert_eq!(levenshtein(a, b), d, "levenshtein({a:?}, {b:?})");
        }
    }

    #[test]
    fn distance_is_symmetric() {
        for &(a, b, _) in PAIRS {
            assert_eq!(levenshtein(a, b), levenshtein(b, a), "pair ({a:?}, {b:?})");
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        for &(a, b, _) in PAIRS {
            assert_eq!(levenshtein(a, a), 0);
            assert_eq!(levenshtein(b, b), 0);
        }
    }

    #[test]
    fn transposition_costs_two() {
        assert_eq!(levenshtein("ab", "ba"), 2);
    }
}
