// Linear-time exact substring search

use super::failure::build_failure_table;

/// Every start offset of `pattern` in `text`, ascending, overlaps included.
///
/// An empty pattern matches nowhere. After a full match, or on a mismatch
/// inside a partial match, the matched length falls back through the
/// failure table instead of rescanning text, so the scan is
/// O(|text| + |pattern|).
pub fn find_all<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }
    let table = build_failure_table(pattern);
    let mut result = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == pattern.len() {
                result.push(i - j);
                j = table[j - 1];
            }
        } else if j != 0 {
            j = table[j - 1];
        } else {
            i += 1;
        }
    }

    result
}

/// Byte offsets of every occurrence of `pattern` in `text`.
///
/// Matching runs over the UTF-8 bytes. A pattern starts with a lead byte,
/// and lead bytes never occur as continuation bytes, so every match starts
/// on a char boundary and every offset can be used to slice `text`.
pub fn search(text: &str, pattern: &str) -> Vec<usize> {
    find_all(text.as_bytes(), pattern.as_bytes())
}

/// Char offsets of every occurrence of `pattern` in `text`.
pub fn search_chars(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    find_all(&text, &pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Quadratic reference used to cross-check the linear scan.
    fn naive(text: &str, pattern: &str) -> Vec<usize> {
        if pattern.is_empty() {
            return Vec::new();
        }
        let (t, p) = (text.as_bytes(), pattern.as_bytes());
        (0..t.len())
            .filter(|&i| t[i..].starts_with(p))
            .collect()
    }

    #[test]
    fn overlapping_matches() {
        assert_eq!(search("aaa", "aa"), vec![0, 1]);
        assert_eq!(search("aaaa", "aa"), vec![0, 1, 2]);
        assert_eq!(search("abababa", "aba"), vec![0, 2, 4]);
    }

    #[test]
    fn empty_pattern_matches_nowhere() {
        assert!(search("anything", "").is_empty());
        assert!(search("", "").is_empty());
    }

    #[test]
    fn no_match() {
        assert!(search("hello world", "xyz").is_empty());
        assert!(search("ab", "abc").is_empty());
        assert!(search("", "a").is_empty());
    }

    #[test]
    fn whole_text_match() {
        assert_eq!(search("receive", "receive"), vec![0]);
    }

    #[test]
    fn offsets_are_strictly_ascending() {
        let m = search("the cat sat on the mat with the hat", "the");
        assert_eq!(m, vec![0, 15, 28]);
        assert!(m.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn is_case_sensitive() {
        assert_eq!(search("Ban ban BAN", "ban"), vec![4]);
    }

    #[test]
    fn agrees_with_naive_scan() {
        let cases = [
            ("aabaaabaaab", "aabaaab"),
            ("abacabadabacaba", "aba"),
            ("mississippi", "issi"),
            ("mississippi", "ss"),
            ("aaaaaaaaab", "aaab"),
            ("xyxyxyxzxy", "xyxz"),
        ];
        for (text, pattern) in cases {
            assert_eq!(search(text, pattern), naive(text, pattern), "{pattern:?} in {text:?}");
        }
    }

    #[test]
    fn byte_offsets_slice_on_char_boundaries() {
        let text = "cr\u{00E8}me br\u{00FB}l\u{00E9}e, cr\u{00E8}me";
        let pattern = "cr\u{00E8}me";
        let m = search(text, pattern);
        assert_eq!(m.len(), 2);
        for &off in &m {
            assert_eq!(&text[off..off + pattern.len()], pattern);
        }
    }

    #[test]
    fn char_offsets() {
        let text = "\u{00E4}\u{00E4}k\u{00E4}\u{00E4}k";
        assert_eq!(search_chars(text, "k"), vec![2, 5]);
        assert_eq!(search(text, "k"), vec![4, 9]);
    }
}
