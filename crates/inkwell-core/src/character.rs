// Character classification, case folding and the correction alphabet

/// Lowercase letters tried by the insertion and substitution generators.
pub const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Punctuation that ends a word while typing, alongside whitespace.
const BOUNDARY_PUNCTUATION: &[char] = &['.', ',', '!', '?'];

// ---------------------------------------------------------------------------
// Simple case mapping
//
// Rust's `char::to_lowercase` / `to_uppercase` may expand to several
// characters; the "simple" one-to-one mapping keeps only the first.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Fold a word to the lowercase form used for every dictionary key.
///
/// This is plain Unicode lowercasing; no normalization or locale rules
/// are applied.
pub fn fold_lowercase(word: &str) -> String {
    word.to_lowercase()
}

/// Whether `c` terminates a word while typing: whitespace or one of `. , ! ?`.
pub fn is_boundary(c: char) -> bool {
    c.is_whitespace() || BOUNDARY_PUNCTUATION.contains(&c)
}
