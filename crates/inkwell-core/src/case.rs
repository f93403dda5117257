// Case type detection, conversion and case-style restoration

use crate::character::{is_lower, is_upper, simple_lower, simple_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "receive".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Receive".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "reCeive".
    Complex,
    /// All letters are uppercase: "RECEIVE".
    AllUpper,
}

/// Detect the case pattern of a character slice.
///
/// Non-letter characters (digits, punctuation) are ignored when
/// determining the case pattern.
pub fn detect_case(word: &[char]) -> CaseType {
    if word.is_empty() {
        return CaseType::NoLetters;
    }

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(word[0]) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(word[0]) {
        all_uc = false;
        no_letters = false;
    }

    for &c in &word[1..] {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Apply a case transformation to a mutable character slice.
///
/// - `NoLetters` / `Complex` -- no change.
/// - `AllLower` -- every letter is lowercased.
/// - `AllUpper` -- every letter is uppercased.
/// - `FirstUpper` -- first character is uppercased, rest are lowercased.
pub fn set_case(word: &mut [char], case_type: CaseType) {
    if word.is_empty() {
        return;
    }
    match case_type {
        CaseType::NoLetters | CaseType::Complex => {}
        CaseType::AllLower => {
            for c in word.iter_mut() {
                *c = simple_lower(*c);
            }
        }
        CaseType::AllUpper => {
            for c in word.iter_mut() {
                *c = simple_upper(*c);
            }
        }
        CaseType::FirstUpper => {
            word[0] = simple_upper(word[0]);
            for c in word[1..].iter_mut() {
                *c = simple_lower(*c);
            }
        }
    }
}

/// Reapply the capitalization style of `original` to a lowercase `replacement`.
///
/// Uses full Unicode case mapping, so "ß" uppercases to "SS".
///
/// - A token without any lowercase letter ("FREEE", "42") uppercases the
///   whole replacement.
/// - Otherwise an uppercase first character ("Recieve", "McDonalds")
///   capitalizes only the first character of the replacement.
/// - Anything else leaves the replacement as it is.
pub fn restore_case(original: &str, replacement: &str) -> String {
    let original: Vec<char> = original.chars().collect();

    match detect_case(&original) {
        CaseType::AllUpper | CaseType::NoLetters => replacement.to_uppercase(),
        _ if original.first().copied().is_some_and(is_upper) => {
            // full mapping: a first letter may uppercase to several chars
            let mut chars = replacement.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => replacement.to_string(),
    }
}
