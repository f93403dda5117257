// Editing assistance for text being typed: autocorrect when a word is
// finished, completion of the word under construction.
//
// Every offset here is a byte offset into the `&str` being edited.

use std::ops::Range;

use inkwell_core::Lexicon;
use inkwell_core::character::is_boundary;

use crate::corrector::Corrector;

/// Tokens must be longer than this many characters before autocorrect or
/// completion kicks in.
pub const MIN_ASSIST_CHARS: usize = 2;

/// The last word of a text and the run of boundary characters after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingToken {
    /// Byte range of the last whitespace-separated token before the
    /// trailing run. Empty when the text has no such token.
    pub token: Range<usize>,
    /// Byte range of the trailing whitespace/punctuation run, running to
    /// the end of the text. Empty when the text ends inside a word.
    pub trailing: Range<usize>,
}

impl TrailingToken {
    /// End of the text with the trailing run removed.
    pub fn core_end(&self) -> usize {
        self.trailing.start
    }

    /// Whether the text ends with at least one boundary character.
    pub fn at_boundary(&self) -> bool {
        !self.trailing.is_empty()
    }

    pub fn token_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.token.clone()]
    }
}

/// Byte offset just past the last whitespace character of `text`, or 0.
fn last_token_start(text: &str) -> usize {
    text.char_indices()
        .rev()
        .find(|&(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// Split `text` into its trailing boundary run and the last token before it.
///
/// ```text
/// "I recieve, "   token = "recieve"   trailing = ", "
/// "hello wor"     token = "wor"       trailing = ""
/// ```
pub fn trailing_token(text: &str) -> TrailingToken {
    let core_end = text.trim_end_matches(is_boundary).len();
    let core = &text[..core_end];
    TrailingToken {
        token: last_token_start(core)..core_end,
        trailing: core_end..text.len(),
    }
}

/// The result of an autocorrect pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocorrectEdit {
    /// The full rewritten text.
    pub text: String,
    /// Selection `(start, end)` in the rewritten text.
    pub selection: (usize, usize),
    /// The token as typed.
    pub original: String,
    /// What replaced it.
    pub replacement: String,
}

/// Largest char boundary of `text` at or below `pos`.
fn floor_char_boundary(text: &str, mut pos: usize) -> usize {
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Correct the word just finished in `text`.
///
/// Acts only when the text ends with a boundary character and the token
/// before the trailing run is longer than [`MIN_ASSIST_CHARS`] characters.
/// Returns `None` when there is nothing to do or the corrector leaves the
/// token unchanged.
///
/// Each end of the selection is mapped on its own: a position at or past
/// the end of the token moves with the text after it, a position inside
/// the token is kept within the replacement, and a position before the
/// token is unchanged. The result always lies on char boundaries of the
/// rewritten text.
pub fn autocorrect_at_boundary(
    text: &str,
    selection: (usize, usize),
    corrector: &Corrector,
    lexicon: &dyn Lexicon,
) -> Option<AutocorrectEdit> {
    let tail = trailing_token(text);
    if !tail.at_boundary() {
        return None;
    }
    let token = tail.token_str(text);
    if token.chars().count() <= MIN_ASSIST_CHARS {
        return None;
    }

    let replacement = corrector.correct(token, lexicon);
    if replacement == token {
        return None;
    }

    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..tail.token.start]);
    out.push_str(&replacement);
    out.push_str(&text[tail.trailing.clone()]);

    let token_start = tail.token.start;
    let replaced_end = token_start + replacement.len();
    let map = |pos: usize| {
        let pos = if pos >= tail.core_end() {
            (pos + replacement.len()).saturating_sub(token.len())
        } else if pos > token_start {
            floor_char_boundary(&out, pos.min(replaced_end))
        } else {
            pos
        };
        pos.min(out.len())
    };
    let selection = (map(selection.0), map(selection.1));

    log::debug!("autocorrect {token:?} -> {replacement:?}");
    Some(AutocorrectEdit {
        text: out,
        selection,
        original: token.to_string(),
        replacement,
    })
}

/// The token to complete, if it is long enough to be worth completing.
///
/// Trailing boundary characters are ignored, so a word stays the
/// completion prefix right after it is finished.
pub fn completion_prefix(text: &str) -> Option<&str> {
    let token = trailing_token(text).token_str(text);
    (token.chars().count() > MIN_ASSIST_CHARS).then_some(token)
}

/// Replace the last whitespace-separated token of `text` with `word` and
/// append a single space.
///
/// Text ending in whitespace has an empty last token, so `word` is
/// appended.
pub fn apply_completion(text: &str, word: &str) -> String {
    let start = last_token_start(text);
    let mut out = String::with_capacity(start + word.len() + 1);
    out.push_str(&text[..start]);
    out.push_str(word);
    out.push(' ');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkwell_core::EmptyLexicon;
    use inkwell_trie::Trie;

    // -- trailing_token --

    #[test]
    fn trailing_token_splits_boundary_run() {
        let text = "I recieve, ";
        let t = trailing_token(text);
        assert_eq!(t.token_str(text), "recieve");
        assert_eq!(&text[t.trailing.clone()], ", ");
        assert_eq!(t.core_end(), 9);
        assert!(t.at_boundary());
    }

    #[test]
    fn trailing_token_inside_word() {
        let text = "hello wor";
        let t = trailing_token(text);
        assert_eq!(t.token_str(text), "wor");
        assert!(!t.at_boundary());
        assert_eq!(t.trailing, 9..9);
    }

    #[test]
    fn trailing_token_of_blank_text() {
        for text in ["", "   ", "?!"] {
            let t = trailing_token(text);
            assert_eq!(t.token_str(text), "");
            assert_eq!(t.core_end(), 0);
        }
    }

    #[test]
    fn trailing_token_multibyte() {
        let text = "déjà vü. ";
        let t = trailing_token(text);
        assert_eq!(t.token_str(text), "vü");
        assert_eq!(&text[t.trailing.clone()], ". ");
    }

    // -- autocorrect_at_boundary --

    #[test]
    fn autocorrect_rewrites_finished_word() {
        let c = Corrector::new();
        let edit = autocorrect_at_boundary("I recieve ", (10, 10), &c, &EmptyLexicon).unwrap();
        assert_eq!(edit.text, "I receive ");
        assert_eq!(edit.selection, (10, 10));
        assert_eq!(edit.original, "recieve");
        assert_eq!(edit.replacement, "receive");
    }

    #[test]
    fn autocorrect_shifts_selection_by_length_delta() {
        let c = Corrector::new();
        let dict = Trie::from_iter(["banana"]);
        let text = "I like bananna. ";
        let edit = autocorrect_at_boundary(text, (16, 16), &c, &dict).unwrap();
        assert_eq!(edit.text, "I like banana. ");
        assert_eq!(edit.selection, (15, 15));

        // caret inside the trailing run
        let edit = autocorrect_at_boundary(text, (14, 15), &c, &dict).unwrap();
        assert_eq!(edit.selection, (13, 14));
    }

    #[test]
    fn autocorrect_keeps_selection_before_token() {
        let c = Corrector::new();
        let edit = autocorrect_at_boundary("FREEE! ", (0, 2), &c, &EmptyLexicon).unwrap();
        assert_eq!(edit.text, "FREE! ");
        assert_eq!(edit.selection, (0, 2));
    }

    #[test]
    fn selection_spanning_the_token_stays_in_bounds() {
        let c = Corrector::new();
        let dict = Trie::from_iter(["banana"]);
        let text = "I like bananna. ";
        let edit = autocorrect_at_boundary(text, (3, 16), &c, &dict).unwrap();
        assert_eq!(edit.text, "I like banana. ");
        assert_eq!(edit.selection, (3, 15));
        assert_eq!(&edit.text[edit.selection.0..edit.selection.1], "ike banana. ");

        // end inside the token is kept within the replacement
        let edit = autocorrect_at_boundary(text, (0, 13), &c, &dict).unwrap();
        assert_eq!(edit.selection, (0, 13));
        let edit = autocorrect_at_boundary("I like banannnna. ", (2, 15), &c, &dict).unwrap();
        assert_eq!(edit.text, "I like banana. ");
        assert_eq!(edit.selection, (2, 13));
    }

    #[test]
    fn selection_over_multibyte_replacement_lands_on_char_boundaries() {
        let c = Corrector::new();
        let dict = Trie::from_iter(["café"]);
        let text = "un cafféé ";
        let edit = autocorrect_at_boundary(text, (0, 12), &c, &dict).unwrap();
        assert_eq!(edit.text, "un café ");
        assert_eq!(edit.selection, (0, 9));

        // byte 7 falls inside the replacement's "é"
        let edit = autocorrect_at_boundary(text, (3, 7), &c, &dict).unwrap();
        assert_eq!(edit.selection, (3, 6));
        assert!(edit.text.is_char_boundary(edit.selection.1));
    }

    #[test]
    fn autocorrect_preserves_capitalization() {
        let c = Corrector::new();
        let edit = autocorrect_at_boundary("Recieve?", (8, 8), &c, &EmptyLexicon).unwrap();
        assert_eq!(edit.text, "Receive?");
    }

    #[test]
    fn autocorrect_needs_a_boundary() {
        let c = Corrector::new();
        assert!(autocorrect_at_boundary("I recieve", (9, 9), &c, &EmptyLexicon).is_none());
    }

    #[test]
    fn autocorrect_skips_short_and_known_tokens() {
        let c = Corrector::new();
        assert!(autocorrect_at_boundary("go ab ", (6, 6), &c, &EmptyLexicon).is_none());
        assert!(autocorrect_at_boundary("hello ", (6, 6), &c, &EmptyLexicon).is_none());
        assert!(autocorrect_at_boundary("xyzzy ", (6, 6), &c, &EmptyLexicon).is_none());
        assert!(autocorrect_at_boundary("", (0, 0), &c, &EmptyLexicon).is_none());
    }

    // -- completion --

    #[test]
    fn completion_prefix_requires_three_chars() {
        assert_eq!(completion_prefix("hello wor"), Some("wor"));
        assert_eq!(completion_prefix("hello wo"), None);
        assert_eq!(completion_prefix("banana. "), Some("banana"));
        assert_eq!(completion_prefix(""), None);
    }

    #[test]
    fn apply_completion_replaces_last_token() {
        assert_eq!(apply_completion("go ban", "banana"), "go banana ");
        assert_eq!(apply_completion("ban", "banana"), "banana ");
        assert_eq!(apply_completion("", "banana"), "banana ");
    }

    #[test]
    fn apply_completion_after_whitespace_appends() {
        assert_eq!(apply_completion("go ban ", "banana"), "go ban banana ");
    }
}
