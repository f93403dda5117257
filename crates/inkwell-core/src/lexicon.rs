// Membership predicate shared by dictionaries and the corrector

/// A source of known words.
///
/// The corrector only ever asks "does this word exist", so anything able
/// to answer that (a trie, a fixed list, a closure over a larger store)
/// can back it. Words passed to `contains` are already lowercased.
pub trait Lexicon {
    /// Report whether `word` is a known word.
    fn contains(&self, word: &str) -> bool;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Box<L> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// A lexicon that knows no words.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLexicon;

impl Lexicon for EmptyLexicon {
    fn contains(&self, _word: &str) -> bool {
        false
    }
}

/// Adapts a closure `Fn(&str) -> bool` into a [`Lexicon`].
#[derive(Clone, Copy)]
pub struct FnLexicon<F>(pub F);

impl<F> Lexicon for FnLexicon<F>
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, word: &str) -> bool {
        (self.0)(word)
    }
}

impl<F> std::fmt::Debug for FnLexicon<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnLexicon(..)")
    }
}
