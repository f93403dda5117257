// Built-in list of frequently misspelled words

use inkwell_core::Lexicon;

/// Known-correct words that are always accepted.
///
/// The list doubles as a fallback dictionary (scanned in this order when a
/// token has no single-edit repair) and as a scoring signal: a repair found
/// here is preferred over an equally distant repair known only to the
/// caller's lexicon.
pub const COMMON_WORDS: &[&str] = &[
    "accommodate", "terrified", "acknowledge", "achieve", "acquire", "address", "argument",
    "beautiful", "because", "beginning", "believe", "business", "calendar", "category",
    "commitment", "committee", "completely", "conscience", "conscious", "definitely",
    "dependent", "disappear", "disappoint", "embarrass", "environment", "existence",
    "experience", "familiar", "finally", "foreign", "forty", "friend", "grammar", "grateful",
    "guarantee", "harass", "height", "humorous", "immediately", "independent", "intelligence",
    "interrupt", "knowledge", "leisure", "library", "lightning", "maintenance", "marriage",
    "minute", "necessary", "neighbour", "noticeable", "occasion", "occurrence", "official",
    "parallel", "parliament", "particular", "perform", "personnel", "possession", "possible",
    "preferred", "principal", "privilege", "probably", "professional", "publicly", "really",
    "receive", "recommend", "referred", "relevant", "religious", "remember", "resistance",
    "restaurant", "rhythm", "schedule", "separate", "sergeant", "similar", "successful",
    "supersede", "surprise", "tomorrow", "tremendous", "truly", "unfortunately", "until",
    "vacuum", "village", "weather", "weird", "whether", "writing", "yacht", "yourself",
    "across", "against", "although", "among", "algorithm", "hello", "free", "love", "amazing",
    "amazed", "going", "information",
];

/// Whether `word` (already lowercased) is on the built-in list.
pub fn is_common(word: &str) -> bool {
    COMMON_WORDS.contains(&word)
}

/// The built-in list as a [`Lexicon`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonWords;

impl Lexicon for CommonWords {
    fn contains(&self, word: &str) -> bool {
        is_common(word)
    }
}

/// A lexicon OR-ed with the built-in list.
#[derive(Debug, Clone, Copy)]
pub struct WithCommonWords<L> {
    inner: L,
}

impl<L: Lexicon> WithCommonWords<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: Lexicon> Lexicon for WithCommonWords<L> {
    fn contains(&self, word: &str) -> bool {
        self.inner.contains(word) || is_common(word)
    }
}
