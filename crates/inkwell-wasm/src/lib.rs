// WASM bindings for inkwell editing assistance.
//
// Provides a `WasmInkwell` class exported via wasm-bindgen that wraps the
// `InkwellHandle` from inkwell-text. Offsets crossing the boundary are
// JavaScript string indices (UTF-16 code units) and are converted to and
// from byte offsets here.
//
// Usage from JavaScript:
//
//   const inkwell = new WasmInkwell(wordListText);
//   inkwell.contains("banana");                   // => true
//   inkwell.suggestCompletions("ban", 3);         // => ["banana", "band", ...]
//   inkwell.search("abababa", "aba");             // => [0, 2, 4]
//   inkwell.correct("recieve");                   // => "receive"
//   inkwell.suggest("bandd");                     // => ["band", ...]
//   inkwell.autocorrect("I recieve ", 10, 10);    // => { text, selectionStart, ... }
//   inkwell.completeWord("go ban", "banana");     // => "go banana "

pub mod offsets;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use inkwell_text::editing;
use inkwell_text::handle::InkwellHandle;

use crate::offsets::{byte_to_utf16, bytes_to_utf16, utf16_to_byte};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable result of an autocorrect pass.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsAutocorrect {
    text: String,
    selection_start: usize,
    selection_end: usize,
    original: String,
    replacement: String,
}

// ============================================================================
// WasmInkwell
// ============================================================================

/// Editing assistance engine for WebAssembly.
///
/// Provides word completion, pattern search, spelling correction and
/// autocorrect-while-typing over a dictionary loaded from a word list.
#[wasm_bindgen]
pub struct WasmInkwell {
    handle: InkwellHandle,
}

#[wasm_bindgen]
impl WasmInkwell {
    /// Create a new instance from newline-separated word-list text.
    ///
    /// Entries are trimmed; blank lines and `#` comments are skipped.
    #[wasm_bindgen(constructor)]
    pub fn new(word_list: Option<String>) -> WasmInkwell {
        let handle = match word_list {
            Some(data) => InkwellHandle::from_word_list(&data),
            None => InkwellHandle::new(),
        };
        WasmInkwell { handle }
    }

    /// Add a word to the dictionary. Returns `true` if it was new.
    pub fn insert(&mut self, word: &str) -> bool {
        self.handle.insert(word)
    }

    /// Check whether a word is known (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.handle.contains(word)
    }

    /// Number of words in the dictionary.
    #[wasm_bindgen(js_name = "wordCount")]
    pub fn word_count(&self) -> usize {
        self.handle.trie().len()
    }

    /// Words starting with `prefix`, at most `limit` of them.
    #[wasm_bindgen(js_name = "suggestCompletions")]
    pub fn suggest_completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.handle.suggest_completions_with_limit(prefix, limit)
    }

    /// Completions for the word being typed at the end of `text`.
    #[wasm_bindgen(js_name = "completionsForText")]
    pub fn completions_for_text(&self, text: &str) -> Vec<String> {
        self.handle.completions_for_text(text)
    }

    /// Replace the last word of `text` with `word` and append a space.
    #[wasm_bindgen(js_name = "completeWord")]
    pub fn complete_word(&self, text: &str, word: &str) -> String {
        editing::apply_completion(text, word)
    }

    /// Every occurrence of `pattern` in `text`, as JavaScript string
    /// indices. A blank pattern finds nothing.
    pub fn search(&self, text: &str, pattern: &str) -> Vec<usize> {
        let bytes = self.handle.search(text, pattern);
        bytes_to_utf16(text, &bytes)
    }

    /// Correct a single word, returning it unchanged when nothing better
    /// is known.
    pub fn correct(&self, word: &str) -> String {
        self.handle.correct(word)
    }

    /// Ranked corrections for a word (best first).
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.handle.suggest(word)
    }

    /// Autocorrect the word just finished in `text`.
    ///
    /// `sel_start` and `sel_end` are textarea selection indices. Returns
    /// `undefined` when nothing changes, otherwise an object with fields
    /// `text`, `selectionStart`, `selectionEnd`, `original`, `replacement`.
    pub fn autocorrect(
        &self,
        text: &str,
        sel_start: usize,
        sel_end: usize,
    ) -> Result<JsValue, JsError> {
        let selection = (utf16_to_byte(text, sel_start), utf16_to_byte(text, sel_end));
        let Some(edit) = self.handle.autocorrect(text, selection) else {
            return Ok(JsValue::UNDEFINED);
        };
        let result = JsAutocorrect {
            selection_start: byte_to_utf16(&edit.text, edit.selection.0),
            selection_end: byte_to_utf16(&edit.text, edit.selection.1),
            text: edit.text,
            original: edit.original,
            replacement: edit.replacement,
        };
        serde_wasm_bindgen::to_value(&result).map_err(|e| JsError::new(&e.to_string()))
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the number of completions returned by `completionsForText`.
    #[wasm_bindgen(js_name = "setCompletionLimit")]
    pub fn set_completion_limit(&mut self, value: usize) {
        self.handle.set_completion_limit(value);
    }

    /// Set the maximum number of suggestions to return.
    #[wasm_bindgen(js_name = "setMaxSuggestions")]
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.handle.set_max_suggestions(value);
    }

    /// Set whether the built-in common-word list is consulted.
    #[wasm_bindgen(js_name = "setUseCommonWords")]
    pub fn set_use_common_words(&mut self, value: bool) {
        self.handle.set_use_common_words(value);
        self.handle.set_common_words_for_membership(value);
    }

    /// Set the largest edit distance accepted by the common-word fallback.
    #[wasm_bindgen(js_name = "setMaxFallbackDistance")]
    pub fn set_max_fallback_distance(&mut self, value: usize) {
        self.handle.set_max_fallback_distance(value);
    }
}
