// Conversion between UTF-8 byte offsets (Rust) and UTF-16 code-unit
// offsets (JavaScript string indices, textarea selections).

/// UTF-16 offset of byte offset `byte` in `text`.
///
/// Offsets past the end, or inside a multi-byte character, resolve to the
/// end of the text or of that character respectively.
pub fn byte_to_utf16(text: &str, byte: usize) -> usize {
    text.char_indices()
        .take_while(|&(i, _)| i < byte)
        .map(|(_, c)| c.len_utf16())
        .sum()
}

/// Byte offset of UTF-16 offset `unit` in `text`, clamped to the text.
///
/// An offset between the two halves of a surrogate pair resolves to the
/// end of that character.
pub fn utf16_to_byte(text: &str, unit: usize) -> usize {
    let mut units = 0;
    for (i, c) in text.char_indices() {
        if units >= unit {
            return i;
        }
        units += c.len_utf16();
    }
    text.len()
}

/// Convert ascending byte offsets to UTF-16 offsets in one pass.
pub fn bytes_to_utf16(text: &str, bytes: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut chars = text.char_indices().peekable();
    let mut units = 0;
    for &byte in bytes {
        while let Some(&(i, c)) = chars.peek() {
            if i >= byte {
                break;
            }
            units += c.len_utf16();
            chars.next();
        }
        out.push(units);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_offsets_are_identical() {
        assert_eq!(byte_to_utf16("hello", 3), 3);
        assert_eq!(utf16_to_byte("hello", 3), 3);
        assert_eq!(utf16_to_byte("hello", 99), 5);
    }

    #[test]
    fn multibyte_and_astral_characters() {
        // "é" is 2 bytes / 1 unit, "😀" is 4 bytes / 2 units
        let text = "é😀x";
        assert_eq!(byte_to_utf16(text, 2), 1);
        assert_eq!(byte_to_utf16(text, 6), 3);
        assert_eq!(utf16_to_byte(text, 1), 2);
        assert_eq!(utf16_to_byte(text, 3), 6);
        assert_eq!(utf16_to_byte(text, 2), 6);
    }

    #[test]
    fn batch_conversion_matches_single() {
        let text = "naïve naïve";
        let bytes = [2, 9];
        assert_eq!(bytes_to_utf16(text, &bytes), vec![2, 8]);
        for &b in &bytes {
            assert!(bytes_to_utf16(text, &[b])[0] == byte_to_utf16(text, b));
        }
    }
}
