// Failure function (longest proper prefix that is also a suffix)

/// Build the failure table for `pattern`.
///
/// `table[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it. Construction is linear:
/// on a mismatch with a nonzero running length, the length falls back to
/// `table[len - 1]` while the outer index stays put, so each position is
/// advanced at most once and every fallback is paid for by an earlier
/// advance.
pub fn build_failure_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            table[i] = len;
            i += 1;
        } else if len != 0 {
            len = table[len - 1];
        } else {
            table[i] = 0;
            i += 1;
        }
    }

    table
}
