//! Linear-time exact search driven by a prefix table.

/// Find the first index `s` with `text[s..s + pattern.len()] == pattern`.
///
/// `table` must be the prefix table of `pattern` (see
/// [`fill_prefix_table`](super::fill_prefix_table)). The search stops at the
/// first full match. An empty pattern matches at 0.
pub fn find_first(text: &[i32], pattern: &[i32], table: &[usize]) -> Option<usize> {
    let n = pattern.len();
    let m = text.len();
    debug_assert!(table.len() >= n);
    if n == 0 {
        return Some(0);
    }

    let mut i = 0;
    let mut j = 0;
    while i < m {
        if pattern[j] == text[i] {
            i += 1;
            j += 1;
        }
        if j == n {
            return Some(i - j);
        }
        if i < m && pattern[j] != text[i] {
            if j != 0 {
                j = table[j - 1];
            } else {
                i += 1;
            }
        }
    }

    None
}
