//! Prefix (failure) table construction.

use crate::profile::{PROFILE_LEN, Profile};

/// Fill `table` with the longest-border lengths of `pattern`.
///
/// `table[i]` ends up as the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it. Runs in O(n): each fallback
/// strictly shortens the running border, and the border grows by at most one
/// per position.
///
/// # Panics
///
/// Panics if `table` is shorter than `pattern`.
pub fn fill_prefix_table(pattern: &[i32], table: &mut [usize]) {
    let n = pattern.len();
    assert!(table.len() >= n, "prefix table shorter than pattern");
    if n == 0 {
        return;
    }

    let mut len = 0;
    table[0] = 0;
    for i in 1..n {
        while len != 0 && pattern[i] != pattern[len] {
            len = table[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
            table[i] = len;
        } else {
            table[i] = 0;
        }
    }
}

/// Prefix table over a slice of any length. An empty pattern gives an empty
/// table.
pub fn prefix_table(pattern: &[i32]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    fill_prefix_table(pattern, &mut table);
    table
}

/// Prefix table for a full profile, held in a fixed-size array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    lengths: [usize; PROFILE_LEN],
}

impl PrefixTable {
    pub fn build(pattern: &Profile) -> Self {
        let mut lengths = [0; PROFILE_LEN];
        fill_prefix_table(pattern.as_slice(), &mut lengths);
        Self { lengths }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.lengths
    }

    /// Border length of `pattern[..=i]`.
    pub fn get(&self, i: usize) -> usize {
        self.lengths[i]
    }

    /// Smallest cyclic period of the pattern, if the pattern is made of whole
    /// repetitions of a shorter block.
    pub fn period(&self) -> Option<usize> {
        let border = self.lengths[PROFILE_LEN - 1];
        let period = PROFILE_LEN - border;
        (border != 0 && PROFILE_LEN % period == 0).then_some(period)
    }
}
