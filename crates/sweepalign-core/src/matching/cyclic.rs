//! Cyclic alignment of two profiles.
//!
//! The reference profile is doubled and used as the text; the current profile
//! is the pattern. A match at position `s` means
//! `current == reference.rotate_left(s)`, so `s` is the rotation of the
//! current frame relative to the reference.

use tracing::trace;

use super::{Alignment, PrefixTable, find_first};
use crate::profile::{DoubledProfile, Profile};

/// Find the smallest rotation `s` such that `current == reference.rotate_left(s)`.
///
/// If the reference has a period shorter than a full turn, several rotations
/// are valid and the smallest one wins.
pub fn align(reference: &Profile, current: &Profile) -> Alignment {
    let text = reference.doubled();
    let table = PrefixTable::build(current);
    align_prepared(&text, current, &table)
}

/// Run the search with a doubled text and prefix table built by the caller.
pub fn align_prepared(text: &DoubledProfile, pattern: &Profile, table: &PrefixTable) -> Alignment {
    let position = find_first(text.as_slice(), pattern.as_slice(), table.as_slice());
    trace!("cyclic search position: {:?}", position);
    Alignment::from_position(position)
}

/// Match a profile against its own double. Always aligns at 0.
pub fn self_align(profile: &Profile) -> Alignment {
    align(profile, profile)
}
