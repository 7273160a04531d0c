// ============================================================
// Layer 4 - Overlap Count
// ============================================================
// Counts how many entries of `first` also occur in `second`.
// Duplicates in `first` count once per occurrence; duplicates
// in `second` make no difference.
//
// `second` is indexed into a HashSet once, so the whole count
// is O(|first| + |second|) instead of a nested scan.

use std::{collections::HashSet, hash::Hash};

pub fn count_overlap<T: Eq + Hash>(first: &[T], second: &[T]) -> usize {
    let lookup: HashSet<&T> = second.iter().collect();
    first.iter().filter(|id| lookup.contains(id)).count()
}
