//! Pure sequence reordering helpers.
//!
//! # Responsibility
//! - Recompute contiguous zero-based order values after insert/remove/move.
//! - Stay agnostic of which entity (column or task) is being ranked.
//!
//! # Invariants
//! - Every returned sequence has order values exactly `0..len`.
//! - Relative order of untouched items is preserved.
//! - Out-of-range target indices clamp instead of failing; these helpers
//!   never error.

/// An item carrying a zero-based rank among its siblings.
pub trait Ordered {
    fn set_order(&mut self, order: u32);
}

/// Rewrites each item's order to its positional index.
pub fn reindex<T: Ordered>(mut seq: Vec<T>) -> Vec<T> {
    for (index, item) in seq.iter_mut().enumerate() {
        // Sequences are bounded by on-screen entity counts, far below u32.
        item.set_order(index as u32);
    }
    seq
}

/// Moves the item at `from` to position `to` within one sequence, then
/// reindexes. `to` clamps to the valid range; equal indices or an
/// out-of-range `from` leave the sequence untouched apart from reindexing.
pub fn move_within<T: Ordered>(mut seq: Vec<T>, from: usize, to: usize) -> Vec<T> {
    if from >= seq.len() {
        return reindex(seq);
    }
    let to = to.min(seq.len() - 1);
    if from != to {
        let item = seq.remove(from);
        seq.insert(to, item);
    }
    reindex(seq)
}

/// Moves the item at `source_index` out of `source` and into `dest` at
/// `dest_index` (clamped), applying `rehome` to update the moved item's
/// container reference. Both sequences are reindexed independently.
///
/// When `source_index` is out of range both sequences are returned
/// reindexed but otherwise unchanged.
pub fn move_across<T: Ordered>(
    mut source: Vec<T>,
    mut dest: Vec<T>,
    source_index: usize,
    dest_index: usize,
    rehome: impl FnOnce(&mut T),
) -> (Vec<T>, Vec<T>) {
    if source_index >= source.len() {
        return (reindex(source), reindex(dest));
    }
    let mut item = source.remove(source_index);
    rehome(&mut item);
    let dest_index = dest_index.min(dest.len());
    dest.insert(dest_index, item);
    (reindex(source), reindex(dest))
}
