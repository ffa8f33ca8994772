// Sort engine - orders the contents list
//
// Keys, in priority order:
//   1. category          ascending
//   2. label             ascending (ordinal)
//   3. quality           descending
//   4. time to spoil     ascending (never-spoiling last)
//   5. health fraction   descending
//
// Full ties keep the storage's iteration order (stable sort).

use super::attributes::SortKey;
use crate::world::Thing;

/// Order `things` for display
///
/// Keys are computed once per thing, then sorted with a stable sort.
pub fn sort_things<'a, T: Thing>(things: Vec<&'a T>) -> Vec<&'a T> {
    let mut keyed: Vec<(SortKey, &'a T)> = things
        .into_iter()
        .map(|thing| (SortKey::of(thing), thing))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, thing)| thing).collect()
}
