// Derived attributes used to order and describe stored things
//
// All of these are read fresh from the thing on every call. Spoilage in
// particular changes from frame to frame.

use crate::world::{Category, Quality, Thing};
use std::cmp::Ordering;

/// Time-to-spoil ordering key
///
/// Variant order is the sort order: finite countdowns first, then things
/// whose rotting is halted at the current temperature, then things that
/// never spoil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpoilKey {
    Ticks(u64),
    Halted,
    Never,
}

pub fn category(thing: &impl Thing) -> Category {
    thing.category()
}

/// Label without the quality suffix, so quality only ranks through its own key
pub fn label(thing: &impl Thing) -> String {
    thing.sort_label()
}

/// Quality tier; `None` ranks below every real tier
pub fn quality_rank(thing: &impl Thing) -> Option<Quality> {
    thing.quality()
}

pub fn spoil_key(thing: &impl Thing) -> SpoilKey {
    match thing.rot() {
        None => SpoilKey::Never,
        Some(rot) => match rot.ticks_until_rot_at(thing.ambient_temperature()) {
            Some(ticks) => SpoilKey::Ticks(ticks),
            None => SpoilKey::Halted,
        },
    }
}

/// Current over maximum hit points; 1.0 without a usable health model
pub fn health_fraction(thing: &impl Thing) -> f32 {
    thing
        .hit_points()
        .filter(|hp| hp.max > 0)
        .map(|hp| hp.current as f32 / hp.max as f32)
        .unwrap_or(1.0)
}

/// Snapshot of the five ordering attributes of one thing
#[derive(Debug, Clone)]
pub struct SortKey {
    pub category: Category,
    pub label: String,
    pub quality: Option<Quality>,
    pub spoil: SpoilKey,
    pub health: f32,
}

impl SortKey {
    pub fn of(thing: &impl Thing) -> Self {
        Self {
            category: category(thing),
            label: label(thing),
            quality: quality_rank(thing),
            spoil: spoil_key(thing),
            health: health_fraction(thing),
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.label.cmp(&other.label))
            // Best quality first
            .then_with(|| other.quality.cmp(&self.quality))
            .then_with(|| self.spoil.cmp(&other.spoil))
            // Most intact first
            .then_with(|| other.health.total_cmp(&self.health))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}
