// In-memory storage building and its stored things
//
// This is the world the terminal front end runs against. It implements the
// collaborator traits with plain vectors: eject moves a thing onto the
// ground beside the building, forbidding flips a flag, and the clock only
// advances rot progress at each thing's ambient temperature.

use super::{
    Category, Faction, HiddenContents, HitPoints, Quality, RotState, Storage, StorageVariant,
    Thing, ThingId,
};
use std::collections::BTreeSet;

/// One stack of things held by a [`Stockpile`]
#[derive(Debug, Clone)]
pub struct StoredThing {
    id: ThingId,
    category: Category,
    name: String,
    stack_count: u32,
    description: String,
    icon: char,
    quality: Option<Quality>,
    rot: Option<RotState>,
    hit_points: Option<HitPoints>,
    forbidden: bool,
    ambient_temperature: f32,
}

impl StoredThing {
    pub fn new(id: u32, category: Category, name: impl Into<String>) -> Self {
        Self {
            id: ThingId(id),
            category,
            name: name.into(),
            stack_count: 1,
            description: String::new(),
            icon: '•',
            quality: None,
            rot: None,
            hit_points: None,
            forbidden: false,
            ambient_temperature: 21.0,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.stack_count = count.max(1);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: char) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_rot(mut self, rot: RotState) -> Self {
        self.rot = Some(rot);
        self
    }

    pub fn with_hit_points(mut self, current: u32, max: u32) -> Self {
        self.hit_points = Some(HitPoints { current, max });
        self
    }

    pub fn with_temperature(mut self, celsius: f32) -> Self {
        self.ambient_temperature = celsius;
        self
    }

    pub fn forbidden(mut self) -> Self {
        self.forbidden = true;
        self
    }
}

impl Thing for StoredThing {
    fn id(&self) -> ThingId {
        self.id
    }

    fn category(&self) -> Category {
        self.category
    }

    fn label(&self) -> String {
        let label = self.sort_label();
        match self.quality {
            Some(quality) => format!("{} ({})", label, quality.as_str()),
            None => label,
        }
    }

    fn sort_label(&self) -> String {
        match self.stack_count {
            1 => self.name.clone(),
            n => format!("{} x{}", self.name, n),
        }
    }

    fn description(&self) -> String {
        let mut text = self.description.clone();
        if let Some(hp) = self.hit_points {
            if !text.is_empty() {
                text.push_str("\n\n");
            }
            text.push_str(&format!("Hit points: {} / {}", hp.current, hp.max));
        }
        text
    }

    fn icon(&self) -> char {
        self.icon
    }

    fn quality(&self) -> Option<Quality> {
        self.quality
    }

    fn rot(&self) -> Option<&RotState> {
        self.rot.as_ref()
    }

    fn hit_points(&self) -> Option<HitPoints> {
        self.hit_points
    }

    fn is_forbidden(&self, faction: Faction) -> bool {
        self.forbidden && faction == Faction::PLAYER
    }

    fn ambient_temperature(&self) -> f32 {
        self.ambient_temperature
    }
}

/// Set of stored things kept out of sight
#[derive(Debug, Clone, Default)]
pub struct ConcealedContents {
    concealed: BTreeSet<ThingId>,
}

impl ConcealedContents {
    pub fn is_concealed(&self, id: ThingId) -> bool {
        self.concealed.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.concealed.len()
    }
}

impl HiddenContents for ConcealedContents {
    fn release(&mut self, id: ThingId) {
        if self.concealed.remove(&id) {
            tracing::debug!("Released {} from hidden contents", id);
        }
    }
}

/// A storage building backed by a vector of stacks
#[derive(Debug, Clone)]
pub struct Stockpile {
    label: String,
    variant: StorageVariant,
    frame: bool,
    max_items_in_cell: usize,
    slot_cells: usize,
    things: Vec<StoredThing>,
    hidden: Option<ConcealedContents>,
    /// Things ejected onto the ground next to the building
    dropped: Vec<StoredThing>,
}

impl Stockpile {
    pub fn new(
        label: impl Into<String>,
        variant: StorageVariant,
        max_items_in_cell: usize,
        slot_cells: usize,
    ) -> Self {
        Self {
            label: label.into(),
            variant,
            frame: false,
            max_items_in_cell,
            slot_cells,
            things: Vec::new(),
            hidden: None,
            dropped: Vec::new(),
        }
    }

    /// Mark this building as an unfinished frame
    pub fn as_frame(mut self) -> Self {
        self.frame = true;
        self
    }

    /// Give this building the hidden-contents capability; current and future
    /// stacks start out concealed
    pub fn with_hidden_contents(mut self) -> Self {
        let concealed = self.things.iter().map(|t| t.id).collect();
        self.hidden = Some(ConcealedContents { concealed });
        self
    }

    /// Add stacks, taking on the building's ambient temperature when it has one
    pub fn stocked(mut self, things: impl IntoIterator<Item = StoredThing>) -> Self {
        for mut thing in things {
            if let StorageVariant::OutdoorCellar { temperature } = self.variant {
                thing.ambient_temperature = temperature;
            }
            if let Some(hidden) = self.hidden.as_mut() {
                hidden.concealed.insert(thing.id);
            }
            self.things.push(thing);
        }
        self
    }

    pub fn dropped(&self) -> &[StoredThing] {
        &self.dropped
    }

    pub fn concealed(&self) -> Option<&ConcealedContents> {
        self.hidden.as_ref()
    }

    pub fn get(&self, id: ThingId) -> Option<&StoredThing> {
        self.things.iter().find(|t| t.id == id)
    }

    /// Advance rot on every stack
    ///
    /// Outdoor cellars hold their own temperature; everything else sits at
    /// `outdoor_temperature`.
    pub fn tick(&mut self, ticks: u64, outdoor_temperature: f32) {
        let ambient = match self.variant {
            StorageVariant::OutdoorCellar { temperature } => temperature,
            StorageVariant::Standard => outdoor_temperature,
        };
        for thing in &mut self.things {
            thing.ambient_temperature = ambient;
            if let Some(rot) = thing.rot.as_mut() {
                rot.advance(ticks, ambient);
            }
        }
    }
}

impl Storage for Stockpile {
    type Thing = StoredThing;

    fn label(&self) -> &str {
        &self.label
    }

    fn variant(&self) -> StorageVariant {
        self.variant
    }

    fn is_frame(&self) -> bool {
        self.frame
    }

    fn max_items_in_cell(&self) -> usize {
        self.max_items_in_cell
    }

    fn slot_cells(&self) -> usize {
        self.slot_cells
    }

    fn contents(&self) -> Vec<&StoredThing> {
        self.things.iter().collect()
    }

    fn eject(&mut self, id: ThingId) {
        let Some(pos) = self.things.iter().position(|t| t.id == id) else {
            tracing::debug!("Eject of {} ignored: not stored in {}", id, self.label);
            return;
        };
        let thing = self.things.remove(pos);
        tracing::info!("Ejected {} from {}", thing.label(), self.label);
        self.dropped.push(thing);
    }

    fn set_forbidden(&mut self, id: ThingId, forbidden: bool) {
        if let Some(thing) = self.things.iter_mut().find(|t| t.id == id) {
            thing.forbidden = forbidden;
            tracing::info!(
                "{} {}",
                if forbidden { "Forbade" } else { "Allowed" },
                thing.label()
            );
        }
    }

    fn hidden_contents(&mut self) -> Option<&mut dyn HiddenContents> {
        self.hidden.as_mut().map(|h| h as &mut dyn HiddenContents)
    }
}
