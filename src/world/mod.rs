//! World-side contracts the contents panel talks to
//!
//! The panel never owns things or storages. It reads them through these
//! traits once per frame and sends mutation requests back through them.
//!
//! # Capabilities
//!
//! Optional behavior is exposed as queries returning `Option`, never as
//! subtypes:
//!
//! - [`Thing::rot`] - things that spoil carry a [`RotState`]
//! - [`Storage::hidden_contents`] - storages that conceal what they hold
//! - [`Storage::variant`] - outdoor cellars vs. ordinary storage
//!
//! [`Stockpile`] is the in-memory implementation the terminal front end runs on.

mod rot;
mod stockpile;

pub use rot::{rot_rate_at_temperature, RotBand, RotState};
pub use stockpile::{ConcealedContents, Stockpile, StoredThing};

use std::fmt;

/// Stable identifier of a thing, unique within one world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThingId(pub u32);

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse classification of a thing
///
/// Declaration order is the grouping order of the contents list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Meal,
    Food,
    Medicine,
    Resource,
    Manufactured,
    Weapon,
    Apparel,
    Misc,
}

/// Quality tier, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quality {
    Awful,
    Poor,
    Normal,
    Good,
    Excellent,
    Masterwork,
    Legendary,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awful => "awful",
            Self::Poor => "poor",
            Self::Normal => "normal",
            Self::Good => "good",
            Self::Excellent => "excellent",
            Self::Masterwork => "masterwork",
            Self::Legendary => "legendary",
        }
    }
}

/// Durability of a thing that can be damaged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitPoints {
    pub current: u32,
    pub max: u32,
}

/// A faction that may be barred from using a thing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Faction(pub u32);

impl Faction {
    /// The faction the local player controls
    pub const PLAYER: Faction = Faction(0);
}

/// Read access to one stored thing
pub trait Thing {
    fn id(&self) -> ThingId;

    fn category(&self) -> Category;

    /// Display label, including the stack count when above one
    fn label(&self) -> String;

    /// Label used for ordering; leaves out anything quality already ranks
    fn sort_label(&self) -> String {
        self.label()
    }

    /// Long-form description shown on hover and in the info card
    fn description(&self) -> String;

    /// Single glyph drawn in the icon column
    fn icon(&self) -> char;

    fn quality(&self) -> Option<Quality>;

    /// Rot capability; `None` for things that never spoil
    fn rot(&self) -> Option<&RotState>;

    /// Health capability; `None` for things without durability
    fn hit_points(&self) -> Option<HitPoints>;

    fn is_forbidden(&self, faction: Faction) -> bool;

    /// Temperature around the thing, in °C
    fn ambient_temperature(&self) -> f32;
}

/// Which kind of building a storage is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageVariant {
    /// Passive outdoor cellar held at a fixed temperature (°C)
    OutdoorCellar { temperature: f32 },
    /// Any other shelf, crate or stockpile
    Standard,
}

/// Capability of storages that keep their contents out of sight
pub trait HiddenContents {
    /// Let a thing leave concealment
    fn release(&mut self, id: ThingId);
}

/// A building holding things in storage cells
pub trait Storage {
    type Thing: Thing;

    fn label(&self) -> &str;

    fn variant(&self) -> StorageVariant;

    /// Unplaced blueprints and unfinished frames have no usable contents
    fn is_frame(&self) -> bool;

    fn max_items_in_cell(&self) -> usize;

    fn slot_cells(&self) -> usize;

    /// Total number of stacks the storage can hold
    fn capacity(&self) -> usize {
        self.max_items_in_cell() * self.slot_cells()
    }

    /// Current contents, in the storage's own iteration order
    fn contents(&self) -> Vec<&Self::Thing>;

    /// Drop a thing out of the storage; unknown ids are ignored
    fn eject(&mut self, id: ThingId);

    /// Set the player's forbidden flag on a stored thing
    fn set_forbidden(&mut self, id: ThingId, forbidden: bool);

    fn hidden_contents(&mut self) -> Option<&mut dyn HiddenContents>;
}

/// Receiver of "select these now" requests, e.g. caravan forming
pub trait CaravanSelection {
    fn select_now(&mut self, things: &[ThingId]);
}
