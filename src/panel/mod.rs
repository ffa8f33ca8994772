//! Storage contents panel
//!
//! Lists everything a storage building holds, one row per stack, with
//! per-row controls to inspect, eject and forbid. The panel is host-agnostic:
//! it draws through the [`host::Ui`] trait and reads the world through the
//! [`crate::world`] traits.
//!
//! # Frame flow
//!
//! ```text
//! on_frame
//!    │
//!    ├─ draw_contents (list)        reads + sorts contents
//!    │     └─ draw_row × N          records StorageCommands, PendingSelection
//!    │
//!    ├─ apply StorageCommands       eject / release / set_forbidden
//!    └─ forward PendingSelection    CaravanSelection::select_now
//! ```
//!
//! Mutations are recorded during the pass and applied after it, so the
//! contents snapshot borrowed for drawing is never mutated underneath the
//! rows.

pub mod attributes;
pub mod host;
pub mod list;
pub mod row;
pub mod scroll;
pub mod sort;

#[cfg(test)]
mod testing;

use crate::i18n::{Strings, TemperatureUnit};
use crate::world::{CaravanSelection, Faction, Storage, ThingId};
use host::Ui;
use ratatui::layout::Rect;
use scroll::ScrollState;

// ═══════════════════════════════════════════════════════════════════════════
// Layout (terminal cells)
// ═══════════════════════════════════════════════════════════════════════════

pub const ROW_HEIGHT: u16 = 1;
/// Square control buttons: info, eject, forbid
pub const BUTTON_WIDTH: u16 = 4;
pub const ICON_WIDTH: u16 = 2;
/// Label starts after the info button, the icon and one cell of gap
pub const LABEL_OFFSET: u16 = BUTTON_WIDTH + ICON_WIDTH + 1;
pub const MARGIN: u16 = 1;
/// Height reserved above the list for the storage tab strip
pub const TAB_STRIP_HEIGHT: u16 = 1;
/// Heading line plus separator
pub const HEADING_HEIGHT: u16 = 2;
pub const SCROLLBAR_WIDTH: u16 = 1;

// ═══════════════════════════════════════════════════════════════════════════
// Per-frame data
// ═══════════════════════════════════════════════════════════════════════════

/// Read-only inputs every row needs
#[derive(Debug, Clone, Copy)]
pub struct PanelContext<'a> {
    pub strings: &'a Strings,
    /// Faction whose forbidden flag the checkbox shows and edits
    pub faction: Faction,
    pub temperature_unit: TemperatureUnit,
}

/// State the panel keeps between frames
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub scroll: ScrollState,
}

/// A mutation requested by a row control
#[derive(Debug, Clone, PartialEq)]
pub enum StorageCommand {
    Eject(ThingId),
    SetForbidden { id: ThingId, forbidden: bool },
}

/// Things marked for immediate caravan selection during one frame
#[derive(Debug, Clone, Default)]
pub struct PendingSelection {
    things: Vec<ThingId>,
}

impl PendingSelection {
    /// Queue a thing; duplicates are ignored
    pub fn add(&mut self, id: ThingId) {
        if !self.things.contains(&id) {
            self.things.push(id);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.things.is_empty()
    }

    pub fn len(&self) -> usize {
        self.things.len()
    }

    pub fn as_slice(&self) -> &[ThingId] {
        &self.things
    }

    pub fn clear(&mut self) {
        self.things.clear();
    }
}

/// Everything a render pass produced besides pixels
#[derive(Debug, Default)]
pub struct FrameEffects {
    pub commands: Vec<StorageCommand>,
    pub pending: PendingSelection,
}

// ═══════════════════════════════════════════════════════════════════════════
// Controller
// ═══════════════════════════════════════════════════════════════════════════

/// The contents panel of one selected storage
///
/// Create a fresh panel when the selection changes; the scroll position
/// belongs to the storage it was opened on.
#[derive(Debug, Default)]
pub struct ContentsPanel {
    state: RenderState,
}

impl ContentsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible only for a selected storage that is actually built
    pub fn is_visible<S: Storage>(selected: Option<&S>) -> bool {
        selected.is_some_and(|storage| !storage.is_frame())
    }

    /// Area the list draws in: `area` inset by the margin, below the tab strip
    pub fn content_bounds(area: Rect) -> Rect {
        let x = area.x.saturating_add(MARGIN);
        let y = area.y.saturating_add(MARGIN + TAB_STRIP_HEIGHT);
        Rect::new(
            x,
            y,
            area.width.saturating_sub(2 * MARGIN),
            area.bottom().saturating_sub(MARGIN).saturating_sub(y),
        )
    }

    /// Run one frame: draw the list, then apply what the rows asked for
    pub fn on_frame<S: Storage>(
        &mut self,
        ui: &mut dyn Ui,
        ctx: &PanelContext<'_>,
        storage: &mut S,
        caravan: &mut dyn CaravanSelection,
        area: Rect,
    ) {
        let mut effects = FrameEffects::default();
        list::draw_contents(
            ui,
            ctx,
            &*storage,
            Self::content_bounds(area),
            &mut self.state,
            &mut effects,
        );

        let FrameEffects {
            commands,
            mut pending,
        } = effects;

        for command in commands {
            apply(storage, command);
        }

        if !pending.is_empty() {
            tracing::info!(
                "Selecting {} thing(s) from {} for caravan",
                pending.len(),
                storage.label()
            );
            caravan.select_now(pending.as_slice());
        }
        pending.clear();
    }

    pub fn render_state(&self) -> &RenderState {
        &self.state
    }

    pub fn render_state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }
}

fn apply<S: Storage>(storage: &mut S, command: StorageCommand) {
    tracing::debug!(?command, "Applying storage command");
    match command {
        StorageCommand::Eject(id) => {
            storage.eject(id);
            if let Some(hidden) = storage.hidden_contents() {
                hidden.release(id);
            }
        }
        StorageCommand::SetForbidden { id, forbidden } => {
            storage.set_forbidden(id, forbidden);
        }
    }
}
