// TUI application state
//
// Holds the demo world, which storage is selected, the contents panel opened
// on it, and everything the shell draws around the panel (status line, info
// card, toast).

use super::components::Toast;
use super::host::{PointerInput, TerminalUi};
use crate::config::{Config, SimulationSettings};
use crate::i18n::{Strings, TemperatureUnit};
use crate::logging::LogRing;
use crate::panel::host::InfoCard;
use crate::panel::{ContentsPanel, PanelContext};
use crate::theme::Theme;
use crate::world::{CaravanSelection, Faction, Stockpile, ThingId};
use ratatui::{layout::Rect, Frame};

/// Step for `[` and `]`, in °C
const TEMPERATURE_STEP: f32 = 1.0;

/// Things picked for the forming caravan
#[derive(Debug, Default)]
pub struct CaravanRoster {
    things: Vec<ThingId>,
}

impl CaravanRoster {
    pub fn len(&self) -> usize {
        self.things.len()
    }

    pub fn is_empty(&self) -> bool {
        self.things.is_empty()
    }

    pub fn contains(&self, id: ThingId) -> bool {
        self.things.contains(&id)
    }
}

impl CaravanSelection for CaravanRoster {
    fn select_now(&mut self, things: &[ThingId]) {
        let before = self.things.len();
        for id in things {
            if !self.things.contains(id) {
                self.things.push(*id);
            }
        }
        tracing::info!(
            added = self.things.len() - before,
            total = self.things.len(),
            "Caravan selection updated"
        );
    }
}

/// Main application state for the TUI
pub struct App {
    /// Storages in tab order
    pub world: Vec<Stockpile>,

    /// Index into `world` of the storage the panel is open on
    pub selected: Option<usize>,

    /// Panel for the selected storage; replaced when the selection changes
    pub panel: ContentsPanel,

    pub strings: Strings,
    pub theme: Theme,
    pub temperature_unit: TemperatureUnit,

    simulation: SimulationSettings,

    /// Ambient temperature for storages without their own (°C)
    pub outdoor_temperature: f32,

    /// Pointer state gathered since the last frame
    pub pointer: PointerInput,

    /// Info card requested from a row, shown as a modal until Esc
    pub info_card: Option<InfoCard>,

    /// Thing under the pointer in the last frame
    pub highlighted: Option<ThingId>,

    pub show_help: bool,

    pub caravan: CaravanRoster,

    /// Captured log lines for the status bar
    pub log_ring: LogRing,

    pub paused: bool,
    pub should_quit: bool,

    /// Game ticks elapsed
    pub clock: u64,

    pub toast: Option<Toast>,
}

impl App {
    pub fn new(config: &Config, world: Vec<Stockpile>, log_ring: LogRing) -> Self {
        let selected = (!world.is_empty()).then_some(0);
        Self {
            world,
            selected,
            panel: ContentsPanel::new(),
            strings: Strings::with_overrides(&config.strings),
            theme: Theme::by_name(&config.theme),
            temperature_unit: config.temperature_unit,
            simulation: config.simulation.clone(),
            outdoor_temperature: config.storage.outdoor_temperature,
            pointer: PointerInput::default(),
            info_card: None,
            highlighted: None,
            show_help: false,
            caravan: CaravanRoster::default(),
            log_ring,
            paused: false,
            should_quit: false,
            clock: 0,
            toast: None,
        }
    }

    pub fn selected_storage(&self) -> Option<&Stockpile> {
        self.selected.and_then(|i| self.world.get(i))
    }

    /// Select storage `index`, opening a fresh panel on it
    pub fn select_storage(&mut self, index: usize) {
        if index >= self.world.len() || self.selected == Some(index) {
            return;
        }
        self.selected = Some(index);
        self.panel = ContentsPanel::new();
        self.info_card = None;
        self.highlighted = None;
        tracing::debug!(storage = index, "Selected storage");
    }

    /// Move the selection to the next storage, wrapping around
    pub fn cycle_storage(&mut self) {
        if self.world.is_empty() {
            return;
        }
        let next = self.selected.map_or(0, |i| (i + 1) % self.world.len());
        self.select_storage(next);
    }

    pub fn adjust_outdoor_temperature(&mut self, steps: i8) {
        self.outdoor_temperature += f32::from(steps) * TEMPERATURE_STEP;
        // Zero ticks only refreshes ambient temperatures
        for storage in &mut self.world {
            storage.tick(0, self.outdoor_temperature);
        }
        tracing::info!(
            temperature = self.outdoor_temperature,
            "Outdoor temperature changed"
        );
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        tracing::debug!(paused = self.paused, "Clock toggled");
    }

    /// One simulation clock step
    pub fn on_clock(&mut self) {
        if self.paused {
            return;
        }
        let ticks = self.simulation.ticks_per_interval;
        self.clock += ticks;
        for storage in &mut self.world {
            storage.tick(ticks, self.outdoor_temperature);
        }
    }

    pub fn clock_interval(&self) -> std::time::Duration {
        self.simulation.interval()
    }

    /// Run the panel for this frame inside `area`
    ///
    /// Returns false when there is no built storage to show.
    pub fn draw_panel(&mut self, frame: &mut Frame, area: Rect) -> bool {
        let Some(index) = self.selected else {
            return false;
        };
        if !ContentsPanel::is_visible(self.world.get(index)) {
            return false;
        }
        let Some(storage) = self.world.get_mut(index) else {
            return false;
        };

        let caravan_before = self.caravan.len();
        let ctx = PanelContext {
            strings: &self.strings,
            faction: Faction::PLAYER,
            temperature_unit: self.temperature_unit,
        };

        // Modals own the pointer while open
        let pointer = if self.info_card.is_some() || self.show_help {
            PointerInput::default()
        } else {
            self.pointer
        };
        let mut ui = TerminalUi::new(frame, &self.theme, pointer);
        self.panel
            .on_frame(&mut ui, &ctx, storage, &mut self.caravan, area);
        let outcome = ui.finish();

        if outcome.info_card.is_some() {
            self.info_card = outcome.info_card;
        }
        self.highlighted = outcome.highlighted;

        let added = self.caravan.len() - caravan_before;
        if added > 0 {
            self.show_toast(format!("✓ {} added to caravan", added));
        }
        true
    }

    /// Drop one-shot pointer input once a frame has seen it
    pub fn end_frame(&mut self) {
        self.pointer.clicked = false;
        self.pointer.wheel = 0;
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageSettings;
    use crate::demo;
    use crate::world::{Storage, Thing};

    fn app() -> App {
        let config = Config::default();
        App::new(&config, demo::world(&config.storage), LogRing::new())
    }

    #[test]
    fn test_starts_on_first_storage() {
        let app = app();
        assert_eq!(app.selected, Some(0));
        assert_eq!(
            app.selected_storage().map(|s| s.label()),
            Some("Root cellar")
        );
    }

    #[test]
    fn test_cycle_storage_wraps_and_resets_panel() {
        let mut app = app();
        app.panel.render_state_mut().scroll.update_dimensions(30, 10);
        app.panel.render_state_mut().scroll.scroll_by(5);
        app.info_card = Some(InfoCard {
            id: ThingId(1),
            label: "potatoes".into(),
            description: String::new(),
        });

        app.cycle_storage();
        assert_eq!(app.selected, Some(1));
        assert_eq!(app.panel.render_state().scroll.offset(), 0);
        assert!(app.info_card.is_none());

        app.cycle_storage();
        app.cycle_storage();
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_clock_advances_rot_unless_paused() {
        let config = Config {
            storage: StorageSettings {
                root_cellar_temperature: 20.0,
                outdoor_temperature: 20.0,
            },
            ..Config::default()
        };
        let mut app = App::new(&config, demo::world(&config.storage), LogRing::new());
        let progress = |app: &App| {
            app.world[0]
                .get(ThingId(3))
                .and_then(|t| t.rot().map(|r| r.progress()))
        };

        app.on_clock();
        assert_eq!(app.clock, 250);
        assert_eq!(progress(&app), Some(250.0));

        app.toggle_pause();
        app.on_clock();
        assert_eq!(app.clock, 250);
        assert_eq!(progress(&app), Some(250.0));
    }

    #[test]
    fn test_caravan_roster_ignores_duplicates() {
        let mut roster = CaravanRoster::default();
        roster.select_now(&[ThingId(1), ThingId(2)]);
        roster.select_now(&[ThingId(2), ThingId(3)]);
        assert_eq!(roster.len(), 3);
        assert!(roster.contains(ThingId(3)));
    }
}
