// Views module - screen-level rendering logic
//
// One screen: title bar, the bordered contents panel for the selected
// storage, and the status bar. Modals and the toast draw on top.

mod modal;

use super::app::App;
use crate::i18n::keys;
use crate::panel::{ContentsPanel, MARGIN, TAB_STRIP_HEIGHT};
use crate::tui::components::{self, storage_tabs};
use crate::world::Storage;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const TITLE_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 2;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);
    components::render_status(f, chunks[2], app);
    render_panel(f, chunks[1], app);

    if app.show_help {
        modal::render_help(f, app);
    } else if let Some(card) = app.info_card.as_ref() {
        modal::render_info_card(f, card, app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

/// Bordered panel block with the storage tabs, then the panel itself
///
/// The block border doubles as the panel's margin, so the panel gets the
/// whole block area.
fn render_panel(f: &mut Frame, area: Rect, app: &mut App) {
    let title = match app.selected_storage() {
        Some(storage) => format!(" {} ─ {} ", app.strings.get(keys::TAB_CONTENTS), storage.label()),
        None => format!(" {} ", app.strings.get(keys::TAB_CONTENTS)),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(title);
    f.render_widget(block, area);

    let tabs = Rect::new(
        area.x + MARGIN,
        area.y + MARGIN,
        area.width.saturating_sub(2 * MARGIN),
        TAB_STRIP_HEIGHT.min(area.height.saturating_sub(2 * MARGIN)),
    );
    storage_tabs::render(f, tabs, &app.world, app.selected, &app.theme);

    if !app.draw_panel(f, area) {
        let notice = Paragraph::new(app.strings.get(keys::UNDER_CONSTRUCTION).to_string())
            .style(Style::default().fg(app.theme.muted));
        f.render_widget(notice, ContentsPanel::content_bounds(area));
    }
}
