// Components module - building blocks of the terminal shell
//
// - Title bar: app name, world clock, outdoor temperature
// - Storage tabs: one tab per storage, selected one highlighted
// - Status bar: latest log line, caravan count, key hints
// - Toast: short-lived notification overlay
// - Scrollbar: shared by the panel host

pub mod scrollbar;
pub mod status_bar;
pub mod storage_tabs;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
