// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, simulation clock)
// - Headless single-frame snapshots

pub mod app;
pub mod components;
pub mod host;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::demo;
use crate::logging::LogRing;
use anyhow::{bail, Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{CrosstermBackend, TestBackend},
    layout::Position,
    Terminal,
};
use std::io;
use std::time::Duration;
use traits::Interactive;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: Config, log_ring: LogRing) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, demo::world(&config.storage), log_ring);
    tracing::info!(storages = app.world.len(), "Demo world loaded");

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Each iteration draws one frame, then waits for whichever comes first:
/// terminal input or the next simulation clock step.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut clock = tokio::time::interval(app.clock_interval());

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;
        app.end_frame();

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = clock.tick() => {
                app.on_clock();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Panel
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if handle_modal_keys(app, &key_event) {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    app.panel.handle_key(key_event);
}

/// Keys while a modal is open; every key but quit is absorbed
fn handle_modal_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.info_card.is_none() && !app.show_help {
        return false;
    }

    match key_event.code {
        KeyCode::Esc => {
            app.info_card = None;
            app.show_help = false;
        }
        KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
    true
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Tab => app.cycle_storage(),
        KeyCode::Char('[') => app.adjust_outdoor_temperature(-1),
        KeyCode::Char(']') => app.adjust_outdoor_temperature(1),
        KeyCode::Char(' ') => app.toggle_pause(),
        KeyCode::Char('?') => app.show_help = true,
        _ => return false,
    }
    true
}

/// Handle mouse input
///
/// Only records the pointer; the next frame's render pass does the
/// hit-testing.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let position = Position::new(mouse_event.column, mouse_event.row);
    match mouse_event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.pointer.position = Some(position);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.pointer.position = Some(position);
            app.pointer.clicked = true;
        }
        MouseEventKind::ScrollDown => {
            app.pointer.position = Some(position);
            app.pointer.wheel += 1;
        }
        MouseEventKind::ScrollUp => {
            app.pointer.position = Some(position);
            app.pointer.wheel -= 1;
        }
        _ => {}
    }
}

/// Render one frame headless and return it as text, one line per row
pub fn render_snapshot(
    config: &Config,
    storage: usize,
    width: u16,
    height: u16,
    hover: Option<Position>,
) -> Result<String> {
    let world = demo::world(&config.storage);
    if storage >= world.len() {
        bail!(
            "No storage {} in the demo world (0-{})",
            storage,
            world.len() - 1
        );
    }

    let mut app = App::new(config, world, LogRing::new());
    app.select_storage(storage);
    app.pointer.position = hover;

    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).context("Failed to create test backend")?;
    terminal
        .draw(|f| views::draw(f, &mut app))
        .context("Failed to draw snapshot")?;

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let lines: Vec<String> = (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect();

    Ok(lines.join("\n"))
}
