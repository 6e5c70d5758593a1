// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, fetch completions)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod theme;
pub mod ui;

use crate::alerts::dispatch;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::portal::PortalApi;
use anyhow::{Context, Result};
use app::{App, ClusterListResult, DetailTab};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI until the user quits
pub async fn run_tui(config: Config, portal: Arc<dyn PortalApi>, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (completions_tx, mut completions_rx) = dispatch::completion_channel();
    let (clusters_tx, mut clusters_rx) = mpsc::unbounded_channel::<ClusterListResult>();

    let mut app = App::new(&config, portal, log_buffer, completions_tx, clusters_tx);
    app.request_clusters();

    let result = run_event_loop(&mut terminal, &mut app, &mut completions_rx, &mut clusters_rx).await;

    // Dropping the app closes the completion channel; fetches still in
    // flight resolve into nothing.
    drop(app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on keyboard input, the redraw tick, fetch completions and the
/// cluster list. Each wake-up re-evaluates the alerts fetch gate.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    completions_rx: &mut dispatch::CompletionReceiver,
    clusters_rx: &mut mpsc::UnboundedReceiver<ClusterListResult>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }

            Some(completion) = completions_rx.recv() => {
                app.on_fetch_completed(completion);
            }

            Some(result) = clusters_rx.recv() => {
                app.on_clusters_loaded(result);
            }
        }

        app.sync_alerts();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char('1') => app.set_tab(DetailTab::Overview),
        KeyCode::Char('2') => app.set_tab(DetailTab::Alerts),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('x') | KeyCode::Esc => {
            app.dismiss_error();
        }
        KeyCode::Char('y') => app.copy_alerts(),
        _ => {}
    }
}
