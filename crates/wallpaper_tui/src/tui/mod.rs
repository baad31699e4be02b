//! Terminal UI for wallpaper tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::config::TuiConfig;
use app::{App, Control};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal on drop, including on early return.
struct TerminalGuard {
    terminal: Term,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        restore_cursor(&mut self.terminal);
    }
}

/// Makes the cursor visible again, logging rather than failing.
fn restore_cursor<B: Backend>(terminal: &mut Terminal<B>) -> bool {
    match terminal.show_cursor() {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Failed to show cursor");
            false
        }
    }
}

/// Run the TUI client.
///
/// Logs go to the configured file so they don't interfere with the screen.
pub fn run_tui(config: &TuiConfig, log_level: Option<&str>) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(log_level.unwrap_or("info"))
            }),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(mode = %config.default_mode(), "Starting Wallpaper Tic-Tac-Toe TUI");

    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(*config.default_mode(), *config.show_inactive());
    let res = run_loop(&mut guard.terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        let frame_area = terminal.draw(|frame| ui::draw(frame, app))?.area;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code) == Control::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let inner = ui::board_inner(frame_area);
                match ui::cell_at(inner, mouse.column, mouse.row) {
                    Some(display) => app.handle_click(display),
                    None => debug!(x = mouse.column, y = mouse.row, "Click outside the grid"),
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_restore_cursor_after_hiding() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).expect("test terminal");
        terminal.hide_cursor().expect("hide cursor");
        assert!(restore_cursor(&mut terminal));
    }
}
