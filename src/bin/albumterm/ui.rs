use std::io;
use std::time::Duration;

use albumterm::prefs::PreferenceStore;
use albumterm::remote::AlbumStore;
use albumterm::terminal_restore::TerminalRestoreGuard;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::render::draw;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configure the terminal, load the collection, and run the event loop until quit.
///
/// # Errors
///
/// Returns an error if terminal setup, drawing, or event reading fails.
pub(crate) fn run_ui<S: AlbumStore, P: PreferenceStore>(app: &mut App<S, P>) -> Result<()> {
    let terminal_guard = TerminalRestoreGuard::new();
    terminal_guard.enable_raw_mode()?;
    let mut stdout = io::stdout();
    terminal_guard.enter_alt_screen(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app_loop(&mut terminal, app);

    drop(terminal);
    terminal_guard.restore();

    result
}

fn app_loop<S: AlbumStore, P: PreferenceStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S, P>,
) -> Result<()> {
    // Show the empty shell while the first fetch is in flight.
    terminal.draw(|frame| draw(frame, app))?;
    app.load();
    terminal.draw(|frame| draw(frame, app))?;

    loop {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(_, _) => {}
                _ => continue,
            }
            terminal.draw(|frame| draw(frame, app))?;
        }
        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
