//! Terminal User Interface (TUI) module
//!
//! The interactive session: an input box, the saved link list and
//! toast-style notices, with live reload when another process edits
//! the stash.

use std::io;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod app;
mod ui;

use app::App;
use ui::ui;

use crate::config::Config;
use crate::errors::{Result, ShortlyError};
use crate::system::lockfile::Lockfile;

/// Redraw cadence; also bounds how stale a toast or an external change
/// can get before the screen notices.
const TICK_RATE: Duration = Duration::from_millis(200);

/// Run the interactive session
pub fn run_tui(config: &Config) -> Result<()> {
    // One session at a time. The lockfile also carries our PID, which is
    // how change announcements from one-shot commands find us.
    let _lock = Lockfile::acquire(config.lock_path())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Main application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    ShortlyError: From<<B as Backend>::Error>,
{
    while !app.should_quit {
        app.tick();
        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
    }
    Ok(())
}
