//! Terminal rendering and event loop for lister.
//!
//! Handles setup/teardown of raw mode, alternate screen and mouse capture, redraws,
//! and events (keypress, mouse, resize) to app logic.

use crate::app::{AppState, KeypressResult, UpdateQueue};
use crate::ui;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::{io, time::Duration};

/// Initializes the terminal in raw mode and alternate sceen and runs the main event loop.
///
/// Blocks until quit. Handles all input and UI rendering.
///
/// Returns an std::io::Error if terminal setup or teardown fails.
pub(crate) fn run_terminal(app: &mut AppState, queue: &UpdateQueue) -> io::Result<()> {
    let mouse = app.config().display().mouse();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, app, queue);

    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop of lister: applies queued updates, draws the UI, polls for events and
/// dispatches them to the app.
/// Returns on quit
fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    queue: &UpdateQueue,
) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    // First frame, before anything arrives
    terminal.draw(|f| ui::render(f, app))?;

    loop {
        if app.tick(queue) {
            terminal.draw(|f| ui::render(f, app))?;
        }

        // Event Polling
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                // handle keypress
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match app.handle_keypress(key) {
                        KeypressResult::Quit => break,
                        KeypressResult::Consumed => {
                            terminal.draw(|f| ui::render(f, app))?;
                        }
                        KeypressResult::Continue => {}
                    }
                }

                Event::Mouse(mouse) => {
                    if app.handle_mouse(mouse) {
                        terminal.draw(|f| ui::render(f, app))?;
                    }
                }

                // handle resize
                Event::Resize(_, _) => {
                    terminal.draw(|f| ui::render(f, app))?;
                }

                _ => {}
            }
        }
    }
    Ok(())
}
