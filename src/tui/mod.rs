pub mod app;
pub mod draw;

use crate::tui::app::App;
use crate::tui::draw::draw_app;
use crossterm::event::{Event, KeyEventKind};
use std::io;
use std::time::Duration;

/// Puts the terminal back into cooked mode however the loop exits.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

pub fn run(mut app: App) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let _guard = TerminalGuard;

    while app.running {
        terminal.draw(|frame| draw_app(frame, &app))?;

        if crossterm::event::poll(Duration::from_millis(16))? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                _ => continue,
            }
        }
    }
    log::info!("map view closed");
    Ok(())
}
