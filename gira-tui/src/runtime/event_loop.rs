use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::views::{handle_notification_key, handle_view_key};

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.notifications_open {
                    handle_notification_key(key, app);
                } else {
                    handle_view_key(key, app);
                }
            }
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
