//! Application state: the driver handle and key-to-command mapping.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use letterloan::{Command, SessionDriver, SessionInput, SessionView};
use tokio::sync::watch;
use tracing::debug;

/// Holds the driver handle and follows its view channel.
pub struct App {
    driver: SessionDriver,
    views: watch::Receiver<SessionView>,
}

impl App {
    /// Spawns a session driver and attaches to its projection.
    pub fn new() -> Self {
        let driver = SessionDriver::spawn();
        let views = driver.views();
        Self { driver, views }
    }

    /// The latest display projection.
    pub fn view(&self) -> SessionView {
        self.views.borrow().clone()
    }

    /// Maps a terminal key event to a session input. Returns `true` when
    /// the presenter asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind == KeyEventKind::Release {
            return Ok(false);
        }

        let input = match key.code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Char('1') => Some(SessionInput::Command(Command::Start)),
            KeyCode::Char('2') => Some(SessionInput::Command(Command::Borrow)),
            KeyCode::Char('3') => Some(SessionInput::Command(Command::Correct)),
            KeyCode::Char('4') => Some(SessionInput::Command(Command::Next)),
            KeyCode::Char('0') => Some(SessionInput::Command(Command::Reset)),
            // Space and letters go through the abstract key routing, the
            // same path a hardware buzzer or foot pedal would use.
            KeyCode::Char(ch) => Some(SessionInput::Key(ch)),
            _ => None,
        };

        if let Some(input) = input {
            debug!(?input, "presenter input");
            self.driver.send(input)?;
        }
        Ok(false)
    }
}
