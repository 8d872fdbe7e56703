use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;

/// Timeout for event polling - bounds how late the auto-hide timer fires
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

impl App {
    /// Handle pending terminal events, then fire the auto-hide timer if due
    /// and move on from the startup warning once it has gone
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        self.notifier.tick(now);
        self.advance_at(now);
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc | KeyCode::Char('x') => self.dismiss(),
            KeyCode::Char('r') => self.replay(),
            _ => {}
        }
    }

    /// A left click on the close glyph dismisses the toast
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if self
            .toast_regions
            .is_some_and(|regions| regions.close_contains(mouse.column, mouse.row))
        {
            self.dismiss();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
