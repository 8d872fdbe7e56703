//! Shared test utilities for toast
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::{App, ToastRequest};
    use crate::config::Config;
    use crate::notification::Severity;
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use std::time::Duration;

    /// Helper to create App with default config for tests
    pub fn test_app(message: &str) -> App {
        let config = Config::default();
        App::new(ToastRequest::new(message, &config), &config, false)
    }

    /// Helper to create App for a specific severity and duration
    pub fn app_with_request(message: &str, severity: Severity, duration: Duration) -> App {
        let request = ToastRequest {
            message: message.to_string(),
            severity,
            duration,
        };
        App::new(request, &Config::default(), false)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Helper to create a mouse event of the given kind at a position
    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Helper to create a left-button press at a position
    pub fn left_click(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }
}
