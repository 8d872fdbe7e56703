use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::Paragraph,
};
use std::time::Instant;

use super::app_state::App;
use crate::notification::render_notification;
use crate::theme;

const HINTS: &[(&str, &str)] = &[("x/Esc", "dismiss"), ("r", "replay"), ("q", "quit")];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.render_at(frame, Instant::now());
    }

    pub fn render_at(&mut self, frame: &mut Frame, now: Instant) {
        let layout =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());

        frame.render_widget(Paragraph::new(theme::help_line::hints(HINTS)), layout[1]);

        // Drawn last so the toast sits on top of everything else
        self.toast_regions = self
            .notifier
            .surface()
            .and_then(|surface| render_notification(frame, surface, self.anchor, now));
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
