//! Tests for app_render

use crate::notification::TRANSITION;
use crate::test_utils::test_helpers::test_app;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::time::Instant;

fn render_to_string(app: &mut crate::app::App, now: Instant) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render_at(f, now)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_render_shows_hints() {
    let mut app = test_app("Hello");
    let output = render_to_string(&mut app, Instant::now());

    assert!(output.contains(" x/Esc dismiss • r replay • q quit "));
}

#[test]
fn test_render_shows_toast_and_records_regions() {
    let mut app = test_app("Profile updated");
    let t0 = Instant::now();
    app.start_at(t0);

    let output = render_to_string(&mut app, t0 + TRANSITION);

    assert!(output.contains("Profile updated"));
    assert!(app.toast_regions.is_some());
}

#[test]
fn test_render_without_toast_clears_regions() {
    let mut app = test_app("Hidden");
    let output = render_to_string(&mut app, Instant::now());

    assert!(!output.contains("Hidden"));
    assert!(app.toast_regions.is_none());
}

#[test]
fn test_render_with_detached_notifier() {
    let mut config = crate::config::Config::default();
    config.toast.enabled = false;
    let mut app = crate::app::App::new(
        crate::app::ToastRequest::new("Nowhere", &config),
        &config,
        false,
    );
    app.start();

    let output = render_to_string(&mut app, Instant::now());

    assert!(!output.contains("Nowhere"));
    assert!(app.toast_regions.is_none());
}
