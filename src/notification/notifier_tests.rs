//! Tests for notifier

use super::*;
use crate::notification::surface::{SurfaceState, TRANSITION};
use proptest::prelude::*;

fn notifier() -> Notifier<SurfaceState> {
    Notifier::new(SurfaceState::new())
}

fn surface(notifier: &Notifier<SurfaceState>) -> &SurfaceState {
    notifier.surface().unwrap()
}

#[test]
fn test_show_success_applies_preset() {
    let mut notifier = notifier();
    let t0 = Instant::now();
    notifier.show_at(t0, "Saved!", Severity::from("success"), DEFAULT_DURATION);

    let s = surface(&notifier);
    assert_eq!(s.icon, "✅");
    assert_eq!(s.message, "Saved!");
    assert_eq!(s.background.to_string(), "rgba(186,255,211,0.9)");
    assert_eq!(s.progress_color.to_string(), "#16a34a");
    assert_eq!(s.border.unwrap().color.to_hex(), "#16a34a40");
    assert_eq!(s.border.unwrap().width, 1);
    assert_eq!(s.message_color, theme::toast::MESSAGE);
    assert_eq!(s.backdrop, Backdrop::Blur(DEFAULT_BACKDROP_BLUR));
}

#[test]
fn test_show_reveals_surface_and_fills_progress() {
    let mut notifier = notifier();
    notifier.show("Hello");

    let s = surface(&notifier);
    assert!(s.is_visible());
    assert_eq!(s.progress, ProgressScale::Full);
}

#[test]
fn test_show_defaults_to_info_for_four_seconds() {
    let mut notifier = notifier();
    let before = Instant::now();
    notifier.show("Note");
    let after = Instant::now();

    let s = surface(&notifier);
    assert_eq!(s.icon, "ℹ️");
    assert_eq!(s.background.to_string(), "rgba(204,224,255,0.9)");

    let deadline = notifier.pending().unwrap().deadline;
    assert!(deadline >= before + DEFAULT_DURATION);
    assert!(deadline <= after + DEFAULT_DURATION);
}

#[test]
fn test_show_without_severity_matches_info() {
    let t0 = Instant::now();
    let mut implicit = notifier();
    let mut explicit = notifier();
    implicit.show_at(t0, "Note", implicit.default_severity(), DEFAULT_DURATION);
    explicit.show_at(t0, "Note", Severity::Info, DEFAULT_DURATION);

    let (a, b) = (surface(&implicit), surface(&explicit));
    assert_eq!(a.icon, b.icon);
    assert_eq!(a.background, b.background);
    assert_eq!(a.border, b.border);
    assert_eq!(implicit.pending().unwrap().deadline, explicit.pending().unwrap().deadline);
}

#[test]
fn test_error_auto_hides_after_custom_duration() {
    let mut notifier = notifier();
    let t0 = Instant::now();
    notifier.show_at(t0, "Oops", Severity::Error, Duration::from_millis(1000));

    let s = surface(&notifier);
    assert_eq!(s.icon, "❌");
    assert_eq!(s.background.to_string(), "rgba(255,198,198,0.9)");

    assert!(!notifier.tick(t0 + Duration::from_millis(999)));
    assert!(surface(&notifier).is_visible());

    assert!(notifier.tick(t0 + Duration::from_millis(1000)));
    let s = surface(&notifier);
    assert!(s.is_hidden());
    assert_eq!(s.progress, ProgressScale::Zero);
    assert!(notifier.pending().is_none());
}

#[test]
fn test_timer_fires_only_once() {
    let mut notifier = notifier();
    let t0 = Instant::now();
    notifier.show_at(t0, "Once", Severity::Info, Duration::from_millis(10));

    assert!(notifier.tick(t0 + Duration::from_millis(10)));
    assert!(!notifier.tick(t0 + Duration::from_millis(20)));
}

#[test]
fn test_dismiss_hides_immediately_and_cancels_timer() {
    let mut notifier = notifier();
    let t0 = Instant::now();
    notifier.show_at(t0, "Bye", Severity::Warning, DEFAULT_DURATION);

    notifier.dismiss_at(t0 + Duration::from_millis(500));
    let s = surface(&notifier);
    assert!(s.is_hidden());
    assert_eq!(s.progress, ProgressScale::Zero);
    assert!(notifier.pending().is_none());

    // The original deadline has no further observable effect
    let changed_at = s.changed_at;
    assert!(!notifier.tick(t0 + DEFAULT_DURATION));
    assert_eq!(surface(&notifier).changed_at, changed_at);
}

#[test]
fn test_double_dismiss_is_harmless() {
    let mut notifier = notifier();
    let t0 = Instant::now();
    notifier.show_at(t0, "Twice", Severity::Info, DEFAULT_DURATION);

    notifier.dismiss_at(t0 + Duration::from_millis(100));
    notifier.dismiss_at(t0 + Duration::from_millis(200));

    let s = surface(&notifier);
    assert!(s.is_hidden());
    assert_eq!(s.changed_at, Some(t0 + Duration::from_millis(100)));
}

#[test]
fn test_new_show_supersedes_pending_timer() {
    let mut notifier = notifier();
    let t0 = Instant::now();
    notifier.show_at(t0, "First", Severity::Info, Duration::from_millis(1000));
    let first_id = notifier.pending().unwrap().id;

    notifier.show_at(
        t0 + Duration::from_millis(500),
        "Second",
        Severity::Success,
        Duration::from_millis(4000),
    );

    let pending = notifier.pending().unwrap();
    assert_ne!(pending.id, first_id);
    assert_eq!(surface(&notifier).message, "Second");
    assert_eq!(surface(&notifier).icon, "✅");

    // The first call's deadline no longer hides the second toast
    assert!(!notifier.tick(t0 + Duration::from_millis(1200)));
    assert!(surface(&notifier).is_visible());

    assert!(notifier.tick(t0 + Duration::from_millis(4500)));
    assert!(surface(&notifier).is_hidden());
}

#[test]
fn test_show_while_visible_keeps_transition_start() {
    let mut notifier = notifier();
    let t0 = Instant::now();
    notifier.show_at(t0, "First", Severity::Info, DEFAULT_DURATION);
    notifier.show_at(t0 + TRANSITION, "Second", Severity::Info, DEFAULT_DURATION);

    assert_eq!(surface(&notifier).changed_at, Some(t0));
}

#[test]
fn test_show_after_hide_reveals_again() {
    let mut notifier = notifier();
    let t0 = Instant::now();
    notifier.show_at(t0, "One", Severity::Info, Duration::from_millis(10));
    notifier.tick(t0 + Duration::from_millis(10));
    assert!(surface(&notifier).is_hidden());

    notifier.show_at(t0 + Duration::from_millis(50), "Two", Severity::Info, DEFAULT_DURATION);
    assert!(surface(&notifier).is_visible());
    assert_eq!(surface(&notifier).progress, ProgressScale::Full);
}

#[test]
fn test_zero_duration_hides_on_next_tick() {
    let mut notifier = notifier();
    let t0 = Instant::now();
    notifier.show_at(t0, "Blink", Severity::Info, Duration::ZERO);

    assert!(surface(&notifier).is_visible());
    assert!(notifier.tick(t0));
    assert!(surface(&notifier).is_hidden());
}

#[test]
fn test_unrepresentable_duration_never_schedules() {
    let mut notifier = notifier();
    notifier.show_for("Forever", Severity::Info, Duration::MAX);

    assert!(surface(&notifier).is_visible());
    assert!(notifier.pending().is_none());
}

#[test]
fn test_detached_notifier_is_noop() {
    let mut notifier: Notifier<SurfaceState> = Notifier::detached();
    let t0 = Instant::now();

    notifier.show_at(t0, "Nobody home", Severity::Error, DEFAULT_DURATION);
    notifier.dismiss_at(t0);

    assert!(!notifier.is_attached());
    assert!(notifier.surface().is_none());
    assert!(notifier.pending().is_none());
    assert!(!notifier.tick(t0 + DEFAULT_DURATION));
}

#[test]
fn test_builder_defaults_apply() {
    let mut notifier = notifier()
        .with_default_severity(Severity::Warning)
        .with_default_duration(Duration::from_millis(250))
        .with_backdrop(Backdrop::None);
    let before = Instant::now();
    notifier.show("Configured");

    let s = surface(&notifier);
    assert_eq!(s.icon, "⚠️");
    assert_eq!(s.backdrop, Backdrop::None);
    assert!(notifier.pending().unwrap().deadline >= before + Duration::from_millis(250));
    assert!(notifier.pending().unwrap().deadline < before + DEFAULT_DURATION);
}

#[test]
fn test_shorthands_select_severity() {
    let mut notifier = notifier();

    notifier.show_success("ok");
    assert_eq!(surface(&notifier).icon, "✅");
    notifier.show_warning("hm");
    assert_eq!(surface(&notifier).icon, "⚠️");
    notifier.show_error("no");
    assert_eq!(surface(&notifier).icon, "❌");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The message is written without any transformation
    #[test]
    fn prop_message_written_verbatim(message in any::<String>()) {
        let mut notifier = notifier();
        notifier.show(&message);
        prop_assert_eq!(&surface(&notifier).message, &message);
    }

    /// For any sequence of shows, only the last message is visible and only
    /// the last timer is pending
    #[test]
    fn prop_last_show_wins(
        shows in prop::collection::vec(("[a-zA-Z0-9 ]{1,30}", 1u64..5000), 1..10)
    ) {
        let mut notifier = notifier();
        let t0 = Instant::now();

        for (i, (message, ms)) in shows.iter().enumerate() {
            let at = t0 + Duration::from_millis(i as u64);
            notifier.show_at(at, message, Severity::Info, Duration::from_millis(*ms));
        }

        let (last_message, last_ms) = shows.last().unwrap();
        let last_at = t0 + Duration::from_millis((shows.len() - 1) as u64);
        prop_assert_eq!(&surface(&notifier).message, last_message);
        prop_assert_eq!(
            notifier.pending().unwrap().deadline,
            last_at + Duration::from_millis(*last_ms)
        );
        prop_assert_eq!(notifier.pending().unwrap().id, shows.len() as u64);
    }
}

#[test]
fn test_poll_fires_elapsed_timer() {
    let mut notifier = notifier();
    notifier.show_for("Now", Severity::Info, Duration::ZERO);

    assert!(notifier.poll());
    assert!(surface(&notifier).is_hidden());
    assert!(!notifier.poll());
}
