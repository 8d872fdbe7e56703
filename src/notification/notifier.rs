//! Notifier - configures, reveals and hides a single toast surface
//!
//! Exactly one auto-hide timer is current at a time. Every `show` cancels the
//! previous timer before scheduling its own, so a stale timer from an earlier
//! call can never hide a newer toast.

use std::time::{Duration, Instant};

use super::severity::Severity;
use super::surface::{Backdrop, Border, Opacity, Placement, ProgressScale, ToastSurface};
use crate::theme;

/// Delay before a shown toast hides itself
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Blur radius applied behind the surface
pub const DEFAULT_BACKDROP_BLUR: u16 = 10;

/// The outstanding auto-hide timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDismiss {
    /// Increases with every scheduled timer
    pub id: u64,
    pub deadline: Instant,
}

impl PendingDismiss {
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Drives one injected [`ToastSurface`]
#[derive(Debug)]
pub struct Notifier<S> {
    /// `None` when there is no surface to drive; every call is then a no-op
    surface: Option<S>,
    pending: Option<PendingDismiss>,
    next_timer_id: u64,
    default_severity: Severity,
    default_duration: Duration,
    backdrop: Backdrop,
}

impl<S: ToastSurface> Notifier<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface: Some(surface),
            ..Self::detached()
        }
    }

    /// A notifier without a surface
    pub fn detached() -> Self {
        Self {
            surface: None,
            pending: None,
            next_timer_id: 0,
            default_severity: Severity::Info,
            default_duration: DEFAULT_DURATION,
            backdrop: Backdrop::Blur(DEFAULT_BACKDROP_BLUR),
        }
    }

    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    pub fn with_default_severity(mut self, severity: Severity) -> Self {
        self.default_severity = severity;
        self
    }

    pub fn with_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Show a toast with the default severity and duration
    pub fn show(&mut self, message: &str) {
        self.show_with_severity(message, self.default_severity);
    }

    /// Show a toast with the default duration
    pub fn show_with_severity(&mut self, message: &str, severity: Severity) {
        self.show_for(message, severity, self.default_duration);
    }

    pub fn show_for(&mut self, message: &str, severity: Severity, duration: Duration) {
        self.show_at(Instant::now(), message, severity, duration);
    }

    pub fn show_success(&mut self, message: &str) {
        self.show_with_severity(message, Severity::Success);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with_severity(message, Severity::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with_severity(message, Severity::Error);
    }

    /// Configure and reveal the surface at `now`, hiding it after `duration`
    pub fn show_at(&mut self, now: Instant, message: &str, severity: Severity, duration: Duration) {
        let Some(surface) = self.surface.as_mut() else {
            #[cfg(debug_assertions)]
            log::debug!("No toast surface attached, dropping {:?}", message);
            return;
        };

        let preset = severity.preset();

        surface.set_icon(preset.icon);
        surface.set_backdrop(self.backdrop);
        surface.set_message(message);
        surface.set_background(preset.background);
        surface.set_message_color(theme::toast::MESSAGE);
        surface.set_progress_color(preset.accent);
        surface.set_border(Border::new(
            preset.accent.with_alpha(theme::toast::BORDER_ALPHA),
        ));

        surface.set_placement(Placement::Resting, Opacity::Opaque, now);
        surface.set_progress(ProgressScale::Full);

        self.cancel_pending();
        self.schedule(now, duration);

        #[cfg(debug_assertions)]
        log::debug!(
            "Showing {} toast for {}ms: {:?}",
            severity,
            duration.as_millis(),
            message
        );
    }

    /// Close-control action: cancel the pending timer and hide immediately
    pub fn dismiss(&mut self) {
        self.dismiss_at(Instant::now());
    }

    pub fn dismiss_at(&mut self, now: Instant) {
        if self.surface.is_none() {
            return;
        }
        self.cancel_pending();
        self.hide(now);

        #[cfg(debug_assertions)]
        log::debug!("Toast dismissed");
    }

    /// Fire the auto-hide timer if it is due, using the wall clock
    pub fn poll(&mut self) -> bool {
        self.tick(Instant::now())
    }

    /// Fire the auto-hide timer if it is due at `now`.
    ///
    /// Returns true when the timer fired and the surface was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if pending.is_due(now) => {
                self.pending = None;
                self.hide(now);

                #[cfg(debug_assertions)]
                log::debug!("Auto-hide timer {} fired", pending.id);
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> Option<&PendingDismiss> {
        self.pending.as_ref()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn default_severity(&self) -> Severity {
        self.default_severity
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    fn schedule(&mut self, now: Instant, duration: Duration) {
        // A duration too large to represent never fires
        let Some(deadline) = now.checked_add(duration) else {
            return;
        };
        self.next_timer_id += 1;
        self.pending = Some(PendingDismiss {
            id: self.next_timer_id,
            deadline,
        });
    }

    fn cancel_pending(&mut self) {
        self.pending = None;
    }

    fn hide(&mut self, at: Instant) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_placement(Placement::Offscreen, Opacity::Transparent, at);
            surface.set_progress(ProgressScale::Zero);
        }
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod notifier_tests;
