use std::time::{Duration, Instant};

use crate::config::Config;
use crate::notification::{Notifier, Severity, SurfaceState, ToastRegions};
use crate::widgets::popup::Anchor;

/// The toast the host was asked to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

impl ToastRequest {
    /// Request using the configured severity and duration
    pub fn new(message: impl Into<String>, config: &Config) -> Self {
        Self {
            message: message.into(),
            severity: config.toast.severity,
            duration: config.toast.duration(),
        }
    }
}

pub struct App {
    pub notifier: Notifier<SurfaceState>,
    pub request: ToastRequest,
    pub anchor: Anchor,
    /// Where the toast was last drawn, for mouse hit-testing
    pub toast_regions: Option<ToastRegions>,
    /// Keep running after the toast has hidden
    pub stay: bool,
    pub should_quit: bool,
    /// Shown as a warning toast before the request
    pub startup_warning: Option<String>,
    /// The request waits for the startup warning to hide
    request_deferred: bool,
}

impl App {
    pub fn new(request: ToastRequest, config: &Config, stay: bool) -> Self {
        let notifier = if config.toast.enabled {
            Notifier::new(SurfaceState::new())
        } else {
            #[cfg(debug_assertions)]
            log::debug!("Toasts disabled in config, running without a surface");
            Notifier::detached()
        }
        .with_default_severity(config.toast.severity)
        .with_default_duration(config.toast.duration())
        .with_backdrop(config.toast.backdrop());

        Self {
            notifier,
            request,
            anchor: config.toast.position,
            toast_regions: None,
            stay,
            should_quit: false,
            startup_warning: None,
            request_deferred: false,
        }
    }

    pub fn with_startup_warning(mut self, warning: Option<String>) -> Self {
        self.startup_warning = warning;
        self
    }

    /// Show the requested toast
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Show the startup warning if there is one, otherwise the request
    pub fn start_at(&mut self, now: Instant) {
        match self.startup_warning.take() {
            Some(warning) if self.notifier.is_attached() => {
                self.notifier.show_at(
                    now,
                    &warning,
                    Severity::Warning,
                    self.notifier.default_duration(),
                );
                self.request_deferred = true;
            }
            _ => self.show_request_at(now),
        }
    }

    /// Show the requested toast again, superseding the pending auto-hide
    pub fn replay(&mut self) {
        self.request_deferred = false;
        self.show_request_at(Instant::now());
    }

    /// Show the deferred request once the warning has hidden and settled
    pub fn advance_at(&mut self, now: Instant) {
        if !self.request_deferred {
            return;
        }
        let warning_gone = self
            .notifier
            .surface()
            .is_none_or(|surface| surface.is_hidden() && surface.is_settled(now));
        if warning_gone {
            self.request_deferred = false;
            self.show_request_at(now);
        }
    }

    pub fn is_request_deferred(&self) -> bool {
        self.request_deferred
    }

    fn show_request_at(&mut self, now: Instant) {
        let ToastRequest {
            message,
            severity,
            duration,
        } = &self.request;
        self.notifier.show_at(now, message, *severity, *duration);
    }

    pub fn dismiss(&mut self) {
        self.notifier.dismiss();
        self.toast_regions = None;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_toast_visible(&self) -> bool {
        self.notifier.surface().is_some_and(SurfaceState::is_visible)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit_at(Instant::now())
    }

    /// Quit on request, or once the toast has hidden and finished animating
    pub fn should_quit_at(&self, now: Instant) -> bool {
        if self.should_quit {
            return true;
        }
        if self.stay || self.request_deferred {
            return false;
        }
        match self.notifier.surface() {
            Some(surface) => {
                self.notifier.pending().is_none()
                    && surface.is_hidden()
                    && surface.is_settled(now)
            }
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
