//! The notification surface
//!
//! [`ToastSurface`] is the handle a [`Notifier`](super::Notifier) drives. It
//! stands for the pre-existing surface and its children (icon, message,
//! progress indicator, close control); the notifier only changes their
//! presentation, it never creates or destroys them.

use std::time::{Duration, Instant};

use super::color::Rgba;

/// Length of the slide/fade transition between hidden and shown
pub const TRANSITION: Duration = Duration::from_millis(300);

/// Effect applied to whatever is drawn beneath the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    #[default]
    None,
    /// Blur radius in pixels
    Blur(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub color: Rgba,
    pub width: u16,
}

impl Border {
    /// Single-cell border
    pub fn new(color: Rgba) -> Self {
        Self { color, width: 1 }
    }
}

/// Vertical placement of the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Lifted above its resting position by 150% of its height
    #[default]
    Offscreen,
    Resting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opacity {
    #[default]
    Transparent,
    Opaque,
}

/// Horizontal scale of the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressScale {
    #[default]
    Zero,
    Full,
}

/// Presentation setters for a notification surface
pub trait ToastSurface {
    fn set_icon(&mut self, icon: &str);

    /// Plain text, never interpreted as markup
    fn set_message(&mut self, message: &str);

    fn set_backdrop(&mut self, backdrop: Backdrop);
    fn set_background(&mut self, color: Rgba);
    fn set_message_color(&mut self, color: Rgba);
    fn set_progress_color(&mut self, color: Rgba);
    fn set_border(&mut self, border: Border);

    /// Move the surface; `at` is when the transition starts
    fn set_placement(&mut self, placement: Placement, opacity: Opacity, at: Instant);

    fn set_progress(&mut self, scale: ProgressScale);
}

/// In-memory surface, drawn by [`render_notification`](super::render_notification)
#[derive(Debug, Clone, Default)]
pub struct SurfaceState {
    pub icon: String,
    pub message: String,
    pub backdrop: Backdrop,
    pub background: Rgba,
    pub message_color: Rgba,
    pub progress_color: Rgba,
    pub border: Option<Border>,
    pub placement: Placement,
    pub opacity: Opacity,
    pub progress: ProgressScale,
    /// When the placement last changed; `None` until first shown
    pub changed_at: Option<Instant>,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shown state: resting in place and opaque
    pub fn is_visible(&self) -> bool {
        self.placement == Placement::Resting && self.opacity == Opacity::Opaque
    }

    /// Hidden state: lifted away and transparent
    pub fn is_hidden(&self) -> bool {
        self.placement == Placement::Offscreen && self.opacity == Opacity::Transparent
    }

    /// Fraction of the current transition that has elapsed at `now`
    pub fn transition_progress(&self, now: Instant) -> f32 {
        match self.changed_at {
            Some(at) => {
                let elapsed = now.saturating_duration_since(at);
                (elapsed.as_secs_f32() / TRANSITION.as_secs_f32()).min(1.0)
            }
            None => 1.0,
        }
    }

    /// True once the last transition has finished
    pub fn is_settled(&self, now: Instant) -> bool {
        self.transition_progress(now) >= 1.0
    }
}

impl ToastSurface for SurfaceState {
    fn set_icon(&mut self, icon: &str) {
        icon.clone_into(&mut self.icon);
    }

    fn set_message(&mut self, message: &str) {
        message.clone_into(&mut self.message);
    }

    fn set_backdrop(&mut self, backdrop: Backdrop) {
        self.backdrop = backdrop;
    }

    fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    fn set_message_color(&mut self, color: Rgba) {
        self.message_color = color;
    }

    fn set_progress_color(&mut self, color: Rgba) {
        self.progress_color = color;
    }

    fn set_border(&mut self, border: Border) {
        self.border = Some(border);
    }

    fn set_placement(&mut self, placement: Placement, opacity: Opacity, at: Instant) {
        // Re-applying the same state must not restart the transition
        if self.placement == placement && self.opacity == opacity {
            return;
        }
        self.placement = placement;
        self.opacity = opacity;
        self.changed_at = Some(at);
    }

    fn set_progress(&mut self, scale: ProgressScale) {
        self.progress = scale;
    }
}
