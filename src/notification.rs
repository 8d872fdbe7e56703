//! Notification module for toast
//!
//! A [`Notifier`] drives one injected [`ToastSurface`]: it applies the
//! severity's presentation, reveals the surface, hides it again after a delay
//! and supports manual dismissal. [`render_notification`] draws the in-memory
//! [`SurfaceState`] as a terminal overlay.

mod color;
mod notification_render;
mod notifier;
mod severity;
mod surface;

pub use color::Rgba;
pub use notification_render::{MARGIN, ToastRegions, render_notification};
pub use notifier::{DEFAULT_BACKDROP_BLUR, DEFAULT_DURATION, Notifier, PendingDismiss};
pub use severity::Severity;
pub use surface::{
    Backdrop, Border, Opacity, Placement, ProgressScale, SurfaceState, TRANSITION, ToastSurface,
};
