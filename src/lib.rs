//! toast library - transient terminal notifications
//!
//! This library exposes the notifier, its surface and renderer, and the host
//! application used by the `toast` binary.

pub mod app;
pub mod config;
pub mod error;
pub mod notification;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use notification::{Notifier, Severity, SurfaceState, ToastSurface};
