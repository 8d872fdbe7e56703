// Configuration type definitions

use serde::Deserialize;
use std::time::Duration;

use crate::notification::{Backdrop, DEFAULT_BACKDROP_BLUR, DEFAULT_DURATION, Severity};
use crate::widgets::popup::Anchor;

/// Toast configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ToastConfig {
    /// When false no surface is attached and toasts are silently dropped
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Unknown names fall back to info
    #[serde(default)]
    pub severity: Severity,
    /// Blur radius in pixels, 0 disables the backdrop
    #[serde(default = "default_backdrop_blur")]
    pub backdrop_blur: u16,
    #[serde(default)]
    pub position: Anchor,
}

fn default_enabled() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION.as_millis() as u64
}

fn default_backdrop_blur() -> u16 {
    DEFAULT_BACKDROP_BLUR
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn backdrop(&self) -> Backdrop {
        match self.backdrop_blur {
            0 => Backdrop::None,
            px => Backdrop::Blur(px),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            enabled: default_enabled(),
            duration_ms: default_duration_ms(),
            severity: Severity::Info,
            backdrop_blur: default_backdrop_blur(),
            position: Anchor::TopCenter,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
}
