//! Severity levels and their presentation presets

use serde::Deserialize;
use std::fmt;

use crate::theme::toast::{self, Preset};

/// Classification of a toast message - selects icon, accent and tint
///
/// Parsing is lenient: anything that is not exactly one of the four known
/// names becomes [`Severity::Info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Error,
        Severity::Warning,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    /// Fixed presentation for this severity
    pub fn preset(self) -> &'static Preset {
        match self {
            Severity::Info => &toast::INFO,
            Severity::Success => &toast::SUCCESS,
            Severity::Error => &toast::ERROR,
            Severity::Warning => &toast::WARNING,
        }
    }

    /// Parse a severity name, reporting whether it was recognized
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "info" => Some(Severity::Info),
            "success" => Some(Severity::Success),
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            _ => None,
        }
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::parse(name).unwrap_or_default()
    }
}

impl From<String> for Severity {
    fn from(name: String) -> Self {
        Severity::from(name.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
