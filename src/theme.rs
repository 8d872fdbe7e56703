//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode colors directly in render files

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);
}

/// Toast presentation table.
///
/// Translucent colors are composited over [`toast::BACKDROP`] when drawn.
pub mod toast {
    use crate::notification::Rgba;

    /// Per-severity presentation
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Preset {
        pub accent: Rgba,
        pub background: Rgba,
        pub icon: &'static str,
    }

    pub const INFO: Preset = Preset {
        accent: Rgba::rgb(0x3b, 0x82, 0xf6),
        background: Rgba::new(204, 224, 255, 230),
        icon: "ℹ️",
    };

    pub const SUCCESS: Preset = Preset {
        accent: Rgba::rgb(0x16, 0xa3, 0x4a),
        background: Rgba::new(186, 255, 211, 230),
        icon: "✅",
    };

    pub const ERROR: Preset = Preset {
        accent: Rgba::rgb(0xdc, 0x26, 0x26),
        background: Rgba::new(255, 198, 198, 230),
        icon: "❌",
    };

    pub const WARNING: Preset = Preset {
        accent: Rgba::rgb(0xea, 0xb3, 0x08),
        background: Rgba::new(255, 243, 206, 230),
        icon: "⚠️",
    };

    /// Message text color, identical for every severity
    pub const MESSAGE: Rgba = Rgba::rgb(0, 0, 0);

    /// Alpha applied to the accent color for the 1-cell border
    pub const BORDER_ALPHA: u8 = 0x40;

    /// Color the surface fades from and composites over
    pub const BACKDROP: Rgba = Rgba::rgb(26, 26, 46);

    pub const CLOSE: Rgba = Rgba::rgb(64, 64, 64);
    pub const CLOSE_GLYPH: &str = "✕";
    pub const PROGRESS_GLYPH: &str = "━";
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;
    use ratatui::text::{Line, Span};

    pub const KEY: Color = palette::TEXT_MUTED;

    /// `key desc • key desc` with keys in [`KEY`] and the rest dimmed
    pub fn hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
        let dim = Style::new().fg(KEY).add_modifier(Modifier::DIM);
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("• ", dim));
            }
            spans.push(Span::styled(*key, Style::new().fg(KEY)));
            spans.push(Span::styled(format!(" {desc} "), dim));
        }
        Line::from(spans)
    }

}
