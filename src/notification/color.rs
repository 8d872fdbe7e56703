//! Colors with an alpha channel
//!
//! Terminal cells cannot be translucent, so every translucent color is
//! composited over an opaque base before it reaches ratatui.

use ratatui::style::Color;
use std::fmt;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Same channels with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Alpha as a fraction rounded to two decimals (230 -> 0.9)
    pub fn alpha_fraction(self) -> f32 {
        (f32::from(self.a) / 255.0 * 100.0).round() / 100.0
    }

    /// Composite this color over an opaque base (source-over).
    ///
    /// The result is always opaque.
    pub fn composite_over(self, base: Rgba) -> Rgba {
        let a = u16::from(self.a);
        let blend = |src: u8, dst: u8| -> u8 {
            ((u16::from(src) * a + u16::from(dst) * (255 - a) + 127) / 255) as u8
        };
        Rgba::rgb(
            blend(self.r, base.r),
            blend(self.g, base.g),
            blend(self.b, base.b),
        )
    }

    /// Linear interpolation towards `other`; `t` is clamped to `0.0..=1.0`
    pub fn mix(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let lerp = |from: u8, to: u8| -> u8 {
            (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
        };
        Rgba::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            lerp(self.a, other.a),
        )
    }

    /// Terminal color, ignoring alpha
    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    /// CSS notation: hex when opaque, `rgba(r,g,b,a)` otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.to_hex())
        } else {
            write!(
                f,
                "rgba({},{},{},{})",
                self.r,
                self.g,
                self.b,
                self.alpha_fraction()
            )
        }
    }
}
