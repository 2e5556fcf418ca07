//! Tailwind-style hue palette used by the section gradients.
//!
//! Only the 500 shade is needed; transparency is carried separately by
//! [`GradientToken`] so the same hue can be layered at different strengths.

use egui::Color32;
use std::fmt;

use crate::theme::hex_to_color32;

/// Hues available to section gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Purple,
    Blue,
    Pink,
    Indigo,
    Violet,
    Cyan,
    Teal,
    Green,
    Fuchsia,
    Rose,
}

impl Hue {
    /// Opaque 500-shade color of this hue.
    pub fn shade_500(self) -> Color32 {
        match self {
            Hue::Purple => hex_to_color32("#a855f7"),
            Hue::Blue => hex_to_color32("#3b82f6"),
            Hue::Pink => hex_to_color32("#ec4899"),
            Hue::Indigo => hex_to_color32("#6366f1"),
            Hue::Violet => hex_to_color32("#8b5cf6"),
            Hue::Cyan => hex_to_color32("#06b6d4"),
            Hue::Teal => hex_to_color32("#14b8a6"),
            Hue::Green => hex_to_color32("#22c55e"),
            Hue::Fuchsia => hex_to_color32("#d946ef"),
            Hue::Rose => hex_to_color32("#f43f5e"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Hue::Purple => "purple",
            Hue::Blue => "blue",
            Hue::Pink => "pink",
            Hue::Indigo => "indigo",
            Hue::Violet => "violet",
            Hue::Cyan => "cyan",
            Hue::Teal => "teal",
            Hue::Green => "green",
            Hue::Fuchsia => "fuchsia",
            Hue::Rose => "rose",
        }
    }
}

/// Direction a two-stop gradient runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    /// Top-left to bottom-right.
    ToBottomRight,
    /// Bottom-left to top-right.
    ToTopRight,
}

impl GradientDirection {
    /// Unit vector of the gradient axis in screen space (y grows downwards).
    pub fn axis(self) -> egui::Vec2 {
        let d = std::f32::consts::FRAC_1_SQRT_2;
        match self {
            GradientDirection::ToBottomRight => egui::vec2(d, d),
            GradientDirection::ToTopRight => egui::vec2(d, -d),
        }
    }
}

/// A two-stop translucent gradient, e.g. `to-br purple-500/30 → blue-500/30`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientToken {
    pub from: Hue,
    pub to: Hue,
    pub direction: GradientDirection,
    /// Opacity of both stops, 0.0..=1.0
    pub alpha: f32,
}

impl GradientToken {
    pub const fn new(from: Hue, to: Hue, direction: GradientDirection, alpha: f32) -> Self {
        Self { from, to, direction, alpha }
    }

    /// Color at position `t` (0 = start stop, 1 = end stop) with the token's alpha
    /// scaled by `opacity`.
    pub fn color_at(&self, t: f32, opacity: f32) -> Color32 {
        let rgb = lerp_color(self.from.shade_500(), self.to.shade_500(), t);
        with_opacity(rgb, self.alpha * opacity)
    }
}

impl fmt::Display for GradientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            GradientDirection::ToBottomRight => "to-br",
            GradientDirection::ToTopRight => "to-tr",
        };
        let pct = (self.alpha * 100.0).round() as u32;
        write!(f, "{} {}-500/{} {}-500/{}", dir, self.from.name(), pct, self.to.name(), pct)
    }
}

/// Linear interpolation between two opaque colors.
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Applies a fractional opacity to an opaque color.
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}
