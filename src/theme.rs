//! Theme support for the folio page chrome
//!
//! This module provides the light and dark color schemes of the page (text,
//! cards, borders, accents) and a theme manager that the header's toggle
//! switches between. The animated background has its own per-section
//! gradients, see [`crate::registry`].
//!
//! # Examples
//!
//! ```
//! use folio::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! println!("Dark background: {:?}", dark.colors.background);
//! ```

use egui::Color32;
use std::collections::HashMap;

pub const LIGHT: &str = "Light";
pub const DARK: &str = "Dark";

/// Color palette for the page chrome
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Surfaces
    pub background: Color32,
    pub card: Color32,
    pub muted: Color32,

    // Text
    pub foreground: Color32,
    pub muted_foreground: Color32,

    // Accents
    pub primary: Color32,
    pub primary_foreground: Color32,
    pub border: Color32,
    pub destructive: Color32,
    pub success: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub dark_mode: bool,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with the light and dark themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert(LIGHT.to_string(), light_theme());
        themes.insert(DARK.to_string(), dark_theme());

        Self { themes }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Looks a theme up by name, falling back to the dark theme
    pub fn theme_or_dark(&self, name: &str) -> &Theme {
        match self.themes.get(name) {
            Some(theme) => theme,
            None => &self.themes[DARK],
        }
    }

    /// Name of the theme the toggle switches to from `name`
    pub fn toggled(name: &str) -> &'static str {
        if name == LIGHT {
            DARK
        } else {
            LIGHT
        }
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        // Panels stay see-through so the animated background shows
        visuals.panel_fill = Color32::TRANSPARENT;
        visuals.window_fill = colors.card;
        visuals.extreme_bg_color = with_alpha(colors.card, 200);
        visuals.faint_bg_color = colors.muted;

        visuals.override_text_color = Some(colors.foreground);

        visuals.selection.bg_fill = with_alpha(colors.primary, 90);
        visuals.selection.stroke.color = colors.primary;

        visuals.widgets.noninteractive.bg_fill = colors.card;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.muted;
        visuals.widgets.inactive.weak_bg_fill = colors.muted;
        visuals.widgets.hovered.bg_fill = adjust_brightness(colors.muted, 1.2);
        visuals.widgets.active.bg_fill = colors.primary;

        visuals.hyperlink_color = colors.primary;

        visuals.error_fg_color = colors.destructive;
        visuals.warn_fg_color = colors.destructive;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme
fn light_theme() -> Theme {
    Theme {
        name: LIGHT.to_string(),
        description: "White page with zinc text".to_string(),
        dark_mode: false,
        colors: ThemeColors {
            background: hex_to_color32("#ffffff"),
            card: hex_to_color32("#ffffff"),
            muted: hex_to_color32("#f4f4f5"),

            foreground: hex_to_color32("#09090b"),
            muted_foreground: hex_to_color32("#71717a"),

            primary: hex_to_color32("#7c3aed"),
            primary_foreground: hex_to_color32("#fafafa"),
            border: hex_to_color32("#e4e4e7"),
            destructive: hex_to_color32("#ef4444"),
            success: hex_to_color32("#16a34a"),
        },
    }
}

/// Creates the Dark theme
fn dark_theme() -> Theme {
    Theme {
        name: DARK.to_string(),
        description: "Near-black page with zinc text".to_string(),
        dark_mode: true,
        colors: ThemeColors {
            background: hex_to_color32("#09090b"),
            card: hex_to_color32("#0f0f12"),
            muted: hex_to_color32("#27272a"),

            foreground: hex_to_color32("#fafafa"),
            muted_foreground: hex_to_color32("#a1a1aa"),

            primary: hex_to_color32("#a78bfa"),
            primary_foreground: hex_to_color32("#18181b"),
            border: hex_to_color32("#27272a"),
            destructive: hex_to_color32("#f87171"),
            success: hex_to_color32("#4ade80"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of an opaque color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_color32("#a855f7"), Color32::from_rgb(0xa8, 0x55, 0xf7));
        assert_eq!(hex_to_color32("xyz"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(ThemeManager::toggled(LIGHT), DARK);
        assert_eq!(ThemeManager::toggled(DARK), LIGHT);
        assert_eq!(ThemeManager::toggled("Solarized"), LIGHT);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        let manager = ThemeManager::new();
        assert!(manager.get_theme("Solarized").is_none());
        assert_eq!(manager.theme_or_dark("Solarized").name, DARK);
        assert!(!manager.theme_or_dark(LIGHT).dark_mode);
    }
}
