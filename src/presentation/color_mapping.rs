//! Color mapping for page elements.
//!
//! This module provides functions for:
//! - Getting the current theme's color palette
//! - Coloring skill bars by proficiency
//! - Accent colors for sections and skill categories

use egui::Color32;
use folio::content::SkillLevel;
use folio::{Hue, Section, SectionRegistry, ThemeColors, ThemeManager};

/// Returns the current theme's color palette, or the dark one as fallback.
pub fn theme_colors<'a>(theme_manager: &'a ThemeManager, current_theme_name: &str) -> &'a ThemeColors {
    &theme_manager.theme_or_dark(current_theme_name).colors
}

/// Fill of a skill's proficiency bar.
pub fn skill_level_color(level: SkillLevel, colors: &ThemeColors) -> Color32 {
    match level {
        SkillLevel::Expert => colors.success,
        SkillLevel::Advanced => colors.primary,
        SkillLevel::Intermediate => colors.muted_foreground,
    }
}

/// Accent of a content group, e.g. a skill category heading.
pub fn accent_color(hue: Hue) -> Color32 {
    hue.shade_500()
}

/// Accent used for a section's nav entry: the first stop of its main gradient.
pub fn section_accent(section: Section) -> Color32 {
    SectionRegistry::theme(section).primary.from.shade_500()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::theme::{DARK, LIGHT};

    #[test]
    fn test_theme_colors_fallback() {
        let manager = ThemeManager::new();
        let dark = theme_colors(&manager, DARK).background;
        assert_eq!(theme_colors(&manager, "Unknown").background, dark);
        assert_ne!(theme_colors(&manager, LIGHT).background, dark);
    }

    #[test]
    fn test_skill_colors_distinct() {
        let manager = ThemeManager::new();
        let colors = theme_colors(&manager, DARK);
        assert_ne!(
            skill_level_color(SkillLevel::Expert, colors),
            skill_level_color(SkillLevel::Intermediate, colors)
        );
    }

    #[test]
    fn test_section_accent_follows_registry() {
        assert_eq!(section_accent(Section::Hero), Hue::Purple.shade_500());
    }
}
