//! Static section → visual theme registry.
//!
//! Each section of the page has exactly one [`ThemeConfig`] describing the
//! gradients of the background layers, plus the scale and rotation the main
//! background blob settles at while that section is active.
//!
//! # Examples
//!
//! ```
//! use folio::{Section, SectionRegistry};
//!
//! let about = SectionRegistry::theme(Section::About);
//! assert_eq!(about.rotation, 15.0);
//! ```

use once_cell::sync::Lazy;

use crate::palette::{GradientDirection, GradientToken, Hue};
use crate::section::Section;

use GradientDirection::{ToBottomRight, ToTopRight};

/// Visual parameters of the background while a section is active.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Main background blob (and the second moving blob)
    pub primary: GradientToken,
    /// Upper floating blob (and the first moving blob)
    pub secondary: GradientToken,
    /// Lower floating blob (and the third moving blob)
    pub tertiary: GradientToken,
    /// Resting scale of the main blob, always positive
    pub scale: f32,
    /// Resting rotation of the main blob in degrees
    pub rotation: f32,
}

const PRIMARY_ALPHA: f32 = 0.30;
const SECONDARY_ALPHA: f32 = 0.20;
const TERTIARY_ALPHA: f32 = 0.10;

fn theme(primary: (Hue, Hue), secondary: (Hue, Hue), tertiary: (Hue, Hue), scale: f32, rotation: f32) -> ThemeConfig {
    ThemeConfig {
        primary: GradientToken::new(primary.0, primary.1, ToBottomRight, PRIMARY_ALPHA),
        secondary: GradientToken::new(secondary.0, secondary.1, ToBottomRight, SECONDARY_ALPHA),
        tertiary: GradientToken::new(tertiary.0, tertiary.1, ToTopRight, TERTIARY_ALPHA),
        scale,
        rotation,
    }
}

// Indexed by `Section::ordinal`.
static THEMES: Lazy<[ThemeConfig; Section::COUNT]> = Lazy::new(|| {
    [
        theme((Hue::Purple, Hue::Blue), (Hue::Pink, Hue::Purple), (Hue::Indigo, Hue::Violet), 1.0, 0.0),
        theme((Hue::Blue, Hue::Cyan), (Hue::Indigo, Hue::Blue), (Hue::Blue, Hue::Teal), 1.2, 15.0),
        theme((Hue::Cyan, Hue::Teal), (Hue::Blue, Hue::Cyan), (Hue::Teal, Hue::Green), 0.9, -15.0),
        theme((Hue::Violet, Hue::Purple), (Hue::Indigo, Hue::Violet), (Hue::Purple, Hue::Fuchsia), 1.1, 10.0),
        theme((Hue::Fuchsia, Hue::Pink), (Hue::Violet, Hue::Fuchsia), (Hue::Pink, Hue::Rose), 0.95, -10.0),
    ]
});

/// Read-only access to the per-section themes.
pub struct SectionRegistry;

impl SectionRegistry {
    /// Returns the theme of a section.
    pub fn theme(section: Section) -> &'static ThemeConfig {
        &THEMES[section.ordinal()]
    }

    /// Returns the theme registered under an anchor id.
    ///
    /// Ids outside the enumerated set are a programming error; they resolve to the
    /// hero theme so the background never renders undefined colors.
    pub fn theme_for_id(id: &str) -> &'static ThemeConfig {
        match Section::from_anchor_id(id) {
            Some(section) => Self::theme(section),
            None => {
                tracing::warn!(id = %id, "unknown section id, falling back to hero theme");
                Self::theme(Section::Hero)
            }
        }
    }
}
