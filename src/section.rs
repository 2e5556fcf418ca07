//! Page sections in top-to-bottom order.
//!
//! Every section owns an anchor id that the page layout uses to publish the
//! section's rectangle, and that the scroll sampler uses to look it up again.

use std::fmt;

/// A named, vertically stacked region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// All sections in page order. Iteration order doubles as the sampler's tie-break.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Number of sections on the page.
    pub const COUNT: usize = Self::ALL.len();

    /// Anchor identifier of this section.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Navigation label shown in the header and footer.
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Position of this section in [`Section::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Resolves an anchor identifier. Returns `None` for ids outside the enumerated set.
    pub fn from_anchor_id(id: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|s| s.anchor_id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_ordinals() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.ordinal(), i);
        }
    }

    #[test]
    fn test_anchor_ids_resolve() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor_id(section.anchor_id()), Some(section));
        }
        assert_eq!(Section::from_anchor_id("blog"), None);
    }

    #[test]
    fn test_default_is_hero() {
        assert_eq!(Section::default(), Section::Hero);
    }
}
