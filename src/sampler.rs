//! Scroll-position sampling.
//!
//! The page publishes one [`AnchorRect`] per rendered section. A sample
//! measures, for every present anchor, how far its vertical midpoint lies from
//! the viewport's vertical midpoint; the closest section is the active one.

use std::collections::HashMap;

use crate::section::Section;

/// Vertical extent of a section anchor, relative to the top of the viewport
/// (negative once the section has scrolled past the top edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f32,
    pub height: f32,
}

impl AnchorRect {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Absolute midpoint of the anchor on the page.
    pub fn absolute_midpoint(&self, scroll_offset: f32) -> f32 {
        scroll_offset + self.top + self.height / 2.0
    }
}

/// Lookup of section anchors currently present in the rendered page.
pub trait AnchorSource {
    /// Returns the anchor of a section, or `None` if it is not rendered.
    fn anchor(&self, section: Section) -> Option<AnchorRect>;
}

/// Per-frame anchor registry filled by the page layout.
#[derive(Debug, Clone, Default)]
pub struct AnchorMap {
    anchors: HashMap<Section, AnchorRect>,
}

impl AnchorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes (or replaces) the anchor of a section.
    pub fn insert(&mut self, section: Section, rect: AnchorRect) {
        self.anchors.insert(section, rect);
    }
}

impl AnchorSource for AnchorMap {
    fn anchor(&self, section: Section) -> Option<AnchorRect> {
        self.anchors.get(&section).copied()
    }
}

/// Distances of every present section from the viewport centre, taken at one
/// scroll position.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportSample {
    pub scroll_offset: f32,
    pub viewport_height: f32,
    /// `(section, |viewport centre - section centre|)` in page order; absent
    /// anchors are left out.
    pub distances: Vec<(Section, f32)>,
}

impl ViewportSample {
    /// Measures all present anchors.
    pub fn take(scroll_offset: f32, viewport_height: f32, anchors: &impl AnchorSource) -> Self {
        let viewport_middle = scroll_offset + viewport_height / 2.0;
        let distances = Section::ALL
            .into_iter()
            .filter_map(|section| {
                anchors.anchor(section).map(|rect| {
                    let distance = (viewport_middle - rect.absolute_midpoint(scroll_offset)).abs();
                    (section, distance)
                })
            })
            .collect();

        Self {
            scroll_offset,
            viewport_height,
            distances,
        }
    }

    /// Section closest to the viewport centre; the earlier section wins a tie.
    pub fn nearest(&self) -> Option<Section> {
        let mut best: Option<(Section, f32)> = None;
        for &(section, distance) in &self.distances {
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((section, distance)),
            }
        }
        best.map(|(section, _)| section)
    }
}

/// Returns the section whose anchor midpoint is closest to the viewport midpoint.
///
/// Falls back to [`Section::Hero`] when no anchor is rendered at all.
pub fn compute_active_section(scroll_offset: f32, viewport_height: f32, anchors: &impl AnchorSource) -> Section {
    let sample = ViewportSample::take(scroll_offset, viewport_height, anchors);
    let section = sample.nearest().unwrap_or_default();
    tracing::trace!(scroll_offset, viewport_height, %section, "sampled viewport");
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Anchors whose absolute midpoints are at the given positions, with the
    /// page scrolled to `scroll`.
    fn anchors_at(scroll: f32, midpoints: &[(Section, f32)]) -> AnchorMap {
        let mut map = AnchorMap::new();
        for &(section, mid) in midpoints {
            let height = 200.0;
            map.insert(section, AnchorRect::new(mid - scroll - height / 2.0, height));
        }
        map
    }

    #[test]
    fn test_nearest_midpoint_wins() {
        let midpoints = [(Section::Hero, 100.0), (Section::About, 900.0), (Section::Skills, 1700.0)];
        // Viewport midpoint = 350 + 1000 / 2 = 850
        let anchors = anchors_at(350.0, &midpoints);
        assert_eq!(compute_active_section(350.0, 1000.0, &anchors), Section::About);
    }

    #[test]
    fn test_tie_goes_to_first_in_page_order() {
        let anchors = anchors_at(0.0, &[(Section::About, 400.0), (Section::Skills, 600.0)]);
        assert_eq!(compute_active_section(0.0, 1000.0, &anchors), Section::About);
    }

    #[test]
    fn test_absent_anchor_is_excluded() {
        let anchors = anchors_at(0.0, &[(Section::Hero, 0.0), (Section::Projects, 2000.0)]);
        let sample = ViewportSample::take(1500.0, 800.0, &anchors_at(1500.0, &[(Section::Hero, 0.0), (Section::Projects, 2000.0)]));
        assert_eq!(sample.distances.len(), 2);
        assert_eq!(sample.nearest(), Some(Section::Projects));
        assert_eq!(anchors.anchor(Section::About), None);
    }

    #[test]
    fn test_no_anchors_defaults_to_hero() {
        let anchors = AnchorMap::new();
        assert_eq!(compute_active_section(4000.0, 800.0, &anchors), Section::Hero);
        assert_eq!(ViewportSample::take(0.0, 800.0, &anchors).nearest(), None);
    }

    #[test]
    fn test_distances_are_absolute() {
        let anchors = anchors_at(0.0, &[(Section::Hero, 100.0), (Section::About, 700.0)]);
        let sample = ViewportSample::take(0.0, 800.0, &anchors);
        assert_eq!(sample.distances, vec![(Section::Hero, 300.0), (Section::About, 300.0)]);
        assert_eq!(sample.nearest(), Some(Section::Hero));
    }
}
