//! Scroll position and section anchor state.
//!
//! The page is one vertical scroll area. Each frame the page panel records
//! where every section ended up and the scroll offset it was drawn at; this
//! state is what the background controller samples, so it implements
//! [`PageHost`] directly.

use folio::{AnchorMap, AnchorRect, AnchorSource, ExecutionContext, PageHost, Section};

/// Offset past which the header switches to its "scrolled" look.
pub const SCROLLED_THRESHOLD: f32 = 10.0;

/// Offset changes smaller than this are not treated as scroll events.
const SCROLL_EPSILON: f32 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Vertical scroll offset of the page
    offset: f32,
    /// Height of the visible part of the page
    viewport_height: f32,
    /// Section rectangles relative to the viewport top
    anchors: AnchorMap,
    /// Set once a frame has actually been presented
    interactive: bool,
    /// Section the page should scroll to on the next frame
    pending_jump: Option<Section>,
    /// Viewport moved since the controller last sampled
    unsampled_move: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }

    pub fn anchors(&self) -> &AnchorMap {
        &self.anchors
    }

    pub fn pending_jump(&self) -> Option<Section> {
        self.pending_jump
    }

    // ===== Mutations =====

    pub fn record_anchor(&mut self, section: Section, rect: AnchorRect) {
        self.anchors.insert(section, rect);
    }

    /// Stores the viewport the page was drawn with.
    ///
    /// Returns `true` when the offset or the viewport height moved, which the
    /// caller forwards to the background controller as a scroll event.
    pub fn update_viewport(&mut self, offset: f32, viewport_height: f32) -> bool {
        let moved = (offset - self.offset).abs() > SCROLL_EPSILON
            || (viewport_height - self.viewport_height).abs() > SCROLL_EPSILON;
        self.offset = offset.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        self.unsampled_move |= moved;
        moved
    }

    /// Consumes the pending scroll event, if any.
    pub fn take_scroll_event(&mut self) -> bool {
        std::mem::take(&mut self.unsampled_move)
    }

    pub fn mark_interactive(&mut self) {
        self.interactive = true;
    }

    pub fn request_jump(&mut self, section: Section) {
        self.pending_jump = Some(section);
    }

    pub fn clear_jump(&mut self) {
        self.pending_jump = None;
    }
}

impl AnchorSource for ScrollState {
    fn anchor(&self, section: Section) -> Option<AnchorRect> {
        self.anchors.anchor(section)
    }
}

impl ExecutionContext for ScrollState {
    fn is_interactive_context(&self) -> bool {
        self.interactive
    }
}

impl PageHost for ScrollState {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }
}
