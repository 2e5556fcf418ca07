//! The scrolling page.
//!
//! Lays out every section in one vertical scroll area, records where each one
//! landed relative to the viewport, and performs pending nav jumps.

use std::time::Instant;

use eframe::egui;
use folio::{AnchorRect, Section, ThemeColors};
use crate::app::AppState;
use crate::ui::sections;

/// Result of user interaction with the page content
pub enum PageInteraction {
    /// A call-to-action or footer link asked for a section
    NavigateTo(Section),
    /// The contact form was submitted
    SubmitContact,
}

/// Renders the page and updates the scroll state for this frame
pub fn render_page(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors, now: Instant) -> Option<PageInteraction> {
    let jump = state.scroll.pending_jump();
    let viewport_height = ui.available_height();

    let output = egui::ScrollArea::vertical()
        .id_salt("page")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let viewport_top = ui.clip_rect().top();
            let mut interaction = None;

            for section in Section::ALL {
                let response = ui.scope(|ui| {
                    ui.set_width(ui.available_width());
                    sections::render_section(ui, section, state, colors, viewport_height, now)
                });
                let rect = response.response.rect;
                state
                    .scroll
                    .record_anchor(section, AnchorRect::new(rect.top() - viewport_top, rect.height()));

                if jump == Some(section) {
                    ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                }
                if let Some(inner) = response.inner {
                    interaction = Some(inner);
                }
            }

            if let Some(inner) = sections::render_footer(ui, colors) {
                interaction = Some(inner);
            }
            interaction
        });

    if jump.is_some() {
        state.scroll.clear_jump();
    }
    state
        .scroll
        .update_viewport(output.state.offset.y, output.inner_rect.height());

    output.inner
}
