//! Panel orchestration and layout management.
//!
//! Paints the background beneath everything, then lays out the header bar and
//! the scrolling page, and funnels their interactions to the coordinator.

use std::time::Instant;

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::rendering::background_renderer;
use crate::ui::{header, page_panel};
use folio::Section;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// Scroll the page to a section
    NavigateTo(Section),
    /// Switch between light and dark
    ToggleTheme,
    /// Validate and send the contact form
    SubmitContact,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders the whole window for one frame.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState, now: Instant) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors =
            color_mapping::theme_colors(state.theme.theme_manager(), state.theme.current_theme_name()).clone();

        let frame = state.background.frame(now);
        background_renderer::paint_background(ctx, frame.as_ref(), &theme_colors);

        // Header bar at the top
        egui::TopBottomPanel::top("header")
            .frame(header::header_frame(state, &theme_colors))
            .show(ctx, |ui| {
                if let Some(header_interaction) = header::render_header(ui, state, &theme_colors) {
                    interaction = Some(match header_interaction {
                        header::HeaderInteraction::NavigateTo(section) => PanelInteraction::NavigateTo(section),
                        header::HeaderInteraction::ToggleTheme => PanelInteraction::ToggleTheme,
                    });
                }
            });

        // The page itself; no fill so the background shows through
        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                if let Some(page_interaction) = page_panel::render_page(ui, state, &theme_colors, now) {
                    interaction = Some(match page_interaction {
                        page_panel::PageInteraction::NavigateTo(section) => PanelInteraction::NavigateTo(section),
                        page_panel::PageInteraction::SubmitContact => PanelInteraction::SubmitContact,
                    });
                }
            });

        interaction
    }
}
