//! Header panel UI rendering
//!
//! Handles the top navigation bar with section links and the theme toggle.

use eframe::egui;
use egui::RichText;
use folio::theme::with_alpha;
use folio::{content, Section, ThemeColors};
use crate::app::AppState;
use crate::presentation::color_mapping;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// A nav link was clicked
    NavigateTo(Section),
    /// The theme toggle was clicked
    ToggleTheme,
}

/// Frame of the header; it gains a backdrop once the page is scrolled.
pub fn header_frame(state: &AppState, colors: &ThemeColors) -> egui::Frame {
    let frame = egui::Frame::default().inner_margin(egui::Margin::symmetric(24, 12));
    if state.scroll.is_scrolled() {
        frame
            .fill(with_alpha(colors.background, 220))
            .stroke(egui::Stroke::new(1.0, colors.border))
    } else {
        frame
    }
}

/// Renders the header with the owner's name, nav links and theme toggle
pub fn render_header(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let active = state.background.active_section();

    ui.horizontal(|ui| {
        let name = RichText::new(content::OWNER_NAME).strong().size(18.0);
        if ui.add(egui::Label::new(name).sense(egui::Sense::click())).clicked() {
            interaction = Some(HeaderInteraction::NavigateTo(Section::Hero));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let icon = if state.theme.is_dark() { "☀" } else { "🌙" };
            if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                interaction = Some(HeaderInteraction::ToggleTheme);
            }
            ui.separator();

            // Right-to-left layout, so links are added in reverse
            for section in Section::ALL.into_iter().rev() {
                let mut label = RichText::new(section.nav_label());
                if section == active {
                    label = label.color(color_mapping::section_accent(section)).strong();
                } else {
                    label = label.color(colors.muted_foreground);
                }
                if ui.selectable_label(section == active, label).clicked() {
                    interaction = Some(HeaderInteraction::NavigateTo(section));
                }
            }
        });
    });

    interaction
}
