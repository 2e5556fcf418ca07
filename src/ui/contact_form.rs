//! Contact form widget.

use std::time::Instant;

use eframe::egui;
use egui::RichText;
use folio::{ContactFieldError, ThemeColors};
use crate::state::ContactState;

/// Renders the form. Returns `true` when the user asked to send it.
pub fn render_contact_form(ui: &mut egui::Ui, contact: &mut ContactState, colors: &ThemeColors, now: Instant) -> bool {
    let sending = contact.is_sending();
    let errors = contact.errors().clone();
    let mut submit = false;

    ui.add_enabled_ui(!sending, |ui| {
        let form = contact.form_mut();

        field_label(ui, "Name");
        ui.add(
            egui::TextEdit::singleline(&mut form.name)
                .hint_text("Your name")
                .desired_width(f32::INFINITY),
        );
        field_error(ui, errors.name.as_ref(), colors);

        field_label(ui, "Email");
        ui.add(
            egui::TextEdit::singleline(&mut form.email)
                .hint_text("you@example.com")
                .desired_width(f32::INFINITY),
        );
        field_error(ui, errors.email.as_ref(), colors);

        field_label(ui, "Message");
        ui.add(
            egui::TextEdit::multiline(&mut form.message)
                .hint_text("What would you like to talk about?")
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        field_error(ui, errors.message.as_ref(), colors);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let label = if sending { "Sending..." } else { "Send message" };
            let button = egui::Button::new(RichText::new(label).color(colors.primary_foreground)).fill(colors.primary);
            if ui.add(button).clicked() {
                submit = true;
            }
            if sending {
                ui.add(egui::Spinner::new());
            }
        });
    });

    if contact.shows_sent_notice(now) {
        ui.add_space(6.0);
        ui.label(RichText::new("Message sent! I'll get back to you soon.").color(colors.success));
    }

    submit
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(text).strong());
}

fn field_error(ui: &mut egui::Ui, error: Option<&ContactFieldError>, colors: &ThemeColors) {
    if let Some(error) = error {
        ui.label(RichText::new(error.to_string()).small().color(colors.destructive));
    }
}
