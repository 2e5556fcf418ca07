//! Application-level coordination and workflow management.
//!
//! Drives the background controller from what the page reported this frame,
//! routes navigation, and runs the contact form's send workflow.

use std::time::Instant;

use crate::app::AppState;
use crate::io::{ContactSender, SendResult};
use folio::Section;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Feeds the frame's scroll state to the background controller.
    ///
    /// Called once per frame after the page has been laid out, so the anchors
    /// reflect what is on screen. The first call mounts the controller.
    pub fn after_page_rendered(state: &mut AppState, ctx: &egui::Context, now: Instant) {
        // A frame has been laid out for a real window by now
        state.scroll.mark_interactive();
        state.gallery.ensure_bokeh(&state.scroll, now);

        let scrolled = state.scroll.take_scroll_event();
        if !state.background.is_mounted() {
            state.background.mount(&state.scroll, now);
        } else if scrolled {
            state.background.on_scroll(&state.scroll, now);
        }

        if let Some(change) = state.background.tick(&state.scroll, now) {
            tracing::debug!(from = %change.from, to = %change.to, "background retheming");
        }

        // The background loops forever, so keep frames coming while it is shown
        if state.background.is_mounted() {
            ctx.request_repaint();
        }
    }

    /// Scrolls the page to a section on the next frame.
    pub fn navigate_to(state: &mut AppState, section: Section) {
        tracing::debug!(section = %section, "navigating");
        state.scroll.request_jump(section);
    }

    /// Validates the form and hands a valid message to the sender.
    pub fn submit_contact(state: &mut AppState, sender: &mut ContactSender, ctx: &egui::Context) {
        if let Some(submission) = state.contact.begin_submit() {
            sender.start_send(submission, ctx);
        }
    }

    /// Checks for send completion and applies the result.
    ///
    /// Returns true if a send finished this frame.
    pub fn check_contact_completion(state: &mut AppState, sender: &mut ContactSender, now: Instant) -> bool {
        match sender.check_completion() {
            SendResult::Delivered(submission) => {
                tracing::info!(from = %submission.email, "contact message delivered");
                state.contact.mark_sent(now);
                true
            }
            SendResult::Failed(error) => {
                tracing::error!(%error, "contact message failed");
                state.contact.mark_failed();
                true
            }
            SendResult::None => false,
        }
    }
}
