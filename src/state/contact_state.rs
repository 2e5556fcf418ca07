//! Contact form state: field contents, validation errors and send status.

use std::time::{Duration, Instant};

use folio::{ContactErrors, ContactForm, ContactSubmission};

/// How long the confirmation stays visible after a message went out.
pub const SENT_NOTICE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStatus {
    Idle,
    Sending,
    Sent { at: Instant },
}

#[derive(Debug, Clone)]
pub struct ContactState {
    form: ContactForm,
    errors: ContactErrors,
    status: SendStatus,
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            errors: ContactErrors::default(),
            status: SendStatus::Idle,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn errors(&self) -> &ContactErrors {
        &self.errors
    }

    pub fn is_sending(&self) -> bool {
        self.status == SendStatus::Sending
    }

    /// True while the confirmation should be shown.
    pub fn shows_sent_notice(&self, now: Instant) -> bool {
        match self.status {
            SendStatus::Sent { at } => now.saturating_duration_since(at) < SENT_NOTICE,
            _ => false,
        }
    }

    /// Validates the form and, if it passes, moves to the sending state.
    ///
    /// Returns the submission to hand to the sender. A second submit while a
    /// message is in flight is ignored.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_sending() {
            return None;
        }
        match self.form.validate() {
            Ok(submission) => {
                self.errors = ContactErrors::default();
                self.status = SendStatus::Sending;
                Some(submission)
            }
            Err(errors) => {
                tracing::debug!(invalid_fields = errors.count(), "contact form rejected");
                self.errors = errors;
                None
            }
        }
    }

    /// Resets the form after a successful send.
    pub fn mark_sent(&mut self, now: Instant) {
        self.form.clear();
        self.status = SendStatus::Sent { at: now };
    }

    /// Returns to idle, keeping the typed message so it can be resent.
    pub fn mark_failed(&mut self) {
        self.status = SendStatus::Idle;
    }
}
