//! Background delivery of contact messages.
//!
//! There is no mail backend: a worker thread holds the message for a short
//! while and reports it delivered, so the form can show its sending state
//! without blocking the frame loop.

use eframe::egui;
use folio::ContactSubmission;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Simulated delivery time.
pub const SEND_DELAY: Duration = Duration::from_millis(1500);

/// Result of polling the sender.
#[derive(Debug)]
pub enum SendResult {
    /// The message went out
    Delivered(ContactSubmission),
    /// The worker went away without reporting
    Failed(String),
    /// Nothing finished this frame
    None,
}

pub struct ContactSender {
    delay: Duration,
    /// Shared in-flight flag
    in_progress: Arc<AtomicBool>,
    receiver: Option<Receiver<ContactSubmission>>,
}

impl ContactSender {
    pub fn new() -> Self {
        Self::with_delay(SEND_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            in_progress: Arc::new(AtomicBool::new(false)),
            receiver: None,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Starts delivering a message. Call `check_completion()` once per frame.
    pub fn start_send(&mut self, submission: ContactSubmission, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        self.in_progress.store(true, Ordering::Release);

        let in_progress = Arc::clone(&self.in_progress);
        let ctx_handle = ctx.clone();
        let delay = self.delay;
        tracing::info!(from = %submission.email, "sending contact message");

        thread::spawn(move || {
            thread::sleep(delay);
            let _ = sender.send(submission);
            in_progress.store(false, Ordering::Release);
            ctx_handle.request_repaint();
        });
    }

    /// Returns the outcome of the last send once it is available.
    pub fn check_completion(&mut self) -> SendResult {
        let Some(receiver) = &self.receiver else {
            return SendResult::None;
        };
        let result = match receiver.try_recv() {
            Ok(submission) => SendResult::Delivered(submission),
            Err(TryRecvError::Empty) => return SendResult::None,
            Err(TryRecvError::Disconnected) => SendResult::Failed("delivery worker stopped".to_string()),
        };
        self.receiver = None;
        result
    }
}

impl Default for ContactSender {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_idle_sender() {
        let mut sender = ContactSender::new();
        assert!(!sender.is_sending());
        assert!(matches!(sender.check_completion(), SendResult::None));
    }

    #[test]
    fn test_delivery_after_delay() {
        let ctx = egui::Context::default();
        let mut sender = ContactSender::with_delay(Duration::from_millis(20));
        sender.start_send(submission(), &ctx);
        assert!(sender.is_sending());

        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match sender.check_completion() {
                SendResult::Delivered(s) => {
                    assert_eq!(s.name, "Ada");
                    break;
                }
                SendResult::Failed(e) => panic!("unexpected failure: {e}"),
                SendResult::None => {
                    assert!(Instant::now() < deadline, "delivery timed out");
                    thread::sleep(Duration::from_millis(5));
                }
            }
        }
        assert!(matches!(sender.check_completion(), SendResult::None));
    }
}
