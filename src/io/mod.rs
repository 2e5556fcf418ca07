//! I/O modules: off-thread delivery of contact messages.

pub mod contact_sender;

pub use contact_sender::{ContactSender, SendResult};
