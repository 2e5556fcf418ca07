//! State management modules for the folio page.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (theme manager, current theme)
//! - Scroll state (offset, viewport, section anchors, navigation jumps)
//! - Contact state (form fields, validation errors, send status)
//! - Gallery state (project tab, bokeh particles)

mod theme_state;
mod scroll_state;
mod contact_state;
mod gallery_state;

pub use theme_state::ThemeState;
pub use scroll_state::ScrollState;
pub use contact_state::ContactState;
pub use gallery_state::GalleryState;
