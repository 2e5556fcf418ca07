//! Centralized application state for the folio page.
//!
//! Composes focused state components that each manage one aspect of the
//! page, plus the background controller that reacts to scrolling.

use folio::theme::DARK;
use folio::{BackgroundConfig, BackgroundController};
use crate::state::{ContactState, GalleryState, ScrollState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Light/dark theme
    pub theme: ThemeState,

    /// Scroll offset, viewport and section anchors
    pub scroll: ScrollState,

    /// Contact form fields and send status
    pub contact: ContactState,

    /// Project tab and bokeh layer
    pub gallery: GalleryState,

    /// Section-aware animated background
    pub background: BackgroundController,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(DARK.to_string(), BackgroundConfig::default())
    }

    /// Creates the state from persisted (or command-line) settings.
    pub fn with_settings(theme_name: String, config: BackgroundConfig) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            scroll: ScrollState::new(),
            contact: ContactState::new(),
            gallery: GalleryState::new(config.seed),
            background: BackgroundController::new(config),
        }
    }
}
