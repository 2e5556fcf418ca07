//! Theme state management.
//!
//! Holds the theme manager and the name of the theme picked with the header
//! toggle.

use folio::theme::{ThemeManager, DARK};

/// State related to the light/dark page theme.
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of currently selected theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the dark theme.
    pub fn new() -> Self {
        Self::with_theme(DARK.to_string())
    }

    /// Creates a new theme state with a specific theme.
    ///
    /// Unknown names fall back to the dark theme.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            tracing::warn!(theme = %theme_name, "unknown theme, using dark");
            DARK.to_string()
        };
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    // ===== Theme Queries =====

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    pub fn is_dark(&self) -> bool {
        self.theme_manager.theme_or_dark(&self.current_theme_name).dark_mode
    }

    // ===== Theme Mutations =====

    /// Switches between the light and dark theme.
    pub fn toggle(&mut self) {
        self.current_theme_name = ThemeManager::toggled(&self.current_theme_name).to_string();
    }
}
