//! Tunables of the animated background.
//!
//! The configuration is persisted between sessions as JSON and can be
//! overridden from the command line.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound for a configured particle batch.
pub const MAX_PARTICLES: usize = 500;

/// Background controller settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Quiet period before a new section is committed
    pub debounce_ms: u64,
    /// Cross-fade duration between section themes
    pub fade_ms: u64,
    /// Particles generated per mount
    pub particle_count: usize,
    pub particles_enabled: bool,
    /// Fixed seed for reproducible particle layouts
    pub seed: Option<u64>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            fade_ms: 1200,
            particle_count: 30,
            particles_enabled: true,
            seed: None,
        }
    }
}

impl BackgroundConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// Clamps values loaded from storage or the command line into usable ranges.
    pub fn sanitized(mut self) -> Self {
        if self.particle_count > MAX_PARTICLES {
            tracing::warn!(requested = self.particle_count, max = MAX_PARTICLES, "particle count clamped");
            self.particle_count = MAX_PARTICLES;
        }
        self.debounce_ms = self.debounce_ms.min(5_000);
        self.fade_ms = self.fade_ms.min(10_000);
        self
    }
}
