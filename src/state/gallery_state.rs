//! Projects gallery state: the selected tab and the bokeh layer behind it.

use std::time::Instant;

use folio::content::ProjectFilter;
use folio::{ExecutionContext, ParticleField, ParticleProfile, ParticleState};

#[derive(Debug)]
pub struct GalleryState {
    filter: ProjectFilter,
    bokeh: ParticleField,
    /// When the bokeh batch was generated; its loops run from here
    started_at: Option<Instant>,
}

impl GalleryState {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            filter: ProjectFilter::default(),
            // Derive a distinct stream so the two layers don't line up
            bokeh: ParticleField::new(ParticleProfile::bokeh(), seed.map(|s| s.wrapping_add(1))),
            started_at: None,
        }
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        if filter != self.filter {
            tracing::debug!(tab = filter.label(), "project filter changed");
            self.filter = filter;
        }
    }

    /// Generates the bokeh batch once the page runs interactively.
    pub fn ensure_bokeh(&mut self, ctx: &impl ExecutionContext, now: Instant) {
        if self.bokeh.ensure_generated(ctx) {
            self.started_at = Some(now);
        }
    }

    pub fn bokeh_states(&self, now: Instant) -> Vec<ParticleState> {
        let elapsed = self
            .started_at
            .map(|at| now.saturating_duration_since(at).as_secs_f32())
            .unwrap_or_default();
        self.bokeh.states_at(elapsed)
    }

    pub fn bokeh_sizes(&self) -> impl Iterator<Item = f32> + '_ {
        self.bokeh.particles().iter().map(|p| p.size)
    }
}
