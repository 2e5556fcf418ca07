//! Randomly generated decorative particles.
//!
//! A [`ParticleField`] generates its batch exactly once, and only after the
//! host has confirmed it is running interactively. Before that it holds no
//! particles and renders nothing, so an ahead-of-time render (a headless
//! snapshot, a test, a first frame without a window) never disagrees with
//! what the interactive session later shows.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::easing;

/// Capability check for side-effecting, nondeterministic initialisation.
pub trait ExecutionContext {
    /// True once the host is an interactive rendering session.
    fn is_interactive_context(&self) -> bool;
}

impl ExecutionContext for bool {
    fn is_interactive_context(&self) -> bool {
        *self
    }
}

/// One floating particle. Positions are percentages of the field size.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
    /// Vertical animation targets
    pub y1: f32,
    pub y2: f32,
    /// Seconds per loop
    pub duration: f32,
    /// Seconds before the loop starts
    pub delay: f32,
    /// Diameter in points before scaling
    pub size: f32,
    /// Peak rotation in degrees
    pub spin: f32,
}

/// Rendered state of a particle at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
    pub rotation: f32,
}

/// How a particle loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStyle {
    /// y1 → y2 then restart, with a twinkle in opacity and scale
    Twinkle,
    /// y1 → y2 → y1 with a spin out and back
    Drift,
}

/// Generation ranges for one kind of particle layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleProfile {
    pub count: usize,
    pub opacity: Range<f32>,
    pub scale: Range<f32>,
    pub duration: Range<f32>,
    pub delay: Range<f32>,
    pub size: Range<f32>,
    pub spin: Range<f32>,
    pub style: LoopStyle,
}

impl ParticleProfile {
    /// Small white dots over the whole background.
    pub fn background() -> Self {
        Self {
            count: 30,
            opacity: 0.1..0.4,
            scale: 0.5..1.0,
            duration: 10.0..30.0,
            delay: 0.0..5.0,
            size: 4.0..4.0,
            spin: 0.0..0.0,
            style: LoopStyle::Twinkle,
        }
    }

    /// Large blurred discs behind the projects gallery.
    pub fn bokeh() -> Self {
        Self {
            count: 20,
            opacity: 0.2..0.7,
            scale: 0.5..1.0,
            duration: 10.0..30.0,
            delay: 0.0..0.0,
            size: 40.0..120.0,
            spin: 0.0..360.0,
            style: LoopStyle::Drift,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

fn sample(rng: &mut impl Rng, range: &Range<f32>) -> f32 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range.clone())
    }
}

impl Particle {
    fn generate(id: usize, profile: &ParticleProfile, rng: &mut impl Rng) -> Self {
        let percent = 0.0..100.0;
        Self {
            id,
            x: sample(rng, &percent),
            y: sample(rng, &percent),
            opacity: sample(rng, &profile.opacity),
            scale: sample(rng, &profile.scale),
            y1: sample(rng, &percent),
            y2: sample(rng, &percent),
            duration: sample(rng, &profile.duration),
            delay: sample(rng, &profile.delay),
            size: sample(rng, &profile.size),
            spin: sample(rng, &profile.spin),
        }
    }

    /// State `elapsed` seconds after the field was generated.
    pub fn state_at(&self, elapsed: f32, style: LoopStyle) -> ParticleState {
        let local = elapsed - self.delay;
        if local < 0.0 || self.duration <= 0.0 {
            return ParticleState {
                x: self.x,
                y: self.y,
                opacity: self.opacity,
                scale: self.scale,
                rotation: 0.0,
            };
        }

        let p = (local / self.duration).fract();
        match style {
            LoopStyle::Twinkle => ParticleState {
                x: self.x,
                y: easing::keyframes(&[self.y1, self.y2], p),
                opacity: easing::keyframes(&[0.1, 0.3, 0.1], p),
                scale: easing::keyframes(&[self.scale, self.scale * 1.3, self.scale], p),
                rotation: 0.0,
            },
            LoopStyle::Drift => ParticleState {
                x: self.x,
                y: easing::keyframes(&[self.y1, self.y2, self.y1], p),
                opacity: self.opacity,
                scale: self.scale,
                rotation: easing::keyframes(&[0.0, self.spin, 0.0], p),
            },
        }
    }
}

/// A batch of particles generated once per mount.
#[derive(Debug, Clone)]
pub struct ParticleField {
    profile: ParticleProfile,
    seed: Option<u64>,
    particles: Vec<Particle>,
    generations: usize,
}

impl ParticleField {
    /// Creates an empty field. With a seed the batch is reproducible.
    pub fn new(profile: ParticleProfile, seed: Option<u64>) -> Self {
        Self {
            profile,
            seed,
            particles: Vec::new(),
            generations: 0,
        }
    }

    pub fn profile(&self) -> &ParticleProfile {
        &self.profile
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_generated(&self) -> bool {
        self.generations > 0
    }

    /// Number of batches generated so far; never exceeds one.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Generates the batch if the context is interactive and no batch exists yet.
    ///
    /// Returns `true` if this call generated the batch.
    pub fn ensure_generated(&mut self, ctx: &impl ExecutionContext) -> bool {
        if self.is_generated() || !ctx.is_interactive_context() {
            return false;
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.particles = (0..self.profile.count)
            .map(|id| Particle::generate(id, &self.profile, &mut rng))
            .collect();
        self.generations += 1;

        tracing::debug!(count = self.particles.len(), seeded = self.seed.is_some(), "generated particle batch");
        true
    }

    /// Animated state of every particle.
    pub fn states_at(&self, elapsed: f32) -> Vec<ParticleState> {
        self.particles
            .iter()
            .map(|p| p.state_at(elapsed, self.profile.style))
            .collect()
    }

    /// Discards the batch; the field can not be regenerated afterwards.
    pub fn discard(&mut self) {
        self.particles.clear();
    }
}
