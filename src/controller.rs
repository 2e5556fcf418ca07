//! The section-aware background controller.
//!
//! One controller instance owns the transition state and the background
//! particle batch for one page view. The host drives it with an explicit
//! lifecycle:
//!
//! 1. [`BackgroundController::mount`] registers the scroll listener and samples
//!    once so the first frame already shows the right section.
//! 2. [`BackgroundController::on_scroll`] on every scroll event and
//!    [`BackgroundController::tick`] every frame to fire the debounce timer.
//! 3. [`BackgroundController::unmount`] drops the listener and the pending
//!    timer; every later call is a no-op.
//!
//! [`BackgroundController::frame`] turns the current state into a
//! render-agnostic [`BackgroundFrame`].

use std::time::{Duration, Instant};

use crate::config::BackgroundConfig;
use crate::motion::{self, GridTilt, Placement, Pose, MOVING_BLOBS, SETTLING_BLOBS};
use crate::palette::GradientToken;
use crate::particles::{ExecutionContext, ParticleField, ParticleProfile, ParticleState};
use crate::registry::{SectionRegistry, ThemeConfig};
use crate::sampler::{self, AnchorSource};
use crate::section::Section;
use crate::transition::{SectionChange, TransitionState};

/// Everything the controller reads from the page it decorates.
pub trait PageHost: AnchorSource + ExecutionContext {
    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f32;
    /// Height of the visible part of the page.
    fn viewport_height(&self) -> f32;
}

/// Lifecycle of a controller instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, not listening yet
    Detached,
    /// Listening to scroll events
    Mounted,
    /// Listener removed; the instance is inert
    TornDown,
}

/// A shape to paint, already resolved against a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeFrame {
    pub placement: Placement,
    pub gradient: GradientToken,
    pub pose: Pose,
}

/// One themed copy of the background. During a cross-fade the incoming layer
/// is painted over the layers still fading out.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemedLayer {
    pub section: Section,
    /// Layer opacity, 0..=1
    pub opacity: f32,
    pub main_blob: ShapeFrame,
    pub shapes: Vec<ShapeFrame>,
}

/// Full description of the background at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundFrame {
    /// Fading layers oldest first, active layer last
    pub layers: Vec<ThemedLayer>,
    pub grid: GridTilt,
    pub particles: Vec<ParticleState>,
}

/// Size of the oversized main blob relative to the viewport width.
const MAIN_BLOB: Placement = Placement {
    center: (0.5, 0.5),
    size: 1.5,
    opacity: 0.4,
};

/// Detects the centred section and cross-fades the background to its theme.
#[derive(Debug)]
pub struct BackgroundController {
    config: BackgroundConfig,
    lifecycle: Lifecycle,
    transition: TransitionState,
    particles: ParticleField,
    mounted_at: Option<Instant>,
}

impl BackgroundController {
    pub fn new(config: BackgroundConfig) -> Self {
        let profile = ParticleProfile::background().with_count(config.particle_count);
        Self {
            transition: TransitionState::new(config.debounce()).with_fade(config.fade()),
            particles: ParticleField::new(profile, config.seed),
            lifecycle: Lifecycle::Detached,
            mounted_at: None,
            config,
        }
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn active_section(&self) -> Section {
        self.transition.active()
    }

    pub fn previous_section(&self) -> Section {
        self.transition.previous()
    }

    pub fn pending_section(&self) -> Option<Section> {
        self.transition.pending()
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Starts listening and takes the initial sample.
    ///
    /// Mounting twice, or after teardown, does nothing.
    pub fn mount(&mut self, host: &impl PageHost, now: Instant) {
        if self.lifecycle != Lifecycle::Detached {
            return;
        }
        self.lifecycle = Lifecycle::Mounted;
        self.mounted_at = Some(now);
        tracing::info!(
            debounce_ms = self.config.debounce_ms,
            particles = self.config.particle_count,
            "background controller mounted"
        );

        if self.config.particles_enabled {
            self.particles.ensure_generated(host);
        }
        self.sample(host, now);
    }

    /// Handles one scroll event.
    pub fn on_scroll(&mut self, host: &impl PageHost, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        self.sample(host, now);
    }

    fn sample(&mut self, host: &impl PageHost, now: Instant) {
        let candidate = sampler::compute_active_section(host.scroll_offset(), host.viewport_height(), host);
        self.transition.observe(candidate, now);
    }

    /// Fires the debounce timer if its deadline has passed.
    pub fn tick(&mut self, host: &impl PageHost, now: Instant) -> Option<SectionChange> {
        if !self.is_mounted() {
            return None;
        }
        // Generation is deferred until the host confirms an interactive session
        if self.config.particles_enabled && !self.particles.is_generated() {
            self.particles.ensure_generated(host);
        }
        self.transition.poll(now)
    }

    /// Time until the pending candidate would commit, for repaint scheduling.
    pub fn time_to_commit(&self, now: Instant) -> Option<Duration> {
        self.transition
            .deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Removes the scroll listener and cancels the pending commit.
    pub fn unmount(&mut self) {
        if self.lifecycle != Lifecycle::Mounted {
            self.lifecycle = Lifecycle::TornDown;
            return;
        }
        self.transition.cancel_pending();
        self.particles.discard();
        self.lifecycle = Lifecycle::TornDown;
        tracing::info!(active = %self.transition.active(), "background controller unmounted");
    }

    /// Describes the background at `now`. `None` until mounted and after teardown,
    /// in which case only the plain page background is shown.
    pub fn frame(&self, now: Instant) -> Option<BackgroundFrame> {
        if !self.is_mounted() {
            return None;
        }
        let elapsed = self
            .mounted_at
            .map(|at| now.saturating_duration_since(at).as_secs_f32())
            .unwrap_or_default();
        let secs_since = |at: Option<Instant>| {
            at.map(|at| now.saturating_duration_since(at).as_secs_f32())
                .unwrap_or(elapsed)
        };

        // Replaced sections carry on with the poses they had while active
        let mut layers: Vec<ThemedLayer> = self
            .transition
            .fading_layers(now)
            .map(|(layer, opacity)| {
                themed_layer(
                    layer.section,
                    SectionRegistry::theme(layer.entered_from),
                    SectionRegistry::theme(layer.section),
                    opacity,
                    secs_since(layer.entered_at),
                    elapsed,
                )
            })
            .collect();

        let active = self.transition.active();
        let since_change = secs_since(self.transition.changed_at());
        layers.push(themed_layer(
            active,
            SectionRegistry::theme(self.transition.previous()),
            SectionRegistry::theme(active),
            self.transition.crossfade_progress(now),
            since_change,
            elapsed,
        ));

        Some(BackgroundFrame {
            layers,
            grid: motion::grid_tilt_at(elapsed),
            particles: self.particles.states_at(elapsed),
        })
    }
}

impl Drop for BackgroundController {
    fn drop(&mut self) {
        if self.is_mounted() {
            self.unmount();
        }
    }
}

fn themed_layer(
    section: Section,
    from: &ThemeConfig,
    theme: &ThemeConfig,
    opacity: f32,
    since_change: f32,
    elapsed: f32,
) -> ThemedLayer {
    let main_blob = ShapeFrame {
        placement: MAIN_BLOB,
        gradient: theme.primary,
        pose: motion::main_blob_pose(from, theme, since_change),
    };

    let settling = SETTLING_BLOBS.iter().map(|blob| ShapeFrame {
        placement: blob.placement,
        gradient: blob.slot.token(theme),
        pose: blob.pose_at(since_change),
    });
    let moving = MOVING_BLOBS.iter().map(|blob| ShapeFrame {
        placement: blob.placement,
        gradient: blob.slot.token(theme),
        pose: blob.pose_at(elapsed),
    });

    ThemedLayer {
        section,
        opacity,
        main_blob,
        shapes: settling.chain(moving).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{AnchorMap, AnchorRect};

    struct TestPage {
        anchors: AnchorMap,
        scroll: f32,
        height: f32,
        interactive: bool,
    }

    impl AnchorSource for TestPage {
        fn anchor(&self, section: Section) -> Option<AnchorRect> {
            self.anchors.anchor(section)
        }
    }

    impl ExecutionContext for TestPage {
        fn is_interactive_context(&self) -> bool {
            self.interactive
        }
    }

    impl PageHost for TestPage {
        fn scroll_offset(&self) -> f32 {
            self.scroll
        }
        fn viewport_height(&self) -> f32 {
            self.height
        }
    }

    /// Five stacked 1000pt sections viewed through an 800pt viewport.
    fn page(scroll: f32) -> TestPage {
        let mut anchors = AnchorMap::new();
        for (i, section) in Section::ALL.into_iter().enumerate() {
            anchors.insert(section, AnchorRect::new(i as f32 * 1000.0 - scroll, 1000.0));
        }
        TestPage { anchors, scroll, height: 800.0, interactive: true }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_frame_is_empty_until_mounted() {
        let controller = BackgroundController::new(BackgroundConfig::default());
        assert_eq!(controller.lifecycle(), Lifecycle::Detached);
        assert!(controller.frame(Instant::now()).is_none());
    }

    #[test]
    fn test_mount_samples_eagerly() {
        let t0 = Instant::now();
        let mut controller = BackgroundController::new(BackgroundConfig::default());
        controller.mount(&page(2100.0), t0);
        assert_eq!(controller.active_section(), Section::Hero);
        assert_eq!(controller.pending_section(), Some(Section::Skills));
        assert_eq!(controller.tick(&page(2100.0), t0 + ms(100)).map(|c| c.to), Some(Section::Skills));
    }

    #[test]
    fn test_single_layer_when_settled() {
        let t0 = Instant::now();
        let mut controller = BackgroundController::new(BackgroundConfig::default());
        controller.mount(&page(0.0), t0);
        let frame = controller.frame(t0 + ms(16)).unwrap();
        assert_eq!(frame.layers.len(), 1);
        assert_eq!(frame.layers[0].section, Section::Hero);
        assert_eq!(frame.layers[0].shapes.len(), 5);
        assert_eq!(frame.particles.len(), 30);
    }

    #[test]
    fn test_crossfade_layers() {
        let t0 = Instant::now();
        let mut controller = BackgroundController::new(BackgroundConfig::default());
        controller.mount(&page(0.0), t0);
        controller.on_scroll(&page(1100.0), t0 + ms(10));
        controller.tick(&page(1100.0), t0 + ms(110));

        let frame = controller.frame(t0 + ms(710)).unwrap();
        assert_eq!(frame.layers.len(), 2);
        assert_eq!(frame.layers[0].section, Section::Hero);
        assert_eq!(frame.layers[1].section, Section::About);
        let total = frame.layers[0].opacity + frame.layers[1].opacity;
        assert!((total - 1.0).abs() < 1e-4);

        let settled = controller.frame(t0 + ms(2000)).unwrap();
        assert_eq!(settled.layers.len(), 1);
        assert_eq!(settled.layers[0].opacity, 1.0);
    }

    fn opacities(frame: &BackgroundFrame) -> Vec<(Section, f32)> {
        frame.layers.iter().map(|layer| (layer.section, layer.opacity)).collect()
    }

    #[test]
    fn test_commit_mid_fade_is_continuous() {
        let t0 = Instant::now();
        let mut controller = BackgroundController::new(BackgroundConfig::default());
        controller.mount(&page(0.0), t0);
        controller.on_scroll(&page(1100.0), t0 + ms(10));
        controller.tick(&page(1100.0), t0 + ms(110));

        // Skills commits while hero is still fading out
        controller.on_scroll(&page(2100.0), t0 + ms(500));
        let before = controller.frame(t0 + ms(599)).unwrap();
        controller.tick(&page(2100.0), t0 + ms(600));
        let after = controller.frame(t0 + ms(601)).unwrap();

        assert_eq!(
            opacities(&before).iter().map(|(s, _)| *s).collect::<Vec<_>>(),
            vec![Section::Hero, Section::About]
        );
        assert_eq!(
            opacities(&after).iter().map(|(s, _)| *s).collect::<Vec<_>>(),
            vec![Section::Hero, Section::About, Section::Skills]
        );
        for ((_, a), (_, b)) in opacities(&before).iter().zip(opacities(&after).iter()) {
            assert!((a - b).abs() < 0.01, "opacity jumped from {a} to {b}");
        }
        assert!(after.layers[2].opacity < 0.01);

        // The main blob of the outgoing about layer keeps its pose
        let pose_before = before.layers[1].main_blob.pose;
        let pose_after = after.layers[1].main_blob.pose;
        assert!((pose_before.scale - pose_after.scale).abs() < 0.01);
    }

    #[test]
    fn test_particles_deferred_until_interactive() {
        let t0 = Instant::now();
        let mut controller = BackgroundController::new(BackgroundConfig::default());
        let mut host = page(0.0);
        host.interactive = false;
        controller.mount(&host, t0);
        assert!(controller.frame(t0).unwrap().particles.is_empty());

        host.interactive = true;
        controller.tick(&host, t0 + ms(16));
        controller.tick(&host, t0 + ms(32));
        assert_eq!(controller.particles().generations(), 1);
        assert_eq!(controller.frame(t0 + ms(32)).unwrap().particles.len(), 30);
    }

    #[test]
    fn test_particles_can_be_disabled() {
        let config = BackgroundConfig {
            particles_enabled: false,
            ..BackgroundConfig::default()
        };
        let mut controller = BackgroundController::new(config);
        controller.mount(&page(0.0), Instant::now());
        assert!(!controller.particles().is_generated());
    }

    #[test]
    fn test_unmount_cancels_pending_commit() {
        let t0 = Instant::now();
        let mut controller = BackgroundController::new(BackgroundConfig::default());
        controller.mount(&page(0.0), t0);
        controller.on_scroll(&page(3100.0), t0 + ms(10));
        controller.unmount();

        assert_eq!(controller.time_to_commit(t0), None);
        assert_eq!(controller.tick(&page(3100.0), t0 + ms(500)), None);
        assert_eq!(controller.active_section(), Section::Hero);
        assert_eq!(controller.lifecycle(), Lifecycle::TornDown);

        // Mounting again after teardown is refused
        controller.mount(&page(3100.0), t0 + ms(600));
        assert!(!controller.is_mounted());
    }
}
