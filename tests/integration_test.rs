use folio::{
    compute_active_section, AnchorMap, AnchorRect, AnchorSource, BackgroundConfig, BackgroundController,
    ExecutionContext, Lifecycle, PageHost, ParticleField, ParticleProfile, Section, SectionRegistry,
    TransitionState, ViewportSample,
};
use anyhow::{ensure, Context, Result};
use std::time::{Duration, Instant};

/// A page of stacked sections seen through a fixed viewport.
struct Page {
    anchors: AnchorMap,
    scroll: f32,
    viewport: f32,
    interactive: bool,
}

impl Page {
    /// Sections of `section_height` stacked from the top of the page.
    fn stacked(section_height: f32, viewport: f32) -> Self {
        let mut page = Page {
            anchors: AnchorMap::new(),
            scroll: 0.0,
            viewport,
            interactive: true,
        };
        page.layout(section_height);
        page
    }

    fn layout(&mut self, section_height: f32) {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            let top = i as f32 * section_height - self.scroll;
            self.anchors.insert(section, AnchorRect::new(top, section_height));
        }
    }

    fn scroll_to(&mut self, offset: f32, section_height: f32) {
        self.scroll = offset;
        self.layout(section_height);
    }
}

impl AnchorSource for Page {
    fn anchor(&self, section: Section) -> Option<AnchorRect> {
        self.anchors.anchor(section)
    }
}

impl ExecutionContext for Page {
    fn is_interactive_context(&self) -> bool {
        self.interactive
    }
}

impl PageHost for Page {
    fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    fn viewport_height(&self) -> f32 {
        self.viewport
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_closest_midpoint_wins() -> Result<()> {
    let mut anchors = AnchorMap::new();
    anchors.insert(Section::Hero, AnchorRect::new(0.0, 200.0));
    anchors.insert(Section::About, AnchorRect::new(800.0, 200.0));
    anchors.insert(Section::Skills, AnchorRect::new(1600.0, 200.0));

    // Viewport midpoint at 850
    assert_eq!(compute_active_section(0.0, 1700.0, &anchors), Section::About);

    let sample = ViewportSample::take(0.0, 1700.0, &anchors);
    let distances: Vec<f32> = sample.distances.iter().map(|(_, d)| *d).collect();
    assert_eq!(distances, vec![750.0, 50.0, 850.0]);
    Ok(())
}

#[test]
fn test_active_section_tracks_every_offset() -> Result<()> {
    let height = 900.0;
    let mut page = Page::stacked(height, 700.0);
    for step in 0..=40 {
        let offset = step as f32 * 100.0;
        page.scroll_to(offset, height);
        let active = compute_active_section(page.scroll_offset(), page.viewport_height(), &page);

        let centre = offset + 350.0;
        let expected = Section::ALL
            .into_iter()
            .min_by(|a, b| {
                let da = (page.anchor(*a).map(|r| r.absolute_midpoint(offset)).unwrap_or(f32::MAX) - centre).abs();
                let db = (page.anchor(*b).map(|r| r.absolute_midpoint(offset)).unwrap_or(f32::MAX) - centre).abs();
                da.total_cmp(&db)
            })
            .context("page has sections")?;
        ensure!(active == expected, "offset {offset}: got {active}, expected {expected}");
    }
    Ok(())
}

#[test]
fn test_debounce_settles_on_last_candidate() -> Result<()> {
    let t0 = Instant::now();
    let mut transition = TransitionState::new(ms(100));
    transition.observe(Section::About, t0);
    transition.observe(Section::Skills, t0 + ms(30));
    transition.observe(Section::About, t0 + ms(60));

    assert_eq!(transition.poll(t0 + ms(120)), None, "the window restarts on every candidate");
    let change = transition.poll(t0 + ms(160)).context("candidate should commit")?;
    assert_eq!(change.to, Section::About);
    assert_eq!(transition.active(), Section::About);
    Ok(())
}

#[test]
fn test_initial_state_is_hero() -> Result<()> {
    let controller = BackgroundController::new(BackgroundConfig::default());
    assert_eq!(controller.active_section(), Section::Hero);
    assert_eq!(controller.previous_section(), Section::Hero);
    assert_eq!(controller.lifecycle(), Lifecycle::Detached);
    Ok(())
}

#[test]
fn test_particle_batch_counts() -> Result<()> {
    let t0 = Instant::now();
    let page = Page::stacked(1000.0, 800.0);
    let mut controller = BackgroundController::new(BackgroundConfig::default());
    controller.mount(&page, t0);
    for frame in 1..10 {
        controller.tick(&page, t0 + ms(frame * 16));
    }
    assert_eq!(controller.particles().particles().len(), 30);
    assert_eq!(controller.particles().generations(), 1);

    let mut bokeh = ParticleField::new(ParticleProfile::bokeh(), None);
    assert!(bokeh.ensure_generated(&true));
    assert!(!bokeh.ensure_generated(&true));
    assert_eq!(bokeh.particles().len(), 20);
    Ok(())
}

#[test]
fn test_seeded_batches_repeat() -> Result<()> {
    let config = BackgroundConfig {
        seed: Some(1234),
        ..BackgroundConfig::default()
    };
    let page = Page::stacked(1000.0, 800.0);
    let now = Instant::now();

    let mut a = BackgroundController::new(config.clone());
    let mut b = BackgroundController::new(config);
    a.mount(&page, now);
    b.mount(&page, now);
    assert_eq!(a.particles().particles(), b.particles().particles());
    Ok(())
}

#[test]
fn test_unmount_ignores_later_scrolls() -> Result<()> {
    let t0 = Instant::now();
    let height = 1000.0;
    let mut page = Page::stacked(height, 800.0);
    let mut controller = BackgroundController::new(BackgroundConfig::default());
    controller.mount(&page, t0);
    controller.unmount();

    page.scroll_to(3100.0, height);
    controller.on_scroll(&page, t0 + ms(10));
    assert_eq!(controller.tick(&page, t0 + ms(500)), None);
    assert_eq!(controller.active_section(), Section::Hero);
    assert_eq!(controller.pending_section(), None);
    assert!(controller.frame(t0 + ms(500)).is_none());
    Ok(())
}

#[test]
fn test_scroll_to_skills_end_to_end() -> Result<()> {
    let t0 = Instant::now();
    let height = 1000.0;
    let mut page = Page::stacked(height, 800.0);
    let mut controller = BackgroundController::new(BackgroundConfig::default());
    controller.mount(&page, t0);

    // Settle on about first
    page.scroll_to(1100.0, height);
    controller.on_scroll(&page, t0 + ms(20));
    controller.tick(&page, t0 + ms(130)).context("about should commit")?;
    assert_eq!(controller.active_section(), Section::About);

    // Then scroll through to skills with a few intermediate events
    for (i, offset) in [1500.0, 1800.0, 2100.0].into_iter().enumerate() {
        page.scroll_to(offset, height);
        controller.on_scroll(&page, t0 + ms(200 + i as u64 * 20));
    }
    assert_eq!(controller.tick(&page, t0 + ms(250)), None, "still inside the debounce window");

    let change = controller.tick(&page, t0 + ms(400)).context("skills should commit")?;
    assert_eq!(change.from, Section::About);
    assert_eq!(controller.active_section(), Section::Skills);
    assert_eq!(controller.previous_section(), Section::About);

    // Hero is still fading out from the first commit, about from the second
    let frame = controller.frame(t0 + ms(600)).context("mounted controller has a frame")?;
    let sections: Vec<Section> = frame.layers.iter().map(|layer| layer.section).collect();
    assert_eq!(sections, vec![Section::Hero, Section::About, Section::Skills]);
    assert_eq!(frame.layers[2].main_blob.gradient, SectionRegistry::theme(Section::Skills).primary);

    let settled = controller.frame(t0 + ms(2000)).context("mounted controller has a frame")?;
    assert_eq!(settled.layers.len(), 1);
    assert_eq!(settled.layers[0].opacity, 1.0);
    Ok(())
}

#[test]
fn test_unknown_anchor_id_falls_back_to_hero() -> Result<()> {
    assert_eq!(SectionRegistry::theme_for_id("blog"), SectionRegistry::theme(Section::Hero));
    assert_eq!(SectionRegistry::theme_for_id("projects"), SectionRegistry::theme(Section::Projects));
    Ok(())
}
