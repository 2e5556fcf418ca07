//! Debounced section transitions.
//!
//! Scroll sampling produces a noisy stream of candidate sections. A candidate
//! only becomes the active section after a quiet period in which no other
//! candidate arrived; intermediate candidates are dropped, never committed.

use std::time::{Duration, Instant};

use crate::easing;
use crate::section::Section;

/// Quiet period a candidate section must survive before it is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Duration of the background cross-fade after a commit.
pub const DEFAULT_FADE: Duration = Duration::from_millis(1200);

/// A pending value with a cancellable deadline.
///
/// `latch` replaces any earlier pending value and restarts the deadline;
/// `poll` hands the value out once the deadline has passed.
#[derive(Debug, Clone)]
pub struct DebounceLatch<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> DebounceLatch<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Stores `value` and (re)starts the deadline at `now + delay`.
    pub fn latch(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(value, _)| value)
    }

    /// Deadline of the pending value.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Returns the pending value once its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}

/// A committed section change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    pub from: Section,
    pub to: Section,
}

/// A formerly active section whose layer is still fading out.
///
/// It keeps fading from the opacity it had when it was replaced, so a commit
/// in the middle of a cross-fade never makes a visible layer jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadingLayer {
    pub section: Section,
    /// Section this one took over from when it became active
    pub entered_from: Section,
    /// When it became active; `None` for the initial section
    pub entered_at: Option<Instant>,
    /// Opacity at the moment it was replaced
    pub start_opacity: f32,
    pub replaced_at: Instant,
}

impl FadingLayer {
    pub fn opacity_at(&self, now: Instant, fade: Duration) -> f32 {
        if fade.is_zero() {
            return 0.0;
        }
        let t = now.saturating_duration_since(self.replaced_at).as_secs_f32() / fade.as_secs_f32();
        self.start_opacity * (1.0 - easing::FADE.ease(t))
    }
}

/// Active/previous section bookkeeping with a debounced commit.
#[derive(Debug, Clone)]
pub struct TransitionState {
    active: Section,
    previous: Section,
    latch: DebounceLatch<Section>,
    changed_at: Option<Instant>,
    fade: Duration,
    /// Oldest first
    fading: Vec<FadingLayer>,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl TransitionState {
    /// Starts on the first section with no transition in flight.
    pub fn new(debounce: Duration) -> Self {
        let first = Section::ALL[0];
        Self {
            active: first,
            previous: first,
            latch: DebounceLatch::new(debounce),
            changed_at: None,
            fade: DEFAULT_FADE,
            fading: Vec::new(),
        }
    }

    pub fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn previous(&self) -> Section {
        self.previous
    }

    /// Candidate waiting for its quiet period to elapse.
    pub fn pending(&self) -> Option<Section> {
        self.latch.pending().copied()
    }

    /// Deadline of the pending candidate, used to schedule the next repaint.
    pub fn deadline(&self) -> Option<Instant> {
        self.latch.deadline()
    }

    /// Feeds one sampler result.
    ///
    /// A candidate different from the active section is latched, replacing any
    /// earlier candidate. A candidate equal to the active section cancels the
    /// pending one.
    pub fn observe(&mut self, candidate: Section, now: Instant) {
        if candidate == self.active {
            if let Some(dropped) = self.latch.pending().copied() {
                tracing::debug!(%dropped, "scrolled back before commit");
            }
            self.latch.cancel();
            return;
        }

        if self.latch.pending() != Some(&candidate) {
            tracing::debug!(%candidate, "latched section candidate");
        }
        self.latch.latch(candidate, now);
    }

    /// Commits the pending candidate once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<SectionChange> {
        let next = self.latch.poll(now)?;
        let change = SectionChange {
            from: self.active,
            to: next,
        };

        let fade = self.fade;
        let start_opacity = self.crossfade_progress(now);
        self.fading.retain(|layer| layer.opacity_at(now, fade) > 0.0);
        self.fading.push(FadingLayer {
            section: self.active,
            entered_from: self.previous,
            entered_at: self.changed_at,
            start_opacity,
            replaced_at: now,
        });

        self.previous = self.active;
        self.active = next;
        self.changed_at = Some(now);
        tracing::info!(from = %change.from, to = %change.to, "section changed");
        Some(change)
    }

    /// Drops any pending candidate without committing it.
    pub fn cancel_pending(&mut self) {
        self.latch.cancel();
    }

    /// When the active section was committed; `None` before the first commit.
    pub fn changed_at(&self) -> Option<Instant> {
        self.changed_at
    }

    /// Time elapsed since the last commit.
    pub fn since_change(&self, now: Instant) -> Option<Duration> {
        self.changed_at.map(|at| now.saturating_duration_since(at))
    }

    /// Eased fade-in of the active section's layer, 0.0 at the commit and 1.0
    /// once the cross-fade is over.
    pub fn crossfade_progress(&self, now: Instant) -> f32 {
        match self.since_change(now) {
            None => 1.0,
            Some(_) if self.fade.is_zero() => 1.0,
            Some(elapsed) => easing::FADE.ease(elapsed.as_secs_f32() / self.fade.as_secs_f32()),
        }
    }

    /// Replaced sections still visible at `now`, oldest first, with their opacity.
    pub fn fading_layers(&self, now: Instant) -> impl Iterator<Item = (&FadingLayer, f32)> + '_ {
        self.fading
            .iter()
            .map(move |layer| (layer, layer.opacity_at(now, self.fade)))
            .filter(|(_, opacity)| *opacity > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_initial_state_is_first_section() {
        let state = TransitionState::default();
        assert_eq!(state.active(), Section::Hero);
        assert_eq!(state.previous(), Section::Hero);
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn test_commit_after_quiet_period() {
        let t0 = Instant::now();
        let mut state = TransitionState::default();
        state.observe(Section::About, t0);

        assert_eq!(state.poll(t0 + ms(99)), None);
        let change = state.poll(t0 + ms(100)).expect("should commit");
        assert_eq!(change, SectionChange { from: Section::Hero, to: Section::About });
        assert_eq!(state.active(), Section::About);
        assert_eq!(state.previous(), Section::Hero);
        assert_eq!(state.fading_layers(t0 + ms(100)).count(), 1);
    }

    #[test]
    fn test_last_candidate_wins_within_window() {
        let t0 = Instant::now();
        let mut state = TransitionState::default();
        state.observe(Section::About, t0);
        state.observe(Section::Skills, t0 + ms(30));
        state.observe(Section::About, t0 + ms(60));

        // Deadline restarted by the last candidate
        assert_eq!(state.poll(t0 + ms(130)), None);
        let change = state.poll(t0 + ms(160)).unwrap();
        assert_eq!(change.to, Section::About);
        assert_eq!(state.poll(t0 + ms(1000)), None);
    }

    #[test]
    fn test_returning_to_active_cancels_pending() {
        let t0 = Instant::now();
        let mut state = TransitionState::default();
        state.observe(Section::About, t0);
        state.observe(Section::Hero, t0 + ms(50));
        assert_eq!(state.poll(t0 + ms(500)), None);
        assert_eq!(state.active(), Section::Hero);
    }

    #[test]
    fn test_crossfade_progress() {
        let t0 = Instant::now();
        let mut state = TransitionState::default();
        assert_eq!(state.crossfade_progress(t0), 1.0);

        state.observe(Section::Contact, t0);
        state.poll(t0 + ms(100));
        assert_eq!(state.crossfade_progress(t0 + ms(100)), 0.0);
        let mid = state.crossfade_progress(t0 + ms(700));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(state.crossfade_progress(t0 + ms(1300)), 1.0);
        assert_eq!(state.fading_layers(t0 + ms(1300)).count(), 0);
    }

    #[test]
    fn test_commit_mid_fade_keeps_outgoing_opacity() {
        let t0 = Instant::now();
        let mut state = TransitionState::default();
        state.observe(Section::About, t0);
        state.poll(t0 + ms(100));

        let before = t0 + ms(600);
        let about_before = state.crossfade_progress(before);
        let hero_before: Vec<f32> = state.fading_layers(before).map(|(_, opacity)| opacity).collect();

        state.observe(Section::Skills, t0 + ms(500));
        state.poll(before).unwrap();

        let fading: Vec<(Section, f32)> = state
            .fading_layers(before)
            .map(|(layer, opacity)| (layer.section, opacity))
            .collect();
        assert_eq!(fading.len(), 2);
        assert_eq!(fading[0], (Section::Hero, hero_before[0]));
        assert_eq!(fading[1], (Section::About, about_before));
        assert_eq!(state.crossfade_progress(before), 0.0);

        // Both keep fading out on their own clocks
        assert_eq!(state.fading_layers(t0 + ms(1300)).count(), 1);
        assert_eq!(state.fading_layers(t0 + ms(1800)).count(), 0);
    }

    #[test]
    fn test_zero_fade_drops_outgoing_layer() {
        let t0 = Instant::now();
        let mut state = TransitionState::default().with_fade(Duration::ZERO);
        state.observe(Section::Projects, t0);
        state.poll(t0 + ms(100));
        assert_eq!(state.crossfade_progress(t0 + ms(100)), 1.0);
        assert_eq!(state.fading_layers(t0 + ms(100)).count(), 0);
    }

    #[test]
    fn test_latch_poll_is_one_shot() {
        let t0 = Instant::now();
        let mut latch = DebounceLatch::new(ms(10));
        latch.latch(7u32, t0);
        assert_eq!(latch.deadline(), Some(t0 + ms(10)));
        assert_eq!(latch.poll(t0 + ms(10)), Some(7));
        assert!(!latch.is_pending());
        assert_eq!(latch.poll(t0 + ms(20)), None);
    }
}
