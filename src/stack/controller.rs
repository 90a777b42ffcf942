//! State machine driving the stacked-cards effect.
//!
//! The controller owns the lifecycle phase, the rendering mode and the
//! active-panel index. It never touches the DOM itself: it reads through
//! [`ViewportOps`] and hands transform strings back to the caller.

use crate::config::StackConfig;

use super::geometry::{self, StackMetrics};
use super::viewport::ViewportOps;
use super::visibility;

/// Lifecycle phase of the effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mounted, nothing measured yet.
    Uninitialized,
    /// Measurements are stale; ticks must not trust them.
    Measuring,
    /// Measured and quiet.
    Idle,
    /// An animation frame has been claimed and not yet run.
    Animating,
}

/// Rendering mode, picked fresh at every settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Desktop, motion allowed: sticky cards with scroll-driven transforms.
    Stacked,
    /// Narrow viewport or reduced motion: plain flow, ratio-based tab sync.
    Static,
}

/// What the rendering layer applies after a settle.
#[derive(Clone, Debug, PartialEq)]
pub struct RestUpdate {
    pub mode: Mode,
    /// One transform per panel, in panel order.
    pub transforms: Vec<String>,
    pub padding_bottom: f64,
}

/// Outcome of one animation frame.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameResult {
    /// Wrong phase or a measurement was missing; nothing to apply.
    Skipped,
    /// Full-stop guard tripped; the transforms already on screen stay.
    Halted,
    /// Stacked-mode geometry, plus a tab switch when the nearest panel moved.
    Stacked {
        transforms: Vec<String>,
        active: Option<usize>,
    },
    /// Static-mode visibility sync.
    Synced { active: Option<usize> },
}

pub struct StackController {
    config: StackConfig,
    panel_count: usize,
    phase: Phase,
    mode: Mode,
    active: usize,
}

impl StackController {
    pub fn new(config: StackConfig, panel_count: usize) -> Self {
        Self {
            config,
            panel_count,
            phase: Phase::Uninitialized,
            mode: Mode::Static,
            active: 0,
        }
    }

    /// Mark measurements stale. Called on mount and when a resize lands.
    pub fn begin_measure(&mut self) {
        self.phase = Phase::Measuring;
    }

    /// Re-classify the mode and produce the at-rest layout.
    ///
    /// With no panels the controller parks itself in `Static` and the
    /// caller has nothing to apply.
    pub fn settle(&mut self, viewport: &dyn ViewportOps) -> Option<RestUpdate> {
        self.phase = Phase::Idle;
        if self.panel_count == 0 {
            self.mode = Mode::Static;
            return None;
        }
        let desktop = viewport.viewport_width() >= self.config.desktop_min_width;
        self.mode = if desktop && !viewport.prefers_reduced_motion() {
            Mode::Stacked
        } else {
            Mode::Static
        };
        let update = match self.mode {
            Mode::Stacked => RestUpdate {
                mode: Mode::Stacked,
                transforms: geometry::rest_layout(self.panel_count, self.config.gap)
                    .iter()
                    .map(|layout| layout.css())
                    .collect(),
                padding_bottom: geometry::stack_padding(self.panel_count, self.config.gap),
            },
            Mode::Static => RestUpdate {
                mode: Mode::Static,
                transforms: vec!["none".to_owned(); self.panel_count],
                padding_bottom: 0.0,
            },
        };
        Some(update)
    }

    /// Claim the next animation frame. Refuses while one is already pending
    /// and while measurements are stale, which is the scroll-burst guard.
    pub fn request_frame(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Animating;
        true
    }

    /// Roll back a claimed frame that could not be scheduled.
    pub fn cancel_frame(&mut self) {
        if self.phase == Phase::Animating {
            self.phase = Phase::Idle;
        }
    }

    /// Run the claimed frame: stacked geometry in `Stacked` mode, visibility
    /// sync in `Static` mode.
    pub fn run_frame(&mut self, viewport: &dyn ViewportOps) -> FrameResult {
        if self.phase != Phase::Animating {
            return FrameResult::Skipped;
        }
        self.phase = Phase::Idle;
        match self.mode {
            Mode::Static => FrameResult::Synced {
                active: self.sync_by_visibility(viewport),
            },
            Mode::Stacked => self.stacked_frame(viewport),
        }
    }

    /// Scale upkeep between scroll events. Only runs while idle in stacked
    /// mode; unlike a frame it ignores the full-stop guard, so scales stay
    /// fresh even past the end of the stack.
    pub fn maintain(&self, viewport: &dyn ViewportOps) -> Option<Vec<String>> {
        if self.phase != Phase::Idle || self.mode != Mode::Stacked {
            return None;
        }
        let (metrics, ..) = self.measure(viewport)?;
        Some(self.transforms_for(&metrics))
    }

    /// Ratio-based sync, also run once right after a settle so the tabs
    /// match whatever the user is already looking at.
    pub fn sync_by_visibility(&mut self, viewport: &dyn ViewportOps) -> Option<usize> {
        let region = viewport.visible_region();
        let ratios: Vec<f64> = (0..self.panel_count)
            .map(|index| {
                viewport
                    .panel_rect(index)
                    .map(|rect| visibility::visible_ratio(&rect, &region))
                    .unwrap_or(0.0)
            })
            .collect();
        let winner = visibility::ratio_winner(&ratios, self.active, self.config.visibility_threshold)?;
        self.active = winner;
        Some(winner)
    }

    /// Direct tab selection. Returns whether the active panel changed;
    /// out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.panel_count || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    fn stacked_frame(&mut self, viewport: &dyn ViewportOps) -> FrameResult {
        let Some((metrics, viewport_height, container_height)) = self.measure(viewport) else {
            return FrameResult::Skipped;
        };
        if geometry::past_end(&metrics, self.panel_count, viewport_height, container_height) {
            return FrameResult::Halted;
        }
        let transforms = self.transforms_for(&metrics);
        let active = geometry::nearest_panel(&metrics, self.panel_count)
            .and_then(|index| self.promote(index));
        FrameResult::Stacked { transforms, active }
    }

    fn measure(&self, viewport: &dyn ViewportOps) -> Option<(StackMetrics, f64, f64)> {
        let container = viewport.container()?;
        let sticky = viewport.sticky_reference()?;
        if sticky.card_height <= 0.0 {
            return None;
        }
        let metrics = StackMetrics {
            reference_top: sticky.card_top,
            container_top: container.top,
            card_height: sticky.card_height,
            gap: self.config.gap,
        };
        Some((metrics, viewport.viewport_height(), container.height))
    }

    fn transforms_for(&self, metrics: &StackMetrics) -> Vec<String> {
        geometry::compute_layout(
            metrics,
            self.panel_count,
            self.config.min_scale,
            self.config.shrink_rate,
        )
        .iter()
        .map(|layout| layout.css())
        .collect()
    }

    fn promote(&mut self, index: usize) -> Option<usize> {
        if index == self.active {
            None
        } else {
            self.active = index;
            Some(index)
        }
    }
}

// Observation points for the tests; the component layer reads state from
// `RestUpdate` and `FrameResult` payloads instead.
#[cfg(test)]
impl StackController {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn active(&self) -> usize {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::viewport::fake::FakeViewport;
    use crate::stack::viewport::{ContainerMetrics, Rect, ScrollerState, StickyReference};

    const PANELS: usize = 6;

    fn controller() -> StackController {
        StackController::new(StackConfig::default(), PANELS)
    }

    fn desktop() -> FakeViewport {
        FakeViewport {
            width: 1440.0,
            height: 800.0,
            ..Default::default()
        }
    }

    /// Desktop viewport mid-scroll: scrolled = 870, cards 400 px, gap 24.
    fn mid_scroll() -> FakeViewport {
        FakeViewport {
            width: 1440.0,
            height: 800.0,
            container: Some(ContainerMetrics { top: -780.0, height: 3_000.0 }),
            sticky: Some(StickyReference { card_top: 90.0, card_height: 400.0 }),
            ..Default::default()
        }
    }

    fn settled(viewport: &FakeViewport) -> StackController {
        let mut ctl = controller();
        ctl.begin_measure();
        ctl.settle(viewport);
        ctl
    }

    #[test]
    fn starts_uninitialized_on_the_first_panel() {
        let ctl = controller();
        assert_eq!(ctl.phase(), Phase::Uninitialized);
        assert_eq!(ctl.active(), 0);
    }

    #[test]
    fn settle_on_desktop_produces_the_resting_stack() {
        let mut ctl = controller();
        ctl.begin_measure();
        assert_eq!(ctl.phase(), Phase::Measuring);
        let update = ctl.settle(&desktop()).unwrap();
        assert_eq!(update.mode, Mode::Stacked);
        assert_eq!(update.padding_bottom, 120.0);
        assert_eq!(update.transforms[0], "translateY(0px)");
        assert_eq!(update.transforms[1], "translateY(24px)");
        assert_eq!(update.transforms[5], "translateY(120px)");
        assert_eq!(ctl.phase(), Phase::Idle);
        assert_eq!(ctl.mode(), Mode::Stacked);
    }

    #[test]
    fn settle_below_the_desktop_width_goes_static() {
        let viewport = FakeViewport { width: 1_023.0, height: 800.0, ..Default::default() };
        let mut ctl = controller();
        ctl.begin_measure();
        let update = ctl.settle(&viewport).unwrap();
        assert_eq!(update.mode, Mode::Static);
        assert_eq!(update.transforms, vec!["none"; PANELS]);
        assert_eq!(update.padding_bottom, 0.0);
    }

    #[test]
    fn settle_honors_reduced_motion_on_desktop() {
        let viewport = FakeViewport {
            width: 1_440.0,
            height: 800.0,
            reduced_motion: true,
            ..Default::default()
        };
        let mut ctl = controller();
        ctl.begin_measure();
        let update = ctl.settle(&viewport).unwrap();
        assert_eq!(update.mode, Mode::Static);
        assert_eq!(ctl.mode(), Mode::Static);
    }

    #[test]
    fn settle_is_idempotent() {
        let viewport = FakeViewport { width: 900.0, height: 700.0, ..Default::default() };
        let mut ctl = controller();
        ctl.begin_measure();
        let first = ctl.settle(&viewport);
        let second = ctl.settle(&viewport);
        assert_eq!(first, second);
    }

    #[test]
    fn settle_with_no_panels_is_inert() {
        let mut ctl = StackController::new(StackConfig::default(), 0);
        ctl.begin_measure();
        assert_eq!(ctl.settle(&desktop()), None);
        assert_eq!(ctl.mode(), Mode::Static);
        assert_eq!(ctl.phase(), Phase::Idle);
    }

    #[test]
    fn frames_cannot_be_claimed_while_measuring() {
        let mut ctl = controller();
        assert!(!ctl.request_frame());
        ctl.begin_measure();
        assert!(!ctl.request_frame());
    }

    #[test]
    fn only_one_frame_is_claimed_per_burst() {
        let mut ctl = settled(&desktop());
        assert!(ctl.request_frame());
        assert!(!ctl.request_frame());
        assert!(!ctl.request_frame());
    }

    #[test]
    fn cancel_releases_a_claimed_frame() {
        let mut ctl = settled(&desktop());
        assert!(ctl.request_frame());
        ctl.cancel_frame();
        assert!(ctl.request_frame());
    }

    #[test]
    fn run_frame_outside_a_claim_is_skipped() {
        let mut ctl = settled(&desktop());
        assert_eq!(ctl.run_frame(&desktop()), FrameResult::Skipped);
    }

    #[test]
    fn stacked_frame_scales_passed_cards_and_promotes_the_nearest() {
        let viewport = mid_scroll();
        let mut ctl = settled(&viewport);
        assert!(ctl.request_frame());
        match ctl.run_frame(&viewport) {
            FrameResult::Stacked { transforms, active } => {
                // offsets: 870, 446, 22, -402, ...
                assert!(transforms[0].starts_with("translateY(0px) scale(0.89"));
                assert!(transforms[1].starts_with("translateY(24px) scale(0.94"));
                assert!(transforms[2].starts_with("translateY(48px) scale(0.99"));
                assert_eq!(transforms[3], "translateY(72px)");
                assert_eq!(transforms[4], "translateY(96px)");
                assert_eq!(transforms[5], "translateY(120px)");
                assert_eq!(active, Some(2));
            }
            other => panic!("expected stacked frame, got {other:?}"),
        }
        assert_eq!(ctl.active(), 2);
        assert_eq!(ctl.phase(), Phase::Idle);
    }

    #[test]
    fn stacked_frame_does_not_re_announce_the_active_panel() {
        let viewport = mid_scroll();
        let mut ctl = settled(&viewport);
        assert!(ctl.request_frame());
        let _ = ctl.run_frame(&viewport);
        assert!(ctl.request_frame());
        match ctl.run_frame(&viewport) {
            FrameResult::Stacked { active, .. } => assert_eq!(active, None),
            other => panic!("expected stacked frame, got {other:?}"),
        }
    }

    #[test]
    fn frame_halts_past_the_end_of_the_stack() {
        // scrolled + vh - ch - card + gap + gap * count = 870 + 800 - ch - 232;
        // equality at ch = 1438 keeps animating, anything shorter halts.
        let mut viewport = mid_scroll();
        viewport.container = Some(ContainerMetrics { top: -780.0, height: 1_438.0 });
        let mut ctl = settled(&viewport);
        assert!(ctl.request_frame());
        assert!(matches!(ctl.run_frame(&viewport), FrameResult::Stacked { .. }));

        viewport.container = Some(ContainerMetrics { top: -780.0, height: 1_437.0 });
        assert!(ctl.request_frame());
        assert_eq!(ctl.run_frame(&viewport), FrameResult::Halted);
        assert_eq!(ctl.phase(), Phase::Idle);
    }

    #[test]
    fn missing_measurements_skip_the_frame() {
        let viewport = mid_scroll();
        let mut ctl = settled(&viewport);
        let mut blind = mid_scroll();
        blind.sticky = None;
        assert!(ctl.request_frame());
        assert_eq!(ctl.run_frame(&blind), FrameResult::Skipped);

        let mut flat = mid_scroll();
        flat.sticky = Some(StickyReference { card_top: 90.0, card_height: 0.0 });
        assert!(ctl.request_frame());
        assert_eq!(ctl.run_frame(&flat), FrameResult::Skipped);
    }

    #[test]
    fn static_frame_syncs_by_visibility() {
        let mut viewport = FakeViewport {
            width: 800.0,
            height: 800.0,
            panels: vec![
                Rect { top: -700.0, height: 400.0 },
                Rect { top: 100.0, height: 400.0 },
                Rect { top: 900.0, height: 400.0 },
                Rect { top: 1_700.0, height: 400.0 },
                Rect { top: 2_500.0, height: 400.0 },
                Rect { top: 3_300.0, height: 400.0 },
            ],
            ..Default::default()
        };
        let mut ctl = settled(&viewport);
        assert_eq!(ctl.mode(), Mode::Static);
        assert!(ctl.request_frame());
        assert_eq!(ctl.run_frame(&viewport), FrameResult::Synced { active: Some(1) });
        assert_eq!(ctl.active(), 1);

        // Nothing clears the threshold: selection stays.
        for panel in &mut viewport.panels {
            panel.top += 10_000.0;
        }
        assert!(ctl.request_frame());
        assert_eq!(ctl.run_frame(&viewport), FrameResult::Synced { active: None });
        assert_eq!(ctl.active(), 1);
    }

    #[test]
    fn visibility_sync_uses_the_scroller_region_when_scrollable() {
        let viewport = FakeViewport {
            width: 800.0,
            height: 800.0,
            scroller_state: Some(ScrollerState {
                rect: Rect { top: 0.0, height: 200.0 },
                scroll_top: 0.0,
                scrollable: true,
            }),
            // Fully inside the viewport but mostly outside the scroller.
            panels: vec![
                Rect { top: 150.0, height: 400.0 },
                Rect { top: 0.0, height: 200.0 },
            ],
            ..Default::default()
        };
        let mut ctl = StackController::new(StackConfig::default(), 2);
        ctl.begin_measure();
        ctl.settle(&viewport);
        assert_eq!(ctl.sync_by_visibility(&viewport), Some(1));
    }

    #[test]
    fn visibility_ties_keep_the_current_selection() {
        let viewport = FakeViewport {
            width: 800.0,
            height: 800.0,
            panels: vec![
                Rect { top: 0.0, height: 400.0 },
                Rect { top: 400.0, height: 400.0 },
            ],
            ..Default::default()
        };
        let mut ctl = StackController::new(StackConfig::default(), 2);
        ctl.begin_measure();
        ctl.settle(&viewport);
        assert_eq!(ctl.sync_by_visibility(&viewport), None);
        assert_eq!(ctl.active(), 0);
    }

    #[test]
    fn select_ignores_out_of_range_and_repeats() {
        let mut ctl = settled(&desktop());
        assert!(!ctl.select(PANELS));
        assert!(!ctl.select(0));
        assert!(ctl.select(3));
        assert_eq!(ctl.active(), 3);
        assert!(!ctl.select(3));
    }

    #[test]
    fn maintain_only_runs_idle_and_stacked() {
        let viewport = mid_scroll();
        let mut ctl = settled(&viewport);
        assert!(ctl.maintain(&viewport).is_some());
        assert!(ctl.request_frame());
        assert!(ctl.maintain(&viewport).is_none());
        let _ = ctl.run_frame(&viewport);
        assert!(ctl.maintain(&viewport).is_some());

        let narrow = FakeViewport { width: 600.0, height: 800.0, ..Default::default() };
        ctl.begin_measure();
        assert!(ctl.maintain(&viewport).is_none());
        ctl.settle(&narrow);
        assert!(ctl.maintain(&viewport).is_none());
    }

    #[test]
    fn maintain_ignores_the_full_stop_guard() {
        // A container this short halts frames, yet upkeep still computes.
        let mut viewport = mid_scroll();
        viewport.container = Some(ContainerMetrics { top: -780.0, height: 100.0 });
        let ctl = settled(&viewport);
        let transforms = ctl.maintain(&viewport).unwrap();
        assert!(transforms[0].starts_with("translateY(0px) scale(0.89"));
    }
}
