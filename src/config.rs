//! Tuning values for the scroll-stack effect.
//!
//! Everything that used to be a magic number in the effect lives here so the
//! section component can be handed a different profile without touching the
//! geometry code.

/// Behavior knobs for the stacked-cards section.
#[derive(Clone, Debug, PartialEq)]
pub struct StackConfig {
    /// Vertical gap between stacked cards, px.
    pub gap: f64,
    /// How much a passed card shrinks per scrolled pixel.
    pub shrink_rate: f64,
    /// Lower bound for any applied scale.
    pub min_scale: f64,
    /// Share of a panel that must be visible before ratio sync may switch tabs.
    pub visibility_threshold: f64,
    /// Viewport width at and above which the stacked effect runs.
    pub desktop_min_width: f64,
    /// Delay before the first measurement after mount, ms.
    pub mount_settle_ms: u32,
    /// Delay before re-measuring once a resize has been debounced, ms.
    pub resize_settle_ms: u32,
    /// Quiet period required between resize events, ms.
    pub resize_debounce_ms: u32,
    /// Period of the idle scale upkeep tick, ms.
    pub maintain_interval_ms: u32,
    /// Gap left above a card when the page scrolls to it, px.
    pub nav_scroll_margin: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            gap: 24.0,
            shrink_rate: 0.05,
            min_scale: 0.7,
            visibility_threshold: 0.35,
            desktop_min_width: 1024.0,
            mount_settle_ms: 200,
            resize_settle_ms: 100,
            resize_debounce_ms: 400,
            maintain_interval_ms: 16,
            nav_scroll_margin: 80.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile() {
        let config = StackConfig::default();
        assert_eq!(config.gap, 24.0);
        assert_eq!(config.shrink_rate, 0.05);
        assert_eq!(config.min_scale, 0.7);
        assert_eq!(config.visibility_threshold, 0.35);
        assert_eq!(config.desktop_min_width, 1024.0);
        assert_eq!(config.mount_settle_ms, 200);
        assert_eq!(config.resize_settle_ms, 100);
        assert_eq!(config.resize_debounce_ms, 400);
        assert_eq!(config.maintain_interval_ms, 16);
        assert_eq!(config.nav_scroll_margin, 80.0);
    }
}
