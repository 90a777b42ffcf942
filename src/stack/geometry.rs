//! Pure geometry for the stacked-cards effect.
//!
//! Everything here works on numbers measured elsewhere. Nothing in this
//! module touches the DOM, which is what keeps the scroll math testable on
//! the host.

/// Measured inputs for one layout pass.
///
/// `reference_top` is the resolved sticky `top` of the first card and
/// `container_top` the container's position relative to the viewport, so
/// their difference is how far the stack has scrolled past its rest point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackMetrics {
    pub reference_top: f64,
    pub container_top: f64,
    /// Rendered height of one card, px.
    pub card_height: f64,
    /// Vertical gap between cards, px.
    pub gap: f64,
}

impl StackMetrics {
    /// Distance the container has scrolled past the sticky reference.
    pub fn scrolled(&self) -> f64 {
        self.reference_top - self.container_top
    }

    /// Signed distance of panel `index` from the reference point. Positive
    /// once the panel has been reached and pinned.
    pub fn offset(&self, index: usize) -> f64 {
        self.scrolled() - index as f64 * (self.card_height + self.gap)
    }
}

/// Transform for a single card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
    pub translate_y: f64,
    pub scale: f64,
}

impl CardLayout {
    /// CSS transform value. Scale is omitted while the card is at full size
    /// so the at-rest and animated strings stay comparable.
    pub fn css(&self) -> String {
        if self.scale < 1.0 {
            format!("translateY({}px) scale({})", self.translate_y, self.scale)
        } else {
            format!("translateY({}px)", self.translate_y)
        }
    }
}

/// Layout for every card at the current scroll position.
///
/// A card keeps its rest translation; once its offset turns positive it
/// shrinks by `shrink_rate` per scrolled pixel, clamped to `[min_scale, 1]`.
/// The last card never shrinks, it only rides on top of the stack.
pub fn compute_layout(
    metrics: &StackMetrics,
    count: usize,
    min_scale: f64,
    shrink_rate: f64,
) -> Vec<CardLayout> {
    (0..count)
        .map(|index| {
            let translate_y = metrics.gap * index as f64;
            let offset = metrics.offset(index);
            let scale = if offset > 0.0 && metrics.card_height > 0.0 && index + 1 != count {
                let raw = (metrics.card_height - offset * shrink_rate) / metrics.card_height;
                raw.clamp(min_scale, 1.0)
            } else {
                1.0
            };
            CardLayout { translate_y, scale }
        })
        .collect()
}

/// At-rest layout: cards spaced by the gap, no scaling.
pub fn rest_layout(count: usize, gap: f64) -> Vec<CardLayout> {
    (0..count)
        .map(|index| CardLayout {
            translate_y: gap * index as f64,
            scale: 1.0,
        })
        .collect()
}

/// Bottom padding that reserves room for the collapsed stack.
pub fn stack_padding(count: usize, gap: f64) -> f64 {
    if count == 0 {
        0.0
    } else {
        gap * (count - 1) as f64
    }
}

/// Index of the panel whose offset is closest to the reference point, or
/// `None` when there are no panels. Earlier panels win exact ties.
pub fn nearest_panel(metrics: &StackMetrics, count: usize) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for index in 0..count {
        let distance = metrics.offset(index).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Full-stop guard for the scroll animation. Once the tail of the stack
/// would clear the viewport bottom a tick applies nothing further and the
/// transforms already on screen stay put. The comparison is strictly
/// greater than zero.
pub fn past_end(
    metrics: &StackMetrics,
    count: usize,
    viewport_height: f64,
    container_height: f64,
) -> bool {
    metrics.scrolled() + viewport_height - container_height - metrics.card_height
        + metrics.gap
        + metrics.gap * count as f64
        > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scrolled: f64) -> StackMetrics {
        StackMetrics {
            reference_top: 90.0,
            container_top: 90.0 - scrolled,
            card_height: 400.0,
            gap: 24.0,
        }
    }

    #[test]
    fn offset_steps_by_card_height_plus_gap() {
        let m = metrics(870.0);
        assert_eq!(m.scrolled(), 870.0);
        assert_eq!(m.offset(0), 870.0);
        assert_eq!(m.offset(1), 446.0);
        assert_eq!(m.offset(2), 22.0);
        assert_eq!(m.offset(3), -402.0);
    }

    #[test]
    fn scale_stays_within_bounds_for_any_offset() {
        let mut scrolled = -500.0;
        while scrolled < 20_000.0 {
            for layout in compute_layout(&metrics(scrolled), 6, 0.7, 0.05) {
                assert!(layout.scale >= 0.7 && layout.scale <= 1.0, "scale {} at {}", layout.scale, scrolled);
            }
            scrolled += 37.0;
        }
    }

    #[test]
    fn unreached_cards_keep_full_size() {
        let layouts = compute_layout(&metrics(446.0), 6, 0.7, 0.05);
        // offsets: 446, 22, -402, ...
        assert!(layouts[0].scale < 1.0);
        assert!(layouts[1].scale < 1.0);
        assert_eq!(layouts[2].scale, 1.0);
        assert_eq!(layouts[3].scale, 1.0);
    }

    #[test]
    fn deep_scroll_pins_scale_to_the_floor() {
        let layouts = compute_layout(&metrics(10_000.0), 6, 0.7, 0.05);
        assert_eq!(layouts[0].scale, 0.7);
    }

    #[test]
    fn last_card_never_shrinks() {
        let layouts = compute_layout(&metrics(50_000.0), 6, 0.7, 0.05);
        assert_eq!(layouts[5].scale, 1.0);
    }

    #[test]
    fn zero_card_height_yields_full_size() {
        let m = StackMetrics {
            reference_top: 90.0,
            container_top: -500.0,
            card_height: 0.0,
            gap: 24.0,
        };
        for layout in compute_layout(&m, 4, 0.7, 0.05) {
            assert_eq!(layout.scale, 1.0);
        }
    }

    #[test]
    fn rest_layout_spaces_cards_by_gap() {
        let layouts = rest_layout(4, 24.0);
        let offsets: Vec<f64> = layouts.iter().map(|l| l.translate_y).collect();
        assert_eq!(offsets, vec![0.0, 24.0, 48.0, 72.0]);
        assert!(layouts.iter().all(|l| l.scale == 1.0));
    }

    #[test]
    fn padding_reserves_room_for_all_but_the_first_card() {
        assert_eq!(stack_padding(6, 24.0), 120.0);
        assert_eq!(stack_padding(1, 24.0), 0.0);
        assert_eq!(stack_padding(0, 24.0), 0.0);
    }

    #[test]
    fn nearest_panel_picks_smallest_absolute_offset() {
        // offsets at 870: |870|, |446|, |22|, |-402|, |-826|, |-1250|
        assert_eq!(nearest_panel(&metrics(870.0), 6), Some(2));
        assert_eq!(nearest_panel(&metrics(0.0), 6), Some(0));
    }

    #[test]
    fn nearest_panel_prefers_the_earlier_panel_on_ties() {
        // Halfway between panels 0 and 1: offsets 212 and -212.
        assert_eq!(nearest_panel(&metrics(212.0), 6), Some(0));
    }

    #[test]
    fn nearest_panel_is_none_without_panels() {
        assert_eq!(nearest_panel(&metrics(870.0), 0), None);
    }

    #[test]
    fn nearest_panel_is_monotonic_over_a_scroll_sweep() {
        let mut previous = 0;
        let mut scrolled = -400.0;
        while scrolled < 3_500.0 {
            let index = nearest_panel(&metrics(scrolled), 6).unwrap();
            assert!(index >= previous, "active went backwards at {}", scrolled);
            previous = index;
            scrolled += 7.0;
        }
        assert_eq!(previous, 5);
    }

    #[test]
    fn past_end_uses_a_strict_comparison() {
        // scrolled + vh - ch - card + gap + gap * count == 0 at ch = 1438.
        let m = metrics(870.0);
        assert!(!past_end(&m, 6, 800.0, 1438.0));
        assert!(past_end(&m, 6, 800.0, 1437.9));
        assert!(!past_end(&m, 6, 800.0, 3_000.0));
    }

    #[test]
    fn css_omits_scale_at_full_size() {
        let full = CardLayout { translate_y: 48.0, scale: 1.0 };
        assert_eq!(full.css(), "translateY(48px)");
        let shrunk = CardLayout { translate_y: 24.0, scale: 0.95 };
        assert_eq!(shrunk.css(), "translateY(24px) scale(0.95)");
    }
}
