//! Visibility-ratio fallback for keeping the active tab in sync.
//!
//! When the stacked effect is off (narrow viewport, reduced motion) the
//! active tab follows whichever panel fills most of the visible region.

use super::viewport::Rect;

/// Fraction of `panel` that lies inside `region`, in `[0, 1]`.
///
/// Zero-height panels report zero so they can never win a sync pass.
pub fn visible_ratio(panel: &Rect, region: &Rect) -> f64 {
    if panel.height <= 0.0 {
        return 0.0;
    }
    let top = panel.top.max(region.top);
    let bottom = panel.bottom().min(region.bottom());
    (bottom - top).max(0.0) / panel.height
}

/// Panel the selection should move to, if any.
///
/// A switch requires a unique best ratio at or above `threshold` that names
/// a panel other than `current`. Ties, sub-threshold bests and self-switches
/// all return `None`, which keeps the current selection.
pub fn ratio_winner(ratios: &[f64], current: usize, threshold: f64) -> Option<usize> {
    let mut best = f64::NEG_INFINITY;
    let mut winner = None;
    let mut unique = true;
    for (index, &ratio) in ratios.iter().enumerate() {
        if ratio > best {
            best = ratio;
            winner = Some(index);
            unique = true;
        } else if ratio == best {
            unique = false;
        }
    }
    let winner = winner?;
    if !unique || best < threshold || winner == current {
        return None;
    }
    Some(winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, height: f64) -> Rect {
        Rect { top, height }
    }

    #[test]
    fn ratio_is_the_visible_share_of_the_panel() {
        let region = rect(0.0, 800.0);
        assert_eq!(visible_ratio(&rect(100.0, 400.0), &region), 1.0);
        assert_eq!(visible_ratio(&rect(600.0, 400.0), &region), 0.5);
        assert_eq!(visible_ratio(&rect(-200.0, 400.0), &region), 0.5);
        assert_eq!(visible_ratio(&rect(900.0, 400.0), &region), 0.0);
        assert_eq!(visible_ratio(&rect(-500.0, 400.0), &region), 0.0);
    }

    #[test]
    fn zero_height_panels_report_zero() {
        let region = rect(0.0, 800.0);
        assert_eq!(visible_ratio(&rect(100.0, 0.0), &region), 0.0);
    }

    #[test]
    fn winner_needs_the_threshold() {
        assert_eq!(ratio_winner(&[0.34, 0.1], 1, 0.35), None);
        assert_eq!(ratio_winner(&[0.35, 0.1], 1, 0.35), Some(0));
    }

    #[test]
    fn winner_must_be_unique() {
        assert_eq!(ratio_winner(&[0.5, 0.5], 0, 0.35), None);
        assert_eq!(ratio_winner(&[0.5, 0.5, 0.4], 2, 0.35), None);
        assert_eq!(ratio_winner(&[0.2, 0.6, 0.3], 0, 0.35), Some(1));
    }

    #[test]
    fn current_panel_winning_changes_nothing() {
        assert_eq!(ratio_winner(&[0.1, 0.9], 1, 0.35), None);
    }

    #[test]
    fn all_hidden_changes_nothing() {
        assert_eq!(ratio_winner(&[0.0, 0.0, 0.0], 1, 0.35), None);
        assert_eq!(ratio_winner(&[], 0, 0.35), None);
    }
}
