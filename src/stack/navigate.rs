//! Scroll planning for tab clicks.

use super::viewport::{Rect, ScrollerState};

/// Where a tab click should scroll to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollPlan {
    /// Scroll the inner scroller to this offset.
    Scroller { top: f64 },
    /// Scroll the page so the target card sits below the fixed nav.
    Window { top: f64 },
}

/// Plan the scroll for a click on the tab for `target`.
///
/// A scrollable inner region takes priority; otherwise the whole page
/// scrolls. A missing target produces no plan at all, so a card that never
/// rendered turns the click into a selection-only event.
pub fn plan_scroll(
    target: Option<Rect>,
    scroller: Option<ScrollerState>,
    window_scroll_y: f64,
    nav_margin: f64,
) -> Option<ScrollPlan> {
    let target = target?;
    if let Some(scroller) = scroller {
        if scroller.scrollable {
            return Some(ScrollPlan::Scroller {
                top: scroller.scroll_top + (target.top - scroller.rect.top),
            });
        }
    }
    Some(ScrollPlan::Window {
        top: window_scroll_y + target.top - nav_margin,
    })
}
