//! Measurement types and the browser boundary for the stacked-cards effect.
//!
//! [`ViewportOps`] is the only surface the controller sees. The real
//! implementation reads the DOM through `web-sys`; tests drive the
//! controller with [`FakeViewport`] instead.

use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement};
use yew::NodeRef;

/// Vertical extent of an element, viewport-relative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Container placement: viewport-relative top plus layout height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerMetrics {
    pub top: f64,
    pub height: f64,
}

/// Sticky placement of the first card, resolved from computed style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickyReference {
    /// Resolved `top`, px. `auto` never produces one of these.
    pub card_top: f64,
    /// Resolved `height`, px.
    pub card_height: f64,
}

/// State of the inner scroll region wrapping the stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollerState {
    pub rect: Rect,
    pub scroll_top: f64,
    /// Whether the region actually overflows and can scroll.
    pub scrollable: bool,
}

/// Browser measurements and scroll primitives the effect depends on.
///
/// Every getter returns `Option`; a missing element or unparsable style is
/// reported as `None` and the caller degrades instead of panicking.
pub trait ViewportOps {
    fn viewport_width(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn prefers_reduced_motion(&self) -> bool;
    fn container(&self) -> Option<ContainerMetrics>;
    fn sticky_reference(&self) -> Option<StickyReference>;
    fn panel_rect(&self, index: usize) -> Option<Rect>;
    fn scroller(&self) -> Option<ScrollerState>;
    fn window_scroll_y(&self) -> f64;
    fn scroll_window_to(&self, top: f64);
    fn scroll_scroller_to(&self, top: f64);

    /// Region visibility ratios are computed against: the inner scroller
    /// when it can scroll, otherwise the viewport itself.
    fn visible_region(&self) -> Rect {
        match self.scroller() {
            Some(scroller) if scroller.scrollable => scroller.rect,
            _ => Rect {
                top: 0.0,
                height: self.viewport_height(),
            },
        }
    }
}

/// Parse a computed-style length like `"90px"`.
///
/// Returns `None` for anything that is not a finite pixel value, which is
/// how `"auto"` and empty strings degrade.
pub fn parse_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
    number.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// [`ViewportOps`] over the live DOM.
///
/// Panels are looked up by their stable element ids rather than refs; the
/// list is fixed at construction.
pub struct DomViewport {
    container: NodeRef,
    scroller: NodeRef,
    panel_ids: &'static [&'static str],
}

impl DomViewport {
    pub fn new(container: NodeRef, scroller: NodeRef, panel_ids: &'static [&'static str]) -> Self {
        Self {
            container,
            scroller,
            panel_ids,
        }
    }

    fn panel_element(&self, index: usize) -> Option<Element> {
        let id = self.panel_ids.get(index)?;
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    fn panel_style(&self, index: usize) -> Option<CssStyleDeclaration> {
        self.panel_element(index)?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|element| element.style())
    }

    fn computed_style(element: &Element) -> Option<CssStyleDeclaration> {
        web_sys::window()?.get_computed_style(element).ok().flatten()
    }

    fn computed_px(style: &CssStyleDeclaration, property: &str) -> Option<f64> {
        parse_px(&style.get_property_value(property).ok()?).map(f64::floor)
    }

    /// Write one transform per panel, in panel order.
    pub fn apply_transforms(&self, transforms: &[String]) {
        for (index, value) in transforms.iter().enumerate() {
            if let Some(style) = self.panel_style(index) {
                let _ = style.set_property("transform", value);
            }
        }
    }

    /// Set the transform transition on every panel.
    pub fn apply_transition(&self, count: usize, value: &str) {
        for index in 0..count {
            if let Some(style) = self.panel_style(index) {
                let _ = style.set_property("transition", value);
            }
        }
    }

    /// Reserve room below the container for the collapsed stack.
    pub fn apply_padding(&self, px: f64) {
        if let Some(element) = self.container.cast::<HtmlElement>() {
            let _ = element.style().set_property("padding-bottom", &format!("{px}px"));
        }
    }
}

impl ViewportOps for DomViewport {
    fn viewport_width(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.inner_height().ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }

    fn prefers_reduced_motion(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn container(&self) -> Option<ContainerMetrics> {
        let element = self.container.cast::<HtmlElement>()?;
        let rect = element.get_bounding_client_rect();
        Some(ContainerMetrics {
            top: rect.top(),
            height: f64::from(element.offset_height()),
        })
    }

    fn sticky_reference(&self) -> Option<StickyReference> {
        let element = self.panel_element(0)?;
        let style = Self::computed_style(&element)?;
        Some(StickyReference {
            card_top: Self::computed_px(&style, "top")?,
            card_height: Self::computed_px(&style, "height")?,
        })
    }

    fn panel_rect(&self, index: usize) -> Option<Rect> {
        let rect = self.panel_element(index)?.get_bounding_client_rect();
        Some(Rect {
            top: rect.top(),
            height: rect.height(),
        })
    }

    fn scroller(&self) -> Option<ScrollerState> {
        let element = self.scroller.cast::<Element>()?;
        let rect = element.get_bounding_client_rect();
        Some(ScrollerState {
            rect: Rect {
                top: rect.top(),
                height: rect.height(),
            },
            scroll_top: f64::from(element.scroll_top()),
            scrollable: element.scroll_height() > element.client_height(),
        })
    }

    fn window_scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn scroll_window_to(&self, top: f64) {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn scroll_scroller_to(&self, top: f64) {
        if let Some(element) = self.scroller.cast::<Element>() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_to_with_scroll_to_options(&options);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeViewport;
    use super::*;

    #[test]
    fn parse_px_accepts_pixel_lengths() {
        assert_eq!(parse_px("90px"), Some(90.0));
        assert_eq!(parse_px("420.5px"), Some(420.5));
        assert_eq!(parse_px(" 24px "), Some(24.0));
        assert_eq!(parse_px("-16px"), Some(-16.0));
        assert_eq!(parse_px("0"), Some(0.0));
    }

    #[test]
    fn parse_px_rejects_non_lengths() {
        assert_eq!(parse_px("auto"), None);
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("calc(10% + 2px)"), None);
        assert_eq!(parse_px("NaNpx"), None);
        assert_eq!(parse_px("infpx"), None);
    }

    #[test]
    fn rect_bottom_is_top_plus_height() {
        let rect = Rect { top: 120.0, height: 400.0 };
        assert_eq!(rect.bottom(), 520.0);
    }

    #[test]
    fn visible_region_prefers_a_scrollable_scroller() {
        let scroller = ScrollerState {
            rect: Rect { top: 64.0, height: 600.0 },
            scroll_top: 150.0,
            scrollable: true,
        };
        let viewport = FakeViewport {
            height: 900.0,
            scroller_state: Some(scroller),
            ..Default::default()
        };
        assert_eq!(viewport.visible_region(), scroller.rect);
    }

    #[test]
    fn visible_region_falls_back_to_the_viewport() {
        let viewport = FakeViewport {
            height: 900.0,
            scroller_state: Some(ScrollerState {
                rect: Rect { top: 64.0, height: 600.0 },
                scroll_top: 0.0,
                scrollable: false,
            }),
            ..Default::default()
        };
        assert_eq!(viewport.visible_region(), Rect { top: 0.0, height: 900.0 });

        let detached = FakeViewport {
            height: 700.0,
            ..Default::default()
        };
        assert_eq!(detached.visible_region(), Rect { top: 0.0, height: 700.0 });
    }
}
