use crate::core::constants::{GLOW_TRAVEL_PX, SCROLL_HINT_OPACITY};
use crate::dom;
use web_sys as web;

/// The fixed "scroll down" affordance. Only touches the DOM when visibility flips.
pub struct ScrollHint {
    el: web::HtmlElement,
    visible: Option<bool>,
}

impl ScrollHint {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el, visible: None }
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == Some(visible) {
            return;
        }
        self.visible = Some(visible);
        if visible {
            show(&self.el);
        } else {
            hide(&self.el);
        }
    }
}

#[inline]
pub fn show(el: &web::HtmlElement) {
    dom::set_style(el, "opacity", SCROLL_HINT_OPACITY);
    dom::set_style(el, "pointer-events", "auto");
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    dom::set_style(el, "opacity", "0");
    dom::set_style(el, "pointer-events", "none");
}

/// Slide the ambient glow down with scroll progress.
pub fn place_glow(glow: &web::HtmlElement, progress: f32) {
    let transform = format!(
        "translate(-50%, calc(-50% + {}px))",
        progress * GLOW_TRAVEL_PX
    );
    dom::set_style(glow, "transform", &transform);
}
