use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Optional element lookup; absent elements are logged once and skipped.
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    let el = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if el.is_none() {
        log::debug!("#{} not present; skipping", id);
    }
    el
}

pub fn html_by_selector(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn document_html_by_selector(
    document: &web::Document,
    selector: &str,
) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Scroll offset and scrollable extent (`scrollHeight - innerHeight`) of the page.
pub fn scroll_metrics(window: &web::Window, document: &web::Document) -> (f64, f64) {
    let root = document.document_element();
    let mut scroll_top = root.as_ref().map(|r| r.scroll_top()).unwrap_or(0);
    if scroll_top == 0 {
        if let Some(body) = document.body() {
            scroll_top = body.scroll_top();
        }
    }
    let scroll_height = root.map(|r| r.scroll_height()).unwrap_or(0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (scroll_top as f64, scroll_height as f64 - viewport_h)
}

/// Match the canvas backing store to the viewport (CSS pixels) and return the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let size = web::window()
        .map(|w| viewport_size(&w))
        .unwrap_or(Vec2::ONE);
    canvas.set_width(size.x.max(1.0) as u32);
    canvas.set_height(size.y.max(1.0) as u32);
    size
}

pub fn add_window_listener(event: &str, handler: Closure<dyn FnMut()>) {
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    }
    handler.forget();
}

/// Resolve once the document has parsed (immediately if it already has).
pub async fn ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
