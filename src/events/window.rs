use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Raise `pending` on every window resize; the frame loop consumes it.
pub fn wire_resize(pending: Rc<Cell<bool>>) {
    let closure = Closure::wrap(Box::new(move || {
        pending.set(true);
    }) as Box<dyn FnMut()>);
    dom::add_window_listener("resize", closure);
}

/// Report page visibility changes (`true` when the page becomes visible).
pub fn wire_visibility(mut on_change: impl FnMut(bool) + 'static) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        on_change(!doc.hidden());
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
