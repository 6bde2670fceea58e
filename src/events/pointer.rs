use crate::core::Choreographer;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed pointer moves anywhere in the window to the choreographer's parallax target.
pub fn wire_pointermove(choreographer: Rc<RefCell<Choreographer>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let viewport = dom::viewport_size(&window);
        choreographer.borrow_mut().set_pointer(
            ev.client_x() as f64,
            ev.client_y() as f64,
            viewport.x as f64,
            viewport.y as f64,
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
