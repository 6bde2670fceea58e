use crate::constants::{
    DATA_STREAM_TICK_MS, REVEAL_THRESHOLD, SCRAMBLE_TICK_MS, SECTION_SELECTOR, VISIBLE_CLASS,
};
use crate::core::telemetry::{nodes_to_trim, pick_line};
use crate::core::Scramble;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_interval(closure: &Closure<dyn FnMut()>, period_ms: i32) -> anyhow::Result<i32> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Scramble `el`'s text and decode it left to right; the timer clears itself when done.
pub fn decode_text(el: web::HtmlElement) -> anyhow::Result<()> {
    let mut scramble = Scramble::new(&el.inner_text());
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_tick = handle.clone();
    let closure = Closure::wrap(Box::new(move || {
        el.set_inner_text(&scramble.tick(&mut rand::thread_rng()));
        if scramble.is_done() {
            if let (Some(id), Some(w)) = (handle_tick.take(), web::window()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    let id = set_interval(&closure, SCRAMBLE_TICK_MS)?;
    handle.set(Some(id));
    closure.forget();
    Ok(())
}

/// Append a random telemetry line to `stream` periodically, keeping it short.
pub fn start_data_stream(
    document: &web::Document,
    stream: web::HtmlElement,
) -> anyhow::Result<()> {
    let document = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (Ok(br), Ok(line)) = (document.create_element("br"), document.create_element("span"))
        else {
            return;
        };
        line.set_text_content(Some(pick_line(&mut rand::thread_rng())));
        _ = stream.append_child(&br);
        _ = stream.append_child(&line);
        for _ in 0..nodes_to_trim(stream.child_element_count()) {
            if let Some(first) = stream.first_child() {
                _ = stream.remove_child(&first);
            }
        }
    }) as Box<dyn FnMut()>);
    set_interval(&closure, DATA_STREAM_TICK_MS)?;
    closure.forget();
    Ok(())
}

/// Toggle the reveal class on every scroll section as it crosses the threshold.
pub fn observe_sections(document: &web::Document) -> anyhow::Result<u32> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let classes = entry.target().class_list();
                if entry.is_intersecting() {
                    _ = classes.add_1(VISIBLE_CLASS);
                } else {
                    _ = classes.remove_1(VISIBLE_CLASS);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    let sections = document
        .query_selector_all(SECTION_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for i in 0..sections.length() {
        if let Some(el) = sections.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            observer.observe(&el);
        }
    }
    Ok(sections.length())
}
