#![cfg(target_arch = "wasm32")]
use crate::constants::{
    DATA_STREAM_ID, GLOW_SELECTOR, HERO_TITLE_SELECTOR, PARTICLE_CANVAS_ID, SCROLL_HINT_ID,
};
use crate::core::{Choreographer, ChoreographyConfig, MaterialFinish};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod effects;
mod events;
mod frame;
mod overlay;
mod render;
mod viewer;

thread_local! {
    static FRAME_LOOP: RefCell<Option<Rc<frame::FrameLoop>>> = const { RefCell::new(None) };
}

fn with_frame_loop(f: impl FnOnce(&frame::FrameLoop)) {
    FRAME_LOOP.with(|slot| match slot.borrow().as_ref() {
        Some(l) => f(l),
        None => log::warn!("frame loop not initialized yet"),
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("moto-landing starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Halt the camera/particle loop.
#[wasm_bindgen]
pub fn stop() {
    with_frame_loop(|l| l.stop());
}

/// Restart the camera/particle loop after `stop`.
#[wasm_bindgen]
pub fn resume() {
    with_frame_loop(|l| l.start());
}

#[wasm_bindgen]
pub fn is_running() -> bool {
    FRAME_LOOP.with(|slot| slot.borrow().as_ref().is_some_and(|l| l.is_running()))
}

fn start_text_effects(document: &web::Document) {
    if let Some(title) = dom::document_html_by_selector(document, HERO_TITLE_SELECTOR) {
        if let Err(e) = effects::decode_text(title) {
            log::warn!("[text] title decode not started: {:?}", e);
        }
    }
    if let Some(stream) = dom::html_by_id(document, DATA_STREAM_ID) {
        if let Err(e) = effects::start_data_stream(document, stream) {
            log::warn!("[text] data stream not started: {:?}", e);
        }
    }
    match effects::observe_sections(document) {
        Ok(n) => log::info!("[reveal] observing {} sections", n),
        Err(e) => log::warn!("[reveal] observer unavailable: {:?}", e),
    }
}

fn build_particles(document: &web::Document) -> Option<render::ParticleLayer> {
    let canvas = document
        .get_element_by_id(PARTICLE_CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    match render::ParticleLayer::new(canvas) {
        Ok(layer) => Some(layer),
        Err(e) => {
            log::warn!("[particles] disabled: {:?}", e);
            None
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::ready(&document).await?;

    let viewer = viewer::ModelViewer::find(&document)?;
    viewer.wire_material_on_load(MaterialFinish::GLOSS_BLACK);
    viewer.wire_loading_bar();

    let preset = viewer.preset();
    let config = ChoreographyConfig::preset(preset)?;
    log::info!(
        "[camera] preset={} segments={} span={}deg parallax={}",
        preset,
        config.track.segments().len(),
        config.rotation_span_deg,
        config.parallax.is_some()
    );
    let choreographer = Rc::new(RefCell::new(Choreographer::new(config)));
    events::wire_pointermove(choreographer.clone());

    start_text_effects(&document);

    let resize_pending = Rc::new(Cell::new(false));
    events::wire_resize(resize_pending.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        window,
        document: document.clone(),
        choreographer,
        viewer,
        hint: dom::html_by_id(&document, SCROLL_HINT_ID).map(overlay::ScrollHint::new),
        glow: dom::document_html_by_selector(&document, GLOW_SELECTOR),
        particles: build_particles(&document),
        resize_pending,
    }));

    let frame_loop = Rc::new(frame::FrameLoop::new(frame_ctx));
    frame_loop.start();

    let loop_vis = frame_loop.clone();
    events::wire_visibility(move |visible| {
        if visible {
            loop_vis.start();
        } else {
            loop_vis.stop();
        }
    });

    FRAME_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop));
    Ok(())
}
