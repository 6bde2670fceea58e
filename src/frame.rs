use crate::core::Choreographer;
use crate::dom;
use crate::overlay::{self, ScrollHint};
use crate::render::ParticleLayer;
use crate::viewer::ModelViewer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame update touches. Optional parts are skipped when
/// their element is absent from the page.
pub struct FrameContext {
    pub window: web::Window,
    pub document: web::Document,
    pub choreographer: Rc<RefCell<Choreographer>>,
    pub viewer: ModelViewer,
    pub hint: Option<ScrollHint>,
    pub glow: Option<web::HtmlElement>,
    pub particles: Option<ParticleLayer>,
    pub resize_pending: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let (pose, progress, hint_visible, velocity) = {
            let mut c = self.choreographer.borrow_mut();
            let (scroll_top, scrollable) = dom::scroll_metrics(&self.window, &self.document);
            c.set_scroll(scroll_top, scrollable);
            let pose = c.step();
            (pose, c.progress(), c.hint_visible(), c.scroll_velocity())
        };

        self.viewer.apply_pose(&pose);

        if let (Some(hint), Some(visible)) = (&mut self.hint, hint_visible) {
            hint.set_visible(visible);
        }

        if let Some(particles) = &mut self.particles {
            if self.resize_pending.replace(false) {
                particles.resize();
            }
            particles.frame(velocity);
        }

        if let Some(glow) = &self.glow {
            overlay::place_glow(glow, progress);
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame-driven loop with an explicit start/stop lifecycle.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let running = Rc::new(Cell::new(false));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Tick = Rc::new(RefCell::new(None));

        let running_tick = running.clone();
        let pending_tick = pending.clone();
        let tick_weak = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            if let Some(tick) = tick_weak.upgrade() {
                pending_tick.set(request_frame(&tick));
            }
        }) as Box<dyn FnMut()>));

        Self {
            running,
            pending,
            tick,
        }
    }

    pub fn start(&self) {
        if self.running.replace(true) {
            return;
        }
        self.pending.set(request_frame(&self.tick));
        log::info!("[frame] loop started");
    }

    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] loop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
