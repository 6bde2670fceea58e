use crate::core::constants::PARTICLE_COUNT;
use crate::core::particles::fill_style;
use crate::core::ParticleField;
use crate::dom;
use std::f64::consts::TAU;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Full-viewport 2D canvas of ambient particles.
pub struct ParticleLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
}

impl ParticleLayer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let size = dom::sync_canvas_to_viewport(&canvas);
        let field = ParticleField::new(&mut rand::thread_rng(), PARTICLE_COUNT, size);
        log::info!(
            "[particles] {} particles on {}x{}",
            field.particles.len(),
            size.x,
            size.y
        );
        Ok(Self { canvas, ctx, field })
    }

    pub fn resize(&mut self) {
        let size = dom::sync_canvas_to_viewport(&self.canvas);
        self.field.resize(size);
    }

    pub fn frame(&mut self, scroll_velocity: f32) {
        self.field.step(scroll_velocity);
        self.draw();
    }

    fn draw(&self) {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            self.field.bounds.x as f64,
            self.field.bounds.y as f64,
        );
        for p in &self.field.particles {
            #[allow(deprecated)]
            ctx.set_fill_style(&JsValue::from_str(&fill_style(p)));
            ctx.begin_path();
            _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.size as f64, 0.0, TAU);
            ctx.fill();
        }
    }
}
