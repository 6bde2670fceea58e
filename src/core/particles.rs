// Ambient background dots that drift, bounce off the viewport edges and
// twinkle while the page is scrolling.

use super::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub alpha: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let jitter = |rng: &mut R| (rng.gen::<f32>() - 0.5) * PARTICLE_MAX_SPEED;
        Self {
            pos: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
            vel: Vec2::new(jitter(rng), jitter(rng)),
            size: rng.gen::<f32>() * PARTICLE_MAX_SIZE,
            alpha: rng.gen::<f32>() * PARTICLE_MAX_START_ALPHA,
        }
    }
}

/// Advance one particle by a frame. `scroll_velocity` is the gap between the
/// page's scroll position and the smoothed camera progress.
pub fn update_particle(p: &mut Particle, bounds: Vec2, scroll_velocity: f32) {
    p.pos += p.vel;
    if p.pos.x < 0.0 || p.pos.x > bounds.x {
        p.vel.x = -p.vel.x;
    }
    if p.pos.y < 0.0 || p.pos.y > bounds.y {
        p.vel.y = -p.vel.y;
    }
    p.alpha = PARTICLE_ALPHA_CEIL.min(p.alpha + scroll_velocity * PARTICLE_TWINKLE_GAIN);
    if p.alpha > PARTICLE_ALPHA_FLOOR {
        p.alpha -= PARTICLE_FADE_PER_FRAME;
    }
}

/// CSS fill for a white dot at the particle's alpha.
#[inline]
pub fn fill_style(p: &Particle) -> String {
    format!("rgba(255, 255, 255, {})", p.alpha)
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub bounds: Vec2,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, count: usize, bounds: Vec2) -> Self {
        let particles = (0..count).map(|_| Particle::random(rng, bounds)).collect();
        Self { particles, bounds }
    }

    /// Particles outside new bounds steer back in via the edge bounce.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    pub fn step(&mut self, scroll_velocity: f32) {
        for p in &mut self.particles {
            update_particle(p, self.bounds, scroll_velocity);
        }
    }
}
