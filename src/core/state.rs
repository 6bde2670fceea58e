// Scroll and pointer trackers fed by browser events and read once per frame.

use super::smoothing::Smoothed;
use glam::Vec2;

/// Normalized page scroll position, smoothed toward the latest sample.
#[derive(Clone, Copy, Debug)]
pub struct ScrollState {
    progress: Smoothed,
}

impl ScrollState {
    pub const fn new(alpha: f32) -> Self {
        Self {
            progress: Smoothed::new(alpha),
        }
    }

    /// Record a scroll sample. `scrollable` is `scrollHeight - viewportHeight`.
    ///
    /// Returns `false` and keeps the previous target when the page cannot
    /// scroll (`scrollable <= 0`).
    pub fn sample(&mut self, scroll_top: f64, scrollable: f64) -> bool {
        if scrollable <= 0.0 {
            return false;
        }
        let target = (scroll_top / scrollable).clamp(0.0, 1.0);
        self.progress.set_target(target as f32);
        true
    }

    #[inline]
    pub fn step(&mut self) -> f32 {
        self.progress.step()
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.progress.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.progress.target
    }

    /// How far the smoothed progress trails the page; large while scrolling fast.
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.progress.lag()
    }
}

/// Pointer position in [-1, 1] on both axes relative to the viewport centre.
#[derive(Clone, Copy, Debug)]
pub struct MouseState {
    x: Smoothed,
    y: Smoothed,
}

impl MouseState {
    pub const fn new(alpha: f32) -> Self {
        Self {
            x: Smoothed::new(alpha),
            y: Smoothed::new(alpha),
        }
    }

    /// Record a pointer sample in client pixels. Ignored for an empty viewport.
    pub fn sample(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) {
        if viewport_w <= 0.0 || viewport_h <= 0.0 {
            return;
        }
        self.x.set_target(normalize_axis(client_x, viewport_w));
        self.y.set_target(normalize_axis(client_y, viewport_h));
    }

    #[inline]
    pub fn step(&mut self) -> Vec2 {
        Vec2::new(self.x.step(), self.y.step())
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        Vec2::new(self.x.current, self.y.current)
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target, self.y.target)
    }
}

#[inline]
fn normalize_axis(pos: f64, extent: f64) -> f32 {
    ((pos / extent - 0.5) * 2.0).clamp(-1.0, 1.0) as f32
}
