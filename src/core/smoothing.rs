// Exponential smoothing shared by scroll and pointer tracking.
// A follower is only ever relaxed toward its target, starting from zero.

/// Move `current` toward `target` by the fraction `alpha` (clamped to [0, 1]).
#[inline]
pub fn relax(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha.clamp(0.0, 1.0)
}

/// A scalar that follows its target with per-frame exponential smoothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Smoothed {
    pub current: f32,
    pub target: f32,
    pub alpha: f32,
}

impl Smoothed {
    pub const fn new(alpha: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            alpha,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Advance one frame and return the new current value.
    #[inline]
    pub fn step(&mut self) -> f32 {
        self.current = relax(self.current, self.target, self.alpha);
        self.current
    }

    /// Remaining distance to the target; doubles as a "how fast is it moving" signal.
    #[inline]
    pub fn lag(&self) -> f32 {
        (self.target - self.current).abs()
    }
}
