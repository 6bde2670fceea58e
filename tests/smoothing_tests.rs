// Host-side tests for the scroll/pointer smoothing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera_core {
    pub mod smoothing {
        include!("../src/core/smoothing.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use camera_core::smoothing::*;
use camera_core::state::*;

#[test]
fn relax_moves_by_alpha_fraction() {
    assert!((relax(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    assert!((relax(1.0, 0.0, 0.25) - 0.75).abs() < 1e-6);
    assert_eq!(relax(0.3, 0.3, 0.12), 0.3);
}

#[test]
fn relax_clamps_alpha() {
    assert_eq!(relax(0.0, 1.0, 2.0), 1.0);
    assert_eq!(relax(0.0, 1.0, -1.0), 0.0);
}

#[test]
fn smoothing_converges_monotonically_without_overshoot() {
    for &alpha in &[0.05_f32, 0.12, 0.5, 1.0] {
        for &(start, target) in &[(0.0_f32, 1.0_f32), (1.0, 0.0), (0.2, 0.7), (0.9, 0.35)] {
            let mut s = Smoothed::new(alpha);
            s.current = start;
            s.set_target(target);
            let mut prev_lag = s.lag();
            for _ in 0..600 {
                s.step();
                if start < target {
                    assert!(s.current <= target + 1e-6, "overshot from below (alpha {alpha})");
                } else {
                    assert!(s.current >= target - 1e-6, "overshot from above (alpha {alpha})");
                }
                assert!(s.lag() <= prev_lag + 1e-7, "lag grew (alpha {alpha})");
                prev_lag = s.lag();
            }
            assert!(s.lag() < 1e-4, "did not converge (alpha {alpha}): {}", s.current);
        }
    }
}

#[test]
fn smoothed_starts_at_zero() {
    let s = Smoothed::new(0.12);
    assert_eq!(s.current, 0.0);
    assert_eq!(s.target, 0.0);
    assert_eq!(s.lag(), 0.0);
}

#[test]
fn scroll_sample_normalizes_offset() {
    let mut scroll = ScrollState::new(0.12);
    assert!(scroll.sample(500.0, 1000.0));
    assert!((scroll.target() - 0.5).abs() < 1e-6);
    // current only moves when stepped
    assert_eq!(scroll.current(), 0.0);
    scroll.step();
    assert!((scroll.current() - 0.06).abs() < 1e-6);
}

#[test]
fn scroll_sample_skips_unscrollable_page() {
    let mut scroll = ScrollState::new(0.12);
    assert!(scroll.sample(250.0, 1000.0));
    assert!(!scroll.sample(10.0, 0.0));
    assert!(!scroll.sample(10.0, -300.0));
    assert!((scroll.target() - 0.25).abs() < 1e-6);
}

#[test]
fn scroll_sample_clamps_overscroll() {
    let mut scroll = ScrollState::new(0.12);
    scroll.sample(1200.0, 1000.0);
    assert_eq!(scroll.target(), 1.0);
    scroll.sample(-40.0, 1000.0);
    assert_eq!(scroll.target(), 0.0);
}

#[test]
fn scroll_velocity_tracks_lag() {
    let mut scroll = ScrollState::new(0.12);
    scroll.sample(1000.0, 1000.0);
    assert!((scroll.velocity() - 1.0).abs() < 1e-6);
    scroll.step();
    assert!((scroll.velocity() - 0.88).abs() < 1e-6);
}

#[test]
fn mouse_sample_maps_viewport_to_unit_square() {
    let mut mouse = MouseState::new(0.05);
    mouse.sample(0.0, 0.0, 800.0, 600.0);
    assert_eq!(mouse.target(), glam::Vec2::new(-1.0, -1.0));
    mouse.sample(400.0, 300.0, 800.0, 600.0);
    assert_eq!(mouse.target(), glam::Vec2::ZERO);
    mouse.sample(800.0, 600.0, 800.0, 600.0);
    assert_eq!(mouse.target(), glam::Vec2::new(1.0, 1.0));
}

#[test]
fn mouse_sample_ignores_empty_viewport() {
    let mut mouse = MouseState::new(0.05);
    mouse.sample(800.0, 600.0, 800.0, 600.0);
    mouse.sample(10.0, 10.0, 0.0, 600.0);
    assert_eq!(mouse.target(), glam::Vec2::new(1.0, 1.0));
}

#[test]
fn mouse_step_relaxes_both_axes() {
    let mut mouse = MouseState::new(0.05);
    mouse.sample(800.0, 0.0, 800.0, 600.0);
    let v = mouse.step();
    assert!((v.x - 0.05).abs() < 1e-6);
    assert!((v.y + 0.05).abs() < 1e-6);
    assert_eq!(mouse.current(), v);
}
