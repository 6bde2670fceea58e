// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    for alpha in [PROGRESS_ALPHA_FAST, PROGRESS_ALPHA_SLOW, MOUSE_ALPHA] {
        assert!(alpha > 0.0 && alpha <= 1.0);
    }
    // scroll reacts faster than the pointer in the canonical preset
    assert!(PROGRESS_ALPHA_FAST > MOUSE_ALPHA);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_framing_is_sane() {
    assert!(BASE_RADIUS > HERO_RADIUS);
    assert!(HERO_RADIUS > 0.0);
    assert!(POLAR_DEG > 0.0 && POLAR_DEG < 180.0);
    assert!(FIXED_FOV_DEG > 0.0 && FIXED_FOV_DEG < 180.0);
    assert!(RAMP_FOV_BASE_DEG + RAMP_FOV_SPAN_DEG < 180.0);
    assert_eq!(DOUBLE_TURN_DEG, 2.0 * SINGLE_TURN_DEG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_stays_subtle() {
    // pointer nudges must stay well inside the lateral keyframe offset
    assert!(PARALLAX_LATERAL < HERO_OFFSET);
    assert!(PARALLAX_VERTICAL <= PARALLAX_LATERAL);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_alpha_band_is_ordered() {
    assert!(PARTICLE_ALPHA_FLOOR < PARTICLE_MAX_START_ALPHA);
    assert!(PARTICLE_MAX_START_ALPHA < PARTICLE_ALPHA_CEIL);
    assert!(PARTICLE_ALPHA_CEIL <= 1.0);
    assert!(PARTICLE_FADE_PER_FRAME > 0.0 && PARTICLE_FADE_PER_FRAME < PARTICLE_ALPHA_FLOOR);
    assert!(PARTICLE_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hint_and_reveal_thresholds_are_fractions() {
    assert!(SCROLL_HINT_THRESHOLD > 0.0 && SCROLL_HINT_THRESHOLD < 0.15);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(SCROLL_HINT_OPACITY.parse::<f32>().is_ok());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_are_positive() {
    assert!(SCRAMBLE_TICK_MS > 0);
    assert!(DATA_STREAM_TICK_MS > SCRAMBLE_TICK_MS);
}

#[test]
fn selectors_are_well_formed() {
    assert!(VIEWER_SELECTOR.starts_with('#'));
    for sel in [
        GLOW_SELECTOR,
        HERO_TITLE_SELECTOR,
        SECTION_SELECTOR,
        PROGRESS_BAR_SELECTOR,
        UPDATE_BAR_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel}");
    }
    for id in [SCROLL_HINT_ID, PARTICLE_CANVAS_ID, DATA_STREAM_ID] {
        assert!(!id.starts_with('#') && !id.is_empty());
    }
}
