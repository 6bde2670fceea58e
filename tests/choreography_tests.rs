// Host-side tests for the scroll-to-camera choreography.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod smoothing {
        include!("../src/core/smoothing.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
    pub mod keyframes {
        include!("../src/core/keyframes.rs");
    }
    pub mod choreography {
        include!("../src/core/choreography.rs");
    }
}

use camera_core::choreography::*;
use camera_core::keyframes::CameraKey;
use glam::Vec2;

fn config(preset: Preset) -> ChoreographyConfig {
    ChoreographyConfig::preset(preset).expect("preset keyframes are valid")
}

fn assert_key_close(a: CameraKey, b: CameraKey, tol: f32) {
    assert!(
        (a.offset - b.offset).abs() < tol
            && (a.radius - b.radius).abs() < tol
            && (a.height - b.height).abs() < tol,
        "{a:?} != {b:?}"
    );
}

#[test]
fn all_presets_build() {
    for preset in Preset::ALL {
        let c = config(preset);
        assert!(c.progress_alpha > 0.0 && c.progress_alpha <= 1.0);
        assert!(c.mouse_alpha > 0.0 && c.mouse_alpha <= 1.0);
    }
}

#[test]
fn preset_segment_boundaries() {
    let cinematic: Vec<f32> = config(Preset::Cinematic).track.boundaries().collect();
    assert_eq!(cinematic, vec![0.15, 0.45, 0.70]);
    let showcase: Vec<f32> = config(Preset::Showcase).track.boundaries().collect();
    assert_eq!(showcase, vec![0.45, 0.80]);
    assert_eq!(
        config(Preset::Orbit).track,
        config(Preset::Cinematic).track
    );
}

#[test]
fn preset_parses_case_insensitively() {
    assert_eq!("cinematic".parse::<Preset>(), Ok(Preset::Cinematic));
    assert_eq!(" Showcase ".parse::<Preset>(), Ok(Preset::Showcase));
    assert_eq!("ORBIT".parse::<Preset>(), Ok(Preset::Orbit));
    assert_eq!(
        "bogus".parse::<Preset>(),
        Err(PresetError("bogus".to_string()))
    );
    for preset in Preset::ALL {
        assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
    }
    assert_eq!(Preset::default(), Preset::Cinematic);
}

#[test]
fn page_top_is_centered_wide_shot() {
    let c = config(Preset::Cinematic);
    assert_key_close(c.track.sample(0.0), CameraKey::new(0.0, 4.5, 0.0), 1e-6);
    let pose = compute_pose(&c, 0.0, Vec2::ZERO);
    assert_eq!(pose.orbit_deg, 0.0);
    assert_eq!(pose.polar_deg, 75.0);
    assert_eq!(pose.radius, 4.5);
    assert!(pose.target.length() < 1e-6);
    assert_eq!(pose.fov_deg, 30.0);
    assert_eq!(pose.camera_orbit(), "0deg 75deg 4.5m");
    assert_eq!(pose.field_of_view(), "30deg");
}

#[test]
fn hero_boundary_matches_from_both_sides() {
    let c = config(Preset::Cinematic);
    let hero = CameraKey::new(1.8, 4.0, -0.15);
    assert_key_close(c.track.sample(0.15 - 1e-6), hero, 1e-4);
    assert_key_close(c.track.sample(0.15), hero, 1e-6);
    assert_key_close(c.track.sample(0.3), hero, 1e-6);
}

#[test]
fn keyframe_path_is_continuous_at_every_boundary() {
    for preset in Preset::ALL {
        let c = config(preset);
        for b in c.track.boundaries() {
            let below = c.track.sample(b - 1e-5);
            let at = c.track.sample(b);
            assert_key_close(below, at, 1e-3);
        }
    }
}

#[test]
fn keyframe_path_has_no_jumps_over_full_range() {
    for preset in Preset::ALL {
        let c = config(preset);
        let steps = 2000;
        let mut prev = c.track.sample(0.0);
        for i in 1..=steps {
            let key = c.track.sample(i as f32 / steps as f32);
            // steepest authored slope is 1.8 per 0.15 of progress
            assert_key_close(prev, key, 0.01);
            prev = key;
        }
    }
}

#[test]
fn cinematic_finale_returns_to_center() {
    let c = config(Preset::Cinematic);
    assert_key_close(c.track.sample(1.0), CameraKey::new(0.0, 4.5, 0.4), 1e-5);
    assert_key_close(c.track.sample(0.70), CameraKey::new(1.8, 4.2, 0.1), 1e-5);
}

#[test]
fn orbit_angle_is_linear_in_progress() {
    assert_eq!(orbit_angle_deg(0.0, 360.0), 0.0);
    assert_eq!(orbit_angle_deg(1.0, 360.0), 360.0);
    assert_eq!(orbit_angle_deg(1.0, 720.0), 720.0);
    assert!((orbit_angle_deg(0.25, 720.0) - 180.0).abs() < 1e-4);
}

#[test]
fn lateral_pan_follows_orbit() {
    let p = lateral_pan(1.8, 0.0);
    assert!((p.x + 1.8).abs() < 1e-6 && p.y.abs() < 1e-6);
    let p = lateral_pan(1.8, 90.0);
    assert!(p.x.abs() < 1e-5 && (p.y - 1.8).abs() < 1e-5);
    let p = lateral_pan(2.0, 180.0);
    assert!((p.x - 2.0).abs() < 1e-5 && p.y.abs() < 1e-5);
}

#[test]
fn zero_offset_never_pans() {
    for deg in [0.0_f32, 33.0, 90.0, 180.0, 271.5, 720.0] {
        let p = lateral_pan(0.0, deg);
        assert_eq!(p.x.abs(), 0.0);
        assert_eq!(p.y.abs(), 0.0);
    }
}

#[test]
fn pan_keeps_offset_distance() {
    let c = config(Preset::Cinematic);
    for i in 0..=20 {
        let progress = i as f32 / 20.0;
        let pose = compute_pose(&c, progress, Vec2::ZERO);
        let key = c.track.sample(progress);
        let horizontal = Vec2::new(pose.target.x, pose.target.z).length();
        assert!((horizontal - key.offset).abs() < 1e-4);
        assert!((pose.target.y - key.height).abs() < 1e-6);
    }
}

#[test]
fn parallax_nudges_target_only_when_enabled() {
    let cinematic = config(Preset::Cinematic);
    let pose = compute_pose(&cinematic, 0.0, Vec2::new(1.0, 1.0));
    assert!((pose.target.x - 0.2).abs() < 1e-6);
    assert!((pose.target.y + 0.1).abs() < 1e-6);

    let orbit = config(Preset::Orbit);
    let still = compute_pose(&orbit, 0.3, Vec2::ZERO);
    let moved = compute_pose(&orbit, 0.3, Vec2::new(1.0, -1.0));
    assert_eq!(still, moved);
}

#[test]
fn field_of_view_fixed_or_ramped() {
    let cinematic = config(Preset::Cinematic);
    assert_eq!(compute_pose(&cinematic, 0.8, Vec2::ZERO).fov_deg, 30.0);
    let showcase = config(Preset::Showcase);
    assert_eq!(compute_pose(&showcase, 0.0, Vec2::ZERO).fov_deg, 15.0);
    assert!((compute_pose(&showcase, 0.5, Vec2::ZERO).fov_deg - 22.5).abs() < 1e-5);
    assert_eq!(compute_pose(&showcase, 1.0, Vec2::ZERO).fov_deg, 30.0);
}

#[test]
fn pose_formats_viewer_attributes() {
    let pose = CameraPose {
        orbit_deg: 90.0,
        polar_deg: 75.0,
        radius: 4.25,
        target: glam::Vec3::new(-1.5, 0.25, 2.0),
        fov_deg: 22.5,
    };
    assert_eq!(pose.camera_orbit(), "90deg 75deg 4.25m");
    assert_eq!(pose.camera_target(), "-1.5m 0.25m 2m");
    assert_eq!(pose.field_of_view(), "22.5deg");
}

#[test]
fn choreographer_smooths_toward_scroll() {
    let mut ch = Choreographer::new(config(Preset::Cinematic));
    assert_eq!(ch.progress(), 0.0);
    assert!(ch.set_scroll(1000.0, 1000.0));
    ch.step();
    assert!((ch.progress() - 0.12).abs() < 1e-6);
    assert!((ch.scroll_velocity() - 0.88).abs() < 1e-6);
    for _ in 0..400 {
        ch.step();
    }
    assert!((ch.progress() - 1.0).abs() < 1e-4);
    let pose = ch.pose();
    assert!((pose.orbit_deg - 360.0).abs() < 0.05);
    assert!((pose.radius - 4.5).abs() < 1e-3);
}

#[test]
fn choreographer_keeps_target_on_short_page() {
    let mut ch = Choreographer::new(config(Preset::Cinematic));
    ch.set_scroll(300.0, 600.0);
    assert!(!ch.set_scroll(0.0, 0.0));
    assert!((ch.target_progress() - 0.5).abs() < 1e-6);
    let pose = ch.step();
    assert!(pose.orbit_deg.is_finite() && pose.radius.is_finite());
}

#[test]
fn choreographer_parallax_follows_pointer() {
    let mut ch = Choreographer::new(config(Preset::Cinematic));
    ch.set_pointer(800.0, 300.0, 800.0, 600.0);
    let pose = ch.step();
    assert!((ch.mouse().x - 0.05).abs() < 1e-6);
    assert!((pose.target.x - 0.05 * 0.2).abs() < 1e-5);

    let mut still = Choreographer::new(config(Preset::Orbit));
    still.set_pointer(800.0, 600.0, 800.0, 600.0);
    still.step();
    assert_eq!(still.mouse(), Vec2::ZERO);
}

#[test]
fn scroll_hint_fades_past_threshold() {
    let mut ch = Choreographer::new(config(Preset::Cinematic));
    assert_eq!(ch.hint_visible(), Some(true));
    ch.set_scroll(50.0, 1000.0);
    ch.step(); // 0.05 * 0.12 = 0.006
    assert_eq!(ch.hint_visible(), Some(true));
    ch.step();
    assert_eq!(ch.hint_visible(), Some(false));
    ch.set_scroll(0.0, 1000.0);
    for _ in 0..100 {
        ch.step();
    }
    assert_eq!(ch.hint_visible(), Some(true));

    let orbit = Choreographer::new(config(Preset::Orbit));
    assert_eq!(orbit.hint_visible(), None);
}
