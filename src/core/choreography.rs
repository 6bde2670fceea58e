// Scroll-to-camera choreography: maps smoothed scroll progress and pointer
// position to a camera pose for the model viewer.

use super::constants::*;
use super::keyframes::{CameraKey, KeyframeError, KeyframeTrack, Segment};
use super::state::{MouseState, ScrollState};
use glam::{Vec2, Vec3};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldOfView {
    Fixed(f32),
    /// `base + progress * span`
    Ramp { base: f32, span: f32 },
}

impl FieldOfView {
    #[inline]
    pub fn at(self, progress: f32) -> f32 {
        match self {
            FieldOfView::Fixed(deg) => deg,
            FieldOfView::Ramp { base, span } => base + progress * span,
        }
    }
}

/// Pointer-driven nudge of the look-at target, in metres per unit pointer offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub lateral: f32,
    pub vertical: f32,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            lateral: PARALLAX_LATERAL,
            vertical: PARALLAX_VERTICAL,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    /// Four segments, one turn, fixed FOV, mouse parallax and scroll-hint fade.
    #[default]
    Cinematic,
    /// Cinematic keyframes with two turns and a widening FOV.
    Orbit,
    /// Three segments, two turns, widening FOV.
    Showcase,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Cinematic, Preset::Orbit, Preset::Showcase];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Cinematic => "cinematic",
            Preset::Orbit => "orbit",
            Preset::Showcase => "showcase",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown camera preset {0:?}")]
pub struct PresetError(pub String);

impl FromStr for Preset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PresetError(wanted.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChoreographyConfig {
    pub track: KeyframeTrack,
    /// Degrees of orbit across the full scroll range.
    pub rotation_span_deg: f32,
    pub polar_deg: f32,
    pub fov: FieldOfView,
    pub progress_alpha: f32,
    pub mouse_alpha: f32,
    pub parallax: Option<Parallax>,
    /// Progress above which the scroll hint is hidden; `None` leaves the hint alone.
    pub hint_threshold: Option<f32>,
}

impl ChoreographyConfig {
    pub fn preset(preset: Preset) -> Result<Self, KeyframeError> {
        let config = match preset {
            Preset::Cinematic => Self {
                track: cinematic_track()?,
                rotation_span_deg: SINGLE_TURN_DEG,
                polar_deg: POLAR_DEG,
                fov: FieldOfView::Fixed(FIXED_FOV_DEG),
                progress_alpha: PROGRESS_ALPHA_FAST,
                mouse_alpha: MOUSE_ALPHA,
                parallax: Some(Parallax::default()),
                hint_threshold: Some(SCROLL_HINT_THRESHOLD),
            },
            Preset::Orbit => Self::turning(cinematic_track()?),
            Preset::Showcase => Self::turning(showcase_track()?),
        };
        Ok(config)
    }

    fn turning(track: KeyframeTrack) -> Self {
        Self {
            track,
            rotation_span_deg: DOUBLE_TURN_DEG,
            polar_deg: POLAR_DEG,
            fov: FieldOfView::Ramp {
                base: RAMP_FOV_BASE_DEG,
                span: RAMP_FOV_SPAN_DEG,
            },
            progress_alpha: PROGRESS_ALPHA_SLOW,
            mouse_alpha: MOUSE_ALPHA,
            parallax: None,
            hint_threshold: None,
        }
    }
}

fn cinematic_track() -> Result<KeyframeTrack, KeyframeError> {
    let intro = CameraKey::new(0.0, BASE_RADIUS, 0.0);
    let hero = CameraKey::new(HERO_OFFSET, HERO_RADIUS, HERO_HEIGHT);
    let widgets = CameraKey::new(HERO_OFFSET, 4.2, 0.1);
    let finale = CameraKey::new(0.0, BASE_RADIUS, 0.4);
    KeyframeTrack::new([
        Segment::new(0.0, 0.15, intro, hero),
        Segment::hold(0.15, 0.45, hero),
        Segment::new(0.45, 0.70, hero, widgets),
        Segment::new(0.70, 1.0, widgets, finale),
    ])
}

fn showcase_track() -> Result<KeyframeTrack, KeyframeError> {
    let intro = CameraKey::new(0.0, 5.0, 0.0);
    let side = CameraKey::new(1.5, 4.2, -0.1);
    let close = CameraKey::new(1.5, 4.4, 0.05);
    let finale = CameraKey::new(0.0, 5.0, 0.2);
    KeyframeTrack::new([
        Segment::new(0.0, 0.45, intro, side),
        Segment::new(0.45, 0.80, side, close),
        Segment::new(0.80, 1.0, close, finale),
    ])
}

/// Camera state pushed to the viewer each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub orbit_deg: f32,
    pub polar_deg: f32,
    pub radius: f32,
    pub target: Vec3,
    pub fov_deg: f32,
}

impl CameraPose {
    /// `cameraOrbit` value: `"<azimuth>deg <polar>deg <radius>m"`.
    pub fn camera_orbit(&self) -> String {
        format!("{}deg {}deg {}m", self.orbit_deg, self.polar_deg, self.radius)
    }

    /// `cameraTarget` value: `"<x>m <y>m <z>m"`.
    pub fn camera_target(&self) -> String {
        format!("{}m {}m {}m", self.target.x, self.target.y, self.target.z)
    }

    pub fn field_of_view(&self) -> String {
        format!("{}deg", self.fov_deg)
    }
}

#[inline]
pub fn orbit_angle_deg(progress: f32, rotation_span_deg: f32) -> f32 {
    progress * rotation_span_deg
}

/// Horizontal target shift `(x, z)` that keeps `offset` on the same side of the
/// frame while the camera orbits.
#[inline]
pub fn lateral_pan(offset: f32, orbit_deg: f32) -> Vec2 {
    let rad = orbit_deg.to_radians();
    Vec2::new(offset * -rad.cos(), offset * rad.sin())
}

/// Pure pose evaluation for a smoothed progress and pointer position.
pub fn compute_pose(config: &ChoreographyConfig, progress: f32, mouse: Vec2) -> CameraPose {
    let key = config.track.sample(progress);
    let orbit_deg = orbit_angle_deg(progress, config.rotation_span_deg);
    let pan = lateral_pan(key.offset, orbit_deg);
    let mut target = Vec3::new(pan.x, key.height, pan.y);
    if let Some(parallax) = config.parallax {
        target.x += mouse.x * parallax.lateral;
        target.y -= mouse.y * parallax.vertical;
    }
    CameraPose {
        orbit_deg,
        polar_deg: config.polar_deg,
        radius: key.radius,
        target,
        fov_deg: config.fov.at(progress),
    }
}

/// Owns the scroll/pointer trackers; event callbacks feed it, the frame loop steps it.
#[derive(Clone, Debug)]
pub struct Choreographer {
    config: ChoreographyConfig,
    scroll: ScrollState,
    mouse: MouseState,
}

impl Choreographer {
    pub fn new(config: ChoreographyConfig) -> Self {
        Self {
            scroll: ScrollState::new(config.progress_alpha),
            mouse: MouseState::new(config.mouse_alpha),
            config,
        }
    }

    pub fn config(&self) -> &ChoreographyConfig {
        &self.config
    }

    /// Feed a scroll sample; see [`ScrollState::sample`].
    pub fn set_scroll(&mut self, scroll_top: f64, scrollable: f64) -> bool {
        self.scroll.sample(scroll_top, scrollable)
    }

    pub fn set_pointer(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) {
        self.mouse.sample(client_x, client_y, viewport_w, viewport_h);
    }

    /// Relax the trackers by one frame and evaluate the pose.
    pub fn step(&mut self) -> CameraPose {
        self.scroll.step();
        if self.config.parallax.is_some() {
            self.mouse.step();
        }
        self.pose()
    }

    /// Pose for the current smoothed state, without advancing it.
    pub fn pose(&self) -> CameraPose {
        compute_pose(&self.config, self.scroll.current(), self.mouse.current())
    }

    pub fn progress(&self) -> f32 {
        self.scroll.current()
    }

    pub fn target_progress(&self) -> f32 {
        self.scroll.target()
    }

    pub fn scroll_velocity(&self) -> f32 {
        self.scroll.velocity()
    }

    pub fn mouse(&self) -> Vec2 {
        self.mouse.current()
    }

    /// Whether the scroll hint should show, or `None` if this preset leaves it alone.
    pub fn hint_visible(&self) -> Option<bool> {
        self.config
            .hint_threshold
            .map(|threshold| self.scroll.current() <= threshold)
    }
}
