/// Camera and effect tuning constants.
///
/// These express intended behavior (smoothing factors, keyframe values, clamp
/// limits) and keep magic numbers out of the choreography code.
// Camera framing
pub const BASE_RADIUS: f32 = 4.5; // wide opening shot, metres
pub const POLAR_DEG: f32 = 75.0; // fixed elevation of the orbit
pub const HERO_OFFSET: f32 = 1.8; // lateral shift that keeps the bike clear of text
pub const HERO_RADIUS: f32 = 4.0;
pub const HERO_HEIGHT: f32 = -0.15;

// Field of view
pub const FIXED_FOV_DEG: f32 = 30.0;
pub const RAMP_FOV_BASE_DEG: f32 = 15.0;
pub const RAMP_FOV_SPAN_DEG: f32 = 15.0;

// Orbit
pub const SINGLE_TURN_DEG: f32 = 360.0;
pub const DOUBLE_TURN_DEG: f32 = 720.0;

// Per-frame smoothing factors (fraction of remaining distance per frame)
pub const PROGRESS_ALPHA_FAST: f32 = 0.12;
pub const PROGRESS_ALPHA_SLOW: f32 = 0.05;
pub const MOUSE_ALPHA: f32 = 0.05;

// Mouse parallax weights (metres per unit of normalized pointer offset)
pub const PARALLAX_LATERAL: f32 = 0.2;
pub const PARALLAX_VERTICAL: f32 = 0.1;

// Scroll hint
pub const SCROLL_HINT_THRESHOLD: f32 = 0.01;
pub const SCROLL_HINT_OPACITY: &str = "0.6";

// Ambient particles
pub const PARTICLE_COUNT: usize = 150;
pub const PARTICLE_MAX_SIZE: f32 = 1.5;
pub const PARTICLE_MAX_SPEED: f32 = 0.2; // full range of per-axis velocity
pub const PARTICLE_MAX_START_ALPHA: f32 = 0.5;
pub const PARTICLE_ALPHA_CEIL: f32 = 0.8;
pub const PARTICLE_ALPHA_FLOOR: f32 = 0.1;
pub const PARTICLE_TWINKLE_GAIN: f32 = 0.05; // alpha gained per unit scroll velocity
pub const PARTICLE_FADE_PER_FRAME: f32 = 0.005;

// Ambient glow travel across the full scroll range
pub const GLOW_TRAVEL_PX: f32 = 200.0;
