// DOM wiring and timer periods used by the web frontend.

// Mandatory host element
pub const VIEWER_SELECTOR: &str = "#bike-viewer";
pub const PRESET_ATTRIBUTE: &str = "data-camera-preset";

// Optional elements
pub const SCROLL_HINT_ID: &str = "fixed-scroll-hint";
pub const PARTICLE_CANVAS_ID: &str = "bg-particles";
pub const DATA_STREAM_ID: &str = "data-stream";
pub const GLOW_SELECTOR: &str = ".ambient-glow";
pub const HERO_TITLE_SELECTOR: &str = ".hero-title";
pub const SECTION_SELECTOR: &str = ".scroll-section";

// Loading indicator inside the viewer
pub const PROGRESS_BAR_SELECTOR: &str = ".progress-bar";
pub const UPDATE_BAR_SELECTOR: &str = ".update-bar";
pub const HIDE_CLASS: &str = "hide";

// Section reveal
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_THRESHOLD: f64 = 0.5; // fraction of a section on screen before it shows

// Timers (milliseconds)
pub const SCRAMBLE_TICK_MS: i32 = 30;
pub const DATA_STREAM_TICK_MS: i32 = 3000;
