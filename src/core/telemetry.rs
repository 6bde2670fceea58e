// Decorative telemetry ticker content.

use rand::seq::SliceRandom;
use rand::Rng;

pub const TELEMETRY_LINES: &[&str] = &[
    ">> SCANNING_GEOMETRY...",
    ">> CALCULATING_AERODYNAMICS...",
    ">> BATTERY_CELL_VOLTAGE: 3.8V",
    ">> SYNCING_WITH_SATELLITE...",
    ">> TORQUE_PEAK: 95Nm",
    ">> THERMAL_MANAGEMENT: STABLE",
];

/// Child nodes kept in the ticker before the oldest line is dropped.
pub const MAX_STREAM_CHILDREN: u32 = 20;

/// Nodes appended (and removed) per line: a line break and a span.
pub const NODES_PER_LINE: u32 = 2;

pub fn pick_line<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TELEMETRY_LINES.choose(rng).copied().unwrap_or(TELEMETRY_LINES[0])
}

/// How many leading children to remove after an append.
#[inline]
pub fn nodes_to_trim(child_count: u32) -> u32 {
    if child_count > MAX_STREAM_CHILDREN {
        NODES_PER_LINE
    } else {
        0
    }
}
