// PBR finish applied to the bike once the model has loaded, and the loading
// bar mapping for the viewer's progress events.

/// Metallic-roughness parameters, every component in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialFinish {
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
}

impl MaterialFinish {
    /// Pure black, fully metallic, near-mirror.
    pub const GLOSS_BLACK: MaterialFinish = MaterialFinish {
        base_color: [0.0, 0.0, 0.0, 1.0],
        metallic: 1.0,
        roughness: 0.03,
    };

    pub fn clamped(self) -> Self {
        Self {
            base_color: self.base_color.map(|c| c.clamp(0.0, 1.0)),
            metallic: self.metallic.clamp(0.0, 1.0),
            roughness: self.roughness.clamp(0.0, 1.0),
        }
    }
}

impl Default for MaterialFinish {
    fn default() -> Self {
        Self::GLOSS_BLACK
    }
}

/// CSS width for the loading bar at a given total progress.
pub fn loading_bar_width(total_progress: f64) -> String {
    format!("{}%", total_progress.clamp(0.0, 1.0) * 100.0)
}

/// The viewer reports exactly 1.0 once every asset has arrived.
#[inline]
pub fn loading_complete(total_progress: f64) -> bool {
    total_progress >= 1.0
}
