pub mod choreography;
pub mod constants;
pub mod keyframes;
pub mod material;
pub mod particles;
pub mod scramble;
pub mod smoothing;
pub mod state;
pub mod telemetry;

pub use choreography::*;
pub use material::MaterialFinish;
pub use particles::ParticleField;
pub use scramble::Scramble;
