pub mod aileron;
mod engine;
pub mod flap;
pub mod slat;
pub mod spoiler;
pub mod track;

pub use engine::WingKinematics;
pub use flap::FlapPhases;
pub use track::{CubicBezier, QuadraticBezier, TrackPath};
