mod oscillator;
mod poses;

pub use oscillator::{oscillator_tick_system, stop_on_exit_system};
pub use poses::surface_pose_system;
