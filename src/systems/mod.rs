mod deployment;
pub mod kinematics;

pub use deployment::{oscillator_tick_system, stop_on_exit_system, surface_pose_system};
pub use kinematics::WingKinematics;
