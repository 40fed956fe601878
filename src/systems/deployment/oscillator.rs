use bevy::prelude::*;

use crate::resources::DeploymentOscillator;

/// Advances the auto-deployment oscillator by the frame's elapsed time.
///
/// The oscillator runs on its own fixed tick, so a long frame may run several
/// ticks and a short one none.
///
/// # Arguments
/// - `time`: Virtual time providing the frame delta.
/// - `oscillator`: The oscillator to drive.
pub fn oscillator_tick_system(time: Res<Time>, mut oscillator: ResMut<DeploymentOscillator>) {
    if !oscillator.is_running() {
        return;
    }
    oscillator.advance_by(time.delta());
}

/// Stops the oscillator when the app is shutting down so no tick outlives it.
pub fn stop_on_exit_system(
    mut exit_events: EventReader<AppExit>,
    mut oscillator: ResMut<DeploymentOscillator>,
) {
    if exit_events.read().next().is_some() && oscillator.is_running() {
        info!("App exiting, stopping auto-deploy");
        oscillator.stop();
    }
}
