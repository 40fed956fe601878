use bevy::{log::LogPlugin, prelude::*, time::TimeUpdateStrategy};
use std::{
    env,
    io::{self, Write},
};

use wing_kinematics::{
    resources::{DeployTarget, DeploymentOscillator, SurfacePoses, WingConfig},
    WingKinematicsPlugin,
};

const DEFAULT_FRAMES: usize = 200;

/// Runs the wing headless with auto-deploy on both high-lift surfaces and
/// prints one JSON line per frame.
///
/// Usage: `wing_sweep [config.yaml] [frames]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => WingConfig::from_file(&path)?,
        None => WingConfig::default(),
    };
    let frames = match args.next() {
        Some(frames) => frames.parse::<usize>()?,
        None => DEFAULT_FRAMES,
    };

    // One oscillator tick per frame.
    let frame_time = config.oscillator.tick_interval();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(frame_time))
        .add_plugins(WingKinematicsPlugin::with_config(config));

    app.world_mut()
        .resource_mut::<DeploymentOscillator>()
        .start(DeployTarget::Both);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for frame in 0..frames {
        app.update();
        let world = app.world();
        let state = world.resource::<DeploymentOscillator>().current_state();
        let poses = world.resource::<SurfacePoses>();
        let line = serde_json::json!({
            "frame": frame,
            "state": state,
            "surfaces": poses.surfaces().collect::<Vec<_>>(),
        });
        writeln!(out, "{}", line)?;
    }

    app.world_mut().send_event(AppExit::Success);
    app.update();
    Ok(())
}
