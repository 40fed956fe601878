use bevy::{prelude::*, time::TimeUpdateStrategy};
use std::time::Duration;
use wing_kinematics::{
    resources::{DeploymentOscillator, SurfacePoses, WingConfig},
    WingKinematics, WingKinematicsPlugin,
};

// Builder for creating a headless test application around the wing plugin
pub struct TestAppBuilder {
    config: WingConfig,
    frame_time: Duration,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: WingConfig::default(),
            frame_time: Duration::from_millis(30),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: WingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_frame_time(mut self, frame_time: Duration) -> Self {
        self.frame_time = frame_time;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(self.frame_time))
            .add_plugins(WingKinematicsPlugin::with_config(self.config));

        // Run an initial update so the clock has a reference instant
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn oscillator(&self) -> &DeploymentOscillator {
        self.app.world().resource::<DeploymentOscillator>()
    }

    pub fn oscillator_mut(&mut self) -> Mut<DeploymentOscillator> {
        self.app.world_mut().resource_mut::<DeploymentOscillator>()
    }

    pub fn kinematics(&self) -> &WingKinematics {
        self.app.world().resource::<WingKinematics>()
    }

    pub fn poses(&self) -> &SurfacePoses {
        self.app.world().resource::<SurfacePoses>()
    }

    pub fn exit(&mut self) {
        self.app.world_mut().send_event(AppExit::Success);
        self.app.update();
    }
}
