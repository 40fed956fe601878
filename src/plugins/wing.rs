use bevy::prelude::*;

use crate::resources::{DeploymentOscillator, SurfacePoses, WingConfig};
use crate::systems::{
    oscillator_tick_system, stop_on_exit_system, surface_pose_system, WingKinematics,
};

/// Ordering of the per-frame deployment work.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum DeploymentSet {
    /// Oscillator ticks and manual inputs.
    Drive,
    /// Pose recomputation from the settled deployments.
    Pose,
}

/// Inserts the kinematics engine, the oscillator and the per-frame
/// [`SurfacePoses`], and schedules the systems that keep them current.
pub struct WingKinematicsPlugin {
    config: WingConfig,
}

impl Default for WingKinematicsPlugin {
    fn default() -> Self {
        Self {
            config: WingConfig::default(),
        }
    }
}

impl WingKinematicsPlugin {
    pub fn with_config(config: WingConfig) -> Self {
        Self { config }
    }

    fn build_kinematics(&self) -> WingKinematics {
        match WingKinematics::from_config(&self.config) {
            Ok(kinematics) => kinematics,
            Err(e) => {
                error!(
                    "Wing '{}' is invalid ({}), falling back to the standard wing",
                    self.config.name, e
                );
                WingKinematics::default()
            }
        }
    }
}

impl Plugin for WingKinematicsPlugin {
    fn build(&self, app: &mut App) {
        let kinematics = self.build_kinematics();
        info!(
            "Wing '{}' loaded: span {} m, track resolution {}",
            self.config.name,
            kinematics.planform().span(),
            kinematics.track_resolution()
        );

        let oscillator_config = match self.config.oscillator.validate() {
            Ok(()) => self.config.oscillator.clone(),
            Err(e) => {
                error!("Invalid oscillator settings ({}), using defaults", e);
                Default::default()
            }
        };

        app.insert_resource(kinematics)
            .insert_resource(DeploymentOscillator::new(oscillator_config))
            .init_resource::<SurfacePoses>()
            .configure_sets(Update, (DeploymentSet::Drive, DeploymentSet::Pose).chain())
            .add_systems(
                Update,
                (
                    oscillator_tick_system.in_set(DeploymentSet::Drive),
                    surface_pose_system.in_set(DeploymentSet::Pose),
                ),
            )
            .add_systems(Last, stop_on_exit_system);
    }
}
