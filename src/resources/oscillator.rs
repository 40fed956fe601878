use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::components::{DeploymentPreset, SurfaceDeployments, SurfaceKind};
use crate::resources::OscillatorConfig;

/// Which high-lift parameters the oscillator drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployTarget {
    Slats,
    Flaps,
    Both,
}

impl DeployTarget {
    pub fn drives(&self, kind: SurfaceKind) -> bool {
        matches!(
            (self, kind),
            (DeployTarget::Both, SurfaceKind::Slats | SurfaceKind::Flaps)
                | (DeployTarget::Slats, SurfaceKind::Slats)
                | (DeployTarget::Flaps, SurfaceKind::Flaps)
        )
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeployTarget::Slats => "slats",
            DeployTarget::Flaps => "flaps",
            DeployTarget::Both => "slats and flaps",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Extending,
    Retracting,
}

impl Direction {
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Extending => 1.0,
            Direction::Retracting => -1.0,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Direction::Extending => Direction::Retracting,
            Direction::Retracting => Direction::Extending,
        }
    }
}

/// Snapshot of the oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorState {
    pub running: bool,
    pub direction: Direction,
    pub target: DeployTarget,
    pub slat_value: f64,
    pub flap_value: f64,
}

impl OscillatorState {
    /// The state one tick later.
    ///
    /// Driven parameters move by `step` and are clamped into `[0, 1]`; the
    /// direction then flips only once every driven parameter has reached the
    /// bound it was heading for. A stopped state is returned unchanged.
    pub fn advanced(&self, config: &OscillatorConfig) -> Self {
        if !self.running {
            return *self;
        }
        let delta = config.step * self.direction.sign();
        let step = |value: f64, kind| {
            if self.target.drives(kind) {
                (value + delta).clamp(0.0, 1.0)
            } else {
                value
            }
        };
        let slat_value = step(self.slat_value, SurfaceKind::Slats);
        let flap_value = step(self.flap_value, SurfaceKind::Flaps);

        let reached = |value: f64| match self.direction {
            Direction::Extending => value >= config.upper_bound,
            Direction::Retracting => value <= config.lower_bound,
        };
        let at_bound = match self.target {
            DeployTarget::Slats => reached(slat_value),
            DeployTarget::Flaps => reached(flap_value),
            DeployTarget::Both => reached(slat_value) && reached(flap_value),
        };

        Self {
            direction: if at_bound {
                self.direction.reversed()
            } else {
                self.direction
            },
            slat_value,
            flap_value,
            ..*self
        }
    }
}

/// Auto-deployment driver for the slats and flaps, and the owner of the
/// current deployment of every surface.
#[derive(Resource, Debug, Clone)]
pub struct DeploymentOscillator {
    running: bool,
    direction: Direction,
    target: DeployTarget,
    deployments: SurfaceDeployments,
    config: OscillatorConfig,
    timer: Timer,
}

impl Default for DeploymentOscillator {
    fn default() -> Self {
        Self::new(OscillatorConfig::default())
    }
}

impl DeploymentOscillator {
    pub fn new(config: OscillatorConfig) -> Self {
        let timer = Timer::new(config.tick_interval(), TimerMode::Repeating);
        Self {
            running: false,
            direction: Direction::Extending,
            target: DeployTarget::Both,
            deployments: SurfaceDeployments::default(),
            config,
            timer,
        }
    }

    pub fn config(&self) -> &OscillatorConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn deployments(&self) -> &SurfaceDeployments {
        &self.deployments
    }

    pub fn current_state(&self) -> OscillatorState {
        OscillatorState {
            running: self.running,
            direction: self.direction,
            target: self.target,
            slat_value: self.deployments.slats.value(),
            flap_value: self.deployments.flaps.value(),
        }
    }

    /// Starts driving `target`. Calling it while running only changes the target.
    pub fn start(&mut self, target: DeployTarget) {
        if self.running {
            if self.target != target {
                info!("Auto-deploy retargeted from {} to {}", self.target, target);
                self.target = target;
            }
            return;
        }
        self.running = true;
        self.direction = Direction::Extending;
        self.target = target;
        self.timer.reset();
        info!("Auto-deploy started for {}", target);
    }

    /// Stops the oscillator and discards any partially elapsed tick.
    pub fn stop(&mut self) {
        if self.running {
            info!(
                "Auto-deploy stopped at slats {:.2}, flaps {:.2}",
                self.deployments.slats.value(),
                self.deployments.flaps.value()
            );
        }
        self.running = false;
        self.direction = Direction::Extending;
        self.timer.reset();
    }

    pub fn toggle(&mut self, target: DeployTarget) {
        if self.running {
            self.stop();
        } else {
            self.start(target);
        }
    }

    /// Manual override of one surface's deployment.
    ///
    /// Touching a driven parameter while running hands it back to the user:
    /// with both driven the oscillator keeps going on the other one, with a
    /// single target it stops.
    pub fn set_parameter(&mut self, kind: SurfaceKind, value: f64) {
        self.deployments.set(kind, value);
        if !self.running || !matches!(kind, SurfaceKind::Slats | SurfaceKind::Flaps) {
            return;
        }
        match self.target {
            DeployTarget::Both => {
                self.target = match kind {
                    SurfaceKind::Slats => DeployTarget::Flaps,
                    _ => DeployTarget::Slats,
                };
                info!("Manual {} input, auto-deploy narrowed to {}", kind, self.target);
            }
            DeployTarget::Slats | DeployTarget::Flaps => {
                info!("Manual {} input, auto-deploy released", kind);
                self.stop();
            }
        }
    }

    pub fn apply_preset(&mut self, preset: DeploymentPreset) {
        self.stop();
        self.deployments = preset.deployments();
        info!("Applied {:?} preset", preset);
    }

    /// Runs a single oscillator step immediately.
    pub fn tick(&mut self) {
        let next = self.current_state().advanced(&self.config);
        if next.direction != self.direction {
            debug!(
                "Auto-deploy reversing to {:?} at slats {:.3}, flaps {:.3}",
                next.direction, next.slat_value, next.flap_value
            );
        }
        self.running = next.running;
        self.direction = next.direction;
        self.target = next.target;
        self.deployments.set(SurfaceKind::Slats, next.slat_value);
        self.deployments.set(SurfaceKind::Flaps, next.flap_value);
    }

    /// Feeds elapsed time to the tick timer and runs every tick that fell due.
    /// Returns the number of ticks run.
    pub fn advance_by(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        let due = self.timer.tick(elapsed).times_finished_this_tick();
        for _ in 0..due {
            self.tick();
        }
        due
    }
}
