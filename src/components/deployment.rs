use serde::{Deserialize, Serialize};

use crate::components::SurfaceKind;

/// A deployment value that is always inside its kind's range and never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeploymentParameter {
    kind: SurfaceKind,
    value: f64,
}

impl DeploymentParameter {
    /// Clamps `raw` into the range of `kind`. NaN maps to the neutral value.
    pub fn new(kind: SurfaceKind, raw: f64) -> Self {
        let (min, max) = kind.deployment_range();
        let value = if raw.is_nan() { 0.0 } else { raw.clamp(min, max) };
        Self { kind, value }
    }

    pub fn stowed(kind: SurfaceKind) -> Self {
        Self { kind, value: 0.0 }
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Current deployment of all four surface families.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDeployments {
    pub slats: DeploymentParameter,
    pub flaps: DeploymentParameter,
    pub ailerons: DeploymentParameter,
    pub spoilers: DeploymentParameter,
}

impl Default for SurfaceDeployments {
    fn default() -> Self {
        Self {
            slats: DeploymentParameter::stowed(SurfaceKind::Slats),
            flaps: DeploymentParameter::stowed(SurfaceKind::Flaps),
            ailerons: DeploymentParameter::stowed(SurfaceKind::Ailerons),
            spoilers: DeploymentParameter::stowed(SurfaceKind::Spoilers),
        }
    }
}

impl SurfaceDeployments {
    pub fn get(&self, kind: SurfaceKind) -> DeploymentParameter {
        match kind {
            SurfaceKind::Slats => self.slats,
            SurfaceKind::Flaps => self.flaps,
            SurfaceKind::Ailerons => self.ailerons,
            SurfaceKind::Spoilers => self.spoilers,
        }
    }

    pub fn set(&mut self, kind: SurfaceKind, raw: f64) {
        let parameter = DeploymentParameter::new(kind, raw);
        match kind {
            SurfaceKind::Slats => self.slats = parameter,
            SurfaceKind::Flaps => self.flaps = parameter,
            SurfaceKind::Ailerons => self.ailerons = parameter,
            SurfaceKind::Spoilers => self.spoilers = parameter,
        }
    }
}

/// Canned configurations for the phases of flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentPreset {
    Cruise,
    Takeoff,
    Landing,
    Braking,
}

impl DeploymentPreset {
    pub fn deployments(&self) -> SurfaceDeployments {
        // (slats, flaps, spoilers)
        let (slats, flaps, spoilers) = match self {
            DeploymentPreset::Cruise => (0.0, 0.0, 0.0),
            DeploymentPreset::Takeoff => (0.5, 0.5, 0.0),
            DeploymentPreset::Landing => (1.0, 1.0, 0.0),
            DeploymentPreset::Braking => (0.0, 0.0, 1.0),
        };
        let mut deployments = SurfaceDeployments::default();
        deployments.set(SurfaceKind::Slats, slats);
        deployments.set(SurfaceKind::Flaps, flaps);
        deployments.set(SurfaceKind::Spoilers, spoilers);
        deployments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_into_kind_range() {
        assert_eq!(DeploymentParameter::new(SurfaceKind::Flaps, 1.7).value(), 1.0);
        assert_eq!(DeploymentParameter::new(SurfaceKind::Slats, -0.3).value(), 0.0);
        assert_eq!(DeploymentParameter::new(SurfaceKind::Ailerons, -0.3).value(), -0.3);
        assert_eq!(DeploymentParameter::new(SurfaceKind::Ailerons, -4.0).value(), -1.0);
        assert_eq!(DeploymentParameter::new(SurfaceKind::Spoilers, f64::NAN).value(), 0.0);
        assert_eq!(
            DeploymentParameter::new(SurfaceKind::Slats, f64::INFINITY).value(),
            1.0
        );
    }

    #[test]
    fn test_presets() {
        let landing = DeploymentPreset::Landing.deployments();
        assert_eq!(landing.slats.value(), 1.0);
        assert_eq!(landing.flaps.value(), 1.0);
        assert_eq!(landing.spoilers.value(), 0.0);

        let braking = DeploymentPreset::Braking.deployments();
        assert_eq!(braking.get(SurfaceKind::Spoilers).value(), 1.0);
        assert_eq!(braking.get(SurfaceKind::Ailerons).value(), 0.0);
    }
}
