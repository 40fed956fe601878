use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::{
    KinematicsError, OSCILLATOR_LOWER_BOUND, OSCILLATOR_STEP, OSCILLATOR_TICK_MS,
    OSCILLATOR_UPPER_BOUND,
};

/// Timing of the auto-deployment oscillator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorConfig {
    /// Change of each driven parameter per tick.
    pub step: f64,
    /// Fixed tick period (ms).
    pub tick_interval_ms: u64,
    /// Extending reverses once the driven parameters reach this value.
    pub upper_bound: f64,
    /// Retracting reverses once the driven parameters fall to this value.
    pub lower_bound: f64,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            step: OSCILLATOR_STEP,
            tick_interval_ms: OSCILLATOR_TICK_MS,
            upper_bound: OSCILLATOR_UPPER_BOUND,
            lower_bound: OSCILLATOR_LOWER_BOUND,
        }
    }
}

impl OscillatorConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), KinematicsError> {
        if !(self.step > 0.0 && self.step <= 1.0) {
            return Err(KinematicsError::InvalidConfig(format!(
                "oscillator step must be in (0, 1], got {}",
                self.step
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(KinematicsError::InvalidConfig(
                "oscillator tick interval must be positive".to_string(),
            ));
        }
        if !(0.0 <= self.lower_bound
            && self.lower_bound < self.upper_bound
            && self.upper_bound <= 1.0)
        {
            return Err(KinematicsError::InvalidConfig(format!(
                "oscillator bounds must satisfy 0 <= lower < upper <= 1, got {}..{}",
                self.lower_bound, self.upper_bound
            )));
        }
        Ok(())
    }
}
