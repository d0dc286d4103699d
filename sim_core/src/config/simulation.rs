//! Run configuration

use super::{load_toml, parse_toml, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How crits are resolved by the damage pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CritMode {
    /// Expected value `(1 - c) + c * m`, deterministic
    #[default]
    Expected,
    /// Seeded random draw per hit
    Sampled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Time ceiling in seconds
    #[serde(default = "default_max_time")]
    pub max_time: f64,
    /// Reserved
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    /// Emit a trace line per dispatched event
    #[serde(default)]
    pub debug_mode: bool,
    /// Seed for jitter and sampled crits. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub crit_mode: CritMode,
}

fn default_max_time() -> f64 {
    30.0
}
fn default_time_step() -> f64 {
    0.1
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            max_time: default_max_time(),
            time_step: default_time_step(),
            debug_mode: false,
            seed: None,
            crit_mode: CritMode::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: SimulationConfig = load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_time(mut self, max_time: f64) -> Self {
        self.max_time = max_time;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn with_crit_mode(mut self, crit_mode: CritMode) -> Self {
        self.crit_mode = crit_mode;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_time.is_finite() || self.max_time <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "max_time must be positive and finite, got {}",
                self.max_time
            )));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert!((config.max_time - 30.0).abs() < f64::EPSILON);
        assert!((config.time_step - 0.1).abs() < f64::EPSILON);
        assert!(!config.debug_mode);
        assert_eq!(config.crit_mode, CritMode::Expected);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = SimulationConfig::from_toml_str("max_time = 12.5\nseed = 7\n").unwrap();
        assert!((config.max_time - 12.5).abs() < f64::EPSILON);
        assert_eq!(config.seed, Some(7));
        assert!((config.time_step - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(SimulationConfig::default().with_max_time(0.0).validate().is_err());
        assert!(SimulationConfig::default().with_max_time(-1.0).validate().is_err());
        assert!(SimulationConfig::default().with_max_time(f64::NAN).validate().is_err());

        let mut config = SimulationConfig::default();
        config.time_step = -0.1;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_crit_mode_toml() {
        let config = SimulationConfig::from_toml_str("crit_mode = \"Sampled\"\n").unwrap();
        assert_eq!(config.crit_mode, CritMode::Sampled);
    }
}
