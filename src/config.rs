// Centralized configuration for engine parameters

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

// ====================
// Curve Sampling
// ====================
/// Number of intervals sampled per curve (points = intervals + 1).
pub const DEFAULT_STEP_COUNT: usize = 200;
/// Lower bound of the galvanic concentration axis in M. Keeps log10 away from zero.
pub const CONCENTRATION_FLOOR_M: f64 = 0.0001;

fn default_step_count() -> usize {
    DEFAULT_STEP_COUNT
}

/// Runtime tunables for the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Intervals per sampled curve.
    #[serde(default = "default_step_count")]
    pub step_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("step_count must be at least 1")]
    ZeroStepCount,
}

impl EngineConfig {
    pub fn with_step_count(step_count: usize) -> Result<Self, ConfigError> {
        let config = Self { step_count };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_count == 0 {
            return Err(ConfigError::ZeroStepCount);
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
