//! Survey engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::survey::{BuilderSettings, MAX_OPTIONS};

/// The budget question always shows four options, so no cap can go lower.
const MIN_OPTIONS: usize = 4;

/// Survey generation tuning
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Option cap per generated question
    #[serde(default = "default_max_options")]
    pub max_options: usize,
}

impl EngineConfig {
    /// Builder settings for these values
    pub fn builder_settings(&self) -> BuilderSettings {
        BuilderSettings {
            max_options: self.max_options,
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_options < MIN_OPTIONS {
            return Err(ValidationError::MaxOptionsTooSmall {
                min: MIN_OPTIONS,
                actual: self.max_options,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_options: default_max_options(),
        }
    }
}

fn default_max_options() -> usize {
    MAX_OPTIONS
}
