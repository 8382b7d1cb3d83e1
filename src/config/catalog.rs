//! Resource catalog configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Where the catalog lives and how it is watched
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Catalog document; `.yaml`/`.yml` are read as YAML, anything else as JSON
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Write the sample catalog when no document exists yet
    #[serde(default = "default_true")]
    pub seed_sample: bool,

    /// Poll the document and republish on change
    #[serde(default = "default_true")]
    pub watch: bool,

    /// Seconds between polls
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

impl CatalogConfig {
    /// Get the poll interval as Duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("CATALOG__PATH"));
        }
        if !(1..=3600).contains(&self.poll_interval_secs) {
            return Err(ValidationError::InvalidPollInterval);
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            seed_sample: true,
            watch: true,
            poll_interval_secs: default_poll_interval(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("config/resources.json")
}

fn default_true() -> bool {
    true
}

fn default_poll_interval() -> u64 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_config_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.path, PathBuf::from("config/resources.json"));
        assert!(config.seed_sample);
        assert!(config.watch);
        assert_eq!(config.poll_interval(), Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_path() {
        let config = CatalogConfig {
            path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("CATALOG__PATH"))
        );
    }

    #[test]
    fn test_validation_poll_interval_bounds() {
        for secs in [0, 3601] {
            let config = CatalogConfig {
                poll_interval_secs: secs,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidPollInterval));
        }
    }
}
