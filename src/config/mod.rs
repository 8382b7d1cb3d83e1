//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `LINKGUIDE` prefix and
//! `__` between nested keys. Every setting has a default, so an empty
//! environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use linkguide::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Catalog at {}", config.catalog.path.display());
//! ```

mod catalog;
mod engine;
mod error;
mod logging;

pub use catalog::CatalogConfig;
pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog location and watching
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Survey generation settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LINKGUIDE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LINKGUIDE__CATALOG__PATH=/srv/resources.yaml` -> `catalog.path`
    /// - `LINKGUIDE__ENGINE__MAX_OPTIONS=6` -> `engine.max_options = 6`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LINKGUIDE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "LINKGUIDE__CATALOG__PATH",
        "LINKGUIDE__CATALOG__WATCH",
        "LINKGUIDE__CATALOG__POLL_INTERVAL_SECS",
        "LINKGUIDE__ENGINE__MAX_OPTIONS",
        "LINKGUIDE__LOGGING__FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.catalog.path, PathBuf::from("config/resources.json"));
        assert_eq!(config.engine.max_options, 5);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LINKGUIDE__CATALOG__PATH", "/srv/resources.yaml");
        env::set_var("LINKGUIDE__CATALOG__WATCH", "false");
        env::set_var("LINKGUIDE__CATALOG__POLL_INTERVAL_SECS", "30");
        env::set_var("LINKGUIDE__ENGINE__MAX_OPTIONS", "6");
        env::set_var("LINKGUIDE__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.catalog.path, PathBuf::from("/srv/resources.yaml"));
        assert!(!config.catalog.watch);
        assert_eq!(config.catalog.poll_interval_secs, 30);
        assert_eq!(config.engine.max_options, 6);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_rejects_small_option_cap() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LINKGUIDE__ENGINE__MAX_OPTIONS", "2");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MaxOptionsTooSmall { .. })
        ));
    }
}
