//! CatalogWatcher - Background service that republishes the survey when the
//! catalog document changes.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `poll_interval` | 2s | How often to fingerprint the catalog |
//!
//! A failed poll or rebuild is logged and the current snapshot stays
//! published. A document that failed to build is not parsed again until its
//! fingerprint changes, and a repeated failure is logged once.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{debug, info, warn};

use crate::application::handlers::{
    RegenerateSurveyCommand, RegenerateSurveyError, RegenerateSurveyHandler, RegenerationOutcome,
};
use crate::application::SurveyRegistry;
use crate::ports::ResourceSource;

/// Configuration for the CatalogWatcher service.
#[derive(Debug, Clone)]
pub struct CatalogWatcherConfig {
    /// How often to check the catalog fingerprint.
    pub poll_interval: Duration,
}

impl Default for CatalogWatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
        }
    }
}

impl CatalogWatcherConfig {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

/// Polls the resource source and triggers regeneration on change.
pub struct CatalogWatcher {
    source: Arc<dyn ResourceSource>,
    registry: Arc<SurveyRegistry>,
    regenerate: Arc<RegenerateSurveyHandler>,
    config: CatalogWatcherConfig,
    /// Fingerprint of the last document that failed to build.
    rejected: Mutex<Option<String>>,
}

impl CatalogWatcher {
    pub fn new(
        source: Arc<dyn ResourceSource>,
        registry: Arc<SurveyRegistry>,
        regenerate: Arc<RegenerateSurveyHandler>,
        config: CatalogWatcherConfig,
    ) -> Self {
        Self {
            source,
            registry,
            regenerate,
            config,
            rejected: Mutex::new(None),
        }
    }

    /// Run the watch loop until the shutdown signal is received.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.poll_interval);
        info!(
            source = %self.source.describe(),
            interval_ms = self.config.poll_interval.as_millis() as u64,
            "catalog watcher started"
        );
        let mut last_error: Option<String> = None;

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("catalog watcher stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    match self.poll_once().await {
                        Ok(_) => last_error = None,
                        Err(err) => {
                            let message = err.to_string();
                            if last_error.as_deref() == Some(message.as_str()) {
                                debug!(error = %message, "catalog still failing");
                            } else {
                                warn!(error = %message, "catalog regeneration failed, keeping current survey");
                                last_error = Some(message);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Run exactly one poll cycle.
    ///
    /// Returns `None` when the fingerprint matches the published snapshot
    /// or a document that already failed to build.
    pub async fn poll_once(&self) -> Result<Option<RegenerationOutcome>, RegenerateSurveyError> {
        let fingerprint = self.source.fingerprint().await?;

        if self.registry.current_fingerprint().as_deref() == Some(fingerprint.as_str()) {
            self.set_rejected(None);
            return Ok(None);
        }
        if self.rejected().as_deref() == Some(fingerprint.as_str()) {
            return Ok(None);
        }

        debug!(fingerprint = %fingerprint, "catalog change detected");
        match self
            .regenerate
            .handle(RegenerateSurveyCommand::if_changed())
            .await
        {
            Ok(outcome) => {
                self.set_rejected(None);
                Ok(Some(outcome))
            }
            Err(err) => {
                self.set_rejected(Some(fingerprint));
                Err(err)
            }
        }
    }

    fn rejected(&self) -> Option<String> {
        self.rejected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_rejected(&self, fingerprint: Option<String>) {
        *self
            .rejected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = fingerprint;
    }
}
