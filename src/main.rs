use std::error::Error;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use linkguide::adapters::FileResourceSource;
use linkguide::application::handlers::{
    RegenerateSurveyCommand, RegenerateSurveyError, RegenerateSurveyHandler, RegenerationOutcome,
};
use linkguide::application::{CatalogWatcher, CatalogWatcherConfig, SurveyRegistry};
use linkguide::config::{AppConfig, LogFormat, LoggingConfig};
use linkguide::domain::catalog::ResourceCatalog;
use linkguide::domain::survey::SurveyBuilder;
use linkguide::ports::{ResourceSource, SourceError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    let source: Arc<dyn ResourceSource> = Arc::new(FileResourceSource::new(&config.catalog.path));
    let registry = Arc::new(SurveyRegistry::new());
    let regenerate = Arc::new(RegenerateSurveyHandler::new(
        Arc::clone(&source),
        Arc::clone(&registry),
        SurveyBuilder::new(config.engine.builder_settings()),
    ));

    let outcome = match regenerate.handle(RegenerateSurveyCommand::forced()).await {
        Ok(outcome) => outcome,
        Err(RegenerateSurveyError::Source(SourceError::NotFound(location)))
            if config.catalog.seed_sample =>
        {
            warn!(%location, "no resource catalog found, writing sample");
            source.save(&ResourceCatalog::sample()).await?;
            regenerate.handle(RegenerateSurveyCommand::forced()).await?
        }
        Err(err) => return Err(err.into()),
    };
    log_startup(&outcome);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let watcher_task = if config.catalog.watch {
        let watcher = CatalogWatcher::new(
            Arc::clone(&source),
            Arc::clone(&registry),
            Arc::clone(&regenerate),
            CatalogWatcherConfig::default().with_poll_interval(config.catalog.poll_interval()),
        );
        Some(tokio::spawn(async move { watcher.run(shutdown_rx).await }))
    } else {
        None
    };

    tokio::signal::ctrl_c().await?;
    info!("shutdown requested");

    let _ = shutdown_tx.send(true);
    if let Some(task) = watcher_task {
        task.await?;
    }

    let health = registry.health();
    info!(version = health.version, "linkguide stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt().with_env_filter(logging.env_filter());
    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn log_startup(outcome: &RegenerationOutcome) {
    let stats = outcome.stats();
    info!(
        snapshot_id = %stats.snapshot_id,
        version = stats.version,
        resources = stats.resources,
        questions = stats.questions,
        rules = stats.rules,
        "survey ready"
    );
}
