//! Application layer - Use cases over the published survey.

mod catalog_watcher;
pub mod handlers;
mod survey_registry;

pub use catalog_watcher::{CatalogWatcher, CatalogWatcherConfig};
pub use survey_registry::{RegistryHealth, SurveyRegistry, SurveySnapshot};
