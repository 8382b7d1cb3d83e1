//! SurveyRegistry - The process-wide published survey.
//!
//! A snapshot is built completely before it is published, then swapped in
//! with a single pointer replacement. Readers clone an `Arc` and keep using
//! their snapshot for as long as they like; a later regeneration never
//! mutates it. The lock is held only for the clone or the swap.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::domain::foundation::{SnapshotId, Timestamp};
use crate::domain::survey::Survey;

/// One immutable, published survey generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveySnapshot {
    pub id: SnapshotId,
    /// Starts at 1 and increases with every publication.
    pub version: u64,
    pub generated_at: Timestamp,
    /// Fingerprint of the catalog document the survey was built from.
    pub fingerprint: String,
    pub resource_count: usize,
    pub survey: Survey,
}

/// Health summary of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryHealth {
    pub loaded: bool,
    pub version: u64,
    pub questions: usize,
    pub resources: usize,
}

/// Holder of the current survey snapshot.
#[derive(Debug, Default)]
pub struct SurveyRegistry {
    current: RwLock<Option<Arc<SurveySnapshot>>>,
    versions: AtomicU64,
    regeneration: Mutex<()>,
}

impl SurveyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently published snapshot, if any.
    pub fn current(&self) -> Option<Arc<SurveySnapshot>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Fingerprint of the current snapshot's source document.
    pub fn current_fingerprint(&self) -> Option<String> {
        self.current().map(|s| s.fingerprint.clone())
    }

    /// Wraps a fully built survey in a new snapshot and makes it current.
    pub fn publish(
        &self,
        survey: Survey,
        fingerprint: impl Into<String>,
        resource_count: usize,
    ) -> Arc<SurveySnapshot> {
        let snapshot = Arc::new(SurveySnapshot {
            id: SnapshotId::new(),
            version: self.versions.fetch_add(1, Ordering::SeqCst) + 1,
            generated_at: Timestamp::now(),
            fingerprint: fingerprint.into(),
            resource_count,
            survey,
        });

        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Arc::clone(&snapshot));

        info!(
            snapshot_id = %snapshot.id,
            version = snapshot.version,
            questions = snapshot.survey.questions.len(),
            rules = snapshot.survey.rules.len(),
            "survey published"
        );
        snapshot
    }

    /// Serializes regenerations so an older build never overwrites a newer
    /// one. Readers do not take this lock.
    pub async fn lock_regeneration(&self) -> MutexGuard<'_, ()> {
        self.regeneration.lock().await
    }

    pub fn health(&self) -> RegistryHealth {
        match self.current() {
            Some(snapshot) => RegistryHealth {
                loaded: true,
                version: snapshot.version,
                questions: snapshot.survey.questions.len(),
                resources: snapshot.resource_count,
            },
            None => RegistryHealth {
                loaded: false,
                version: 0,
                questions: 0,
                resources: 0,
            },
        }
    }
}
