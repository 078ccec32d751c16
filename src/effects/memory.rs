//! In-memory collaborators for tests, demos and embedding.

use crate::core::{DeviceHistory, HistoricalRecord, MotionState, MovingReading};
use crate::effects::env::{AlertSink, HistoryLookup, Persistence};
use crate::effects::error::{HistoryError, PersistError};
use crate::enforcement::Alert;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// History lookups served from a [`DeviceHistory`] snapshot.
#[derive(Clone, Debug, Default)]
pub struct InMemoryHistory {
    history: DeviceHistory,
}

impl InMemoryHistory {
    pub fn new(history: DeviceHistory) -> Self {
        Self { history }
    }

    fn last_of(
        &self,
        device_id: &str,
        state: MotionState,
    ) -> Result<HistoricalRecord, HistoryError> {
        self.history
            .last_of(device_id, state)
            .cloned()
            .ok_or_else(|| HistoryError::NotFound {
                device_id: device_id.to_string(),
                state,
            })
    }
}

impl HistoryLookup for InMemoryHistory {
    async fn last_moving_record(
        &self,
        device_id: &str,
    ) -> Result<HistoricalRecord, HistoryError> {
        self.last_of(device_id, MotionState::Moving)
    }

    async fn last_static_record(
        &self,
        device_id: &str,
    ) -> Result<HistoricalRecord, HistoryError> {
        self.last_of(device_id, MotionState::Static)
    }
}

/// A moving reading as stored by [`InMemoryStore`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedMotion {
    pub id: Uuid,
    pub stored_at: DateTime<Utc>,
    pub motion: MovingReading,
}

/// Store that keeps every created record in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<PersistedMotion>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything stored so far, in creation order.
    pub fn stored(&self) -> Vec<PersistedMotion> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Persistence for InMemoryStore {
    type Record = PersistedMotion;

    async fn create(&self, motion: MovingReading) -> Result<PersistedMotion, PersistError> {
        let persisted = PersistedMotion {
            id: Uuid::new_v4(),
            stored_at: Utc::now(),
            motion,
        };
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(persisted.clone());
        Ok(persisted)
    }
}

/// Sink that keeps alerts for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    alerts: Mutex<Vec<Alert>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AlertSink for CollectingSink {
    fn alert(&self, alert: &Alert) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(alert.clone());
    }
}
