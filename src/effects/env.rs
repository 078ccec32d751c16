//! Capabilities the monitor needs from its environment.
//!
//! Each collaborator is a trait so production stores and test doubles can
//! be swapped without touching the rules.

use crate::core::{HistoricalRecord, MovingReading};
use crate::effects::error::{HistoryError, PersistError};
use crate::enforcement::Alert;
use std::future::Future;

/// Read access to stored readings.
///
/// Lookups fail with [`HistoryError::NotFound`] when the device has no
/// record in the requested state. Timeouts are the implementor's concern.
pub trait HistoryLookup: Send + Sync {
    fn last_moving_record(
        &self,
        device_id: &str,
    ) -> impl Future<Output = Result<HistoricalRecord, HistoryError>> + Send;

    fn last_static_record(
        &self,
        device_id: &str,
    ) -> impl Future<Output = Result<HistoricalRecord, HistoryError>> + Send;
}

/// Durable storage for validated moving readings.
pub trait Persistence: Send + Sync {
    /// Whatever the store hands back for a created record.
    type Record: Send;

    fn create(
        &self,
        motion: MovingReading,
    ) -> impl Future<Output = Result<Self::Record, PersistError>> + Send;
}

/// Destination for alerts. Delivery is fire-and-forget.
pub trait AlertSink: Send + Sync {
    fn alert(&self, alert: &Alert);
}
