//! Historical readings used as comparison baselines.
//!
//! [`DeviceHistory`] is immutable: `record` returns a new log and leaves
//! the old one untouched.

use super::reading::{MotionReading, MotionState};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A stored reading reduced to what the rules compare against.
///
/// # Example
///
/// ```rust
/// use motionguard::core::{HistoricalRecord, MotionState};
/// use chrono::Utc;
///
/// let record = HistoricalRecord {
///     device_id: "dev-1".to_string(),
///     state: MotionState::Moving,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRecord {
    pub device_id: String,
    pub state: MotionState,
    pub timestamp: DateTime<Utc>,
}

impl From<&MotionReading> for HistoricalRecord {
    fn from(reading: &MotionReading) -> Self {
        Self {
            device_id: reading.device_id.clone(),
            state: reading.state(),
            timestamp: reading.timestamp,
        }
    }
}

/// Signed wall-clock hours from `earlier` to `later`.
///
/// Negative when `later` precedes `earlier`.
pub fn elapsed_hours(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    hours_of(later.signed_duration_since(earlier))
}

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

fn hours_of(elapsed: Duration) -> f64 {
    if let Some(nanos) = elapsed.num_nanoseconds() {
        nanos as f64 / NANOS_PER_HOUR
    } else if let Some(micros) = elapsed.num_microseconds() {
        micros as f64 / 3_600_000_000.0
    } else {
        elapsed.num_milliseconds() as f64 / 3_600_000.0
    }
}

/// Whether more than `hours` passed from `earlier` to `later`.
///
/// Compared in nanoseconds, so a gap one nanosecond past the limit counts
/// even when the difference is lost in the hour fraction.
pub fn exceeds_hours(earlier: DateTime<Utc>, later: DateTime<Utc>, hours: f64) -> bool {
    let elapsed = later.signed_duration_since(earlier);
    match elapsed.num_nanoseconds() {
        Some(nanos) => nanos as f64 > hours * NANOS_PER_HOUR,
        None => hours_of(elapsed) > hours,
    }
}

/// Ordered log of historical records across devices.
///
/// # Example
///
/// ```rust
/// use motionguard::core::{DeviceHistory, HistoricalRecord, MotionState};
/// use chrono::Utc;
///
/// let history = DeviceHistory::new();
/// let history = history.record(HistoricalRecord {
///     device_id: "dev-1".to_string(),
///     state: MotionState::Static,
///     timestamp: Utc::now(),
/// });
///
/// assert!(history.last_of("dev-1", MotionState::Static).is_some());
/// assert!(history.last_of("dev-1", MotionState::Moving).is_none());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeviceHistory {
    records: Vec<HistoricalRecord>,
}

impl DeviceHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a reading, returning a new history.
    pub fn record(&self, record: HistoricalRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Most recent record of `state` for `device_id`, by timestamp.
    ///
    /// When timestamps tie, the later-recorded entry wins.
    pub fn last_of(&self, device_id: &str, state: MotionState) -> Option<&HistoricalRecord> {
        self.records
            .iter()
            .filter(|r| r.device_id == device_id && r.state == state)
            .max_by_key(|r| r.timestamp)
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn rec(device: &str, state: MotionState, hours: i64) -> HistoricalRecord {
        HistoricalRecord {
            device_id: device.to_string(),
            state,
            timestamp: base() + Duration::hours(hours),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = DeviceHistory::new();
        assert!(history.records().is_empty());
        assert!(history.last_of("dev-1", MotionState::Moving).is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = DeviceHistory::new();
        let new_history = history.record(rec("dev-1", MotionState::Moving, 0));

        assert_eq!(history.records().len(), 0);
        assert_eq!(new_history.records().len(), 1);
    }

    #[test]
    fn last_of_picks_latest_matching_record() {
        let history = DeviceHistory::new()
            .record(rec("dev-1", MotionState::Moving, 5))
            .record(rec("dev-1", MotionState::Moving, 1))
            .record(rec("dev-1", MotionState::Static, 9))
            .record(rec("dev-2", MotionState::Moving, 20));

        let last = history.last_of("dev-1", MotionState::Moving).unwrap();
        assert_eq!(last.timestamp, base() + Duration::hours(5));

        let last_static = history.last_of("dev-1", MotionState::Static).unwrap();
        assert_eq!(last_static.timestamp, base() + Duration::hours(9));

        assert!(history.last_of("dev-2", MotionState::Static).is_none());
    }

    #[test]
    fn elapsed_hours_is_signed() {
        let start = base();
        let later = base() + Duration::minutes(90);

        assert_eq!(elapsed_hours(start, later), 1.5);
        assert_eq!(elapsed_hours(later, start), -1.5);
        assert_eq!(elapsed_hours(start, start), 0.0);
    }

    #[test]
    fn exceeds_hours_counts_single_nanoseconds() {
        let start = base();
        let limit = start + Duration::hours(12);

        assert!(!exceeds_hours(start, limit, 12.0));
        assert!(exceeds_hours(start, limit + Duration::nanoseconds(1), 12.0));
        assert!(!exceeds_hours(limit, start, 12.0));
    }

    #[test]
    fn elapsed_hours_keeps_sub_microsecond_gaps() {
        let start = base();
        let later = start + Duration::nanoseconds(1_800);

        assert_eq!(elapsed_hours(start, later), 1_800.0 / 3_600_000_000_000.0);
    }

    #[test]
    fn record_from_reading_keeps_state_and_time() {
        use crate::core::reading::Sensitivity;

        let reading = MotionReading::moving("s1", "dev-1", base(), Sensitivity::Low, 2.0);
        let record = HistoricalRecord::from(&reading);

        assert_eq!(record.device_id, "dev-1");
        assert_eq!(record.state, MotionState::Moving);
        assert_eq!(record.timestamp, base());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = DeviceHistory::new().record(rec("dev-1", MotionState::Static, 3));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: DeviceHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.records(), history.records());
    }
}
