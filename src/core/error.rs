//! Validation error taxonomy.

use super::reading::MotionState;
use thiserror::Error;

/// Reasons an untrusted reading fails to narrow into a validated value.
///
/// The kinds are distinct so callers can branch on the failure reason.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Tagged moving, but the speed is absent, zero or NaN.
    #[error("Sensor {sensor_id} reports moving without a speed")]
    NotMoving { sensor_id: String },

    #[error("Expected a {expected} reading, found {found}")]
    WrongState {
        expected: MotionState,
        found: MotionState,
    },

    #[error("Speed is not a finite number")]
    UnknownDataType,

    #[error("Speed must be greater than zero (got {value})")]
    NotPositive { value: f64 },
}
