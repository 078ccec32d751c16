//! Core reading types and logic.
//!
//! This module contains the pure part of the crate:
//! - Reading types and the validated [`Speed`] value
//! - Classifiers and validators that narrow untrusted readings
//! - Immutable device history
//!
//! Nothing in here performs I/O.

mod error;
mod guard;
mod history;
mod reading;
mod speed;

pub use error::ValidationError;
pub use guard::{
    assert_is_moving, assert_not_zero_or_negative, is_moving, is_power_consumption_high,
    is_static, validate_moving,
};
pub use history::{elapsed_hours, exceeds_hours, DeviceHistory, HistoricalRecord};
pub use reading::{MeterReading, Motion, MotionReading, MotionState, MovingReading, Sensitivity};
pub use speed::{sanitize_speed, Speed};
