//! Classifiers and validators for readings.
//!
//! Classifiers are pure predicates. Validators narrow an untrusted
//! [`MotionReading`] into something stronger or report exactly why they
//! could not.

use super::error::ValidationError;
use super::reading::{MeterReading, Motion, MotionReading, MotionState, MovingReading};
use super::speed::Speed;

/// True when the meter draws strictly more than its rated maximum.
///
/// # Example
///
/// ```rust
/// use motionguard::core::{is_power_consumption_high, MeterReading};
///
/// assert!(is_power_consumption_high(&MeterReading::new("m1", "d1", 100.0, 50.0)));
/// assert!(!is_power_consumption_high(&MeterReading::new("m1", "d1", 50.0, 50.0)));
/// ```
pub fn is_power_consumption_high(meter: &MeterReading) -> bool {
    meter.power_consumption > meter.maximum_power_consumption
}

/// True for static readings, false for moving ones.
pub fn is_static(motion: &MotionReading) -> bool {
    matches!(motion.motion, Motion::Static)
}

pub fn is_moving(motion: &MotionReading) -> bool {
    !is_static(motion)
}

/// Check that a reading is moving and carries a speed.
///
/// Returns the raw speed, which is truthy (present, non-zero, not NaN) but
/// not yet range checked. A static reading is rejected with `WrongState`.
pub fn assert_is_moving(motion: &MotionReading) -> Result<f64, ValidationError> {
    match motion.motion {
        Motion::Static => Err(ValidationError::WrongState {
            expected: MotionState::Moving,
            found: MotionState::Static,
        }),
        Motion::Moving { speed: Some(speed) } if speed != 0.0 && !speed.is_nan() => Ok(speed),
        Motion::Moving { .. } => Err(ValidationError::NotMoving {
            sensor_id: motion.sensor_id.clone(),
        }),
    }
}

/// Check that a claimed speed is a finite number greater than zero.
///
/// An absent value fails the type check like NaN does.
///
/// # Example
///
/// ```rust
/// use motionguard::core::{assert_not_zero_or_negative, ValidationError};
///
/// assert!(assert_not_zero_or_negative(Some(0.001)).is_ok());
/// assert_eq!(assert_not_zero_or_negative(None), Err(ValidationError::UnknownDataType));
/// assert_eq!(
///     assert_not_zero_or_negative(Some(-2.0)),
///     Err(ValidationError::NotPositive { value: -2.0 })
/// );
/// ```
pub fn assert_not_zero_or_negative(value: Option<f64>) -> Result<Speed, ValidationError> {
    let value = value.ok_or(ValidationError::UnknownDataType)?;
    Speed::new(value)
}

/// Narrow a reading into a [`MovingReading`].
///
/// Runs [`assert_is_moving`] and then [`assert_not_zero_or_negative`]; the
/// first failure is returned. The input is only read.
pub fn validate_moving(motion: &MotionReading) -> Result<MovingReading, ValidationError> {
    let raw = assert_is_moving(motion)?;
    let speed = assert_not_zero_or_negative(Some(raw))?;
    Ok(MovingReading::from_parts(motion.clone(), speed))
}
