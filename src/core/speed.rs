//! Speed value known to be finite and strictly positive.

use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A speed that has passed validation.
///
/// The field is private and [`Speed::new`] is the only way to build one, so
/// holding a `Speed` is proof the value is finite and greater than zero.
/// Deserialization goes through the same check.
///
/// # Example
///
/// ```rust
/// use motionguard::core::{Speed, ValidationError};
///
/// let speed = Speed::new(4.2).unwrap();
/// assert_eq!(speed.get(), 4.2);
///
/// assert_eq!(Speed::new(0.0), Err(ValidationError::NotPositive { value: 0.0 }));
/// assert_eq!(Speed::new(f64::NAN), Err(ValidationError::UnknownDataType));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Speed(f64);

impl Speed {
    /// Validate a raw value.
    ///
    /// The type check runs before the range check: NaN and infinities are
    /// `UnknownDataType`, zero and negatives are `NotPositive`.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::UnknownDataType);
        }
        if value <= 0.0 {
            return Err(ValidationError::NotPositive { value });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Speed {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Speed> for f64 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Normalize a validated speed before it is persisted.
///
/// Currently the identity. Unit conversion or clamping belongs here; any
/// result must still be a valid [`Speed`].
pub fn sanitize_speed(speed: Speed) -> Speed {
    speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_tiny_positive_values() {
        let speed = Speed::new(f64::MIN_POSITIVE).unwrap();
        assert_eq!(speed.get(), f64::MIN_POSITIVE);
    }

    #[test]
    fn rejects_zero_and_negatives_as_not_positive() {
        assert_eq!(
            Speed::new(0.0),
            Err(ValidationError::NotPositive { value: 0.0 })
        );
        assert_eq!(
            Speed::new(-3.5),
            Err(ValidationError::NotPositive { value: -3.5 })
        );
    }

    #[test]
    fn rejects_non_finite_as_unknown_data_type() {
        assert_eq!(Speed::new(f64::NAN), Err(ValidationError::UnknownDataType));
        assert_eq!(
            Speed::new(f64::INFINITY),
            Err(ValidationError::UnknownDataType)
        );
        assert_eq!(
            Speed::new(f64::NEG_INFINITY),
            Err(ValidationError::UnknownDataType)
        );
    }

    #[test]
    fn deserialization_validates() {
        let speed: Speed = serde_json::from_str("7.5").unwrap();
        assert_eq!(speed.get(), 7.5);

        assert!(serde_json::from_str::<Speed>("0").is_err());
        assert!(serde_json::from_str::<Speed>("-1.0").is_err());
    }

    #[test]
    fn serializes_as_plain_number() {
        let speed = Speed::new(2.5).unwrap();
        assert_eq!(serde_json::to_string(&speed).unwrap(), "2.5");
    }

    #[test]
    fn sanitize_is_identity() {
        let speed = Speed::new(12.0).unwrap();
        assert_eq!(sanitize_speed(speed), speed);
    }
}
