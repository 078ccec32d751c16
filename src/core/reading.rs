//! Sensor reading types.
//!
//! A [`MotionReading`] is what arrives from ingestion: its speed is
//! untrusted. A [`MovingReading`] is the narrowed form, produced only by
//! validation, whose speed is a [`Speed`].

use super::speed::Speed;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The state tag of a motion reading.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionState {
    Static,
    Moving,
}

impl MotionState {
    /// Name used in logs and serialized data.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Moving => "moving",
        }
    }

    /// The state a sensitivity check compares against.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Static => Self::Moving,
            Self::Moving => Self::Static,
        }
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sensitivity setting configured on a motion sensor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    Low,
    Medium,
    High,
}

impl Sensitivity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse the lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// State-specific part of a motion reading.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Motion {
    Static,
    /// Speed as received. May be absent, zero, negative or non-finite.
    Moving {
        #[serde(default)]
        speed: Option<f64>,
    },
}

/// An untrusted motion sensor observation.
///
/// # Example
///
/// ```rust
/// use motionguard::core::{MotionReading, MotionState, Sensitivity};
/// use chrono::Utc;
///
/// let reading = MotionReading::moving("pir-1", "dev-7", Utc::now(), Sensitivity::Medium, 3.0);
/// assert_eq!(reading.state(), MotionState::Moving);
/// assert_eq!(reading.speed(), Some(3.0));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionReading {
    pub sensor_id: String,
    pub device_id: String,
    pub timestamp: DateTime<Utc>,
    pub sensitivity: Sensitivity,
    #[serde(flatten)]
    pub motion: Motion,
}

impl MotionReading {
    /// Build a static reading.
    pub fn stationary(
        sensor_id: impl Into<String>,
        device_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        sensitivity: Sensitivity,
    ) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            device_id: device_id.into(),
            timestamp,
            sensitivity,
            motion: Motion::Static,
        }
    }

    /// Build a moving reading carrying `speed`, unchecked.
    pub fn moving(
        sensor_id: impl Into<String>,
        device_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        sensitivity: Sensitivity,
        speed: f64,
    ) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            device_id: device_id.into(),
            timestamp,
            sensitivity,
            motion: Motion::Moving { speed: Some(speed) },
        }
    }

    pub fn state(&self) -> MotionState {
        match self.motion {
            Motion::Static => MotionState::Static,
            Motion::Moving { .. } => MotionState::Moving,
        }
    }

    /// Raw speed of a moving reading; `None` for static readings.
    pub fn speed(&self) -> Option<f64> {
        match self.motion {
            Motion::Static => None,
            Motion::Moving { speed } => speed,
        }
    }
}

/// A motion reading known to be moving with a valid speed.
///
/// Obtained from [`validate_moving`](super::validate_moving); there is no
/// public constructor that skips validation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovingReading {
    sensor_id: String,
    device_id: String,
    timestamp: DateTime<Utc>,
    sensitivity: Sensitivity,
    speed: Speed,
}

impl MovingReading {
    pub(crate) fn from_parts(reading: MotionReading, speed: Speed) -> Self {
        Self {
            sensor_id: reading.sensor_id,
            device_id: reading.device_id,
            timestamp: reading.timestamp,
            sensitivity: reading.sensitivity,
            speed,
        }
    }

    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Replace the speed, consuming the reading.
    pub fn with_speed(self, speed: Speed) -> Self {
        Self { speed, ..self }
    }
}

impl From<MovingReading> for MotionReading {
    fn from(reading: MovingReading) -> Self {
        Self {
            sensor_id: reading.sensor_id,
            device_id: reading.device_id,
            timestamp: reading.timestamp,
            sensitivity: reading.sensitivity,
            motion: Motion::Moving {
                speed: Some(reading.speed.get()),
            },
        }
    }
}

/// A power meter observation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterReading {
    pub sensor_id: String,
    pub device_id: String,
    pub power_consumption: f64,
    pub maximum_power_consumption: f64,
}

impl MeterReading {
    pub fn new(
        sensor_id: impl Into<String>,
        device_id: impl Into<String>,
        power_consumption: f64,
        maximum_power_consumption: f64,
    ) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            device_id: device_id.into(),
            power_consumption,
            maximum_power_consumption,
        }
    }
}
