//! Parsing of untrusted JSON readings.
//!
//! Every field is checked and all problems are reported together, using
//! Stillwater's `Validation` to accumulate them instead of stopping at the
//! first one. A numeric speed is passed through unchecked; whether it is
//! positive is decided later by [`crate::core::validate_moving`].

use crate::core::{MeterReading, Motion, MotionReading, Sensitivity, ValidationError};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found in an incoming reading
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IngestError {
    #[error("Missing field '{0}'")]
    Missing(&'static str),

    #[error("Field '{0}' must be a non-empty string")]
    NotText(&'static str),

    #[error("Field '{0}' must be a number")]
    NotNumber(&'static str),

    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("Unknown sensitivity '{0}'")]
    UnknownSensitivity(String),

    #[error("Unknown state '{0}'")]
    UnknownState(String),

    #[error("Invalid speed: {0}")]
    InvalidSpeed(ValidationError),
}

/// Errors returned when a reading cannot be parsed
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object")]
    NotAnObject,

    #[error("Reading rejected with {} problem(s)", .0.len())]
    Rejected(Vec<IngestError>),
}

impl From<IngestError> for ParseError {
    fn from(err: IngestError) -> Self {
        Self::Rejected(vec![err])
    }
}

/// Parse a motion reading.
///
/// Expected shape: `sensorId`, `deviceId`, `timestamp` (RFC 3339),
/// `sensitivity` (`low` / `medium` / `high`), `state` (`static` /
/// `moving`) and, for moving readings, an optional numeric `speed`.
///
/// # Example
///
/// ```rust
/// use motionguard::ingest::{parse_motion_reading, ParseError};
/// use motionguard::core::MotionState;
///
/// let reading = parse_motion_reading(r#"{
///     "sensorId": "pir-1",
///     "deviceId": "dev-1",
///     "timestamp": "2024-05-01T08:00:00Z",
///     "sensitivity": "medium",
///     "state": "moving",
///     "speed": 2.5
/// }"#).unwrap();
/// assert_eq!(reading.state(), MotionState::Moving);
///
/// let err = parse_motion_reading(r#"{ "state": "flying" }"#).unwrap_err();
/// assert!(matches!(err, ParseError::Rejected(problems) if problems.len() == 5));
/// ```
pub fn parse_motion_reading(json: &str) -> Result<MotionReading, ParseError> {
    let value: Value = serde_json::from_str(json)?;
    let fields = value.as_object().ok_or(ParseError::NotAnObject)?;

    let sensor_id = text_field(fields, "sensorId");
    let device_id = text_field(fields, "deviceId");
    let timestamp = timestamp_field(fields, "timestamp");
    let sensitivity = sensitivity_field(fields, "sensitivity");
    let motion = motion_field(fields);

    ensure_all(vec![
        check(&sensor_id),
        check(&device_id),
        check(&timestamp),
        check(&sensitivity),
        check(&motion),
    ])?;

    Ok(MotionReading {
        sensor_id: sensor_id?,
        device_id: device_id?,
        timestamp: timestamp?,
        sensitivity: sensitivity?,
        motion: motion?,
    })
}

/// Parse a meter reading: `sensorId`, `deviceId`, `powerConsumption`,
/// `maximumPowerConsumption`.
pub fn parse_meter_reading(json: &str) -> Result<MeterReading, ParseError> {
    let value: Value = serde_json::from_str(json)?;
    let fields = value.as_object().ok_or(ParseError::NotAnObject)?;

    let sensor_id = text_field(fields, "sensorId");
    let device_id = text_field(fields, "deviceId");
    let power_consumption = number_field(fields, "powerConsumption");
    let maximum_power_consumption = number_field(fields, "maximumPowerConsumption");

    ensure_all(vec![
        check(&sensor_id),
        check(&device_id),
        check(&power_consumption),
        check(&maximum_power_consumption),
    ])?;

    Ok(MeterReading {
        sensor_id: sensor_id?,
        device_id: device_id?,
        power_consumption: power_consumption?,
        maximum_power_consumption: maximum_power_consumption?,
    })
}

fn check<T>(field: &Result<T, IngestError>) -> Validation<(), NonEmptyVec<IngestError>> {
    match field {
        Ok(_) => Validation::success(()),
        Err(err) => Validation::fail(err.clone()),
    }
}

fn ensure_all(checks: Vec<Validation<(), NonEmptyVec<IngestError>>>) -> Result<(), ParseError> {
    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => {
            Err(ParseError::Rejected(errors.iter().cloned().collect()))
        }
    }
}

fn text_field(fields: &Map<String, Value>, name: &'static str) -> Result<String, IngestError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(IngestError::Missing(name)),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(_) => Err(IngestError::NotText(name)),
    }
}

fn number_field(fields: &Map<String, Value>, name: &'static str) -> Result<f64, IngestError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(IngestError::Missing(name)),
        Some(value) => value.as_f64().ok_or(IngestError::NotNumber(name)),
    }
}

fn timestamp_field(
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<DateTime<Utc>, IngestError> {
    let raw = text_field(fields, name)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| IngestError::InvalidTimestamp(raw))
}

fn sensitivity_field(
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<Sensitivity, IngestError> {
    let raw = text_field(fields, name)?;
    Sensitivity::from_name(&raw).ok_or(IngestError::UnknownSensitivity(raw))
}

fn motion_field(fields: &Map<String, Value>) -> Result<Motion, IngestError> {
    let state = text_field(fields, "state")?;
    match state.as_str() {
        "static" => Ok(Motion::Static),
        "moving" => {
            let speed = match fields.get("speed") {
                None | Some(Value::Null) => None,
                Some(value) => Some(
                    value
                        .as_f64()
                        .ok_or(IngestError::InvalidSpeed(ValidationError::UnknownDataType))?,
                ),
            };
            Ok(Motion::Moving { speed })
        }
        _ => Err(IngestError::UnknownState(state)),
    }
}
